//! Two-factor authentication endpoints.
//!
//! These are account-level flows, not catalog data; the client only shapes
//! requests and decodes responses. OTP delivery and verification logic are
//! entirely server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::CatalogClient;
use crate::decode;
use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoFactorMethod {
    Email,
    Phone,
    Authenticator,
}

/// Current 2FA state of the authenticated account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorStatus {
    pub enabled: bool,
    #[serde(default)]
    pub method: Option<TwoFactorMethod>,
    /// Set while enrollment has started but not yet been verified.
    #[serde(default)]
    pub pending_verification: bool,
}

/// Enrollment material returned by `enable`. `secret`/`otpauth_url` are
/// only present for the authenticator method.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorEnrollment {
    pub method: TwoFactorMethod,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub otpauth_url: Option<String>,
}

/// Session token minted by `authenticate` after a valid code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorToken {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct MethodBody {
    method: TwoFactorMethod,
}

#[derive(Serialize)]
struct CodeBody<'a> {
    code: &'a str,
}

impl CatalogClient {
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn twofa_status(&self) -> Result<TwoFactorStatus, ClientError> {
        const CTX: &str = "GET /api/auth/2fa/status";
        let body = self.get("api/auth/2fa/status", &[], CTX).await?;
        decode::item(body, CTX)
    }

    /// Starts enrollment for the given method.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn twofa_enable(
        &self,
        method: TwoFactorMethod,
    ) -> Result<TwoFactorEnrollment, ClientError> {
        const CTX: &str = "POST /api/auth/2fa/enable";
        let body = self
            .post("api/auth/2fa/enable", &MethodBody { method }, CTX)
            .await?;
        decode::item(body, CTX)
    }

    /// Completes enrollment by confirming a code from the chosen channel.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`]; a wrong code is a 4xx [`ClientError::Api`].
    pub async fn twofa_verify(&self, code: &str) -> Result<TwoFactorStatus, ClientError> {
        const CTX: &str = "POST /api/auth/2fa/verify";
        let body = self
            .post("api/auth/2fa/verify", &CodeBody { code }, CTX)
            .await?;
        decode::item(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn twofa_disable(&self, code: &str) -> Result<TwoFactorStatus, ClientError> {
        const CTX: &str = "POST /api/auth/2fa/disable";
        let body = self
            .post("api/auth/2fa/disable", &CodeBody { code }, CTX)
            .await?;
        decode::item(body, CTX)
    }

    /// Exchanges a one-time code for a session token during login.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn twofa_authenticate(&self, code: &str) -> Result<TwoFactorToken, ClientError> {
        const CTX: &str = "POST /api/auth/2fa/authenticate";
        let body = self
            .post("api/auth/2fa/authenticate", &CodeBody { code }, CTX)
            .await?;
        decode::item(body, CTX)
    }
}
