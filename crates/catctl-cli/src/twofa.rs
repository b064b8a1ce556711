use clap::{Subcommand, ValueEnum};

use catctl_client::{CatalogClient, TwoFactorMethod, TwoFactorStatus};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Email,
    Phone,
    Authenticator,
}

impl From<MethodArg> for TwoFactorMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Email => TwoFactorMethod::Email,
            MethodArg::Phone => TwoFactorMethod::Phone,
            MethodArg::Authenticator => TwoFactorMethod::Authenticator,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TwofaCommand {
    /// Show the account's current 2FA state.
    Status,
    /// Start enrollment for a delivery method.
    Enable {
        #[arg(long, value_enum)]
        method: MethodArg,
    },
    /// Confirm enrollment with a code from the chosen channel.
    Verify { code: String },
    /// Turn 2FA off; requires a current code.
    Disable { code: String },
    /// Exchange a login code for a session token.
    Authenticate { code: String },
}

pub async fn run(command: TwofaCommand, client: &CatalogClient) -> anyhow::Result<()> {
    match command {
        TwofaCommand::Status => {
            report_status(&client.twofa_status().await?);
            Ok(())
        }
        TwofaCommand::Enable { method } => {
            let enrollment = client.twofa_enable(method.into()).await?;
            println!("enrollment started ({:?})", enrollment.method);
            if let Some(secret) = &enrollment.secret {
                println!("secret: {secret}");
            }
            if let Some(url) = &enrollment.otpauth_url {
                println!("otpauth url: {url}");
            }
            println!("confirm with: catctl twofa verify <code>");
            Ok(())
        }
        TwofaCommand::Verify { code } => {
            report_status(&client.twofa_verify(&code).await?);
            Ok(())
        }
        TwofaCommand::Disable { code } => {
            report_status(&client.twofa_disable(&code).await?);
            Ok(())
        }
        TwofaCommand::Authenticate { code } => {
            let token = client.twofa_authenticate(&code).await?;
            println!("{}", token.token);
            if let Some(expires_at) = token.expires_at {
                eprintln!("expires at {expires_at}");
            }
            Ok(())
        }
    }
}

fn report_status(status: &TwoFactorStatus) {
    if status.enabled {
        println!("2fa: enabled ({:?})", status.method);
    } else if status.pending_verification {
        println!("2fa: enrollment pending verification");
    } else {
        println!("2fa: disabled");
    }
}
