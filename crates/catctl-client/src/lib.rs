//! Typed client for the catalog backend's REST API.
//!
//! One [`CatalogClient`] covers the `/api/catalog`, `/api/pricing`,
//! `/api/promotions`, and `/api/auth/2fa` surfaces. Every response passes
//! through the decode boundary in [`decode`], so callers always receive the
//! typed shape regardless of how the backend wrapped the payload.

pub mod catalog;
pub mod client;
pub mod decode;
pub mod error;
pub mod pricing;
pub mod promotions;
pub mod twofactor;

pub use client::{CatalogClient, Page};
pub use error::ClientError;
pub use twofactor::{TwoFactorEnrollment, TwoFactorMethod, TwoFactorStatus, TwoFactorToken};
