use thiserror::Error;

pub mod app_config;
pub mod attribute;
pub mod category;
pub mod config;
pub mod faq;
pub mod order_preview;
pub mod pricing;
pub mod product;
pub mod promotion;
pub mod seo;
pub mod stock;
pub mod variant;
pub mod variant_gen;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, resolve_auth_token, ConfigError};

/// Pre-submission validation failures for draft records.
///
/// These are the only checks the admin side performs before handing a
/// payload to the backend; referential integrity stays server-side.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0} must contain at least one item")]
    EmptyList(&'static str),

    #[error("validity window must start before it ends")]
    InvalidWindow,

    #[error("select values for attribute '{0}'")]
    EmptyAttributeValues(String),

    #[error("quantity must be greater than zero")]
    ZeroQuantity,
}
