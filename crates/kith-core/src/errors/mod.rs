//! Error handling for Kith.
//! One error enum per concern, `thiserror` only.
//!
//! Data insufficiency is never an error: it surfaces as `None`, `green`, or
//! `yellow` from the model. Only contract violations and bad configuration
//! reach these types.

pub mod config_error;
pub mod error_code;
pub mod kith_error;

pub use config_error::ConfigError;
pub use error_code::KithErrorCode;
pub use kith_error::{KithError, KithResult};
