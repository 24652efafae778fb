//! Error types for the Shopee API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use shopee_api::{ConfigError, PartnerKey};
//!
//! let result = PartnerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPartnerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Partner key cannot be empty.
    #[error("Partner key cannot be empty. Please provide the partner key issued by Shopee Open Platform.")]
    EmptyPartnerKey,

    /// Partner id is not a valid integer.
    #[error("Invalid partner id '{value}'. Expected a positive integer.")]
    InvalidPartnerId {
        /// The value that could not be parsed.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host override is invalid.
    #[error("Invalid API host '{url}'. Please provide an absolute URL (e.g., 'http://localhost:8080/api/v2/').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },
}
