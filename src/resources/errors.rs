//! Error types for resource lookup.

use thiserror::Error;

/// Error type for resource lookup by name.
///
/// # Example
///
/// ```rust
/// use shopee_api::resources::{ResourceError, ResourceName};
///
/// let error = "Warehouse".parse::<ResourceName>().unwrap_err();
/// assert!(matches!(error, ResourceError::UnknownResource { .. }));
/// assert!(error.to_string().contains("Warehouse"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No resource group is registered under this name.
    #[error("Invalid resource '{name}'")]
    UnknownResource {
        /// The name that was requested.
        name: String,
    },
}
