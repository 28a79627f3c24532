//! Error handling for the catalog GraphQL adapter
//!
//! This module provides a unified error type using thiserror, with
//! conversion into GraphQL errors that carry a machine-readable `code`
//! extension.

use async_graphql::ErrorExtensions;
use storefront_shared_config::ConfigError;
use storefront_variant_cache::VariantError;
use thiserror::Error;

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Variant Errors ==========
    /// Fetching variants for a batch of parents failed
    #[error(transparent)]
    Variant(#[from] VariantError),

    // ========== Validation Errors ==========
    /// Resolver arguments failed validation
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========== Configuration Errors ==========
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    // ========== Internal Errors ==========
    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Whether the failure is on the server side rather than in the request
    pub fn is_server_error(&self) -> bool {
        match self {
            Self::Variant(err) => err.is_data_access(),
            Self::ValidationError(_) => false,
            Self::Configuration(_) | Self::Internal(_) => true,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Variant(err) => err.error_code(),
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Log the error with severity matching its origin
    pub fn log(&self) {
        if self.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                "Client error"
            );
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        self.log();

        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
            if let Self::Variant(err) = self {
                e.set("parent", err.parent().get());
            }
        })
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ========== Conversion Implementations ==========

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // Try to downcast to ApiError first
        match err.downcast::<ApiError>() {
            Ok(api_err) => api_err,
            Err(err) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;
    use storefront_variant_cache::ParentKey;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::from(VariantError::data_access(ParentKey::new(1), "down")).error_code(),
            "VARIANT_DATA_ACCESS"
        );
        assert_eq!(
            ApiError::ValidationError("blank".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            ApiError::from(ConfigError::ValidationError("X".to_string())).error_code(),
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_variant_error_message_is_transparent() {
        let err = ApiError::from(VariantError::data_access(ParentKey::new(3), "timeout"));
        assert_eq!(err.to_string(), "failed to fetch children of parent 3: timeout");
        assert!(err.is_server_error());
        assert!(
            ApiError::from(VariantError::attribute_metadata(ParentKey::new(3), "no type"))
                .is_server_error()
        );
        assert!(!ApiError::ValidationError("x".to_string()).is_server_error());
    }

    #[test]
    fn test_graphql_extensions_carry_code_and_parent() {
        let err = ApiError::from(VariantError::attribute_metadata(ParentKey::new(9), "gone")).extend();
        let extensions = err.extensions.expect("extensions set");
        assert_eq!(
            extensions.get("code"),
            Some(&Value::from("VARIANT_ATTRIBUTE_METADATA"))
        );
        assert_eq!(extensions.get("parent"), Some(&Value::from(9)));
    }

    #[test]
    fn test_anyhow_downcast_keeps_api_error() {
        let err = ApiError::from(anyhow::Error::new(ApiError::ValidationError("bad".to_string())));
        assert!(matches!(err, ApiError::ValidationError(ref m) if m == "bad"));

        let err = ApiError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
