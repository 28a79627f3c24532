//! Errors raised while fetching child products

use thiserror::Error;

use crate::models::ParentKey;

/// Failure while resolving the children of a registered parent
///
/// `Clone` so it can travel as a DataLoader error to every waiting
/// resolver of the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// The backing store failed while fetching children for a parent
    #[error("failed to fetch children of parent {parent}: {message}")]
    DataAccess { parent: ParentKey, message: String },

    /// The variant-defining attributes of a parent could not be discovered.
    /// Aborts the batch like a store failure; there is no fallback to a
    /// partial attribute selection.
    #[error("variant attributes unavailable for parent {parent}: {message}")]
    AttributeMetadata { parent: ParentKey, message: String },
}

impl VariantError {
    /// Create a data access error for a parent
    pub fn data_access(parent: ParentKey, message: impl Into<String>) -> Self {
        Self::DataAccess {
            parent,
            message: message.into(),
        }
    }

    /// Create an attribute metadata error for a parent
    pub fn attribute_metadata(parent: ParentKey, message: impl Into<String>) -> Self {
        Self::AttributeMetadata {
            parent,
            message: message.into(),
        }
    }

    /// Parent whose fetch failed
    pub fn parent(&self) -> ParentKey {
        match self {
            Self::DataAccess { parent, .. } | Self::AttributeMetadata { parent, .. } => *parent,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DataAccess { .. } => "VARIANT_DATA_ACCESS",
            Self::AttributeMetadata { .. } => "VARIANT_ATTRIBUTE_METADATA",
        }
    }

    /// Both kinds fail the fetch as a data access problem
    pub fn is_data_access(&self) -> bool {
        matches!(self, Self::DataAccess { .. } | Self::AttributeMetadata { .. })
    }
}

/// Result type for variant fetching
pub type VariantResult<T> = Result<T, VariantError>;
