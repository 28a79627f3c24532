//! Storefront catalog GraphQL adapter
//!
//! Exposes configurable products and their variants to an async-graphql
//! schema, batching variant lookups per request through
//! `storefront_variant_cache`.

pub mod error;
pub mod graphql;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use graphql::{CatalogSource, CatalogVariantContext, VariantContext};
