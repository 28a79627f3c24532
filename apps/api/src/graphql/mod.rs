//! GraphQL surface for configurable product variants
//!
//! This module contains:
//! - The request-scoped [`VariantContext`] hosts inject into each request
//! - The DataLoader that batches `variants` lookups
//! - Object types for configurable products and their variants
//!
//! The host application owns the schema root and decides where
//! [`ConfigurableProduct`] objects come from.

pub mod context;
pub mod loaders;
pub mod types;

pub use context::{CatalogSource, CatalogVariantContext, VariantContext};
pub use loaders::VariantsByParentLoader;
pub use types::{ConfigurableProduct, ProductVariant, VariantAttribute};
