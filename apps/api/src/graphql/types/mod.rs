//! GraphQL type definitions for configurable products and their variants

mod product;

pub use product::{ConfigurableProduct, ProductVariant, VariantAttribute};
