//! Catalog models consumed by the variant adapter
//!
//! Products arrive already loaded by the host application; this crate only
//! reads them.

pub mod product;

pub use product::{ConfigurableProduct, SimpleProduct};
