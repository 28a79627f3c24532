//! Batched fetching of configurable product variants
//!
//! A [`BatchedChildFetchCache`] lives for one request. Resolvers register
//! the configurable parents they will read and the attribute codes they
//! need; the first read fetches the variants of every registered parent and
//! groups them by the parent id each variant reports.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_variant_cache::{BatchedChildFetchCache, ParentKey};
//!
//! let mut cache = BatchedChildFetchCache::new(source);
//! cache.register_parent(shirt);
//! cache.register_parent(hoodie);
//! cache.add_attributes(["color", "size"]);
//!
//! // One pass over both parents; later reads come from memory.
//! let shirt_variants = cache.get_children(ParentKey::new(10)).await?;
//! let hoodie_variants = cache.get_children(ParentKey::new(11)).await?;
//! ```

mod cache;
mod error;
mod models;
mod source;

pub use cache::{BatchedChildFetchCache, ChildrenMap, FetchOptions};
pub use error::{VariantError, VariantResult};
pub use models::{AttributeSet, ChildRecord, FetchStats, ParentKey, ProductStatus};
pub use source::{ChildDataSource, ChildEntity, ParentEntity};
