//! Shared test utilities for the storefront catalog workspace
//!
//! Provides an in-memory [`MockChildDataSource`] and product fixtures so the
//! variant cache and the GraphQL adapter can be tested without a catalog
//! database.
//!
//! # Example
//!
//! ```rust
//! use storefront_test_utils::{ChildFixture, FixtureSource, ParentFixture};
//! use storefront_variant_cache::{BatchedChildFetchCache, ParentKey};
//!
//! let source = FixtureSource::new()
//!     .with_children(10, vec![ChildFixture::new(100, 10, "SHIRT-S")]);
//! let mut cache = BatchedChildFetchCache::new(source);
//! cache.register_parent(ParentFixture::new(10, "SHIRT"));
//! assert!(cache.contains_parent(ParentKey::new(10)));
//! ```

mod fixtures;
mod source;

pub use fixtures::{ChildFixture, ParentFixture};
pub use source::{FetchRequest, MockChildDataSource};

/// Mock source over the bundled fixtures
pub type FixtureSource = MockChildDataSource<ParentFixture, ChildFixture>;
