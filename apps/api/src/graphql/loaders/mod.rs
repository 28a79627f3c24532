//! DataLoader implementations for GraphQL
//!
//! Resolvers of the `variants` field register their parent with the
//! request's variant cache and then ask the loader for it. The loader's
//! batching window lets every resolver of the same tick register before the
//! cache performs its fetch.

mod variants_by_parent;

pub use variants_by_parent::VariantsByParentLoader;
