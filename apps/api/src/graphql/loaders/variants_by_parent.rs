//! Variants-by-Parent DataLoader for batched fetching
//!
//! This loader hands a batch of parent keys to the request's
//! [`BatchedChildFetchCache`], which fetches the variants of every parent
//! registered so far in one pass.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use storefront_variant_cache::{
    BatchedChildFetchCache, ChildDataSource, ChildRecord, ParentKey, VariantError,
};
use tokio::sync::Mutex;

/// DataLoader over a request-scoped variant cache
pub struct VariantsByParentLoader<S: ChildDataSource> {
    cache: Arc<Mutex<BatchedChildFetchCache<S>>>,
}

impl<S: ChildDataSource> VariantsByParentLoader<S> {
    pub fn new(cache: Arc<Mutex<BatchedChildFetchCache<S>>>) -> Self {
        Self { cache }
    }
}

impl<S> Loader<ParentKey> for VariantsByParentLoader<S>
where
    S: ChildDataSource + 'static,
    S::Parent: 'static,
    S::Child: 'static,
{
    type Value = Vec<ChildRecord<S::Child>>;
    type Error = VariantError;

    async fn load(
        &self,
        keys: &[ParentKey],
    ) -> Result<HashMap<ParentKey, Self::Value>, Self::Error> {
        tracing::debug!(key_count = keys.len(), "loading variants batch");
        let mut cache = self.cache.lock().await;
        cache.get_children_many(keys).await
    }
}
