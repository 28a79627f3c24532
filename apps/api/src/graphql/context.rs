//! Request-scoped variant context
//!
//! One [`VariantContext`] is created per GraphQL request and injected into
//! the request data. Every `variants` resolver of that request goes through
//! it, so all of them share one cache and one DataLoader.

use std::sync::Arc;
use std::time::Duration;

use async_graphql::dataloader::DataLoader;
use storefront_shared_config::VariantConfig;
use storefront_variant_cache::{
    BatchedChildFetchCache, ChildDataSource, ChildRecord, FetchOptions, FetchStats, ParentEntity,
    VariantResult,
};
use tokio::sync::Mutex;

use super::loaders::VariantsByParentLoader;
use crate::models::{ConfigurableProduct, SimpleProduct};

/// Catalog data source as stored in the GraphQL context
pub type CatalogSource =
    Arc<dyn ChildDataSource<Parent = ConfigurableProduct, Child = SimpleProduct>>;

/// Context type the catalog GraphQL types read from request data
pub type CatalogVariantContext = VariantContext<CatalogSource>;

/// Shared handle to one request's variant cache and its DataLoader
pub struct VariantContext<S>
where
    S: ChildDataSource + 'static,
    S::Parent: 'static,
    S::Child: 'static,
{
    cache: Arc<Mutex<BatchedChildFetchCache<S>>>,
    loader: Arc<DataLoader<VariantsByParentLoader<S>>>,
}

impl<S> Clone for VariantContext<S>
where
    S: ChildDataSource + 'static,
    S::Parent: 'static,
    S::Child: 'static,
{
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            loader: Arc::clone(&self.loader),
        }
    }
}

impl<S> VariantContext<S>
where
    S: ChildDataSource + 'static,
    S::Parent: 'static,
    S::Child: 'static,
{
    /// Create a context for one request
    pub fn new(source: S, config: &VariantConfig) -> Self {
        let cache = Arc::new(Mutex::new(BatchedChildFetchCache::with_options(
            source,
            FetchOptions::from(config),
        )));
        let loader = DataLoader::new(VariantsByParentLoader::new(Arc::clone(&cache)), tokio::spawn)
            .delay(Duration::from_millis(config.batch_delay_ms))
            .max_batch_size(config.max_batch_size);

        Self {
            cache,
            loader: Arc::new(loader),
        }
    }

    /// Register a parent without reading it yet
    pub async fn register(&self, parent: S::Parent) {
        self.cache.lock().await.register_parent(parent);
    }

    /// Merge attribute codes into the request's selection
    pub async fn add_attributes<I, T>(&self, codes: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.cache.lock().await.add_attributes(codes);
    }

    /// Register `parent`, merge `attributes`, then read its variants through
    /// the DataLoader so concurrent resolvers share one fetch
    pub async fn load(
        &self,
        parent: S::Parent,
        attributes: Vec<String>,
    ) -> VariantResult<Vec<ChildRecord<S::Child>>> {
        let key = parent.key();
        {
            let mut cache = self.cache.lock().await;
            cache.register_parent(parent);
            cache.add_attributes(attributes);
        }

        Ok(self.loader.load_one(key).await?.unwrap_or_default())
    }

    /// Counters of the underlying cache
    pub async fn stats(&self) -> FetchStats {
        self.cache.lock().await.stats()
    }

    /// Inject this context into a GraphQL request
    pub fn attach(self, request: async_graphql::Request) -> async_graphql::Request {
        request.data(self)
    }
}
