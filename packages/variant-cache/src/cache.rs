//! Request-scoped batched child fetching
//!
//! Resolvers register the parents they are about to read and the attribute
//! codes they need. The first read then fetches the children of every
//! registered parent in one pass and answers all later reads from memory.
//! Registering a parent nobody has seen after that pass discards the
//! result, so the next read fetches again with the new parent included.

use std::collections::HashMap;

use indexmap::IndexMap;
use storefront_shared_config::VariantConfig;
use tracing::{debug, instrument, warn};

use crate::error::VariantResult;
use crate::models::{AttributeSet, ChildRecord, FetchStats, ParentKey, ProductStatus};
use crate::source::{ChildDataSource, ChildEntity, ParentEntity};

/// Children grouped by the parent id each child reports
pub type ChildrenMap<C> = HashMap<ParentKey, Vec<ChildRecord<C>>>;

/// Options fixed for the lifetime of a cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Attribute codes selected for every parent on top of requested ones
    pub default_attributes: AttributeSet,
}

impl From<&VariantConfig> for FetchOptions {
    fn from(config: &VariantConfig) -> Self {
        Self {
            default_attributes: config.default_attributes.iter().cloned().collect(),
        }
    }
}

/// Batched, parent-keyed cache of child products
///
/// Not meant to be shared between requests. Callers that resolve fields
/// concurrently must serialise access to one instance themselves.
pub struct BatchedChildFetchCache<S: ChildDataSource> {
    source: S,
    options: FetchOptions,
    parents: IndexMap<ParentKey, S::Parent>,
    attributes: AttributeSet,
    // `None` until fetched; a populated map always covers every parent
    children: Option<ChildrenMap<S::Child>>,
    stats: FetchStats,
}

impl<S: ChildDataSource> BatchedChildFetchCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, FetchOptions::default())
    }

    pub fn with_options(source: S, options: FetchOptions) -> Self {
        Self {
            source,
            options,
            parents: IndexMap::new(),
            attributes: AttributeSet::new(),
            children: None,
            stats: FetchStats::default(),
        }
    }

    /// Add a parent to the next fetch
    ///
    /// Re-registering a known key is a no-op. A new key arriving after a
    /// fetch drops the fetched children so the new parent is not missed.
    pub fn register_parent(&mut self, parent: S::Parent) {
        let key = parent.key();
        if self.parents.contains_key(&key) {
            return;
        }

        if self.children.take().is_some() {
            self.stats.invalidations += 1;
            debug!(parent = %key, "late registration invalidated fetched variants");
        }
        self.parents.insert(key, parent);
    }

    pub fn register_parents<I>(&mut self, parents: I)
    where
        I: IntoIterator<Item = S::Parent>,
    {
        for parent in parents {
            self.register_parent(parent);
        }
    }

    /// Merge attribute codes into the selection used for every parent
    ///
    /// Codes are only ever added. Already fetched children are kept; the
    /// selection applies to the next fetch.
    pub fn add_attributes<I, T>(&mut self, codes: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.attributes.extend(codes.into_iter().map(Into::into));
    }

    /// Children of `key`, fetching the whole registry first if needed
    ///
    /// Unknown and childless parents yield an empty list.
    pub async fn get_children(
        &mut self,
        key: ParentKey,
    ) -> VariantResult<Vec<ChildRecord<S::Child>>> {
        self.fetch().await?;
        Ok(self.lookup(key))
    }

    /// Children of every key in `keys`, with one fetch for the whole set
    ///
    /// Every requested key is present in the result.
    pub async fn get_children_many(
        &mut self,
        keys: &[ParentKey],
    ) -> VariantResult<HashMap<ParentKey, Vec<ChildRecord<S::Child>>>> {
        self.fetch().await?;
        Ok(keys.iter().map(|key| (*key, self.lookup(*key))).collect())
    }

    /// Attribute selection for one parent: defaults, accumulated codes and
    /// the parent's own variant-defining attributes
    pub fn required_attributes(&self, parent: &S::Parent) -> VariantResult<AttributeSet> {
        let mut required = self.options.default_attributes.clone();
        required.extend(self.attributes.iter().cloned());
        required.extend(parent.variant_attributes()?);
        Ok(required)
    }

    pub fn contains_parent(&self, key: ParentKey) -> bool {
        self.parents.contains_key(&key)
    }

    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    /// Attribute codes accumulated through [`Self::add_attributes`]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn is_fetched(&self) -> bool {
        self.children.is_some()
    }

    /// Fetched children, if a fetch has completed since the last invalidation
    pub fn children(&self) -> Option<&ChildrenMap<S::Child>> {
        self.children.as_ref()
    }

    pub fn stats(&self) -> FetchStats {
        self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn lookup(&self, key: ParentKey) -> Vec<ChildRecord<S::Child>> {
        self.children
            .as_ref()
            .and_then(|children| children.get(&key))
            .cloned()
            .unwrap_or_default()
    }

    /// Populate the children map unless nothing is registered or it is
    /// already populated
    ///
    /// Results are staged and only committed once every parent succeeded,
    /// so a failure leaves the cache unfetched and the next read retries.
    #[instrument(
        skip(self),
        fields(parent_count = self.parents.len(), attribute_count = self.attributes.len())
    )]
    async fn fetch(&mut self) -> VariantResult<()> {
        if self.parents.is_empty() || self.children.is_some() {
            return Ok(());
        }

        match self.fetch_all().await {
            Ok(children) => {
                let child_count: usize = children.values().map(Vec::len).sum();
                self.stats.fetches += 1;
                self.stats.parents_fetched += self.parents.len() as u64;
                self.stats.children_fetched += child_count as u64;
                debug!(child_count, "fetched variants");
                self.children = Some(children);
                Ok(())
            }
            Err(err) => {
                self.stats.failed_fetches += 1;
                warn!(error = %err, parent = %err.parent(), "variant fetch failed");
                Err(err)
            }
        }
    }

    async fn fetch_all(&self) -> VariantResult<ChildrenMap<S::Child>> {
        let mut children: ChildrenMap<S::Child> = HashMap::new();

        for parent in self.parents.values() {
            let attributes = self.required_attributes(parent)?;
            let fetched = self
                .source
                .fetch_children(parent, &attributes, ProductStatus::Enabled)
                .await?;

            // Bucket by the parent id the child reports, not by `parent`
            for child in fetched {
                let display_id = child.sku().to_string();
                children
                    .entry(child.parent_id())
                    .or_default()
                    .push(ChildRecord {
                        entity: child,
                        display_id,
                    });
            }
        }

        Ok(children)
    }
}
