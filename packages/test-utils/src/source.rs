//! In-memory child data source for testing the variant cache
//!
//! Provides a [`MockChildDataSource`] that serves canned children per parent,
//! counts calls, records every request and can be told to fail for chosen
//! parents.
//!
//! # Lock Poisoning Recovery
//!
//! Locks are acquired with `unwrap_or_else(|e| e.into_inner())` so a test
//! that panics while holding one does not cascade into unrelated failures.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use storefront_variant_cache::{
    AttributeSet, ChildDataSource, ChildEntity, ParentEntity, ParentKey, ProductStatus,
    VariantError, VariantResult,
};

/// One recorded call to [`MockChildDataSource::fetch_children`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub parent: ParentKey,
    pub attributes: AttributeSet,
    pub status: ProductStatus,
}

/// Mock backing store keyed by parent
///
/// Children are returned exactly as stored, so a child can be filed under
/// one parent while reporting another as its parent id.
pub struct MockChildDataSource<P, C> {
    children: RwLock<HashMap<ParentKey, Vec<C>>>,
    failures: RwLock<HashMap<ParentKey, String>>,
    requests: Mutex<Vec<FetchRequest>>,
    call_count: AtomicUsize,
    _parent: PhantomData<fn() -> P>,
}

impl<P, C: Clone> MockChildDataSource<P, C> {
    pub fn new() -> Self {
        Self {
            children: RwLock::new(HashMap::new()),
            failures: RwLock::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            _parent: PhantomData,
        }
    }

    /// Builder form of [`Self::set_children`]
    pub fn with_children(self, parent: i64, children: Vec<C>) -> Self {
        self.set_children(parent, children);
        self
    }

    /// Children returned when `parent` is queried
    pub fn set_children(&self, parent: i64, children: Vec<C>) {
        let mut store = self.children.write().unwrap_or_else(|e| e.into_inner());
        store.insert(ParentKey::new(parent), children);
    }

    /// Make every query for `parent` fail with a data access error
    pub fn fail_parent(&self, parent: i64, message: &str) {
        let mut failures = self.failures.write().unwrap_or_else(|e| e.into_inner());
        failures.insert(ParentKey::new(parent), message.to_string());
    }

    /// Stop failing queries for `parent`
    pub fn recover_parent(&self, parent: i64) {
        let mut failures = self.failures.write().unwrap_or_else(|e| e.into_inner());
        failures.remove(&ParentKey::new(parent));
    }

    /// Number of `fetch_children` calls so far, failed ones included
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Every request received, in call order
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Parents queried, in call order
    pub fn requested_parents(&self) -> Vec<ParentKey> {
        self.requests().into_iter().map(|r| r.parent).collect()
    }
}

impl<P, C: Clone> Default for MockChildDataSource<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<P, C> ChildDataSource for MockChildDataSource<P, C>
where
    P: ParentEntity,
    C: ChildEntity,
{
    type Parent = P;
    type Child = C;

    async fn fetch_children(
        &self,
        parent: &P,
        attributes: &AttributeSet,
        status: ProductStatus,
    ) -> VariantResult<Vec<C>> {
        let key = parent.key();
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(FetchRequest {
                parent: key,
                attributes: attributes.clone(),
                status,
            });

        let failure = self
            .failures
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
            .cloned();
        if let Some(message) = failure {
            return Err(VariantError::data_access(key, message));
        }

        let store = self.children.read().unwrap_or_else(|e| e.into_inner());
        Ok(store.get(&key).cloned().unwrap_or_default())
    }
}
