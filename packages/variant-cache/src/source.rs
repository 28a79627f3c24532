//! Collaborators the cache consumes
//!
//! The cache never talks to a store directly. Parents describe themselves,
//! children report where they belong, and a [`ChildDataSource`] performs the
//! actual per-parent query.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::VariantResult;
use crate::models::{AttributeSet, ParentKey, ProductStatus};

/// A configurable product whose variants can be fetched
pub trait ParentEntity: Send + Sync {
    /// Stable unique key (the internal link id, not the SKU)
    fn key(&self) -> ParentKey;

    /// Attribute codes whose values distinguish this parent's variants
    ///
    /// Pure lookup on the entity; an `Err` means the metadata could not be
    /// discovered and aborts the batch.
    fn variant_attributes(&self) -> VariantResult<AttributeSet>;
}

/// A variant product returned by a [`ChildDataSource`]
pub trait ChildEntity: Clone + Send + Sync {
    /// Parent id reported by the child record itself
    fn parent_id(&self) -> ParentKey;

    fn sku(&self) -> &str;
}

/// Backing store for child products
#[async_trait]
pub trait ChildDataSource: Send + Sync {
    type Parent: ParentEntity;
    type Child: ChildEntity;

    /// Fetch the children of one parent with the given attribute selection,
    /// restricted to products in `status`
    async fn fetch_children(
        &self,
        parent: &Self::Parent,
        attributes: &AttributeSet,
        status: ProductStatus,
    ) -> VariantResult<Vec<Self::Child>>;
}

#[async_trait]
impl<T> ChildDataSource for Arc<T>
where
    T: ChildDataSource + ?Sized,
{
    type Parent = T::Parent;
    type Child = T::Child;

    async fn fetch_children(
        &self,
        parent: &Self::Parent,
        attributes: &AttributeSet,
        status: ProductStatus,
    ) -> VariantResult<Vec<Self::Child>> {
        (**self).fetch_children(parent, attributes, status).await
    }
}
