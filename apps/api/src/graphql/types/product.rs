//! Configurable product GraphQL types
//!
//! This module defines the GraphQL types for configurable products and
//! their variants, with the `variants` relationship resolved through the
//! request's [`CatalogVariantContext`].

use async_graphql::{Context, ErrorExtensions, Object, Result, SimpleObject};
use storefront_variant_cache::ChildRecord;

use crate::error::ApiError;
use crate::graphql::context::CatalogVariantContext;
use crate::models::{ConfigurableProduct as DbConfigurableProduct, SimpleProduct};

/// Attribute value selected on a variant
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct VariantAttribute {
    /// Attribute code (e.g. "color")
    pub code: String,
    /// Stored value
    pub value: String,
}

/// Configurable product exposed via GraphQL
pub struct ConfigurableProduct {
    inner: DbConfigurableProduct,
}

impl ConfigurableProduct {
    /// Create a new GraphQL ConfigurableProduct from a catalog model
    pub fn new(product: DbConfigurableProduct) -> Self {
        Self { inner: product }
    }
}

impl From<DbConfigurableProduct> for ConfigurableProduct {
    fn from(product: DbConfigurableProduct) -> Self {
        Self::new(product)
    }
}

#[Object]
impl ConfigurableProduct {
    /// Entity identifier
    async fn id(&self) -> i64 {
        self.inner.entity_id
    }

    async fn sku(&self) -> &str {
        &self.inner.sku
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Codes of the attributes that distinguish this product's variants
    async fn variant_attributes(&self) -> Vec<String> {
        self.inner.configurable_attributes.clone().unwrap_or_default()
    }

    /// Enabled variants of this product (batched across the request)
    ///
    /// `attributes` adds attribute codes to select on top of the defaults
    /// and the variant-defining attributes.
    async fn variants(
        &self,
        ctx: &Context<'_>,
        attributes: Option<Vec<String>>,
    ) -> Result<Vec<ProductVariant>> {
        let attributes = attributes.unwrap_or_default();
        if attributes.iter().any(|code| code.trim().is_empty()) {
            return Err(
                ApiError::ValidationError("attribute codes must not be blank".to_string())
                    .extend(),
            );
        }

        let variants = ctx.data::<CatalogVariantContext>()?;
        let load: std::pin::Pin<
            Box<dyn std::future::Future<Output = _> + Send + '_>,
        > = Box::pin(variants.load(self.inner.clone(), attributes));
        let children = load
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(children.into_iter().map(ProductVariant::from).collect())
    }
}

/// Variant (simple product) of a configurable product
pub struct ProductVariant {
    display_id: String,
    inner: SimpleProduct,
}

impl From<ChildRecord<SimpleProduct>> for ProductVariant {
    fn from(record: ChildRecord<SimpleProduct>) -> Self {
        Self {
            display_id: record.display_id,
            inner: record.entity,
        }
    }
}

#[Object]
impl ProductVariant {
    /// Entity identifier
    async fn id(&self) -> i64 {
        self.inner.entity_id
    }

    async fn sku(&self) -> &str {
        &self.display_id
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Selected attribute values, ordered by code
    async fn attributes(&self) -> Vec<VariantAttribute> {
        self.inner
            .attributes
            .iter()
            .map(|(code, value)| VariantAttribute {
                code: code.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// Value of a single attribute
    async fn attribute(&self, code: String) -> Option<&str> {
        self.inner.attribute(&code)
    }
}
