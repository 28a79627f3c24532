//! Configurable and simple product models
//!
//! A configurable product is the parent of a family of simple products that
//! differ only in their configurable attributes (size, color, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use storefront_variant_cache::{
    AttributeSet, ChildEntity, ParentEntity, ParentKey, ProductStatus, VariantError,
    VariantResult,
};

/// Configurable (parent) product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurableProduct {
    /// Public entity identifier
    pub entity_id: i64,

    /// Link field used by child products to reference this parent
    pub row_id: ParentKey,

    /// Stock keeping unit
    pub sku: String,

    /// Display name
    pub name: String,

    /// Codes of the attributes that distinguish this product's variants.
    /// `None` when the product type metadata was not loaded.
    pub configurable_attributes: Option<Vec<String>>,
}

impl ParentEntity for ConfigurableProduct {
    fn key(&self) -> ParentKey {
        self.row_id
    }

    fn variant_attributes(&self) -> VariantResult<AttributeSet> {
        match &self.configurable_attributes {
            Some(codes) => Ok(codes.iter().cloned().collect()),
            None => Err(VariantError::attribute_metadata(
                self.row_id,
                format!("configurable attributes not loaded for {}", self.sku),
            )),
        }
    }
}

/// Simple (child) product belonging to a configurable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleProduct {
    /// Public entity identifier
    pub entity_id: i64,

    /// Link field of the owning configurable product
    pub parent_id: ParentKey,

    /// Stock keeping unit
    pub sku: String,

    /// Display name
    pub name: String,

    /// Catalog status
    pub status: ProductStatus,

    /// Selected attribute values keyed by attribute code
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl SimpleProduct {
    /// Value of an attribute, if it was selected and set
    pub fn attribute(&self, code: &str) -> Option<&str> {
        self.attributes.get(code).map(String::as_str)
    }
}

impl ChildEntity for SimpleProduct {
    fn parent_id(&self) -> ParentKey {
        self.parent_id
    }

    fn sku(&self) -> &str {
        &self.sku
    }
}
