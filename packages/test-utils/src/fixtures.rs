//! Minimal parent and child products for cache tests

use storefront_variant_cache::{
    AttributeSet, ChildEntity, ParentEntity, ParentKey, VariantError, VariantResult,
};

/// Configurable product fixture
#[derive(Debug, Clone, PartialEq)]
pub struct ParentFixture {
    pub key: ParentKey,
    pub sku: String,
    pub variant_attributes: AttributeSet,
    /// When set, variant attribute discovery fails with this message,
    /// suffixed with the SKU
    pub metadata_error: Option<String>,
}

impl ParentFixture {
    pub fn new(id: i64, sku: &str) -> Self {
        Self {
            key: ParentKey::new(id),
            sku: sku.to_string(),
            variant_attributes: AttributeSet::new(),
            metadata_error: None,
        }
    }

    pub fn with_variant_attributes(mut self, codes: &[&str]) -> Self {
        self.variant_attributes = codes.iter().map(|code| code.to_string()).collect();
        self
    }

    pub fn with_metadata_error(mut self, message: &str) -> Self {
        self.metadata_error = Some(message.to_string());
        self
    }
}

impl ParentEntity for ParentFixture {
    fn key(&self) -> ParentKey {
        self.key
    }

    fn variant_attributes(&self) -> VariantResult<AttributeSet> {
        match &self.metadata_error {
            Some(message) => Err(VariantError::attribute_metadata(
                self.key,
                format!("{message} for {}", self.sku),
            )),
            None => Ok(self.variant_attributes.clone()),
        }
    }
}

/// Simple product fixture reporting its own parent id
#[derive(Debug, Clone, PartialEq)]
pub struct ChildFixture {
    pub entity_id: i64,
    pub parent_id: ParentKey,
    pub sku: String,
}

impl ChildFixture {
    pub fn new(entity_id: i64, parent_id: i64, sku: &str) -> Self {
        Self {
            entity_id,
            parent_id: ParentKey::new(parent_id),
            sku: sku.to_string(),
        }
    }
}

impl ChildEntity for ChildFixture {
    fn parent_id(&self) -> ParentKey {
        self.parent_id
    }

    fn sku(&self) -> &str {
        &self.sku
    }
}
