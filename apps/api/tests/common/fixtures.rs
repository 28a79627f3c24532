//! Catalog fixtures for API integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use storefront_catalog_api::models::{ConfigurableProduct, SimpleProduct};
use storefront_test_utils::MockChildDataSource;
use storefront_variant_cache::{ParentKey, ProductStatus};

/// Mock source speaking the catalog models
pub type CatalogMock = MockChildDataSource<ConfigurableProduct, SimpleProduct>;

pub const TEE_ROW: i64 = 110;
pub const HOODIE_ROW: i64 = 120;

/// Configurable product whose link id is `row_id`
pub fn configurable(entity_id: i64, row_id: i64, sku: &str, attributes: &[&str]) -> ConfigurableProduct {
    ConfigurableProduct {
        entity_id,
        row_id: ParentKey::new(row_id),
        sku: sku.to_string(),
        name: sku.to_lowercase(),
        configurable_attributes: Some(attributes.iter().map(|a| a.to_string()).collect()),
    }
}

/// Enabled simple product reporting `parent_row` as its parent
pub fn simple(entity_id: i64, parent_row: i64, sku: &str, attributes: &[(&str, &str)]) -> SimpleProduct {
    SimpleProduct {
        entity_id,
        parent_id: ParentKey::new(parent_row),
        sku: sku.to_string(),
        name: sku.to_lowercase(),
        status: ProductStatus::Enabled,
        attributes: attributes
            .iter()
            .map(|(code, value)| (code.to_string(), value.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// The two parents used across the suite
pub fn tee_and_hoodie() -> Vec<ConfigurableProduct> {
    vec![
        configurable(1, TEE_ROW, "TEE", &["color", "size"]),
        configurable(2, HOODIE_ROW, "HOODIE", &["size"]),
    ]
}

/// Mock with two tee variants and one hoodie variant
pub fn catalog_mock() -> Arc<CatalogMock> {
    Arc::new(
        CatalogMock::new()
            .with_children(
                TEE_ROW,
                vec![
                    simple(11, TEE_ROW, "TEE-RED-S", &[("color", "red"), ("size", "S")]),
                    simple(12, TEE_ROW, "TEE-BLUE-S", &[("color", "blue"), ("size", "S")]),
                ],
            )
            .with_children(
                HOODIE_ROW,
                vec![simple(21, HOODIE_ROW, "HOODIE-M", &[("size", "M")])],
            ),
    )
}
