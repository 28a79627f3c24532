//! Test helper functions for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Object, Request, Response, Schema};
use storefront_catalog_api::graphql::{CatalogSource, CatalogVariantContext, ConfigurableProduct};
use storefront_catalog_api::models::ConfigurableProduct as DbConfigurableProduct;
use storefront_shared_config::VariantConfig;

use super::fixtures::CatalogMock;

/// Minimal host query root serving a fixed product list
pub struct TestQuery {
    products: Vec<DbConfigurableProduct>,
}

#[Object]
impl TestQuery {
    async fn products(&self) -> Vec<ConfigurableProduct> {
        self.products.iter().cloned().map(ConfigurableProduct::from).collect()
    }
}

pub type TestSchema = Schema<TestQuery, EmptyMutation, EmptySubscription>;

pub fn test_schema(products: Vec<DbConfigurableProduct>) -> TestSchema {
    Schema::build(TestQuery { products }, EmptyMutation, EmptySubscription).finish()
}

/// Request-scoped context over the mock with default configuration
pub fn variant_context(mock: &Arc<CatalogMock>) -> CatalogVariantContext {
    let source: CatalogSource = Arc::clone(mock) as CatalogSource;
    CatalogVariantContext::new(source, &VariantConfig::default())
}

/// Execute `query` with `context` injected as request data
pub async fn execute(schema: &TestSchema, context: CatalogVariantContext, query: &str) -> Response {
    schema.execute(context.attach(Request::new(query))).await
}
