//! Tracing subscriber setup for hosts embedding the adapter

use storefront_shared_config::CommonConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ApiError, ApiResult};

/// Filter used when `RUST_LOG` is not set: the configured level for both
/// the adapter and the variant cache
pub fn default_filter(config: &CommonConfig) -> String {
    format!(
        "storefront_catalog_api={level},storefront_variant_cache={level}",
        level = config.log_level
    )
}

/// Install a global fmt subscriber filtered by `RUST_LOG` or the configured level
pub fn init_tracing(config: &CommonConfig) -> ApiResult<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config).into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| ApiError::Internal(format!("failed to install tracing subscriber: {e}")))
}

/// Host entry point: read `.env` and the environment, then install tracing
///
/// The returned config carries the `VariantConfig` each request's
/// `VariantContext` is built from.
pub fn init_from_env() -> ApiResult<CommonConfig> {
    let config = CommonConfig::load()?;
    init_tracing(&config)?;
    tracing::debug!(environment = %config.environment, "catalog adapter configured");
    Ok(config)
}
