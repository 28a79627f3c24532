//! Variant batching configuration

use serde::{Deserialize, Serialize};

use crate::{get_env_or_default, parse_env, ConfigError, ConfigResult};

/// Attribute codes selected for every child fetch when not overridden
pub const DEFAULT_VARIANT_ATTRIBUTES: &str = "name,price";

/// Configuration for batched variant fetching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Attribute codes always selected when fetching child products,
    /// in addition to whatever resolvers request
    pub default_attributes: Vec<String>,

    /// DataLoader batching window in milliseconds
    pub batch_delay_ms: u64,

    /// Upper bound on the number of parents resolved in one loader batch
    pub max_batch_size: usize,
}

impl VariantConfig {
    /// Load variant configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            default_attributes: parse_attribute_list(&get_env_or_default(
                "VARIANT_DEFAULT_ATTRIBUTES",
                DEFAULT_VARIANT_ATTRIBUTES,
            )),
            batch_delay_ms: parse_env("VARIANT_BATCH_DELAY_MS", 1)?,
            max_batch_size: parse_env("VARIANT_MAX_BATCH_SIZE", 1000)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that the environment parser cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_batch_size == 0 {
            return Err(ConfigError::ValidationError(
                "VARIANT_MAX_BATCH_SIZE must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            default_attributes: parse_attribute_list(DEFAULT_VARIANT_ATTRIBUTES),
            batch_delay_ms: 1,
            max_batch_size: 1000,
        }
    }
}

/// Split a comma separated list of attribute codes, dropping blanks
fn parse_attribute_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VariantConfig::default();
        assert_eq!(config.default_attributes, vec!["name", "price"]);
        assert_eq!(config.batch_delay_ms, 1);
        assert_eq!(config.max_batch_size, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_attribute_list_trims_and_skips_blanks() {
        assert_eq!(
            parse_attribute_list(" color, size ,,material "),
            vec!["color", "size", "material"]
        );
        assert!(parse_attribute_list("").is_empty());
    }

    #[test]
    fn test_from_env_reads_overrides() {
        temp_env::with_vars(
            [
                ("VARIANT_DEFAULT_ATTRIBUTES", Some("color,size")),
                ("VARIANT_BATCH_DELAY_MS", Some("5")),
                ("VARIANT_MAX_BATCH_SIZE", Some("50")),
            ],
            || {
                let config = VariantConfig::from_env().unwrap();
                assert_eq!(config.default_attributes, vec!["color", "size"]);
                assert_eq!(config.batch_delay_ms, 5);
                assert_eq!(config.max_batch_size, 50);
            },
        );
    }

    #[test]
    fn test_from_env_rejects_zero_batch_size() {
        temp_env::with_var("VARIANT_MAX_BATCH_SIZE", Some("0"), || {
            let err = VariantConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::ValidationError(_)));
        });
    }

    #[test]
    fn test_from_env_rejects_unparsable_delay() {
        temp_env::with_var("VARIANT_BATCH_DELAY_MS", Some("soon"), || {
            let err = VariantConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "VARIANT_BATCH_DELAY_MS"));
        });
    }
}
