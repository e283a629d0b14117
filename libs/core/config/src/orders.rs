use std::str::FromStr;

use strum::{Display, EnumString};

use crate::{env_or_default, ConfigError, FromEnv};

/// How the order workflow treats a request that names the same product twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DuplicateProductPolicy {
    /// Fail the request before any product is fetched
    #[default]
    Reject,
    /// Sum the quantities of repeated lines, keeping first-appearance order
    Merge,
}

/// Settings for the order creation workflow
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderConfig {
    pub duplicate_products: DuplicateProductPolicy,
}

impl OrderConfig {
    pub fn new(duplicate_products: DuplicateProductPolicy) -> Self {
        Self { duplicate_products }
    }
}

impl FromEnv for OrderConfig {
    /// Reads `ORDER_DUPLICATE_PRODUCTS` (`reject` or `merge`, default `reject`)
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default(
            "ORDER_DUPLICATE_PRODUCTS",
            &DuplicateProductPolicy::default().to_string(),
        );
        let duplicate_products =
            DuplicateProductPolicy::from_str(raw.trim()).map_err(|e| ConfigError::ParseError {
                key: "ORDER_DUPLICATE_PRODUCTS".to_string(),
                details: format!("{}: '{}'", e, raw),
            })?;

        Ok(Self { duplicate_products })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_config_defaults_to_reject() {
        temp_env::with_var_unset("ORDER_DUPLICATE_PRODUCTS", || {
            let config = OrderConfig::from_env().unwrap();
            assert_eq!(config.duplicate_products, DuplicateProductPolicy::Reject);
        });
    }

    #[test]
    fn test_order_config_merge() {
        temp_env::with_var("ORDER_DUPLICATE_PRODUCTS", Some("Merge"), || {
            let config = OrderConfig::from_env().unwrap();
            assert_eq!(config.duplicate_products, DuplicateProductPolicy::Merge);
        });
    }

    #[test]
    fn test_order_config_invalid_policy() {
        temp_env::with_var("ORDER_DUPLICATE_PRODUCTS", Some("sum"), || {
            let err = OrderConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("ORDER_DUPLICATE_PRODUCTS"));
        });
    }

    #[test]
    fn test_policy_display_round_trips_env_value() {
        assert_eq!(DuplicateProductPolicy::Reject.to_string(), "reject");
        assert_eq!(DuplicateProductPolicy::Merge.to_string(), "merge");
    }
}
