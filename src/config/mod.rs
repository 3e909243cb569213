//! Configuration loading and management

use crate::core::entity::Entity;
use crate::core::pricing::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
use crate::entities::{Address, Order, Person, Product};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Naming for an entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Singular form (e.g., "person", "address")
    pub singular: String,

    /// Plural form (e.g., "persons", "addresses")
    pub plural: String,
}

impl EntityConfig {
    /// The names an entity type declares for itself
    pub fn of<T: Entity>() -> Self {
        Self {
            singular: T::resource_name_singular().to_string(),
            plural: T::resource_name().to_string(),
        }
    }
}

/// Names for the four managed entity types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitiesConfig {
    pub person: EntityConfig,
    pub address: EntityConfig,
    pub product: EntityConfig,
    pub order: EntityConfig,
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            person: EntityConfig::of::<Person>(),
            address: EntityConfig::of::<Address>(),
            product: EntityConfig::of::<Product>(),
            order: EntityConfig::of::<Order>(),
        }
    }
}

/// Order pricing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Decimal places order totals are rounded to
    pub decimal_places: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

/// Complete configuration for the services
///
/// Every section is optional in YAML; missing sections fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub entities: EntitiesConfig,
    pub pricing: PricingConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the loader cannot bound by type alone
    pub fn validate(&self) -> Result<()> {
        if self.pricing.decimal_places > MAX_DECIMAL_PLACES {
            bail!(
                "pricing.decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES,
                self.pricing.decimal_places
            );
        }
        Ok(())
    }
}
