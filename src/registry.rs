//! Wiring of stores and services for the four entity types

use crate::config::ServiceConfig;
use crate::core::clock::{Clock, SystemClock};
use crate::core::pricing::OrderPricingResolver;
use crate::core::service::ResourceService;
use crate::core::store::ResourceStore;
use crate::entities::{Address, Order, OrderContext, Person, Product};
use crate::storage::InMemoryStore;
use std::sync::Arc;

/// One service per entity type
///
/// Each service owns its own store. The product store is shared, read-only,
/// with the order service so orders can be priced.
pub struct ServiceRegistry {
    pub persons: ResourceService<Person>,
    pub addresses: ResourceService<Address>,
    pub products: ResourceService<Product>,
    pub orders: ResourceService<Order>,
}

impl ServiceRegistry {
    /// Build with default configuration and the system clock
    pub fn new() -> Self {
        Self::from_config(&ServiceConfig::default())
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build with an explicit time source
    pub fn with_clock(config: &ServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let names = &config.entities;

        let persons: Arc<dyn ResourceStore<Person>> =
            Arc::new(InMemoryStore::<Person>::named(&names.person.singular));
        let addresses: Arc<dyn ResourceStore<Address>> =
            Arc::new(InMemoryStore::<Address>::named(&names.address.singular));
        let products: Arc<dyn ResourceStore<Product>> =
            Arc::new(InMemoryStore::<Product>::named(&names.product.singular));
        let orders: Arc<dyn ResourceStore<Order>> =
            Arc::new(InMemoryStore::<Order>::named(&names.order.singular));

        let pricing = OrderPricingResolver::new(config.pricing.decimal_places);
        let order_context = OrderContext::new(products.clone(), pricing);

        tracing::debug!(
            decimal_places = config.pricing.decimal_places,
            "service registry initialized"
        );

        Self {
            persons: ResourceService::new(persons, ())
                .with_names(names.person.clone())
                .with_clock(clock.clone()),
            addresses: ResourceService::new(addresses, ())
                .with_names(names.address.clone())
                .with_clock(clock.clone()),
            products: ResourceService::new(products, ())
                .with_names(names.product.clone())
                .with_clock(clock.clone()),
            orders: ResourceService::new(orders, order_context)
                .with_names(names.order.clone())
                .with_clock(clock),
        }
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
