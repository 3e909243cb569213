//! Shared fixtures for the integration tests.
//!
//! Builds a [`ServiceRegistry`] on a frozen [`ManualClock`](resources::core::clock::ManualClock) and offers
//! payload builders with sensible defaults.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use resources::core::clock::ManualClock;
use resources::prelude::*;
use std::sync::Arc;

/// A registry whose clock only moves when the test advances it
pub fn frozen_registry() -> (ServiceRegistry, Arc<ManualClock>) {
    let start = Utc.with_ymd_and_hms(2025, 9, 13, 15, 4, 5).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let registry = ServiceRegistry::with_clock(&ServiceConfig::default(), clock.clone());
    (registry, clock)
}

pub fn product_payload(name: &str, price: f64) -> ProductCreate {
    ProductCreate {
        id: None,
        name: name.to_string(),
        description: Some(format!("{} for demos.", name)),
        price,
        in_stock: 100,
    }
}

pub fn order_payload(customer: &str, items: Vec<LineItem>) -> OrderCreate {
    OrderCreate {
        id: None,
        customer_name: customer.to_string(),
        items,
        note: None,
    }
}

pub fn address_payload(city: &str, country: &str) -> AddressCreate {
    AddressCreate {
        id: None,
        street: "1 Main St".to_string(),
        city: city.to_string(),
        state: None,
        postal_code: None,
        country: country.to_string(),
    }
}

pub fn embedded_address(city: &str, country: &str) -> Address {
    Address::new(Uuid::new_v4(), address_payload(city, country))
}

pub fn person_payload(uni: &str, first: &str, addresses: Vec<Address>) -> PersonCreate {
    PersonCreate {
        id: None,
        uni: uni.to_string(),
        first_name: first.to_string(),
        last_name: "Doe".to_string(),
        email: format!("{}@example.com", uni),
        phone: None,
        birth_date: None,
        addresses,
    }
}
