//! Catalog walkthrough
//!
//! Seeds products, persons and orders, then exercises list filters, patches
//! and the error paths. Run with `RUST_LOG=debug cargo run --example catalog`
//! to see every store operation.

use anyhow::Result;
use resources::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServiceConfig::from_yaml_file(&path)?,
        None => ServiceConfig::default(),
    };
    let registry = ServiceRegistry::from_config(&config);

    // === Products ===
    let widget = registry.products.create(ProductCreate {
        id: None,
        name: "Widget".to_string(),
        description: Some("A compact widget for demos.".to_string()),
        price: 9.99,
        in_stock: 100,
    })?;
    let pro = registry.products.create(ProductCreate {
        id: None,
        name: "Pro Widget".to_string(),
        description: Some("Upgraded widget with more features.".to_string()),
        price: 19.99,
        in_stock: 25,
    })?;

    let widgets = registry.products.list(&ProductFilter::name("widg"))?;
    println!("products matching 'widg': {}", widgets.len());

    // === Persons ===
    registry.persons.create(PersonCreate {
        id: None,
        uni: "ab1234".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        birth_date: NaiveDate::from_ymd_opt(1815, 12, 10),
        addresses: vec![Address::new(
            Uuid::new_v4(),
            AddressCreate {
                id: None,
                street: "1 Main St".to_string(),
                city: "Boston".to_string(),
                state: Some("MA".to_string()),
                postal_code: Some("02101".to_string()),
                country: "USA".to_string(),
            },
        )],
    })?;

    let bostonians = registry.persons.list(&PersonFilter {
        city: Some("Boston".to_string()),
        ..Default::default()
    })?;
    println!("persons with an address in Boston: {}", bostonians.len());

    // === Orders ===
    let order = registry.orders.create(OrderCreate {
        id: None,
        customer_name: "Alice".to_string(),
        items: vec![LineItem::new(widget.id, 2), LineItem::new(pro.id, 1)],
        note: Some("Leave at front desk.".to_string()),
    })?;
    println!("{}", serde_json::to_string_pretty(&order)?);

    let order = registry.orders.patch(
        &order.id,
        OrderUpdate {
            note: Some(None),
            ..Default::default()
        },
    )?;
    println!("after clearing note, total is still {}", order.total_amount);

    // === Error paths ===
    let missing = Uuid::new_v4();
    if let Err(e) = registry.orders.create(OrderCreate {
        id: None,
        customer_name: "Bob".to_string(),
        items: vec![LineItem::new(missing, 1)],
        note: None,
    }) {
        println!(
            "{} -> {}",
            e.status_code(),
            serde_json::to_string(&e.to_response())?
        );
    }

    registry.products.delete(&pro.id)?;
    if let Err(e) = registry.products.get(&pro.id) {
        println!("{} -> {}", e.status_code(), e);
    }

    Ok(())
}
