//! Loading service configuration from YAML files.

use resources::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_from_yaml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "pricing:\n  decimal_places: 0\nentities:\n  order:\n    singular: purchase\n    plural: purchases"
    )
    .unwrap();

    let config = ServiceConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.pricing.decimal_places, 0);
    assert_eq!(config.entities.order.singular, "purchase");
    assert_eq!(config.entities.person, EntityConfig::of::<Person>());

    let registry = ServiceRegistry::from_config(&config);
    let product = registry
        .products
        .create(ProductCreate {
            id: None,
            name: "Widget".to_string(),
            description: None,
            price: 9.6,
            in_stock: 1,
        })
        .unwrap();
    let order = registry
        .orders
        .create(OrderCreate {
            id: None,
            customer_name: "Alice".to_string(),
            items: vec![LineItem::new(product.id, 1)],
            note: None,
        })
        .unwrap();
    assert_eq!(order.total_amount, 10.0);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ServiceConfig::from_yaml_file(dir.path().join("absent.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_out_of_range_precision_is_rejected() {
    let result = ServiceConfig::from_yaml_str("pricing:\n  decimal_places: 400\n");
    assert!(result.is_err());

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "pricing:\n  decimal_places: 400").unwrap();
    assert!(ServiceConfig::from_yaml_file(file.path()).is_err());
}

#[test]
fn test_order_totals_stay_finite_at_max_precision() {
    let config = ServiceConfig::from_yaml_str("pricing:\n  decimal_places: 15\n").unwrap();
    let registry = ServiceRegistry::from_config(&config);

    let empty = registry
        .orders
        .create(OrderCreate {
            id: None,
            customer_name: "Alice".to_string(),
            items: vec![],
            note: None,
        })
        .unwrap();
    assert_eq!(empty.total_amount, 0.0);

    let widget = registry
        .products
        .create(ProductCreate {
            id: None,
            name: "Widget".to_string(),
            description: None,
            price: 9.99,
            in_stock: 10,
        })
        .unwrap();
    let order = registry
        .orders
        .create(OrderCreate {
            id: None,
            customer_name: "Bob".to_string(),
            items: vec![LineItem::new(widget.id, 2)],
            note: None,
        })
        .unwrap();
    assert!(order.total_amount.is_finite());
    assert!(order.total_amount >= 0.0);
}
