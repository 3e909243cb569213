//! Order entity and its pricing context

use super::product::Product;
use crate::core::entity::{Deletable, Entity, Resource, Timestamped};
use crate::core::error::ServiceResult;
use crate::core::filter::{Filter, contains_ignore_case};
use crate::core::patch::{nullable, set, set_nullable};
use crate::core::pricing::OrderPricingResolver;
use crate::core::store::ResourceStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// One product line of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: Uuid,
    /// Always > 0
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_id: Uuid, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A customer order
///
/// `total_amount` is derived: it is the rounded sum of `price × quantity`
/// against the catalog as it was when `items` was last written. Later
/// price changes do not reprice existing orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    /// Up to 280 characters
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Partial update payload
///
/// `customer_name` is not nullable, so an explicit `null` is ignored.
/// `items`, when present, replaces the whole list and reprices the order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
    #[serde(default, deserialize_with = "nullable")]
    pub note: Option<Option<String>>,
}

/// Case-insensitive substring match on the customer name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    pub customer_name: Option<String>,
}

impl OrderFilter {
    pub fn customer_name(name: impl Into<String>) -> Self {
        Self {
            customer_name: Some(name.into()),
        }
    }
}

impl Filter<Order> for OrderFilter {
    fn matches(&self, o: &Order) -> bool {
        contains_ignore_case(self.customer_name.as_deref(), &o.customer_name)
    }

    fn is_empty(&self) -> bool {
        self.customer_name.is_none()
    }
}

/// Read-only view of the product catalog used to price orders
#[derive(Clone)]
pub struct OrderContext {
    pub products: Arc<dyn ResourceStore<Product>>,
    pub pricing: OrderPricingResolver,
}

impl OrderContext {
    pub fn new(products: Arc<dyn ResourceStore<Product>>, pricing: OrderPricingResolver) -> Self {
        Self { products, pricing }
    }

    fn price(&self, items: &[LineItem]) -> ServiceResult<f64> {
        self.pricing.resolve(items, self.products.as_ref())
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Order {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Resource for Order {
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;
    type Context = OrderContext;

    fn requested_id(payload: &OrderCreate) -> Option<Uuid> {
        payload.id
    }

    fn from_payload(
        id: Uuid,
        payload: OrderCreate,
        now: DateTime<Utc>,
        context: &OrderContext,
    ) -> ServiceResult<Self> {
        let total_amount = context.price(&payload.items)?;

        Ok(Self {
            id,
            customer_name: payload.customer_name,
            items: payload.items,
            note: payload.note,
            created_at: now,
            updated_at: now,
            total_amount,
        })
    }

    fn merge(&self, update: OrderUpdate, context: &OrderContext) -> ServiceResult<Self> {
        let mut next = self.clone();
        set(&mut next.customer_name, update.customer_name);
        if let Some(items) = update.items {
            next.total_amount = context.price(&items)?;
            next.items = items;
        }
        set_nullable(&mut next.note, update.note);
        Ok(next)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at);
    }
}

impl Deletable for Order {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ServiceError;
    use crate::entities::ProductCreate;
    use crate::storage::InMemoryStore;

    fn catalog() -> (OrderContext, Uuid) {
        let store = InMemoryStore::<Product>::new();
        let id = Uuid::new_v4();
        store
            .insert(
                id,
                Product::new(
                    id,
                    ProductCreate {
                        id: None,
                        name: "Widget".to_string(),
                        description: None,
                        price: 9.99,
                        in_stock: 3,
                    },
                    Utc::now(),
                ),
            )
            .unwrap();
        (
            OrderContext::new(Arc::new(store), OrderPricingResolver::default()),
            id,
        )
    }

    fn order(context: &OrderContext, product_id: Uuid) -> Order {
        Order::from_payload(
            Uuid::new_v4(),
            OrderCreate {
                id: None,
                customer_name: "Alice".to_string(),
                items: vec![LineItem::new(product_id, 2)],
                note: Some("Leave at front desk.".to_string()),
            },
            Utc::now(),
            context,
        )
        .unwrap()
    }

    #[test]
    fn test_create_prices_items() {
        let (context, widget) = catalog();
        let o = order(&context, widget);
        assert_eq!(o.total_amount, 19.98);
        assert_eq!(o.created_at, o.updated_at);
    }

    #[test]
    fn test_note_patch_keeps_items_and_total() {
        let (context, widget) = catalog();
        let o = order(&context, widget);

        let update: OrderUpdate = serde_json::from_str(r#"{"note": null}"#).unwrap();
        let merged = o.merge(update, &context).unwrap();

        assert_eq!(merged.note, None);
        assert_eq!(merged.items, o.items);
        assert_eq!(merged.total_amount, o.total_amount);
    }

    #[test]
    fn test_null_customer_name_is_ignored() {
        let (context, widget) = catalog();
        let o = order(&context, widget);

        let update: OrderUpdate = serde_json::from_str(r#"{"customer_name": null}"#).unwrap();
        let merged = o.merge(update, &context).unwrap();
        assert_eq!(merged.customer_name, "Alice");
    }

    #[test]
    fn test_items_patch_with_unknown_product_fails() {
        let (context, widget) = catalog();
        let o = order(&context, widget);
        let missing = Uuid::new_v4();

        let err = o
            .merge(
                OrderUpdate {
                    items: Some(vec![LineItem::new(missing, 1)]),
                    ..Default::default()
                },
                &context,
            )
            .unwrap_err();
        assert_eq!(err, ServiceError::InvalidReference { product_id: missing });
    }
}
