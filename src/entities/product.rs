//! Product entity

use crate::core::entity::{Deletable, Entity, Resource, Timestamped};
use crate::core::error::ServiceResult;
use crate::core::filter::{Filter, contains_ignore_case};
use crate::core::patch::{nullable, set, set_nullable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Unit price in USD, non-negative
    pub price: f64,
    /// Units available in inventory
    pub in_stock: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: Uuid, payload: ProductCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            in_stock: payload.in_stock,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub in_stock: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub in_stock: Option<u32>,
}

/// Case-insensitive substring match on the product name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    pub name: Option<String>,
}

impl ProductFilter {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Filter<Product> for ProductFilter {
    fn matches(&self, p: &Product) -> bool {
        contains_ignore_case(self.name.as_deref(), &p.name)
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

impl Entity for Product {
    fn resource_name() -> &'static str {
        "products"
    }

    fn resource_name_singular() -> &'static str {
        "product"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Product {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Resource for Product {
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Context = ();

    fn requested_id(payload: &ProductCreate) -> Option<Uuid> {
        payload.id
    }

    fn from_payload(
        id: Uuid,
        payload: ProductCreate,
        now: DateTime<Utc>,
        _context: &(),
    ) -> ServiceResult<Self> {
        Ok(Self::new(id, payload, now))
    }

    fn merge(&self, update: ProductUpdate, _context: &()) -> ServiceResult<Self> {
        let mut next = self.clone();
        set(&mut next.name, update.name);
        set_nullable(&mut next.description, update.description);
        set(&mut next.price, update.price);
        set(&mut next.in_stock, update.in_stock);
        Ok(next)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at);
    }
}

impl Deletable for Product {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn product(name: &str) -> Product {
        Product::new(
            Uuid::new_v4(),
            ProductCreate {
                id: None,
                name: name.to_string(),
                description: Some("A compact widget for demos.".to_string()),
                price: 9.99,
                in_stock: 100,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_new_sets_equal_timestamps() {
        let p = product("Widget");
        assert_eq!(p.created_at, p.updated_at);
    }

    #[test]
    fn test_touch_never_moves_backwards() {
        let mut p = product("Widget");
        let before = p.updated_at;

        p.touch(before - Duration::hours(1));
        assert_eq!(p.updated_at, before);

        p.touch(before + Duration::seconds(1));
        assert_eq!(p.updated_at, before + Duration::seconds(1));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let filter = ProductFilter::name("widg");
        assert!(filter.matches(&product("Widget")));
        assert!(filter.matches(&product("PRO-WIDGET")));
        assert!(!filter.matches(&product("Gadget")));
    }

    #[test]
    fn test_merge_price_only() {
        let original = product("Widget");
        let merged = original
            .merge(
                ProductUpdate {
                    price: Some(14.49),
                    ..Default::default()
                },
                &(),
            )
            .unwrap();

        assert_eq!(merged.price, 14.49);
        assert_eq!(merged.name, original.name);
        assert_eq!(merged.description, original.description);
        assert_eq!(merged.in_stock, original.in_stock);
        assert_eq!(merged.created_at, original.created_at);
    }
}
