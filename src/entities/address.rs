//! Address entity

use crate::core::entity::{Entity, Resource};
use crate::core::error::ServiceResult;
use crate::core::filter::{Filter, equals, equals_optional};
use crate::core::patch::{nullable, set, set_nullable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A postal address
///
/// Stored on its own and also embedded by value inside a
/// [`Person`](crate::entities::Person).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
}

impl Address {
    pub fn new(id: Uuid, payload: AddressCreate) -> Self {
        Self {
            id,
            street: payload.street,
            city: payload.city,
            state: payload.state,
            postal_code: payload.postal_code,
            country: payload.country,
        }
    }
}

/// Creation payload; the id is optional
#[derive(Debug, Clone, Deserialize)]
pub struct AddressCreate {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressUpdate {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub postal_code: Option<Option<String>>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Exact-match filters over every address field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressFilter {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Filter<Address> for AddressFilter {
    fn matches(&self, a: &Address) -> bool {
        equals(self.street.as_deref(), &a.street)
            && equals(self.city.as_deref(), &a.city)
            && equals_optional(self.state.as_deref(), a.state.as_deref())
            && equals_optional(self.postal_code.as_deref(), a.postal_code.as_deref())
            && equals(self.country.as_deref(), &a.country)
    }

    fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
    }
}

impl Entity for Address {
    fn resource_name() -> &'static str {
        "addresses"
    }

    fn resource_name_singular() -> &'static str {
        "address"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Resource for Address {
    type Create = AddressCreate;
    type Update = AddressUpdate;
    type Filter = AddressFilter;
    type Context = ();

    fn requested_id(payload: &AddressCreate) -> Option<Uuid> {
        payload.id
    }

    fn from_payload(
        id: Uuid,
        payload: AddressCreate,
        _now: DateTime<Utc>,
        _context: &(),
    ) -> ServiceResult<Self> {
        Ok(Self::new(id, payload))
    }

    fn merge(&self, update: AddressUpdate, _context: &()) -> ServiceResult<Self> {
        let mut next = self.clone();
        set(&mut next.street, update.street);
        set(&mut next.city, update.city);
        set_nullable(&mut next.state, update.state);
        set_nullable(&mut next.postal_code, update.postal_code);
        set(&mut next.country, update.country);
        Ok(next)
    }
}
