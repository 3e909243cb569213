//! Person entity

use super::address::Address;
use crate::core::entity::{Entity, Resource};
use crate::core::error::ServiceResult;
use crate::core::filter::{Filter, any_equals, equals, equals_optional};
use crate::core::patch::{nullable, set, set_nullable};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person with an ordered list of embedded addresses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    /// University identifier (e.g. "abc1234")
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub addresses: Vec<Address>,
}

impl Person {
    pub fn new(id: Uuid, payload: PersonCreate) -> Self {
        Self {
            id,
            uni: payload.uni,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            birth_date: payload.birth_date,
            addresses: payload.addresses,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonCreate {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// Partial update payload
///
/// `addresses`, when present, replaces the whole list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonUpdate {
    #[serde(default)]
    pub uni: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub birth_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub addresses: Option<Vec<Address>>,
}

/// Exact-match filters; `city` and `country` match against any embedded address
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonFilter {
    pub uni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Filter<Person> for PersonFilter {
    fn matches(&self, p: &Person) -> bool {
        let birth_date = p.birth_date.map(|d| d.format("%Y-%m-%d").to_string());

        equals(self.uni.as_deref(), &p.uni)
            && equals(self.first_name.as_deref(), &p.first_name)
            && equals(self.last_name.as_deref(), &p.last_name)
            && equals(self.email.as_deref(), &p.email)
            && equals_optional(self.phone.as_deref(), p.phone.as_deref())
            && equals_optional(self.birth_date.as_deref(), birth_date.as_deref())
            && any_equals(
                self.city.as_deref(),
                p.addresses.iter().map(|a| a.city.as_str()),
            )
            && any_equals(
                self.country.as_deref(),
                p.addresses.iter().map(|a| a.country.as_str()),
            )
    }

    fn is_empty(&self) -> bool {
        self.uni.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.birth_date.is_none()
            && self.city.is_none()
            && self.country.is_none()
    }
}

impl Entity for Person {
    fn resource_name() -> &'static str {
        "persons"
    }

    fn resource_name_singular() -> &'static str {
        "person"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Resource for Person {
    type Create = PersonCreate;
    type Update = PersonUpdate;
    type Filter = PersonFilter;
    type Context = ();

    fn requested_id(payload: &PersonCreate) -> Option<Uuid> {
        payload.id
    }

    fn from_payload(
        id: Uuid,
        payload: PersonCreate,
        _now: DateTime<Utc>,
        _context: &(),
    ) -> ServiceResult<Self> {
        Ok(Self::new(id, payload))
    }

    fn merge(&self, update: PersonUpdate, _context: &()) -> ServiceResult<Self> {
        let mut next = self.clone();
        set(&mut next.uni, update.uni);
        set(&mut next.first_name, update.first_name);
        set(&mut next.last_name, update.last_name);
        set(&mut next.email, update.email);
        set_nullable(&mut next.phone, update.phone);
        set_nullable(&mut next.birth_date, update.birth_date);
        set(&mut next.addresses, update.addresses);
        Ok(next)
    }
}
