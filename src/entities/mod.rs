//! Entity models: Person, Address, Product, Order

pub mod address;
pub mod order;
pub mod person;
pub mod product;

pub use address::{Address, AddressCreate, AddressFilter, AddressUpdate};
pub use order::{LineItem, Order, OrderContext, OrderCreate, OrderFilter, OrderUpdate};
pub use person::{Person, PersonCreate, PersonFilter, PersonUpdate};
pub use product::{Product, ProductCreate, ProductFilter, ProductUpdate};
