//! Order pricing against the product catalog

use crate::core::error::{ServiceError, ServiceResult};
use crate::core::store::ResourceStore;
use crate::entities::{LineItem, Product};

/// Default precision of monetary totals
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Largest precision an `f64` total can carry
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Computes order totals from line items
///
/// Every referenced product must exist at resolution time. The product
/// store is only read, never written (no stock is reserved).
#[derive(Debug, Clone, Copy)]
pub struct OrderPricingResolver {
    decimal_places: u32,
}

impl OrderPricingResolver {
    /// Precision above [`MAX_DECIMAL_PLACES`] is clamped to it
    pub fn new(decimal_places: u32) -> Self {
        Self {
            decimal_places: decimal_places.min(MAX_DECIMAL_PLACES),
        }
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Sum `price × quantity` over `items`, rounded to the configured precision
    ///
    /// Fails with `InvalidReference` on the first line item whose product is
    /// missing; no partial total is returned.
    pub fn resolve(
        &self,
        items: &[LineItem],
        products: &dyn ResourceStore<Product>,
    ) -> ServiceResult<f64> {
        let mut total = 0.0;
        for item in items {
            let product = products.get(&item.product_id).map_err(|e| match e {
                ServiceError::NotFound { .. } => ServiceError::InvalidReference {
                    product_id: item.product_id,
                },
                other => other,
            })?;
            total += product.price * f64::from(item.quantity);
        }

        Ok(round_to(total, self.decimal_places))
    }
}

impl Default for OrderPricingResolver {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMAL_PLACES)
    }
}

/// Round half away from zero to `decimals` places, at most [`MAX_DECIMAL_PLACES`]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals.min(MAX_DECIMAL_PLACES) as i32);
    (value * factor).round() / factor
}
