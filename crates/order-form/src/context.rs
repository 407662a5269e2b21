// File: src/context.rs
// Purpose: Externally owned order context (cart contents, price, loading flag)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only bundle supplied by whoever owns the cart
///
/// The form never validates or mutates it; it is read at render time
/// (`loading`) and at submit time (`ingredients`, `price`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderContext {
    /// Ingredient name to quantity
    #[serde(default)]
    pub ingredients: BTreeMap<String, u32>,

    /// Total price of the order
    #[serde(default)]
    pub price: f64,

    /// An order is in flight; the form is replaced by a spinner
    #[serde(default, skip_serializing)]
    pub loading: bool,
}

impl OrderContext {
    pub fn new(ingredients: BTreeMap<String, u32>, price: f64) -> Self {
        Self {
            ingredients,
            price,
            loading: false,
        }
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Number of ingredient units in the cart
    pub fn item_count(&self) -> u32 {
        self.ingredients.values().sum()
    }
}
