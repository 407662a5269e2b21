// File: src/orders.rs
// Purpose: In-memory order sink standing in for the external order store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use order_form::{DispatchError, OrderDispatcher, SubmitRequest};
use serde::Serialize;
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// An accepted order
#[derive(Debug, Clone, Serialize)]
pub struct StoredOrder {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub request: SubmitRequest,
}

/// Keeps accepted orders in memory
pub struct OrderStore {
    accepting: bool,
    orders: Mutex<Vec<StoredOrder>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            accepting: true,
            orders: Mutex::new(Vec::new()),
        }
    }

    /// A store that refuses every order
    pub fn closed() -> Self {
        Self {
            accepting: false,
            orders: Mutex::new(Vec::new()),
        }
    }

    pub fn list(&self) -> Vec<StoredOrder> {
        self.orders.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderDispatcher for OrderStore {
    async fn submit_order(&self, request: SubmitRequest) -> Result<(), DispatchError> {
        if !self.accepting {
            return Err(DispatchError::Unavailable("store is not accepting orders".to_string()));
        }

        let order = StoredOrder {
            id: Uuid::new_v4(),
            placed_at: Utc::now(),
            request,
        };
        info!(id = %order.id, "order stored");

        self.orders
            .lock()
            .map_err(|e| DispatchError::Unavailable(e.to_string()))?
            .push(order);
        Ok(())
    }
}
