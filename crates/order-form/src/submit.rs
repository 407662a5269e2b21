// File: src/submit.rs
// Purpose: Submit request assembly, dispatch and post-submit navigation

use crate::context::OrderContext;
use crate::error::DispatchError;
use crate::state::FormState;
use async_trait::async_trait;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Field values in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderData(Vec<(String, String)>);

impl OrderData {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(fid, _)| fid == id)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Serialized as a JSON object; keys keep form order
impl Serialize for OrderData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, value) in &self.0 {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

/// Payload handed to the order dispatcher
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub order_data: OrderData,
    pub ingredients: BTreeMap<String, u32>,
    pub price: f64,
}

impl SubmitRequest {
    pub fn to_json(&self) -> Result<String, DispatchError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Collect every field value plus the external order context
///
/// Does not re-validate; callers gate on [`FormState::is_valid`].
pub fn submit(form: &FormState, context: &OrderContext) -> SubmitRequest {
    let order_data = form
        .fields()
        .map(|(id, f)| (id.to_string(), f.value.clone()))
        .collect();

    SubmitRequest {
        order_data: OrderData(order_data),
        ingredients: context.ingredients.clone(),
        price: context.price,
    }
}

/// The external "submit order" action
#[async_trait]
pub trait OrderDispatcher: Send + Sync {
    async fn submit_order(&self, request: SubmitRequest) -> Result<(), DispatchError>;
}

/// The external router
pub trait Navigator: Send + Sync {
    fn navigate(&self, to: &str);
}

/// How a dispatched order settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success)
    }
}

/// Submit the order and navigate to `home_route` once it has been accepted
///
/// Navigation happens only on success. There is no guard against
/// concurrent submissions of the same form.
pub async fn place_order(
    form: &FormState,
    context: &OrderContext,
    dispatcher: &dyn OrderDispatcher,
    navigator: &dyn Navigator,
    home_route: &str,
) -> SubmitOutcome {
    let request = submit(form, context);
    info!(fields = request.order_data.len(), price = request.price, "submitting order");

    match dispatcher.submit_order(request).await {
        Ok(()) => {
            info!(to = home_route, "order accepted");
            navigator.navigate(home_route);
            SubmitOutcome::Success
        }
        Err(e) => {
            warn!(error = %e, "order failed");
            SubmitOutcome::Failure(e.to_string())
        }
    }
}
