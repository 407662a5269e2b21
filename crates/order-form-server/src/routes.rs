// File: src/routes.rs
// Purpose: HTTP wiring of the order form (page, per-field changes, submission)

use crate::orders::{OrderStore, StoredOrder};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use order_form::{
    place_order, render_order_form, render_page, FormConfig, FormError, FormState, Navigator,
    OrderContext, SubmitOutcome,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Form and order context of the single customer this server serves
pub struct Session {
    pub form: FormState,
    pub context: OrderContext,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    session: Arc<RwLock<Session>>,
    orders: Arc<OrderStore>,
    config: Arc<FormConfig>,
}

impl AppState {
    pub fn new(context: OrderContext, orders: OrderStore, config: FormConfig) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session {
                form: FormState::order_form(),
                context,
            })),
            orders: Arc::new(orders),
            config: Arc::new(config),
        }
    }
}

/// Navigation for HTMX clients: remembers the target for an `HX-Redirect` header
#[derive(Default)]
struct HxRedirect {
    location: Mutex<Option<String>>,
}

impl HxRedirect {
    fn take(&self) -> Option<String> {
        self.location.lock().ok().and_then(|mut l| l.take())
    }
}

impl Navigator for HxRedirect {
    fn navigate(&self, to: &str) {
        if let Ok(mut location) = self.location.lock() {
            *location = Some(to.to_string());
        }
    }
}

pub fn router(state: AppState) -> Router {
    let field_route = format!("{}/:id", state.config.field_endpoint);
    let submit_route = state.config.submit_endpoint.clone();

    Router::new()
        .route("/", get(index_handler))
        .route(&field_route, post(field_handler))
        .route(&submit_route, post(order_handler))
        .route("/orders", get(orders_handler))
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read().await;
    Html(render_page(&session.form, &session.context, &state.config).into_string())
}

/// Apply one field change and return the re-rendered form
///
/// HTMX posts the whole enclosing form, so the value is looked up under the
/// field id first and under `value` for plain clients. A body carrying
/// neither is rejected and the session is left as it was.
async fn field_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(params): Form<HashMap<String, String>>,
) -> Response {
    let value = params.get(&id).or_else(|| params.get("value")).cloned();

    let mut session = state.session.write().await;
    if session.form.field(&id).is_none() {
        let e = FormError::UnknownField(id);
        return (StatusCode::NOT_FOUND, e.to_string()).into_response();
    }

    let Some(value) = value else {
        warn!(field = %id, "field change without a value");
        return (StatusCode::UNPROCESSABLE_ENTITY, render_form(&session, &state.config))
            .into_response();
    };

    match session.form.on_field_change(&id, value) {
        Ok(next) => {
            session.form = next;
            render_form(&session, &state.config).into_response()
        }
        Err(e @ FormError::UnknownField(_)) => {
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
        Err(e) => {
            warn!(error = %e, "field change rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, render_form(&session, &state.config))
                .into_response()
        }
    }
}

async fn order_handler(State(state): State<AppState>) -> Response {
    let (form, context) = {
        let mut session = state.session.write().await;
        if !session.form.is_valid() || session.context.loading {
            return (StatusCode::UNPROCESSABLE_ENTITY, render_form(&session, &state.config))
                .into_response();
        }
        session.context.loading = true;
        (session.form.clone(), session.context.clone())
    };

    let navigator = HxRedirect::default();
    let outcome = place_order(
        &form,
        &context,
        state.orders.as_ref(),
        &navigator,
        &state.config.home_route,
    )
    .await;

    let mut session = state.session.write().await;
    session.context.loading = false;

    match outcome {
        SubmitOutcome::Success => {
            session.form = FormState::order_form();
            info!("order placed, form reset");

            let mut headers = HeaderMap::new();
            if let Some(location) = navigator.take() {
                if let Ok(value) = HeaderValue::from_str(&location) {
                    headers.insert("HX-Redirect", value);
                }
            }
            (StatusCode::OK, headers).into_response()
        }
        SubmitOutcome::Failure(reason) => {
            warn!(%reason, "order not placed");
            (StatusCode::BAD_GATEWAY, render_form(&session, &state.config)).into_response()
        }
    }
}

async fn orders_handler(State(state): State<AppState>) -> Json<Vec<StoredOrder>> {
    Json(state.orders.list())
}

fn render_form(session: &Session, config: &FormConfig) -> Html<String> {
    Html(render_order_form(&session.form, &session.context, config).into_string())
}
