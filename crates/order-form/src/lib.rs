// Order Form - validation and submission core of the pizza order form
// Value-type form state, pluggable order dispatch, Maud rendering

pub mod config;
pub mod context;
pub mod error;
pub mod field;
pub mod render;
pub mod state;
pub mod submit;

// Re-export the rule engine
pub use order_form_validation as validation;
pub use order_form_validation::{evaluate, Pattern, Rules};

// Re-export core types
pub use config::{CartConfig, FormConfig, OrderFormConfig, ServerConfig};
pub use context::OrderContext;
pub use error::{DispatchError, FormError};
pub use field::{FieldDescriptor, FieldKind, InputType, SelectOption, WidgetConfig};
pub use render::{render_order_form, render_page, FORM_ID};
pub use state::FormState;
pub use submit::{
    place_order, submit, Navigator, OrderData, OrderDispatcher, SubmitOutcome, SubmitRequest,
};

// Re-export Maud's markup type for callers embedding the form
pub use maud::Markup;
