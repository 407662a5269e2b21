// File: src/render.rs
// Purpose: Maud rendering of the order form with HTMX wiring

use crate::config::FormConfig;
use crate::context::OrderContext;
use crate::field::{FieldDescriptor, WidgetConfig};
use crate::state::FormState;
use maud::{html, Markup, DOCTYPE};

/// DOM id of the form; every change swaps this element
pub const FORM_ID: &str = "order-form";

/// Render the form, or a spinner while an order is in flight
///
/// One widget per field in form order. Each widget posts on change to
/// `{field_endpoint}/{id}` and swaps the whole form with the response.
/// The submit button is disabled until the form is valid.
pub fn render_order_form(form: &FormState, context: &OrderContext, config: &FormConfig) -> Markup {
    if context.loading {
        return html! {
            div .Loader id=(FORM_ID) role="status" { "Loading..." }
        };
    }

    let target = format!("#{}", FORM_ID);

    html! {
        form .OrderForm
            id=(FORM_ID)
            hx-post=(config.submit_endpoint)
            hx-target=(target)
            hx-swap="outerHTML" {
            @for (id, field) in form.fields() {
                (render_field(id, field, config))
            }
            button .Button.green type="submit" disabled[!form.is_valid()] {
                (config.submit_label)
            }
        }
    }
}

fn render_field(id: &str, field: &FieldDescriptor, config: &FormConfig) -> Markup {
    let endpoint = format!("{}/{}", config.field_endpoint, id);
    let target = format!("#{}", FORM_ID);
    let rules = &field.rules;

    html! {
        div .Input {
            @match &field.config {
                WidgetConfig::Input { input_type, placeholder } => {
                    input .InputElement.Invalid[field.shows_invalid()]
                        type=(input_type.as_str())
                        id=(id)
                        name=(id)
                        placeholder=(placeholder)
                        value=(field.value)
                        required[rules.required]
                        minlength=[rules.min_length]
                        maxlength=[rules.max_length]
                        pattern=[rules.pattern.as_ref().map(|p| p.as_str())]
                        hx-post=(endpoint)
                        hx-trigger="input changed"
                        hx-target=(target)
                        hx-swap="outerHTML";
                }
                WidgetConfig::Select { options } => {
                    select .InputElement.Invalid[field.shows_invalid()]
                        id=(id)
                        name=(id)
                        hx-post=(endpoint)
                        hx-trigger="change"
                        hx-target=(target)
                        hx-swap="outerHTML" {
                        @for opt in options {
                            option value=(opt.value) selected[opt.value == field.value] {
                                (opt.display)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Full HTML document around the form
pub fn render_page(form: &FormState, context: &OrderContext, config: &FormConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Order" }
                script src="https://unpkg.com/htmx.org@1.9.12" {}
            }
            body {
                h4 { "Enter your contact data" }
                (render_order_form(form, context, config))
            }
        }
    }
}
