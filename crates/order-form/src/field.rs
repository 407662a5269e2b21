// File: src/field.rs
// Purpose: Field descriptors - widget config, rules and status for one input

use order_form_validation::Rules;
use serde::{Deserialize, Serialize};

/// Widget family used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Input,
    Select,
}

/// HTML input subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Number,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

/// One entry of a select widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub display: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: display.into(),
        }
    }
}

/// Rendering configuration, passed through untouched by validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WidgetConfig {
    Input {
        input_type: InputType,
        placeholder: String,
    },
    Select {
        options: Vec<SelectOption>,
    },
}

/// Data, rules and status for one form input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub config: WidgetConfig,
    pub rules: Rules,
    pub value: String,
    pub valid: bool,
    pub touched: bool,
}

impl FieldDescriptor {
    /// An empty text-like input; validity is computed from `rules` against ""
    pub fn input(input_type: InputType, placeholder: impl Into<String>, rules: Rules) -> Self {
        let valid = rules.evaluate("");
        Self {
            config: WidgetConfig::Input {
                input_type,
                placeholder: placeholder.into(),
            },
            rules,
            value: String::new(),
            valid,
            touched: false,
        }
    }

    /// A select preset to `value`
    pub fn select(options: Vec<SelectOption>, value: impl Into<String>, rules: Rules) -> Self {
        let value = value.into();
        let valid = rules.evaluate(&value);
        Self {
            config: WidgetConfig::Select { options },
            rules,
            value,
            valid,
            touched: false,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self.config {
            WidgetConfig::Input { .. } => FieldKind::Input,
            WidgetConfig::Select { .. } => FieldKind::Select,
        }
    }

    /// Whether `value` is acceptable for this widget at all
    ///
    /// Inputs take any string; selects only their listed options.
    pub fn accepts(&self, value: &str) -> bool {
        match &self.config {
            WidgetConfig::Input { .. } => true,
            WidgetConfig::Select { options } => options.iter().any(|o| o.value == value),
        }
    }

    /// Copy with a new value, recomputed validity and `touched` set
    pub fn changed(&self, value: impl Into<String>) -> Self {
        let value = value.into();
        let valid = self.rules.evaluate(&value);
        Self {
            config: self.config.clone(),
            rules: self.rules.clone(),
            value,
            valid,
            touched: true,
        }
    }

    /// Should the widget be styled as invalid
    pub fn shows_invalid(&self) -> bool {
        self.touched && !self.valid
    }
}
