// File: src/state.rs
// Purpose: Form state - ordered fields plus the aggregated form-valid flag

use crate::error::{FormError, Result};
use crate::field::{FieldDescriptor, InputType, SelectOption};
use order_form_validation::{Pattern, Rules};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

pub const NAME: &str = "name";
pub const STREET: &str = "street";
pub const ZIPCODE: &str = "zipcode";
pub const EMAIL: &str = "email";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const DELIVERY: &str = "delivery";

/// Ordered field mapping and its aggregated validity
///
/// Treated as a value: [`FormState::on_field_change`] returns a new state and
/// leaves `self` as it was. `form_valid` is recomputed on every construction,
/// so it always equals the conjunction of the fields' `valid` flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    fields: Vec<(String, FieldDescriptor)>,
    form_valid: bool,
}

impl FormState {
    /// Build a form from fields in render order
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, FieldDescriptor)>,
        S: Into<String>,
    {
        let fields: Vec<(String, FieldDescriptor)> =
            fields.into_iter().map(|(id, f)| (id.into(), f)).collect();

        let mut seen = HashSet::new();
        if let Some((id, _)) = fields.iter().find(|(id, _)| !seen.insert(id.as_str())) {
            return Err(FormError::DuplicateField(id.clone()));
        }

        Ok(Self::from_fields(fields))
    }

    /// The pizza order form: contact details plus delivery mode
    pub fn order_form() -> Self {
        let fields = vec![
            (
                NAME.to_string(),
                FieldDescriptor::input(
                    InputType::Text,
                    "Your Name",
                    Rules::none().required().min_length(2),
                ),
            ),
            (
                STREET.to_string(),
                FieldDescriptor::input(
                    InputType::Text,
                    "Your Street",
                    Rules::none().required().min_length(4),
                ),
            ),
            (
                ZIPCODE.to_string(),
                FieldDescriptor::input(
                    InputType::Number,
                    "Your Zipcode",
                    Rules::none().required().min_length(5).max_length(5),
                ),
            ),
            (
                EMAIL.to_string(),
                FieldDescriptor::input(
                    InputType::Email,
                    "Your Email",
                    Rules::none().required().min_length(5).pattern(Pattern::email()),
                ),
            ),
            (
                PHONE_NUMBER.to_string(),
                FieldDescriptor::input(
                    InputType::Tel,
                    "Your Phone Number",
                    Rules::none().required().min_length(7),
                ),
            ),
            (
                DELIVERY.to_string(),
                FieldDescriptor::select(
                    vec![
                        SelectOption::new("fast", "Fast"),
                        SelectOption::new("cheap", "Cheap"),
                    ],
                    "fast",
                    Rules::none(),
                ),
            ),
        ];

        Self::from_fields(fields)
    }

    fn from_fields(fields: Vec<(String, FieldDescriptor)>) -> Self {
        let form_valid = fields.iter().all(|(_, f)| f.valid);
        Self { fields, form_valid }
    }

    /// Apply a value change to one field
    ///
    /// Returns the updated form; `self` is not modified. Unknown ids and,
    /// for selects, values outside the option list are rejected.
    pub fn on_field_change(&self, id: &str, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let index = self
            .position(id)
            .ok_or_else(|| FormError::UnknownField(id.to_string()))?;

        let current = &self.fields[index].1;
        if !current.accepts(&value) {
            return Err(FormError::UnknownOption {
                field: id.to_string(),
                value,
            });
        }

        let updated = current.changed(value);
        if let Err(reason) = updated.rules.check(&updated.value) {
            debug!(field = id, %reason, "field invalid");
        }

        let fields = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, (fid, f))| {
                if i == index {
                    (fid.clone(), updated.clone())
                } else {
                    (fid.clone(), f.clone())
                }
            })
            .collect();

        let next = Self::from_fields(fields);
        debug!(field = id, form_valid = next.form_valid, "field changed");
        Ok(next)
    }

    /// True iff every field is valid
    pub fn is_valid(&self) -> bool {
        self.form_valid
    }

    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.position(id).map(|i| &self.fields[i].1)
    }

    /// Fields in render order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(id, f)| (id.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|(fid, _)| fid == id)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::order_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(rules: Rules) -> FieldDescriptor {
        FieldDescriptor::input(InputType::Text, "", rules)
    }

    #[test]
    fn test_order_form_layout() {
        let form = FormState::order_form();
        let ids: Vec<&str> = form.fields().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![NAME, STREET, ZIPCODE, EMAIL, PHONE_NUMBER, DELIVERY]);
        assert!(!form.is_valid());
        assert!(form.field(DELIVERY).unwrap().valid);
        assert!(!form.field(NAME).unwrap().valid);
    }

    #[test]
    fn test_one_invalid_field_invalidates_form() {
        let form = FormState::new(vec![
            ("a", text(Rules::none())),
            ("b", text(Rules::none().required())),
            ("c", text(Rules::none())),
        ])
        .unwrap();
        assert!(!form.is_valid());

        let form = form.on_field_change("b", "filled").unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn test_all_valid_fields() {
        let form = FormState::new(vec![("a", text(Rules::none())), ("b", text(Rules::none()))])
            .unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn test_empty_form_is_valid() {
        let form = FormState::new(Vec::<(String, FieldDescriptor)>::new()).unwrap();
        assert!(form.is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let form = FormState::order_form();
        let err = form.on_field_change("nickname", "Al").unwrap_err();
        assert_eq!(err, FormError::UnknownField("nickname".to_string()));
        assert_eq!(form.len(), 6);
        assert!(form.field("nickname").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = FormState::new(vec![("a", text(Rules::none())), ("a", text(Rules::none()))])
            .unwrap_err();
        assert_eq!(err, FormError::DuplicateField("a".to_string()));
    }

    #[test]
    fn test_change_leaves_previous_state_untouched() {
        let before = FormState::order_form();
        let after = before.on_field_change(NAME, "Al").unwrap();

        assert_eq!(before.field(NAME).unwrap().value, "");
        assert!(!before.field(NAME).unwrap().touched);

        let name = after.field(NAME).unwrap();
        assert_eq!(name.value, "Al");
        assert!(name.valid);
        assert!(name.touched);
    }

    #[test]
    fn test_change_to_invalid_value_still_marks_touched() {
        let form = FormState::order_form().on_field_change(ZIPCODE, "123").unwrap();
        let zip = form.field(ZIPCODE).unwrap();
        assert!(zip.touched);
        assert!(!zip.valid);
        assert_eq!(zip.value, "123");
    }

    #[test]
    fn test_select_change() {
        let form = FormState::order_form().on_field_change(DELIVERY, "cheap").unwrap();
        let delivery = form.field(DELIVERY).unwrap();
        assert_eq!(delivery.value, "cheap");
        assert!(delivery.valid);
        assert!(delivery.touched);

        let err = form.on_field_change(DELIVERY, "teleport").unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownOption {
                field: DELIVERY.to_string(),
                value: "teleport".to_string(),
            }
        );
    }
}
