//! Order form state and the handlers that keep it consistent.
//!
//! Every mutation of [`FormData`] flows through [`OrderForm`], which re-runs
//! the whole-form check afterwards so `submit_disabled` never goes stale.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::OrderError;
use crate::order::catalog::ToppingCatalog;
use crate::order::confirmation;
use crate::order::event::{FieldEvent, InputKind};
use crate::order::schema::{FieldName, OrderSchema, ValidationError};

/// Pizza sizes offered by the size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    pub fn code(self) -> &'static str {
        match self {
            PizzaSize::Small => "S",
            PizzaSize::Medium => "M",
            PizzaSize::Large => "L",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.code() == code)
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current values of the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    pub size: Option<PizzaSize>,
    pub toppings: BTreeSet<String>,
}

impl FormData {
    /// Value of a validated field as the schema sees it. An unset size reads
    /// as the empty string.
    pub fn field_value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => self.full_name.as_str(),
            FieldName::Size => self.size.map(PizzaSize::code).unwrap_or(""),
        }
    }
}

/// Inline error per validated field. `None` renders as no message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    full_name: Option<ValidationError>,
    size: Option<ValidationError>,
}

impl FormErrors {
    pub fn get(&self, field: FieldName) -> Option<ValidationError> {
        match field {
            FieldName::FullName => self.full_name,
            FieldName::Size => self.size,
        }
    }

    /// Message for the field, or `""` when it has no error.
    pub fn message(&self, field: FieldName) -> &'static str {
        self.get(field).map(ValidationError::message).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.size.is_none()
    }

    fn set(&mut self, field: FieldName, error: Option<ValidationError>) {
        match field {
            FieldName::FullName => self.full_name = error,
            FieldName::Size => self.size = error,
        }
    }
}

/// Whether the submit control is currently usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Submit disabled; name or size does not satisfy its rule.
    Editing,
    /// Submit enabled.
    Editable,
}

/// One mounted order form.
#[derive(Debug, Clone)]
pub struct OrderForm {
    schema: OrderSchema,
    catalog: ToppingCatalog,
    data: FormData,
    errors: FormErrors,
    submit_disabled: bool,
    success_message: Option<String>,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new(ToppingCatalog::default())
    }
}

impl OrderForm {
    pub fn new(catalog: ToppingCatalog) -> Self {
        let mut form = Self {
            schema: OrderSchema::default(),
            catalog,
            data: FormData::default(),
            errors: FormErrors::default(),
            submit_disabled: true,
            success_message: None,
        };
        form.refresh_submit_gate();
        form
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn catalog(&self) -> &ToppingCatalog {
        &self.catalog
    }

    pub fn schema(&self) -> &OrderSchema {
        &self.schema
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    pub fn status(&self) -> FormStatus {
        if self.submit_disabled {
            FormStatus::Editing
        } else {
            FormStatus::Editable
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Applies a raw control change. Nothing is mutated when the event is
    /// rejected.
    pub fn handle_change(&mut self, event: FieldEvent) -> Result<(), OrderError> {
        match event.kind {
            InputKind::Checkbox => self.toggle_topping(&event.value, event.checked),
            InputKind::Text | InputKind::SelectOne => {
                let field = FieldName::from_key(&event.name)
                    .ok_or_else(|| OrderError::UnknownField(event.name.clone()))?;
                self.set_field(field, event.value);
                Ok(())
            }
        }
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.set_field(FieldName::FullName, value.into());
    }

    /// Sets the size from a selector value. Anything other than a size code
    /// leaves the size unset and records the size error.
    pub fn select_size(&mut self, value: impl Into<String>) {
        self.set_field(FieldName::Size, value.into());
    }

    /// Adds or removes a topping. Toppings have no rule, so errors are left
    /// untouched. Re-adding or re-removing is a no-op.
    pub fn toggle_topping(&mut self, label: &str, checked: bool) -> Result<(), OrderError> {
        if !self.catalog.contains(label) {
            return Err(OrderError::UnknownTopping {
                label: label.to_string(),
                suggestion: self.catalog.suggest(label).map(str::to_string),
            });
        }

        let changed = if checked {
            self.data.toppings.insert(label.to_string())
        } else {
            self.data.toppings.remove(label)
        };
        if !changed {
            debug!(topping = label, checked, "topping already in requested state");
        }
        self.refresh_submit_gate();
        Ok(())
    }

    fn set_field(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::FullName => self.data.full_name = value.clone(),
            FieldName::Size => self.data.size = PizzaSize::from_code(&value),
        }
        self.validate(field, &value);
        self.refresh_submit_gate();
    }

    /// Runs one field's rule and stores the outcome for that field only.
    fn validate(&mut self, field: FieldName, value: &str) {
        let outcome = self.schema.validate_field(field, value).err();
        match outcome {
            Some(error) => debug!(field = %field, %error, "field rejected"),
            None => debug!(field = %field, "field accepted"),
        }
        self.errors.set(field, outcome);
    }

    fn refresh_submit_gate(&mut self) {
        debug!(form_data = ?self.data, "form data changed");
        self.submit_disabled = !self.schema.is_valid(&self.data);
    }

    /// Confirms the order and resets the fields to their mount-time values.
    ///
    /// Fails with [`OrderError::SubmitDisabled`] while the submit gate is
    /// closed. Inline errors are left as they are.
    pub fn submit(&mut self) -> Result<String, OrderError> {
        let size = match (self.submit_disabled, self.data.size) {
            (false, Some(size)) => size,
            _ => {
                warn!(form_data = ?self.data, "submit requested while disabled");
                return Err(OrderError::SubmitDisabled);
            }
        };

        let message =
            confirmation::success_message(&self.data.full_name, size, self.data.toppings.len());
        info!(
            size = size.code(),
            toppings = self.data.toppings.len(),
            "order submitted"
        );

        self.success_message = Some(message.clone());
        self.data = FormData::default();
        self.refresh_submit_gate();
        Ok(message)
    }
}
