/// Kind of input control that produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    SelectOne,
    Checkbox,
}

/// A raw change coming from one form control.
///
/// Text and select inputs identify their field by `name`; checkboxes carry the
/// topping label in `value` and their new state in `checked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub kind: InputKind,
    pub name: String,
    pub value: String,
    pub checked: bool,
}

impl FieldEvent {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Text,
            name: name.into(),
            value: value.into(),
            checked: false,
        }
    }

    pub fn select(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::SelectOne,
            name: name.into(),
            value: value.into(),
            checked: false,
        }
    }

    pub fn checkbox(value: impl Into<String>, checked: bool) -> Self {
        Self {
            kind: InputKind::Checkbox,
            name: "toppings".into(),
            value: value.into(),
            checked,
        }
    }
}
