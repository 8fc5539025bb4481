use crate::order::{FieldName, OrderForm, PizzaSize};

pub const FORM_TITLE: &str = "Order Your Pizza";
pub const SIZE_PLACEHOLDER: &str = "----Choose Size----";

/// A single line of the rendered form, tagged so the shell can style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormLine {
    Banner(String),
    Field(String),
    Error(String),
    Checkbox(String),
    Submit { enabled: bool },
}

impl FormLine {
    pub fn text(&self) -> String {
        match self {
            FormLine::Banner(text) | FormLine::Field(text) | FormLine::Checkbox(text) => {
                text.clone()
            }
            FormLine::Error(text) => format!("  {text}"),
            FormLine::Submit { enabled: true } => "[ Submit ] enabled".to_string(),
            FormLine::Submit { enabled: false } => "[ Submit ] disabled".to_string(),
        }
    }
}

pub fn size_display(size: Option<PizzaSize>) -> String {
    match size {
        Some(size) => format!("{} ({})", size.label(), size.code()),
        None => SIZE_PLACEHOLDER.to_string(),
    }
}

/// Display label declared in the form's schema, falling back to the form key.
pub fn field_label(form: &OrderForm, field: FieldName) -> &'static str {
    form.schema()
        .field(field)
        .map(|schema| schema.label)
        .unwrap_or_else(|| field.key())
}

/// Lays out the form top to bottom: banner, name, size, toppings, submit.
pub fn form_lines(form: &OrderForm) -> Vec<FormLine> {
    let data = form.data();
    let errors = form.errors();
    let mut lines = Vec::new();

    if let Some(message) = form.success_message() {
        lines.push(FormLine::Banner(message.to_string()));
    }

    lines.push(FormLine::Field(format!(
        "{}: {}",
        field_label(form, FieldName::FullName),
        data.full_name
    )));
    if let Some(error) = errors.get(FieldName::FullName) {
        lines.push(FormLine::Error(error.message().to_string()));
    }

    lines.push(FormLine::Field(format!(
        "{}: {}",
        field_label(form, FieldName::Size),
        size_display(data.size)
    )));
    if let Some(error) = errors.get(FieldName::Size) {
        lines.push(FormLine::Error(error.message().to_string()));
    }

    lines.push(FormLine::Field("Toppings:".to_string()));
    lines.extend(topping_lines(form).into_iter().map(FormLine::Checkbox));

    lines.push(FormLine::Submit {
        enabled: !form.is_submit_disabled(),
    });
    lines
}

/// One checkbox line per catalog entry, in catalog order.
pub fn topping_lines(form: &OrderForm) -> Vec<String> {
    form.catalog()
        .options()
        .iter()
        .map(|option| {
            let mark = if form.data().toppings.contains(&option.label) {
                "x"
            } else {
                " "
            };
            format!("  [{mark}] {}. {}", option.id, option.label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(form: &OrderForm) -> Vec<String> {
        form_lines(form).iter().map(FormLine::text).collect()
    }

    #[test]
    fn fresh_form_layout() {
        let form = OrderForm::default();
        assert_eq!(
            texts(&form),
            vec![
                "Full Name: ",
                "Size: ----Choose Size----",
                "Toppings:",
                "  [ ] 1. Pepperoni",
                "  [ ] 2. Green Peppers",
                "  [ ] 3. Pineapple",
                "  [ ] 4. Mushrooms",
                "  [ ] 5. Ham",
                "[ Submit ] disabled",
            ]
        );
    }

    #[test]
    fn field_lines_use_schema_labels() {
        let form = OrderForm::default();
        assert_eq!(field_label(&form, FieldName::FullName), "Full Name");
        assert_eq!(field_label(&form, FieldName::Size), "Size");
    }

    #[test]
    fn errors_render_under_their_field() {
        let mut form = OrderForm::default();
        form.set_full_name("Al");
        form.select_size("L");
        form.toggle_topping("Ham", true).unwrap();
        let lines = texts(&form);
        assert_eq!(lines[0], "Full Name: Al");
        assert_eq!(lines[1], "  full name must be at least 3 characters");
        assert_eq!(lines[2], "Size: Large (L)");
        assert!(lines.contains(&"  [x] 5. Ham".to_string()));
    }

    #[test]
    fn banner_leads_after_submit() {
        let mut form = OrderForm::default();
        form.set_full_name("Bob");
        form.select_size("S");
        form.submit().unwrap();
        let lines = form_lines(&form);
        assert!(matches!(&lines[0], FormLine::Banner(text) if text.contains("small pizza")));
        assert_eq!(lines.last(), Some(&FormLine::Submit { enabled: false }));
    }
}
