mod common;

use common::filled_form;
use pizza_order::order::{FieldName, OrderSchema, ValidationError};

fn names_of_len(len: usize) -> Vec<String> {
    vec![
        "a".repeat(len),
        format!("  {}  ", "b".repeat(len)),
        "ü".repeat(len),
    ]
}

#[test]
fn valid_names_and_sizes_enable_submit() {
    for len in 3..=20 {
        for name in names_of_len(len) {
            for size in ["S", "M", "L"] {
                let form = filled_form(&name, size, &[]);
                assert!(form.errors().is_empty(), "{name:?}/{size}");
                assert!(!form.is_submit_disabled(), "{name:?}/{size}");
            }
        }
    }
}

#[test]
fn out_of_range_names_are_flagged() {
    for len in [0, 1, 2, 21, 22, 40] {
        let expected = if len < 3 {
            ValidationError::FullNameTooShort
        } else {
            ValidationError::FullNameTooLong
        };
        for name in names_of_len(len) {
            let form = filled_form(&name, "M", &[]);
            assert_eq!(form.errors().get(FieldName::FullName), Some(expected));
            assert!(form.is_submit_disabled());
        }
    }
}

#[test]
fn whitespace_only_name_is_too_short() {
    let form = filled_form("          ", "L", &[]);
    assert_eq!(
        form.errors().message(FieldName::FullName),
        "full name must be at least 3 characters"
    );
}

#[test]
fn bad_sizes_are_flagged() {
    for size in ["", "s", "m", "XL", "Small", "S "] {
        let form = filled_form("Alice", size, &[]);
        assert_eq!(
            form.errors().message(FieldName::Size),
            "size must be S or M or L",
            "{size:?}"
        );
        assert!(form.is_submit_disabled());
    }
}

#[test]
fn field_checks_are_independent() {
    let schema = OrderSchema::default();
    assert_eq!(schema.fields().len(), 2);
    assert_eq!(
        schema.validate_field(FieldName::Size, "Al"),
        Err(ValidationError::SizeIncorrect)
    );
    assert_eq!(schema.validate_field(FieldName::FullName, "M"), Err(ValidationError::FullNameTooShort));
}

#[test]
fn astral_characters_count_as_two_units() {
    let pizza = "\u{1F355}";

    let two = pizza.repeat(2);
    let form = filled_form(&two, "S", &[]);
    assert!(form.errors().is_empty(), "two emoji are four units");
    assert!(!form.is_submit_disabled());

    let eleven = pizza.repeat(11);
    let form = filled_form(&eleven, "S", &[]);
    assert_eq!(
        form.errors().get(FieldName::FullName),
        Some(ValidationError::FullNameTooLong)
    );
    assert!(form.is_submit_disabled());

    let ten = pizza.repeat(10);
    assert!(filled_form(&ten, "S", &[]).errors().is_empty());
}

#[test]
fn byte_order_mark_is_trimmed_but_next_line_is_kept() {
    let bom_padded = filled_form("\u{FEFF}Al\u{FEFF}", "M", &[]);
    assert_eq!(
        bom_padded.errors().get(FieldName::FullName),
        Some(ValidationError::FullNameTooShort)
    );
    assert!(bom_padded.is_submit_disabled());

    let nel_padded = filled_form("\u{0085}Al", "M", &[]);
    assert!(nel_padded.errors().is_empty());
    assert!(!nel_padded.is_submit_disabled());
}

#[test]
fn unicode_space_separators_are_trimmed() {
    let form = filled_form("\u{3000}\u{00A0}Al\u{2028}\u{205F}", "L", &[]);
    assert_eq!(
        form.errors().get(FieldName::FullName),
        Some(ValidationError::FullNameTooShort)
    );
}
