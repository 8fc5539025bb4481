mod common;

use common::filled_form;
use pizza_order::{
    init,
    order::{FieldEvent, FieldName, FormData, FormErrors, FormStatus, OrderForm},
};

#[test]
fn short_name_blocks_submit() {
    init();
    let form = filled_form("Al", "M", &[]);
    assert_eq!(
        form.errors().message(FieldName::FullName),
        "full name must be at least 3 characters"
    );
    assert_eq!(form.errors().message(FieldName::Size), "");
    assert!(form.is_submit_disabled());
}

#[test]
fn large_order_with_two_toppings() {
    init();
    let mut form = filled_form("Alice Smith", "L", &["Pepperoni", "Ham"]);
    assert!(form.errors().is_empty());
    assert_eq!(form.status(), FormStatus::Editable);

    let message = form.submit().expect("submit enabled");
    assert_eq!(
        message,
        "Thank you for your order, Alice Smith! Your large pizza with 2 toppings is on the way. "
    );
    assert_eq!(form.data().full_name, "");
    assert_eq!(form.data().size, None);
    assert!(form.data().toppings.is_empty());
}

#[test]
fn small_order_without_toppings() {
    let mut form = filled_form("Bob", "S", &[]);
    let message = form.submit().expect("submit enabled");
    assert!(message.ends_with("Your small pizza with no toppings is on the way. "));
}

#[test]
fn medium_order_with_one_topping() {
    let mut form = filled_form("Carmen", "M", &["Mushrooms"]);
    let message = form.submit().expect("submit enabled");
    assert!(message.contains("Your medium pizza with 1 topping is on the way."));
}

#[test]
fn submission_returns_to_mount_state() {
    let mount = OrderForm::default();
    let mut form = filled_form("Dana", "L", &["Pineapple", "Green Peppers", "Ham"]);
    form.submit().expect("submit enabled");

    assert_eq!(form.data(), mount.data());
    assert_eq!(form.data(), &FormData::default());
    assert_eq!(form.errors(), &FormErrors::default());
    assert_eq!(form.is_submit_disabled(), mount.is_submit_disabled());
    assert_eq!(form.status(), FormStatus::Editing);
}

#[test]
fn banner_survives_later_edits() {
    let mut form = filled_form("Erin", "S", &[]);
    let message = form.submit().expect("submit enabled");
    form.handle_change(FieldEvent::text("fullName", "E"))
        .expect("name change");
    assert_eq!(form.success_message(), Some(message.as_str()));
}

#[test]
fn toppings_never_touch_errors_or_gate() {
    let cases = [("Al", "S"), ("Alice", ""), ("Alice", "M")];
    for (name, size) in cases {
        let mut form = filled_form(name, size, &[]);
        let errors = *form.errors();
        let disabled = form.is_submit_disabled();

        for label in ["Pepperoni", "Ham", "Pepperoni"] {
            form.handle_change(FieldEvent::checkbox(label, true))
                .expect("check");
            assert_eq!(form.errors(), &errors);
            assert_eq!(form.is_submit_disabled(), disabled);
        }
        form.handle_change(FieldEvent::checkbox("Ham", false))
            .expect("uncheck");
        assert_eq!(form.errors(), &errors);
        assert_eq!(form.is_submit_disabled(), disabled);
    }
}

#[test]
fn untouched_size_is_not_flagged() {
    let mut form = OrderForm::default();
    form.handle_change(FieldEvent::text("fullName", "Alice"))
        .expect("name change");
    assert_eq!(form.errors().message(FieldName::Size), "");
    assert!(form.is_submit_disabled());
}

#[test]
fn clearing_size_flags_it() {
    let mut form = filled_form("Alice", "M", &[]);
    assert!(!form.is_submit_disabled());
    form.handle_change(FieldEvent::select("size", ""))
        .expect("size change");
    assert_eq!(
        form.errors().message(FieldName::Size),
        "size must be S or M or L"
    );
    assert!(form.is_submit_disabled());
}

#[test]
fn latest_change_wins() {
    let mut form = OrderForm::default();
    form.handle_change(FieldEvent::text("fullName", "Al"))
        .expect("change");
    form.handle_change(FieldEvent::text("fullName", "A very long name indeed!"))
        .expect("change");
    assert_eq!(
        form.errors().message(FieldName::FullName),
        "full name must be at most 20 characters"
    );
    form.handle_change(FieldEvent::text("fullName", "Alice"))
        .expect("change");
    assert_eq!(form.errors().message(FieldName::FullName), "");
}
