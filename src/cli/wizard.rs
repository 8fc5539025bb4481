//! Guided entry of the whole form.
//!
//! Each prompt maps onto one form control: a text input for the name, a
//! single-choice select for the size, and a multi-select standing in for the
//! topping checkboxes. Answers are fed through the same change handlers the
//! line commands use, so errors and the submit gate update identically.

use dialoguer::{Input, MultiSelect, Select};

use crate::cli::core::{CommandError, ShellContext};
use crate::cli::output;
use crate::cli::render::SIZE_PLACEHOLDER;
use crate::order::{FieldEvent, FieldName, PizzaSize};

pub fn run(context: &mut ShellContext) -> Result<(), CommandError> {
    prompt_full_name(context)?;
    prompt_size(context)?;
    prompt_toppings(context)?;
    Ok(())
}

fn prompt_full_name(context: &mut ShellContext) -> Result<(), CommandError> {
    loop {
        let current = context.form.data().full_name.clone();
        let value: String = Input::with_theme(&context.theme)
            .with_prompt("Full Name")
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        context
            .form
            .handle_change(FieldEvent::text(FieldName::FullName.key(), value))?;

        let message = context.form.errors().message(FieldName::FullName);
        if message.is_empty() {
            return Ok(());
        }
        output::warning(message);
    }
}

fn prompt_size(context: &mut ShellContext) -> Result<(), CommandError> {
    let mut items = vec![SIZE_PLACEHOLDER.to_string()];
    items.extend(PizzaSize::ALL.iter().map(|size| size.label().to_string()));

    let default = context
        .form
        .data()
        .size
        .and_then(|current| PizzaSize::ALL.iter().position(|size| *size == current))
        .map(|index| index + 1)
        .unwrap_or(0);

    loop {
        let picked = Select::with_theme(&context.theme)
            .with_prompt("Size")
            .items(&items)
            .default(default)
            .interact()?;
        let code = picked
            .checked_sub(1)
            .and_then(|index| PizzaSize::ALL.get(index).copied())
            .map(|size| size.code())
            .unwrap_or("");
        context
            .form
            .handle_change(FieldEvent::select(FieldName::Size.key(), code))?;

        let message = context.form.errors().message(FieldName::Size);
        if message.is_empty() {
            return Ok(());
        }
        output::warning(message);
    }
}

fn prompt_toppings(context: &mut ShellContext) -> Result<(), CommandError> {
    let options = context.form.catalog().options().to_vec();
    let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
    let checked: Vec<bool> = options
        .iter()
        .map(|option| context.form.data().toppings.contains(&option.label))
        .collect();

    let picked = MultiSelect::with_theme(&context.theme)
        .with_prompt("Toppings (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    for (index, option) in options.iter().enumerate() {
        let selected = picked.contains(&index);
        if selected != checked[index] {
            context
                .form
                .handle_change(FieldEvent::checkbox(option.label.clone(), selected))?;
        }
    }
    Ok(())
}
