#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use pizza_order::config::ConfigManager;
use pizza_order::order::{FieldEvent, OrderForm};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config manager backed by a unique directory for each test.
pub fn setup_config_env() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

/// Fills a default form through change events, the way a user would.
pub fn filled_form(full_name: &str, size: &str, toppings: &[&str]) -> OrderForm {
    let mut form = OrderForm::default();
    form.handle_change(FieldEvent::text("fullName", full_name))
        .expect("full name change");
    form.handle_change(FieldEvent::select("size", size))
        .expect("size change");
    for topping in toppings {
        form.handle_change(FieldEvent::checkbox(*topping, true))
            .expect("topping change");
    }
    form
}
