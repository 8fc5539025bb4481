use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strsim::levenshtein;

use crate::errors::OrderError;

/// The form always shows exactly this many topping checkboxes.
pub const CATALOG_SIZE: usize = 5;

/// A selectable add-on shown as one checkbox on the order form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToppingOption {
    pub id: String,
    pub label: String,
}

impl ToppingOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

static DEFAULT_TOPPINGS: Lazy<Vec<ToppingOption>> = Lazy::new(|| {
    vec![
        ToppingOption::new("1", "Pepperoni"),
        ToppingOption::new("2", "Green Peppers"),
        ToppingOption::new("3", "Pineapple"),
        ToppingOption::new("4", "Mushrooms"),
        ToppingOption::new("5", "Ham"),
    ]
});

/// Fixed list of toppings a form accepts. Selections are stored by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToppingCatalog {
    options: Vec<ToppingOption>,
}

impl Default for ToppingCatalog {
    fn default() -> Self {
        Self {
            options: DEFAULT_TOPPINGS.clone(),
        }
    }
}

impl ToppingCatalog {
    /// Builds a catalog from configuration data. It must hold exactly
    /// [`CATALOG_SIZE`] entries with distinct ids and labels.
    pub fn new(options: Vec<ToppingOption>) -> Result<Self, OrderError> {
        if options.len() != CATALOG_SIZE {
            return Err(OrderError::InvalidCatalog(format!(
                "catalog must contain exactly {CATALOG_SIZE} toppings, found {}",
                options.len()
            )));
        }

        let mut ids = HashSet::new();
        let mut labels = HashSet::new();
        for option in &options {
            if option.label.trim().is_empty() {
                return Err(OrderError::InvalidCatalog(format!(
                    "topping `{}` has an empty label",
                    option.id
                )));
            }
            if !ids.insert(option.id.as_str()) {
                return Err(OrderError::InvalidCatalog(format!(
                    "duplicate topping id `{}`",
                    option.id
                )));
            }
            if !labels.insert(option.label.as_str()) {
                return Err(OrderError::InvalidCatalog(format!(
                    "duplicate topping label `{}`",
                    option.label
                )));
            }
        }

        Ok(Self { options })
    }

    pub fn options(&self) -> &[ToppingOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.options.iter().any(|option| option.label == label)
    }

    /// Resolves user input to a catalog label. Exact matches win, then a
    /// case-insensitive label match, then the option id.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let needle = input.trim();
        self.options
            .iter()
            .find(|option| option.label == needle)
            .or_else(|| {
                self.options
                    .iter()
                    .find(|option| option.label.eq_ignore_ascii_case(needle))
            })
            .or_else(|| self.options.iter().find(|option| option.id == needle))
            .map(|option| option.label.as_str())
    }

    /// Closest label by edit distance, if any is near enough to be a typo.
    pub fn suggest(&self, input: &str) -> Option<&str> {
        let needle = input.trim().to_ascii_lowercase();
        self.options
            .iter()
            .map(|option| {
                (
                    levenshtein(&needle, &option.label.to_ascii_lowercase()),
                    option.label.as_str(),
                )
            })
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, label)| label)
    }
}
