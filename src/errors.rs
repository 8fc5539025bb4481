use thiserror::Error;

/// Error type for failures outside of field validation.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown field `{0}`")]
    UnknownField(String),
    #[error("Unknown topping `{label}`{}", suggestion_suffix(.suggestion))]
    UnknownTopping {
        label: String,
        suggestion: Option<String>,
    },
    #[error("Invalid topping catalog: {0}")]
    InvalidCatalog(String),
    #[error("Submit is disabled until full name and size are valid")]
    SubmitDisabled,
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|label| format!(" (did you mean `{label}`?)"))
        .unwrap_or_default()
}
