use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown ratio preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown cooking method: {0}")]
    UnknownCookingMethod(String),

    #[error("Invalid retention factors for '{method}': {reason}")]
    InvalidRetention { method: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MacroError>;
