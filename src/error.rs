use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown scheme '{name}' (available: {available})")]
    UnknownScheme { name: String, available: String },

    #[error("--scheme cannot be combined with literal colors")]
    SchemeWithColors,

    #[error("Invalid color argument '{value}': {reason}")]
    InvalidColor { value: String, reason: String },
}
