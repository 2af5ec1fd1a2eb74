// Setup errors - every failure the engine can surface
// Principle: distinct kinds, distinct operator guidance

use thiserror::Error;

/// Errors produced by the configuration engine.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Unknown network identifier, or a persisted record/artifact that
    /// does not exist yet.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed operator-supplied value. Handled locally by the wizard:
    /// the step re-prompts without mutating the record.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Rendering was attempted while a required template slot had no
    /// resolved value.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Filesystem failure on save/load. Never retried by the engine.
    #[error("storage error: {0}")]
    Storage(String),
}

impl SetupError {
    /// Human-readable notice telling the operator what to retry.
    pub fn operator_notice(&self) -> String {
        match self {
            SetupError::NotFound(what) => {
                format!("{} was not found. Pick a network from the list and try again.", what)
            }
            SetupError::InvalidInput(why) => {
                format!("That value was not accepted: {}. Please re-enter it.", why)
            }
            SetupError::MissingField(slot) => format!(
                "The configuration is incomplete ({} is unresolved). \
                 Re-run the network selection step before rendering.",
                slot
            ),
            SetupError::Storage(why) => format!(
                "Saving the configuration failed ({}). \
                 Check the server logs and disk space, then retry.",
                why
            ),
        }
    }
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::Storage(err.to_string())
    }
}
