use thiserror::Error;

/// Rejections raised while a participant is entering numbers.
/// The collector reports them and asks again; they never end a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("You entered illegal number: {value}. Please try again.")]
    OutOfRange { value: i64, min: u32, max: u32 },

    #[error("You entered duplicate number: {value}. Please try again.")]
    DuplicateSelection { value: u32 },

    #[error("You entered illegal number: {input}. Please try again.")]
    NotANumber { input: String },

    #[error("Expected {expected} numbers, got {got}")]
    WrongCount { expected: u32, got: usize },
}

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input closed while {context}")]
    InputClosed { context: String },

    #[error("Invalid selection: {0}")]
    SelectionError(#[from] SelectionError),

    #[error("Cannot resolve a winner from an empty tally")]
    EmptyTally,

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl LotteryError {
    /// Short message for the console, without the error-kind prefix.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LotteryError::InputClosed { context } => {
                format!("Input ended unexpectedly while {}", context)
            }
            LotteryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid rules setting '{}': {}", field, reason)
            }
            LotteryError::TomlError(_) => "The rules file is not valid TOML".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LotteryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_messages() {
        let err = SelectionError::OutOfRange { value: 70, min: 1, max: 69 };
        assert_eq!(err.to_string(), "You entered illegal number: 70. Please try again.");

        let err = SelectionError::DuplicateSelection { value: 12 };
        assert_eq!(err.to_string(), "You entered duplicate number: 12. Please try again.");

        let err = SelectionError::NotANumber { input: "abc".to_string() };
        assert_eq!(err.to_string(), "You entered illegal number: abc. Please try again.");
    }

    #[test]
    fn test_selection_error_converts() {
        let err: LotteryError = SelectionError::DuplicateSelection { value: 3 }.into();
        assert!(matches!(err, LotteryError::SelectionError(_)));
    }
}
