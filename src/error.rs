use std::path::PathBuf;

use thiserror::Error;

/// Failures of the quiz core. The app shell wraps these in `anyhow` where it
/// only needs to report them.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A dictionary line without the ` - ` separator.
    #[error("{}:{line}: expected `word - definition`, got {content:?}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("no words to quiz")]
    EmptySet,

    #[error("cannot pick {requested} words from a set of {available}")]
    InsufficientPopulation { requested: usize, available: usize },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A results log line that does not match `<timestamp> word=<w>,correct=<y|n>`.
    #[error("line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    /// Speech or lookup failure. Never fatal.
    #[error("external service: {0}")]
    External(String),
}

impl QuizError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QuizError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_file_and_line() {
        let err = QuizError::Parse {
            path: PathBuf::from("words.txt"),
            line: 3,
            content: "ephemeral short-lived".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("words.txt:3:"));
        assert!(msg.contains("ephemeral short-lived"));
    }

    #[test]
    fn insufficient_population_message() {
        let err = QuizError::InsufficientPopulation {
            requested: 5,
            available: 2,
        };
        assert_eq!(err.to_string(), "cannot pick 5 words from a set of 2");
    }
}
