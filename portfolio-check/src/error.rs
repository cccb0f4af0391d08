use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// A checked condition did not hold
    #[error("{message}")]
    Assertion { message: String },

    /// The page could not be read at all
    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    pub fn assertion(message: impl Into<String>) -> Self {
        CheckError::Assertion {
            message: message.into(),
        }
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, CheckError::Assertion { .. })
    }
}
