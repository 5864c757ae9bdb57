use thiserror::Error;

/// Input problems caught before anything is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title, Image URL, Link URL, and Description are required.")]
    MissingFields,

    #[error("Index must be a non-negative integer.")]
    InvalidIndex(String),

    #[error("Index out of range. Current length: {len}.")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No item with id {0}.")]
    UnknownId(uuid::Uuid),
}

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unauthorized. Set the JSONBin master key (folio secret set <key>).")]
    Unauthorized,

    #[error("{0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl FolioError {
    /// Classifies a non-success HTTP status from the remote store.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => FolioError::Unauthorized,
            other => FolioError::Transport(format!("HTTP {}", other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_are_unauthorized() {
        assert!(matches!(FolioError::from_status(401), FolioError::Unauthorized));
        assert!(matches!(FolioError::from_status(403), FolioError::Unauthorized));
    }

    #[test]
    fn other_statuses_carry_the_code() {
        let err = FolioError::from_status(500);
        assert!(matches!(err, FolioError::Transport(_)));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn out_of_range_message_includes_length() {
        let err = FolioError::from(ValidationError::IndexOutOfRange { index: 4, len: 2 });
        assert_eq!(err.to_string(), "Index out of range. Current length: 2.");
    }
}
