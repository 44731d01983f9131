/// Failures of a single request to the document store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("document store is not configured (missing {0})")]
    NotConfigured(&'static str),
    #[error("{0}")]
    Transport(String),
    /// The store answered with a non-success status and an error payload.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("JSON object requested, multiple (or no) rows returned ({0} rows)")]
    Ambiguous(usize),
    #[error("could not decode store response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Why a legal page ended up in its error state.
///
/// The display text is what the error panel shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Error: {0}")]
    Query(String),
    #[error("No active document found in database.")]
    NotFound,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<StoreError> for LoadError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Decode(_) => Self::Unexpected(e.to_string()),
            other => Self::Query(other.to_string()),
        }
    }
}
