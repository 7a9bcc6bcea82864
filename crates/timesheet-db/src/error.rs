use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepoError {
    /// Any storage failure. The message is surfaced to clients unchanged.
    #[error("{0}")]
    Persistence(String),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    NotFound(&'static str),
}

impl From<rusqlite::Error> for RepoError {
    fn from(e: rusqlite::Error) -> Self {
        RepoError::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(e: serde_json::Error) -> Self {
        RepoError::Persistence(e.to_string())
    }
}

/// Parse a client-supplied identifier into the storage id format.
pub fn parse_id(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|e| RepoError::InvalidIdentifier(format!("{raw:?}: {e}")))
}

/// Updates address a document by id; a record without one cannot match anything.
pub(crate) fn require_id(id: Option<Uuid>) -> Result<Uuid, RepoError> {
    id.ok_or_else(|| RepoError::InvalidIdentifier("missing identifier".into()))
}
