use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid session id: {0:?}")]
    InvalidSessionId(String),
}
