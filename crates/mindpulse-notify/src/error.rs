use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("SMS request failed: {0}")]
    Transport(String),

    #[error("SMS provider rejected the request with status {0}")]
    Rejected(u16),

    #[error("unexpected SMS provider response: {0}")]
    Response(String),
}

impl From<ureq::Error> for NotifyError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(status) => NotifyError::Rejected(status),
            other => NotifyError::Transport(other.to_string()),
        }
    }
}
