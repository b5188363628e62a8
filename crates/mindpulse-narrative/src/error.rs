use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for NarrativeError {
    fn from(e: tera::Error) -> Self {
        NarrativeError::TemplateRender(e.to_string())
    }
}

/// Why the narrative model produced nothing usable.
///
/// Never surfaced to the caller; every variant routes to fallback content.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("narrative model unavailable: {0}")]
    Unavailable(String),

    #[error("narrative model timed out after {0}s")]
    Timeout(u64),

    #[error("narrative model returned an empty reply")]
    Empty,
}
