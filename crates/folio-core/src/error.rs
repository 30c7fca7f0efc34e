use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("frame id must not be empty")]
    EmptyFrameId,
    #[error("duplicate frame id `{0}`")]
    DuplicateFrameId(String),
    #[error("invalid frame data: {0}")]
    FrameData(#[from] serde_json::Error),
    #[error("unknown route `{0}`")]
    UnknownRoute(String),
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("the mind map has not finished loading")]
    NotReady,
    /// A browser API call threw; carries the exception message.
    #[error("{0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
