use thiserror::Error;

pub type Result<T> = std::result::Result<T, FolderError>;

#[derive(Error, Debug)]
pub enum FolderError {
    #[error("invalid token")]
    InvalidToken,

    #[error("invalid token format")]
    InvalidTokenFormat,

    #[error("token offset {offset} is out of range for {len} folders")]
    OutOfRange { offset: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolderError {
    /// Errors caused by the caller's token. Retrying with the same token never helps.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken | Self::InvalidTokenFormat | Self::OutOfRange { .. }
        )
    }
}
