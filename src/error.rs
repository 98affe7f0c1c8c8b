use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StampError>;

#[derive(Debug, Error)]
pub enum StampError {
    #[error("Invalid resource name \"{name}\": {reason}")]
    InvalidResourceName { name: String, reason: String },

    #[error("Template {template} does not contain the {{controllerName}} placeholder")]
    MissingPlaceholder { template: String },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Refusing to overwrite existing file: {}", .path.display())]
    TargetExists { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config value for {key}: {message}")]
    Config { key: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StampError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StampError::Io {
            path: path.into(),
            source,
        }
    }
}

impl axum::response::IntoResponse for StampError {
    fn into_response(self) -> axum::response::Response {
        let message = match &self {
            StampError::Internal(msg) => msg.clone(),
            _ => self.to_string(),
        };
        (axum::http::StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
