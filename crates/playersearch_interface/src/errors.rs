use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Raised before any request is issued, never seen by the network layer.
    ValidationError { msg: String },
    // Transport failure, non-success status or undecodable body.
    FetchError { msg: String },
    ConfigError { msg: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::ValidationError { msg } => write!(f, "Validation Error: '{}'", msg),
            AppError::FetchError { msg } => write!(f, "Fetch Error: '{}'", msg),
            AppError::ConfigError { msg } => write!(f, "Config Error: '{}'", msg),
        }
    }
}
