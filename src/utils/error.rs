use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    FetchError(String),
    DecodeError(String),
    NotFound(String),
    Unavailable(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::FetchError(msg) => write!(f, "Fetch error: {}", msg),
            DirectoryError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            DirectoryError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DirectoryError::Unavailable(msg) => write!(f, "Directory unavailable: {}", msg),
        }
    }
}

impl std::error::Error for DirectoryError {}
