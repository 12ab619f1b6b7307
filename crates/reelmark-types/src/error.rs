use std::fmt;

/// Result type for reelmark-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rating outside the range the control accepts
    InvalidRating(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRating(value) => {
                write!(f, "Invalid rating: {} (expected 1 to 5 stars)", value)
            }
        }
    }
}

impl std::error::Error for Error {}
