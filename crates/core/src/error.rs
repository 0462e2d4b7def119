use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuideError {
    #[error("message is empty")]
    EmptyUtterance,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("rating must be between 1 and 5 stars, got {0}")]
    InvalidRating(u8),

    #[error("point of interest not found: {0}")]
    PointNotFound(String),
}

impl GuideError {
    /// Stable machine-readable code for API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyUtterance => "empty_message",
            Self::UnknownCategory(_) => "unknown_category",
            Self::InvalidRating(_) => "invalid_rating",
            Self::PointNotFound(_) => "not_found",
        }
    }
}
