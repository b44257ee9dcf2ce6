//! Error types for the APAC site

use thiserror::Error;

/// Main error type for site state operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Anchor does not name any registered section
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Scroll sample from the page could not be decoded
    #[error("Malformed scroll sample: {0}")]
    MalformedSample(#[from] serde_json::Error),

    /// The page bridge closed or rejected a message
    #[error("Bridge error: {0}")]
    Bridge(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::UnknownSection("galeria".to_string());
        assert_eq!(format!("{}", err), "Unknown section: galeria");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: SiteError = json_err.into();
        assert!(matches!(err, SiteError::MalformedSample(_)));
    }
}
