//! Error types for lite-embed

use thiserror::Error;

/// Result type alias for embed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Embed construction error types
///
/// These are the only failure modes in the library: a placeholder element
/// that is missing a required attribute, or one without the anchor child the
/// component binds its listeners to. Both are local to a single placeholder
/// and never affect siblings on the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Failed to get the '{name}' attribute from the element")]
    MissingAttribute { name: &'static str },

    #[error("No anchor matching '{selector}' found inside the element")]
    MissingAnchor { selector: String },
}

impl Error {
    /// Returns the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::MissingAttribute { .. } => "MISSING_ATTRIBUTE",
            Error::MissingAnchor { .. } => "MISSING_ANCHOR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingAttribute { name: "videoid" };
        assert_eq!(
            err.to_string(),
            "Failed to get the 'videoid' attribute from the element"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::MissingAttribute { name: "videoid" }.error_code(),
            "MISSING_ATTRIBUTE"
        );
        assert_eq!(
            Error::MissingAnchor {
                selector: ".n-ham-c-lite-yt__link".to_string()
            }
            .error_code(),
            "MISSING_ANCHOR"
        );
    }
}
