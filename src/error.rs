//! Error types for robots.txt construction.

use crate::directive::DirectiveKind;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, RobotsTxtError>;

/// Errors raised when a builder or section call receives invalid input.
///
/// Every error is raised before any state is touched, so a failed call
/// leaves the builder or section exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RobotsTxtError {
    /// An `Allow` or `Disallow` path was rejected.
    #[error("invalid {directive} path '{path}': {reason}")]
    InvalidPath {
        /// The directive the path was given to
        directive: DirectiveKind,
        /// The trimmed path that was rejected
        path: String,
        /// Reason for invalidity
        reason: PathError,
    },
    /// A sitemap URL was rejected.
    #[error("invalid sitemap URL '{url}': the URL must not contain line breaks")]
    InvalidSitemapUrl {
        /// The trimmed URL that was rejected
        url: String,
    },
}

/// Reasons a directive path can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path spans more than one line.
    #[error("path must not contain line breaks")]
    ContainsLineBreak,
    /// The path is empty where a value is required.
    #[error("path cannot be empty")]
    Empty,
    /// The path does not start with a slash.
    #[error("path must start with '/', found '{found}'")]
    MissingLeadingSlash {
        /// The first character found instead
        found: char,
    },
}

/// Returns true if the value contains a line break of any kind.
pub(crate) fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_message_names_directive_and_reason() {
        let err = RobotsTxtError::InvalidPath {
            directive: DirectiveKind::Allow,
            path: "admin".to_string(),
            reason: PathError::MissingLeadingSlash { found: 'a' },
        };
        assert_eq!(
            err.to_string(),
            "invalid Allow path 'admin': path must start with '/', found 'a'"
        );
    }

    #[test]
    fn invalid_sitemap_message_names_url() {
        let err = RobotsTxtError::InvalidSitemapUrl {
            url: "http://x/\ny".to_string(),
        };
        assert!(err.to_string().starts_with("invalid sitemap URL 'http://x/"));
        assert!(err.to_string().ends_with("must not contain line breaks"));
    }

    #[test]
    fn line_breaks_are_detected() {
        assert!(has_line_break("a\nb"));
        assert!(has_line_break("a\rb"));
        assert!(!has_line_break("/a b"));
    }
}
