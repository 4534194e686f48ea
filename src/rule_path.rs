//! Validated path values for `Allow` and `Disallow` directives.

use crate::directive::DirectiveKind;
use crate::error::{PathError, RobotsTxtError, has_line_break};

/// A trimmed, single-line path that starts with `/`.
///
/// `Disallow` additionally accepts the empty path, which is the usual way of
/// allowing everything.
///
/// # Examples
///
/// ```
/// use robots_txt_builder::{DirectiveKind, RulePath};
///
/// let path = RulePath::parse(DirectiveKind::Allow, "  /public ").unwrap();
/// assert_eq!(path.as_str(), "/public");
///
/// assert!(RulePath::parse(DirectiveKind::Disallow, "").is_ok());
/// assert!(RulePath::parse(DirectiveKind::Allow, "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RulePath(String);

impl RulePath {
    /// Trims and validates a path for the given directive.
    ///
    /// # Errors
    ///
    /// Returns [`RobotsTxtError::InvalidPath`] if the trimmed path:
    /// - contains a line break
    /// - is empty and `directive` is not `Disallow`
    /// - is non-empty and does not start with `/`
    pub fn parse(directive: DirectiveKind, input: &str) -> Result<Self, RobotsTxtError> {
        let path = input.trim();
        Self::check(directive, path).map_err(|reason| RobotsTxtError::InvalidPath {
            directive,
            path: path.to_string(),
            reason,
        })?;
        Ok(Self(path.to_string()))
    }

    fn check(directive: DirectiveKind, path: &str) -> Result<(), PathError> {
        if has_line_break(path) {
            return Err(PathError::ContainsLineBreak);
        }

        match path.chars().next() {
            None if directive == DirectiveKind::Disallow => Ok(()),
            None => Err(PathError::Empty),
            Some('/') => Ok(()),
            Some(found) => Err(PathError::MissingLeadingSlash { found }),
        }
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the path, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}
