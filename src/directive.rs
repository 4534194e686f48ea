//! Directive kinds that can appear inside a user-agent section.

use std::fmt;
use std::str::FromStr;

/// The kind of a directive line.
///
/// # Examples
///
/// ```
/// use robots_txt_builder::DirectiveKind;
///
/// assert_eq!(DirectiveKind::CrawlDelay.as_str(), "Crawl-delay");
/// assert_eq!("disallow".parse::<DirectiveKind>().unwrap(), DirectiveKind::Disallow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `Disallow: <path>`
    Disallow,
    /// `Allow: <path>`
    Allow,
    /// `Crawl-delay: <seconds>`
    CrawlDelay,
}

impl DirectiveKind {
    /// Every directive kind.
    pub const ALL: [Self; 3] = [Self::Disallow, Self::Allow, Self::CrawlDelay];

    /// Returns the field name as written in a robots.txt file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disallow => "Disallow",
            Self::Allow => "Allow",
            Self::CrawlDelay => "Crawl-delay",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known directive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown directive '{name}'; expected Disallow, Allow or Crawl-delay")]
pub struct UnknownDirective {
    /// The name that was not recognised
    pub name: String,
}

impl FromStr for DirectiveKind {
    type Err = UnknownDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownDirective {
                name: name.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DirectiveKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DirectiveKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
