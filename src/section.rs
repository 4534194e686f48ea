//! A group of user agents sharing one set of directives.

use std::fmt;

use tracing::debug;

use crate::constants::{COMMENT_PREFIX, USER_AGENT_FIELD};
use crate::directive::DirectiveKind;
use crate::error::RobotsTxtError;
use crate::group_key::GroupKey;
use crate::ordered_set::OrderedSet;
use crate::rule_path::RulePath;

/// One `User-Agent` block of a robots.txt document.
///
/// Directive values are unique per kind and keep their first-insertion
/// position. Kinds are rendered in the order they were first used.
///
/// # Examples
///
/// ```
/// use robots_txt_builder::UserAgentSection;
///
/// let mut section = UserAgentSection::new(["*"]);
/// section
///     .comment("Keep out")
///     .disallow("/admin")?
///     .allow("/admin/public")?
///     .crawl_delay(5);
///
/// assert_eq!(
///     section.render(),
///     "# Keep out\nUser-Agent: *\nDisallow: /admin\nAllow: /admin/public\nCrawl-delay: 5"
/// );
/// # Ok::<(), robots_txt_builder::RobotsTxtError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentSection {
    user_agents: Vec<String>,
    directives: Vec<(DirectiveKind, OrderedSet<String>)>,
    comments: Vec<String>,
}

impl UserAgentSection {
    /// Creates an empty section for the given user agents.
    ///
    /// Agents are trimmed and kept in the given order.
    #[must_use]
    pub fn new<I, S>(user_agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            user_agents: user_agents
                .into_iter()
                .map(|agent| agent.as_ref().trim().to_string())
                .collect(),
            directives: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Adds a `Disallow` directive.
    ///
    /// The path is trimmed first. An empty path is allowed and renders as
    /// `Disallow: `, which permits everything.
    ///
    /// # Errors
    ///
    /// Returns [`RobotsTxtError::InvalidPath`] if the path contains a line
    /// break (`\n` or `\r`) or is non-empty without a leading `/`.
    pub fn disallow(&mut self, path: &str) -> Result<&mut Self, RobotsTxtError> {
        self.add_path(DirectiveKind::Disallow, path)
    }

    /// Adds an `Allow` directive.
    ///
    /// # Errors
    ///
    /// Returns [`RobotsTxtError::InvalidPath`] if the trimmed path is empty,
    /// contains a line break (`\n` or `\r`) or does not start with `/`.
    pub fn allow(&mut self, path: &str) -> Result<&mut Self, RobotsTxtError> {
        self.add_path(DirectiveKind::Allow, path)
    }

    /// Adds a `Crawl-delay` directive. Any value is accepted as-is.
    pub fn crawl_delay(&mut self, delay: i64) -> &mut Self {
        self.add_directive(DirectiveKind::CrawlDelay, delay.to_string())
    }

    /// Adds one comment line per line of `text`, each trimmed.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.comments
            .extend(text.split('\n').map(|line| line.trim().to_string()));
        self
    }

    fn add_path(&mut self, kind: DirectiveKind, path: &str) -> Result<&mut Self, RobotsTxtError> {
        let path = RulePath::parse(kind, path).inspect_err(|err| {
            debug!(agents = ?self.user_agents, %err, "rejected directive path");
        })?;
        Ok(self.add_directive(kind, path.into_string()))
    }

    fn add_directive(&mut self, kind: DirectiveKind, value: String) -> &mut Self {
        match self.directives.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, values)) => {
                values.insert(value);
            }
            None => {
                let mut values = OrderedSet::new();
                values.insert(value);
                self.directives.push((kind, values));
            }
        }
        self
    }

    /// Returns the user agents in the order they were given.
    #[must_use]
    pub fn user_agents(&self) -> &[String] {
        &self.user_agents
    }

    /// Returns the comment lines in insertion order.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Returns the values recorded for one directive kind.
    #[must_use]
    pub fn directives(&self, kind: DirectiveKind) -> &[String] {
        self.directives
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    /// Returns the directive kinds in the order they were first used.
    pub fn directive_kinds(&self) -> impl Iterator<Item = DirectiveKind> + '_ {
        self.directives.iter().map(|(kind, _)| *kind)
    }

    /// Returns the key identifying this section within a builder.
    #[must_use]
    pub fn group_key(&self) -> GroupKey {
        GroupKey::from_trimmed(self.user_agents.clone())
    }

    /// Returns true if rendering this section would produce no lines.
    ///
    /// A section without agents applies to no crawler and renders nothing,
    /// whatever directives it holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_agents.is_empty()
    }

    /// Renders the section without a trailing newline.
    ///
    /// Comments come first, then one `User-Agent` line per agent, then the
    /// directives grouped by kind.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let comments = self
            .comments
            .iter()
            .map(|comment| format!("{COMMENT_PREFIX}{comment}"));
        let agents = self
            .user_agents
            .iter()
            .map(|agent| format!("{USER_AGENT_FIELD}: {agent}"));
        let directives = self.directives.iter().flat_map(|(kind, values)| {
            values.as_slice().iter().map(move |value| format!("{kind}: {value}"))
        });

        comments
            .chain(agents)
            .chain(directives)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for UserAgentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SectionRepr {
    user_agents: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    comments: Vec<String>,
    #[serde(default)]
    directives: Vec<DirectiveRepr>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DirectiveRepr {
    kind: DirectiveKind,
    values: Vec<String>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for UserAgentSection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SectionRepr {
            user_agents: self.user_agents.clone(),
            comments: self.comments.clone(),
            directives: self
                .directives
                .iter()
                .map(|(kind, values)| DirectiveRepr {
                    kind: *kind,
                    values: values.as_slice().to_vec(),
                })
                .collect(),
        }
        .serialize(serializer)
    }
}

/// Deserialized sections go through the same validation as the builder
/// methods, so paths with line breaks or without a leading `/` are rejected.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UserAgentSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let repr = SectionRepr::deserialize(deserializer)?;
        let mut section = Self::new(repr.user_agents);
        for comment in &repr.comments {
            section.comment(comment);
        }

        for DirectiveRepr { kind, values } in repr.directives {
            for value in values {
                if kind == DirectiveKind::CrawlDelay {
                    let delay = value.trim().parse::<i64>().map_err(|err| {
                        D::Error::custom(format!("invalid {kind} value '{value}': {err}"))
                    })?;
                    section.crawl_delay(delay);
                } else {
                    section.add_path(kind, &value).map_err(D::Error::custom)?;
                }
            }
        }

        Ok(section)
    }
}
