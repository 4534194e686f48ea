//! Builder assembling a complete robots.txt document.
//!
//! The builder owns an optional header comment block, the user-agent
//! sections in the order they were first requested, and the sitemap URLs.
//! Rendering joins these blocks with blank lines.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::constants::{BLOCK_SEPARATOR, COMMENT_PREFIX, SITEMAP_FIELD};
use crate::error::{RobotsTxtError, has_line_break};
use crate::group_key::GroupKey;
use crate::section::UserAgentSection;

/// Builds a robots.txt document.
///
/// Sections are created lazily and identified by their set of user agents,
/// regardless of the order the agents are listed in.
///
/// # Examples
///
/// ```
/// use robots_txt_builder::RobotsTxtBuilder;
///
/// let mut robots = RobotsTxtBuilder::new();
/// robots.set_header("Generated file");
/// robots.section(["*"]).disallow("/admin")?;
/// robots.section(["google", "bing"]).allow("/")?;
/// robots.add_sitemap("https://example.com/sitemap.xml")?;
///
/// assert_eq!(
///     robots.render(),
///     "# Generated file\n\n\
///      User-Agent: *\nDisallow: /admin\n\n\
///      User-Agent: google\nUser-Agent: bing\nAllow: /\n\n\
///      Sitemap: https://example.com/sitemap.xml"
/// );
/// # Ok::<(), robots_txt_builder::RobotsTxtError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RobotsTxtBuilder {
    header: Option<String>,
    sections: Vec<UserAgentSection>,
    index: HashMap<GroupKey, usize>,
    sitemaps: Vec<String>,
}

impl RobotsTxtBuilder {
    /// Creates an empty builder.
    ///
    /// An empty builder renders as the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given header already set.
    ///
    /// # Examples
    ///
    /// ```
    /// use robots_txt_builder::RobotsTxtBuilder;
    ///
    /// let robots = RobotsTxtBuilder::with_header("Hello\nWorld");
    /// assert_eq!(robots.render(), "# Hello\n# World");
    /// ```
    #[must_use]
    pub fn with_header(text: &str) -> Self {
        let mut builder = Self::new();
        builder.set_header(text);
        builder
    }

    /// Sets the header comment block, replacing any previous header.
    ///
    /// Each line of `text` is right-trimmed and prefixed with `# `. Leading
    /// indentation is kept. An empty `text` still produces a single `# `
    /// line; use [`clear_header`](Self::clear_header) to drop the block.
    ///
    /// # Examples
    ///
    /// ```
    /// use robots_txt_builder::RobotsTxtBuilder;
    ///
    /// let mut robots = RobotsTxtBuilder::new();
    /// robots.set_header("First line\n      second line  \nthird line");
    /// assert_eq!(
    ///     robots.header(),
    ///     Some("# First line\n#       second line\n# third line")
    /// );
    /// ```
    pub fn set_header(&mut self, text: &str) -> &mut Self {
        let header = text
            .split('\n')
            .map(|line| format!("{COMMENT_PREFIX}{}", line.trim_end()))
            .collect::<Vec<_>>()
            .join("\n");
        self.header = Some(header);
        self
    }

    /// Removes the header block.
    pub fn clear_header(&mut self) -> &mut Self {
        self.header = None;
        self
    }

    /// Returns the formatted header block, if one is set.
    #[must_use]
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Returns the section for the given user agents, creating it if needed.
    ///
    /// Agents are trimmed. Two calls naming the same set of agents, in any
    /// order, return the same section. A new section keeps the agents in
    /// the order of the call that created it.
    ///
    /// Callers should name at least one agent. A section created from an
    /// empty list applies to no crawler and is left out of the rendered
    /// document. A blank agent such as `"   "` is kept and renders as
    /// `User-Agent: `.
    ///
    /// # Examples
    ///
    /// ```
    /// use robots_txt_builder::RobotsTxtBuilder;
    ///
    /// let mut robots = RobotsTxtBuilder::new();
    /// robots.section(["google", "bing"]).disallow("/private")?;
    /// robots.section(["bing", " google "]).disallow("/tmp")?;
    ///
    /// assert_eq!(robots.sections().count(), 1);
    /// assert_eq!(
    ///     robots.render(),
    ///     "User-Agent: google\nUser-Agent: bing\nDisallow: /private\nDisallow: /tmp"
    /// );
    /// # Ok::<(), robots_txt_builder::RobotsTxtError>(())
    /// ```
    pub fn section<I, S>(&mut self, user_agents: I) -> &mut UserAgentSection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidate = UserAgentSection::new(user_agents);
        let key = candidate.group_key();

        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                debug!(key = %key, "creating user-agent section");
                let position = self.sections.len();
                self.sections.push(candidate);
                self.index.insert(key, position);
                position
            }
        };

        &mut self.sections[position]
    }

    /// Looks up the section for the given user agents without creating it.
    #[must_use]
    pub fn get_section<I, S>(&self, user_agents: I) -> Option<&UserAgentSection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = GroupKey::from_agents(user_agents);
        self.index.get(&key).map(|&position| &self.sections[position])
    }

    /// Removes the section for the given user agents.
    ///
    /// Returns the removed section, or `None` if there was none.
    pub fn remove_section<I, S>(&mut self, user_agents: I) -> Option<UserAgentSection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = GroupKey::from_agents(user_agents);
        let position = self.index.remove(&key)?;
        let section = self.sections.remove(position);

        for index in self.index.values_mut() {
            if *index > position {
                *index -= 1;
            }
        }

        debug!(key = %key, "removed user-agent section");
        Some(section)
    }

    /// Returns the sections in render order.
    pub fn sections(&self) -> impl Iterator<Item = &UserAgentSection> {
        self.sections.iter()
    }

    /// Registers a sitemap URL.
    ///
    /// The URL is trimmed. Sitemaps are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`RobotsTxtError::InvalidSitemapUrl`] if the trimmed URL
    /// contains a line break (`\n` or `\r`).
    pub fn add_sitemap(&mut self, url: &str) -> Result<&mut Self, RobotsTxtError> {
        let url = url.trim();

        if has_line_break(url) {
            debug!(url, "rejected sitemap URL");
            return Err(RobotsTxtError::InvalidSitemapUrl {
                url: url.to_string(),
            });
        }

        debug!(url, "registered sitemap");
        self.sitemaps.push(url.to_string());
        Ok(self)
    }

    /// Returns the registered sitemap URLs in insertion order.
    #[must_use]
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Returns true if the builder would render an empty document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.sitemaps.is_empty()
            && self.sections.iter().all(UserAgentSection::is_empty)
    }

    /// Renders the whole document.
    ///
    /// Blocks appear in this order, separated by a blank line: the header,
    /// each section in the order it was first requested, and the sitemaps.
    /// Missing blocks are skipped. The result has no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut blocks = Vec::with_capacity(self.sections.len() + 2);

        if let Some(header) = &self.header {
            blocks.push(header.clone());
        }

        blocks.extend(
            self.sections
                .iter()
                .filter(|section| !section.is_empty())
                .map(UserAgentSection::render),
        );

        if !self.sitemaps.is_empty() {
            let sitemaps = self
                .sitemaps
                .iter()
                .map(|url| format!("{SITEMAP_FIELD}: {url}"))
                .collect::<Vec<_>>()
                .join("\n");
            blocks.push(sitemaps);
        }

        let document = blocks.join(BLOCK_SEPARATOR);
        trace!(blocks = blocks.len(), bytes = document.len(), "rendered robots.txt");
        document
    }
}

impl fmt::Display for RobotsTxtBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BuilderRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<String>,
    #[serde(default)]
    sections: Vec<UserAgentSection>,
    #[serde(default)]
    sitemaps: Vec<String>,
}

/// The header is written as the text given to
/// [`set_header`](RobotsTxtBuilder::set_header), without `# ` prefixes.
#[cfg(feature = "serde")]
impl serde::Serialize for RobotsTxtBuilder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let header = self.header.as_ref().map(|header| {
            header
                .split('\n')
                .map(|line| line.strip_prefix(COMMENT_PREFIX).unwrap_or(line))
                .collect::<Vec<_>>()
                .join("\n")
        });

        BuilderRepr {
            header,
            sections: self.sections.clone(),
            sitemaps: self.sitemaps.clone(),
        }
        .serialize(serializer)
    }
}

/// Rebuilds the document through the public operations. Sitemaps with line
/// breaks and two sections naming the same agent set are rejected.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RobotsTxtBuilder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let repr = BuilderRepr::deserialize(deserializer)?;
        let mut builder = Self::new();

        if let Some(header) = &repr.header {
            builder.set_header(header);
        }

        for section in repr.sections {
            let key = section.group_key();
            if builder.index.contains_key(&key) {
                return Err(D::Error::custom(format!(
                    "duplicate user-agent section '{key}'"
                )));
            }
            builder.index.insert(key, builder.sections.len());
            builder.sections.push(section);
        }

        for url in &repr.sitemaps {
            builder.add_sitemap(url).map_err(D::Error::custom)?;
        }

        Ok(builder)
    }
}
