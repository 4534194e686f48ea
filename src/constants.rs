//! Field names and separators used when rendering robots.txt documents.

/// Prefix for every comment line, including header lines.
pub const COMMENT_PREFIX: &str = "# ";

/// Field name of a user-agent line.
pub const USER_AGENT_FIELD: &str = "User-Agent";

/// Field name of a sitemap line.
pub const SITEMAP_FIELD: &str = "Sitemap";

/// Separator between agents in a [`GroupKey`](crate::GroupKey).
pub const GROUP_KEY_SEPARATOR: char = ':';

/// Separator between rendered blocks (a blank line).
pub const BLOCK_SEPARATOR: &str = "\n\n";
