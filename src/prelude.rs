//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use robots_txt_builder::prelude::*;
//!
//! let mut robots = RobotsTxtBuilder::new();
//! robots.section(["*"]).disallow("")?;
//! assert_eq!(robots.render(), "User-Agent: *\nDisallow: ");
//! # Ok::<(), RobotsTxtError>(())
//! ```
//!
//! The crate `Result` alias is left out so it does not shadow
//! `std::result::Result`.

pub use crate::{
    // Core types
    DirectiveKind, GroupKey, OrderedSet, RulePath, UserAgentSection,
    // Builder
    RobotsTxtBuilder,
    // Errors
    PathError, RobotsTxtError, UnknownDirective,
    // Helpers
    natural_cmp,
    // Constants
    BLOCK_SEPARATOR, COMMENT_PREFIX, GROUP_KEY_SEPARATOR, SITEMAP_FIELD, USER_AGENT_FIELD,
};
