//! Builder for well-formed `robots.txt` documents.
//!
//! This crate composes a `robots.txt` file from per-user-agent sections, an
//! optional header comment block and a list of sitemap URLs, then renders
//! the whole document to text. It performs no I/O; writing the result to a
//! file or an HTTP response is left to the caller.
//!
//! # Overview
//!
//! A rendered document is a sequence of blocks separated by blank lines:
//!
//! ```text
//! # <header lines>
//!
//! # <section comments>
//! User-Agent: <agent>
//! <Directive>: <value>
//!
//! Sitemap: <url>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use robots_txt_builder::RobotsTxtBuilder;
//!
//! let mut robots = RobotsTxtBuilder::new();
//! robots.set_header("H");
//! robots
//!     .section(["*"])
//!     .disallow("/admin")?
//!     .allow("/public")?
//!     .crawl_delay(10);
//! robots
//!     .section(["google"])
//!     .disallow("/admin2")?
//!     .allow("/")?
//!     .crawl_delay(15);
//! robots
//!     .add_sitemap("https://example.com/sitemap.xml")?
//!     .add_sitemap("https://example.com/sitemap2.xml")?;
//!
//! let expected = concat!(
//!     "# H\n\n",
//!     "User-Agent: *\nDisallow: /admin\nAllow: /public\nCrawl-delay: 10\n\n",
//!     "User-Agent: google\nDisallow: /admin2\nAllow: /\nCrawl-delay: 15\n\n",
//!     "Sitemap: https://example.com/sitemap.xml\n",
//!     "Sitemap: https://example.com/sitemap2.xml",
//! );
//!
//! assert_eq!(robots.render(), expected);
//! # Ok::<(), robots_txt_builder::RobotsTxtError>(())
//! ```
//!
//! # Section Identity
//!
//! A section is identified by its *set* of user agents. Agents are trimmed
//! and sorted in natural order to form a [`GroupKey`], so
//! `section(["google", "bing"])` and `section(["bing", "google"])` return
//! the same section. Keys compare by the agent list itself, so
//! `section(["a:b"])` and `section(["a", "b"])` stay separate.
//!
//! # Input Rules
//!
//! | Input | Rule |
//! |-------|------|
//! | `Disallow` path | trimmed, single line, empty or starting with `/` |
//! | `Allow` path | trimmed, single line, starting with `/` |
//! | Sitemap URL | trimmed, single line |
//! | Comment / header | any text, one entry per line |
//!
//! # Logging
//!
//! Section creation, removal, sitemap registration and rejected input are
//! reported through [`tracing`] at `debug` level. The crate never installs
//! a subscriber.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`RobotsTxtBuilder`],
//!   [`UserAgentSection`], [`GroupKey`] and [`DirectiveKind`].
//!   Deserialization validates input the same way the builder methods do.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod constants;
mod directive;
mod error;
mod group_key;
mod ordered_set;
pub mod prelude;
mod rule_path;
mod section;

pub use builder::RobotsTxtBuilder;
pub use constants::{
    BLOCK_SEPARATOR, COMMENT_PREFIX, GROUP_KEY_SEPARATOR, SITEMAP_FIELD, USER_AGENT_FIELD,
};
pub use directive::{DirectiveKind, UnknownDirective};
pub use error::{PathError, Result, RobotsTxtError};
pub use group_key::{GroupKey, natural_cmp};
pub use ordered_set::OrderedSet;
pub use rule_path::RulePath;
pub use section::UserAgentSection;
