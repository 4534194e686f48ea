//! Property-based tests for section identity, directive uniqueness and
//! input hygiene.

use std::cmp::Ordering;

use proptest::prelude::*;

use robots_txt_builder::{
    BLOCK_SEPARATOR, DirectiveKind, GroupKey, RobotsTxtBuilder, RobotsTxtError, UserAgentSection,
    natural_cmp,
};

fn is_invalid_path<T>(result: Result<T, RobotsTxtError>) -> bool {
    matches!(result, Err(RobotsTxtError::InvalidPath { .. }))
}

/// Strategies for generating builder inputs.
mod strategies {
    use super::*;

    /// Generate a user-agent token (no separators, no whitespace)
    pub fn agent() -> impl Strategy<Value = String> {
        "[A-Za-z0-9*/._-]{1,12}"
    }

    /// Generate a non-empty list of agents
    pub fn agents() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(agent(), 1..=5)
    }

    /// Generate a list of agents together with a shuffled copy
    pub fn agents_and_permutation() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
        agents().prop_flat_map(|agents| {
            let shuffled = Just(agents.clone()).prop_shuffle();
            (Just(agents), shuffled)
        })
    }

    /// Generate a valid absolute path
    pub fn absolute_path() -> impl Strategy<Value = String> {
        "/[a-z0-9/._-]{0,16}"
    }

    /// Generate a path that does not start with a slash
    pub fn relative_path() -> impl Strategy<Value = String> {
        "[a-z0-9._-][a-z0-9/._-]{0,16}"
    }

    /// Generate surrounding whitespace
    pub fn padding() -> impl Strategy<Value = String> {
        "[ \t]{0,3}"
    }
}

mod section_identity_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn permuted_agents_share_section((agents, shuffled) in agents_and_permutation()) {
            let mut builder = RobotsTxtBuilder::new();
            let first: *const UserAgentSection = builder.section(&agents);
            let second: *const UserAgentSection = builder.section(&shuffled);

            prop_assert!(std::ptr::eq(first, second));
            prop_assert_eq!(builder.sections().count(), 1);
        }

        #[test]
        fn padded_agents_share_key(agents in agents(), pad in padding()) {
            let padded: Vec<String> = agents.iter().map(|a| format!("{pad}{a}{pad}")).collect();
            prop_assert_eq!(GroupKey::from_agents(&agents), GroupKey::from_agents(&padded));
        }

        #[test]
        fn new_section_keeps_caller_order(agents in agents()) {
            let mut builder = RobotsTxtBuilder::new();
            let section = builder.section(&agents);
            prop_assert_eq!(section.user_agents(), agents.as_slice());
        }

        #[test]
        fn removed_section_is_gone(agents in agents()) {
            let mut builder = RobotsTxtBuilder::new();
            builder.section(&agents);
            let mut reversed = agents.clone();
            reversed.reverse();

            prop_assert!(builder.remove_section(&reversed).is_some());
            prop_assert!(builder.get_section(&agents).is_none());
            prop_assert_eq!(builder.render(), "");
        }
    }
}

mod directive_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn repeated_directive_renders_once(path in absolute_path(), repeats in 1..5usize) {
            let mut section = UserAgentSection::new(["*"]);
            for _ in 0..repeats {
                section.disallow(&path).unwrap();
                section.allow(&path).unwrap();
            }

            prop_assert_eq!(section.directives(DirectiveKind::Disallow).len(), 1);
            prop_assert_eq!(section.directives(DirectiveKind::Allow).len(), 1);
            prop_assert_eq!(section.render().lines().count(), 3);
        }

        #[test]
        fn distinct_values_keep_insertion_order(paths in prop::collection::vec(absolute_path(), 1..8)) {
            let mut section = UserAgentSection::new(["*"]);
            let mut expected: Vec<String> = Vec::new();
            for path in &paths {
                section.disallow(path).unwrap();
                if !expected.contains(path) {
                    expected.push(path.clone());
                }
            }
            prop_assert_eq!(section.directives(DirectiveKind::Disallow), expected.as_slice());
        }

        #[test]
        fn relative_paths_are_rejected(path in relative_path()) {
            let mut section = UserAgentSection::new(["*"]);
            prop_assert!(is_invalid_path(section.allow(&path)));
            prop_assert!(is_invalid_path(section.disallow(&path)));
            prop_assert_eq!(section.render(), "User-Agent: *");
        }

        #[test]
        fn line_breaks_in_paths_are_rejected(
            head in absolute_path(),
            tail in "[a-z]{0,8}",
            brk in prop::sample::select(vec!["\n", "\r", "\r\n"]),
        ) {
            let path = format!("{head}{brk}{tail}x");
            let mut section = UserAgentSection::new(["*"]);
            prop_assert!(section.disallow(&path).is_err());
            prop_assert!(section.allow(&path).is_err());
            prop_assert!(section.directive_kinds().next().is_none());
        }

        #[test]
        fn paths_are_trimmed(path in absolute_path(), pad in padding()) {
            let mut section = UserAgentSection::new(["*"]);
            section.allow(&format!("{pad}{path}{pad}")).unwrap();
            prop_assert_eq!(section.directives(DirectiveKind::Allow), [path]);
        }
    }
}

mod document_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn one_block_per_section(count in 1..8usize) {
            let mut builder = RobotsTxtBuilder::new();
            for i in 0..count {
                builder.section([format!("bot{i}")]).disallow("/").unwrap();
            }

            let document = builder.render();
            prop_assert_eq!(document.split(BLOCK_SEPARATOR).count(), count);
            prop_assert!(!document.ends_with('\n'));
        }

        #[test]
        fn sitemaps_render_in_order(urls in prop::collection::vec("https://[a-z]{1,8}\\.com/[a-z]{1,8}\\.xml", 1..5)) {
            let mut builder = RobotsTxtBuilder::new();
            for url in &urls {
                builder.add_sitemap(url).unwrap();
            }

            let expected: Vec<String> = urls.iter().map(|u| format!("Sitemap: {u}")).collect();
            prop_assert_eq!(builder.render(), expected.join("\n"));
        }

        #[test]
        fn sitemap_line_breaks_are_rejected(url in "https://[a-z]{1,8}\\.com/", tail in "[a-z]{1,8}") {
            let mut builder = RobotsTxtBuilder::new();
            let result = builder.add_sitemap(&format!("{url}\n{tail}"));
            let is_invalid_url = matches!(result, Err(RobotsTxtError::InvalidSitemapUrl { .. }));
            prop_assert!(is_invalid_url);
            prop_assert!(builder.is_empty());
        }

        #[test]
        fn header_lines_are_all_prefixed(lines in prop::collection::vec("[ a-zA-Z0-9]{0,12}", 1..5)) {
            let mut builder = RobotsTxtBuilder::new();
            builder.set_header(&lines.join("\n"));
            let header = builder.header().unwrap();

            prop_assert_eq!(header.split('\n').count(), lines.len());
            prop_assert!(header.split('\n').all(|line| line.starts_with("# ")));
        }
    }
}

mod natural_order_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn numbers_compare_by_value(a in 0u32..100_000, b in 0u32..100_000) {
            prop_assert_eq!(natural_cmp(&format!("bot{a}"), &format!("bot{b}")), a.cmp(&b));
        }

        #[test]
        fn comparison_is_antisymmetric(a in "[a-c0-9]{0,6}", b in "[a-c0-9]{0,6}") {
            prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
        }

        #[test]
        fn equal_only_for_identical_strings(a in "[a-c0-9]{0,6}", b in "[a-c0-9]{0,6}") {
            prop_assert_eq!(natural_cmp(&a, &b) == Ordering::Equal, a == b);
        }
    }
}
