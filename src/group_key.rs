//! Order-independent identity of a user-agent section.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::GROUP_KEY_SEPARATOR;

/// Canonical key identifying a section by its set of user agents.
///
/// Agents are trimmed and sorted in natural order, so the order in which a
/// caller lists them does not matter. Keys compare by the sorted agent
/// list; the `:`-joined form is only for display.
///
/// # Examples
///
/// ```
/// use robots_txt_builder::GroupKey;
///
/// let a = GroupKey::from_agents(["google", " bing"]);
/// let b = GroupKey::from_agents(["bing", "google "]);
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "bing:google");
///
/// let bots = GroupKey::from_agents(["bot10", "bot2"]);
/// assert_eq!(bots.agents(), ["bot2", "bot10"]);
///
/// // An agent containing the separator is not the same set.
/// assert_ne!(GroupKey::from_agents(["a:b"]), GroupKey::from_agents(["a", "b"]));
/// ```
#[derive(Debug, Clone)]
pub struct GroupKey {
    agents: Vec<String>,
    joined: String,
}

impl GroupKey {
    /// Builds the key for a list of user agents.
    #[must_use]
    pub fn from_agents<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let agents: Vec<String> = agents
            .into_iter()
            .map(|agent| agent.as_ref().trim().to_string())
            .collect();
        Self::from_trimmed(agents)
    }

    /// Builds the key from agents that are already trimmed.
    pub(crate) fn from_trimmed(mut agents: Vec<String>) -> Self {
        agents.sort_by(|a, b| natural_cmp(a, b));
        let joined = agents.join(GROUP_KEY_SEPARATOR.to_string().as_str());
        Self { agents, joined }
    }

    /// Returns the agents in natural order.
    #[must_use]
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Returns the `:`-joined agents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.joined
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.agents == other.agents
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.agents.hash(state);
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined)
    }
}

impl AsRef<str> for GroupKey {
    fn as_ref(&self) -> &str {
        &self.joined
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GroupKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.agents.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GroupKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let agents = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_agents(agents))
    }
}

/// Compares two strings in natural (human) order.
///
/// Runs of ASCII digits compare by numeric value, so `bot2` sorts before
/// `bot10`. All other bytes compare as-is. Strings that differ only in
/// leading zeros fall back to plain string order, keeping the ordering total.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use robots_txt_builder::natural_cmp;
///
/// assert_eq!(natural_cmp("bot2", "bot10"), Ordering::Less);
/// assert_eq!(natural_cmp("bing", "google"), Ordering::Less);
/// ```
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.as_bytes();
    let mut right = b.as_bytes();

    loop {
        match (left.first(), right.first()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let (l_run, l_rest) = split_digit_run(left);
                let (r_run, r_rest) = split_digit_run(right);
                let ord = cmp_digit_runs(l_run, r_run);
                if ord != Ordering::Equal {
                    return ord;
                }
                left = l_rest;
                right = r_rest;
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(r);
                }
                left = &left[1..];
                right = &right[1..];
            }
        }
    }
}

fn split_digit_run(bytes: &[u8]) -> (&[u8], &[u8]) {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    bytes.split_at(len)
}

fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    let zeros = digits.iter().take_while(|&&d| d == b'0').count();
    &digits[zeros..]
}
