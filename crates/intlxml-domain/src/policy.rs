use std::collections::BTreeSet;

/// Tags whose whole subtree is exempt from collection unless configured otherwise.
pub const DEFAULT_IGNORED_TAGS: [&str; 3] = ["g:evaluate", "script", "g2:evaluate"];

/// Exact-match set of tag names that are never descended into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnoreSet(BTreeSet<String>);

impl Default for IgnoreSet {
    fn default() -> Self {
        Self(DEFAULT_IGNORED_TAGS.iter().map(|t| t.to_string()).collect())
    }
}

impl IgnoreSet {
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectOptions {
    pub ignore: IgnoreSet,
    /// Descend into the reserved attribute key. Off by default.
    pub attributes: bool,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub collect: CollectOptions,
    pub max_findings: usize,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            collect: CollectOptions::default(),
            max_findings: 1000,
        }
    }
}
