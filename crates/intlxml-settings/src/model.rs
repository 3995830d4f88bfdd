use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `intlxml.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntlxmlConfigV1 {
    /// Optional schema string for tooling (`intlxml.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Extra tag names whose subtree is never checked (added to the built-in set).
    #[serde(default)]
    pub ignore_tags: Vec<String>,

    /// Check attribute values as well as element text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_attributes: Option<bool>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Map of target name -> file patterns.
    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Glob patterns or literal paths, relative to the root. `!` excludes earlier matches.
    #[serde(default)]
    pub src: Vec<String>,
}
