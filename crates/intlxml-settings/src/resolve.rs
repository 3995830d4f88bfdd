use crate::model::IntlxmlConfigV1;
use anyhow::Context;
use globset::Glob;
use intlxml_domain::policy::{CollectOptions, EffectiveConfig, IgnoreSet};

/// Name of the ad-hoc target built from paths given on the command line.
pub const CLI_TARGET: &str = "cli";

/// Accepted value of the optional `schema` key.
pub const CONFIG_SCHEMA_V1: &str = "intlxml.config.v1";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Paths/patterns from the command line. When non-empty they replace configured targets.
    pub paths: Vec<String>,
    /// Restrict the run to these configured targets.
    pub targets: Vec<String>,
    pub check_attributes: Option<bool>,
    pub max_findings: Option<u32>,
}

/// One file group: a name plus ordered patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSpec {
    pub name: String,
    pub patterns: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub targets: Vec<TargetSpec>,
}

pub fn resolve_config(
    cfg: IntlxmlConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = &cfg.schema
        && schema != CONFIG_SCHEMA_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {CONFIG_SCHEMA_V1})");
    }

    let mut effective = EffectiveConfig::default();

    for tag in &cfg.ignore_tags {
        if tag.trim().is_empty() {
            anyhow::bail!("ignore_tags entries must not be empty");
        }
    }
    effective.collect = CollectOptions {
        ignore: IgnoreSet::default().with_tags(cfg.ignore_tags.iter().cloned()),
        attributes: overrides
            .check_attributes
            .or(cfg.check_attributes)
            .unwrap_or(false),
    };

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    let targets = if !overrides.paths.is_empty() {
        vec![TargetSpec {
            name: CLI_TARGET.to_string(),
            patterns: overrides.paths.clone(),
        }]
    } else {
        for name in &overrides.targets {
            if !cfg.targets.contains_key(name) {
                let known: Vec<&str> = cfg.targets.keys().map(String::as_str).collect();
                anyhow::bail!("unknown target: {name} (configured: {})", known.join(", "));
            }
        }
        cfg.targets
            .into_iter()
            .filter(|(name, _)| overrides.targets.is_empty() || overrides.targets.contains(name))
            .map(|(name, tc)| TargetSpec {
                name,
                patterns: tc.src,
            })
            .collect()
    };

    for target in &targets {
        validate_patterns(target)?;
    }

    Ok(ResolvedConfig { effective, targets })
}

fn validate_patterns(target: &TargetSpec) -> anyhow::Result<()> {
    for pattern in &target.patterns {
        let glob = pattern.strip_prefix('!').unwrap_or(pattern);
        Glob::new(glob)
            .with_context(|| format!("invalid pattern for target {}: {pattern}", target.name))?;
    }
    Ok(())
}
