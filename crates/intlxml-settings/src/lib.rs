//! Config parsing and target/policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{IntlxmlConfigV1, TargetConfig};
pub use resolve::{CLI_TARGET, CONFIG_SCHEMA_V1, Overrides, ResolvedConfig, TargetSpec};

/// Parse `intlxml.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<IntlxmlConfigV1> {
    let cfg: IntlxmlConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (defaults + config file + CLI overrides).
pub fn resolve_config(
    cfg: IntlxmlConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
