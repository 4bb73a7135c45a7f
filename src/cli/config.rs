//! Scanner configuration files.
//!
//! ```json
//! { "scan": { "strictMode": true, "skipTrivia": "true" } }
//! ```

use anyhow::{Context, Result};
use ecma_scanner::ScanOptions;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Accepts `true`, `"true"`, `"yes"`, `"1"` and their negative forms.
/// Hand-edited config files often quote booleans.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct RawScanOptions {
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    strict_mode: bool,
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    skip_trivia: bool,
}

impl From<RawScanOptions> for ScanOptions {
    fn from(raw: RawScanOptions) -> Self {
        ScanOptions {
            strict_mode: raw.strict_mode,
            skip_trivia: raw.skip_trivia,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub scan: ScanOptions,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawScanConfig {
    scan: RawScanOptions,
}

pub fn parse_config(source: &str) -> Result<ScanConfig> {
    let raw: RawScanConfig =
        serde_json::from_str(source).context("failed to parse scanner config")?;
    Ok(ScanConfig {
        scan: raw.scan.into(),
    })
}

pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("in config file {}", path.display()))
}
