//! Demo configuration stored as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Demo configuration (TOML).
///
/// Intended to be edited by humans. Missing fields fall back to the defaults
/// the bundled demo uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Flow fragment rendered by the demo.
    pub code: String,

    /// Paradigm names to render the fragment into, in print order.
    /// Unknown names are fine: they hit the fallback template.
    pub paradigms: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            code: "think φ loop".to_string(),
            paradigms: vec![
                "functional".to_string(),
                "logic".to_string(),
                "quantum".to_string(),
                "concurrent".to_string(),
            ],
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(anyhow!("code must be non-empty"));
        }
        if self.paradigms.is_empty() {
            return Err(anyhow!("paradigms must be a non-empty array"));
        }
        if self.paradigms.iter().any(|p| p.trim().is_empty()) {
            return Err(anyhow!("paradigm names must be non-empty"));
        }
        Ok(())
    }
}

/// Load demo config from a TOML file.
///
/// If the file is missing, returns `DemoConfig::default()`.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        let cfg = DemoConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DemoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DemoConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, DemoConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("demo.toml");
        let cfg = DemoConfig {
            code: "flow forever".to_string(),
            paradigms: vec!["array".to_string(), "dance".to_string()],
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn empty_code_is_rejected() {
        let cfg = DemoConfig {
            code: "  ".to_string(),
            ..DemoConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_paradigm_list_is_rejected() {
        let cfg = DemoConfig {
            paradigms: Vec::new(),
            ..DemoConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
