use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_BACKEND: &str = "stub";

pub const CONFIG_ENV: &str = "AI_MODEL_CONFIG";
pub const BACKEND_ENV: &str = "AI_MODEL_BACKEND";

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ProcessorConfigFile {
    backend: Option<String>,
}

/// Processor settings. Nothing here changes the payload values; it only picks
/// which registered backend produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub backend: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
        }
    }
}

impl ProcessorConfig {
    /// Load from the optional `AI_MODEL_CONFIG` file, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var(CONFIG_ENV).ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) if !path.trim().is_empty() => Some(read_config_file(Path::new(path))?),
            _ => None,
        };
        let mut cfg = Self::from_file(file_cfg.unwrap_or_default());
        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: ProcessorConfigFile) -> Self {
        Self {
            backend: file
                .backend
                .unwrap_or_else(|| DEFAULT_BACKEND.to_string()),
        }
    }

    fn apply_env(&mut self) {
        if let Ok(backend) = std::env::var(BACKEND_ENV) {
            if !backend.trim().is_empty() {
                self.backend = backend;
            }
        }
    }

    fn validate(&mut self) -> Result<()> {
        self.backend = self.backend.trim().to_lowercase();
        validate_backend_name(&self.backend)
    }
}

fn validate_backend_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(anyhow!("backend name must not be empty"));
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if !valid {
        return Err(anyhow!(
            "backend name '{}' must contain only [a-z0-9_-]",
            name
        ));
    }
    Ok(())
}

fn read_config_file(path: &Path) -> Result<ProcessorConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let cfg = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(cfg)
}
