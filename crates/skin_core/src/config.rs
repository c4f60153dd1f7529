use std::{fs, io, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "skins.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkinConfig {
    pub flush_interval_ms: u64,
    /// How long the loop sleeps when no timer is armed.
    pub idle_wait_ms: u64,
    pub loop_capacity: usize,
    pub tooltip_delay_ms: u64,
    pub log_filter: String,
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            flush_interval_ms: 10,
            idle_wait_ms: 1000,
            loop_capacity: 1024,
            tooltip_delay_ms: 500,
            log_filter: "info".into(),
        }
    }
}

impl SkinConfig {
    pub fn flush_interval(&self) -> Duration {
        Duration::from_millis(self.flush_interval_ms)
    }

    pub fn idle_wait(&self) -> Duration {
        Duration::from_millis(self.idle_wait_ms)
    }

    pub fn tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_delay_ms)
    }

    /// Applies `SKINS_*` then `APP__*` overrides read through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| {
            lookup(&format!("APP__{key}")).or_else(|| lookup(&format!("SKINS_{key}")))
        };

        override_number(&mut self.flush_interval_ms, "FLUSH_INTERVAL_MS", &get);
        override_number(&mut self.idle_wait_ms, "IDLE_WAIT_MS", &get);
        override_number(&mut self.loop_capacity, "LOOP_CAPACITY", &get);
        override_number(&mut self.tooltip_delay_ms, "TOOLTIP_DELAY_MS", &get);
        if let Some(v) = get("LOG") {
            self.log_filter = v;
        }
    }
}

fn override_number<T: std::str::FromStr>(
    field: &mut T,
    key: &str,
    get: &impl Fn(&str) -> Option<String>,
) {
    let Some(raw) = get(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(parsed) => *field = parsed,
        Err(_) => tracing::warn!(key, value = %raw, "ignoring malformed config override"),
    }
}

/// Reads `skins.toml` from the working directory, then the environment.
pub fn load_config() -> anyhow::Result<SkinConfig> {
    let mut config = load_config_from(CONFIG_FILE)?;
    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

/// Reads a config file; a missing file yields the defaults.
pub fn load_config_from(path: impl AsRef<Path>) -> anyhow::Result<SkinConfig> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(SkinConfig::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };
    toml::from_str(&raw).with_context(|| format!("failed to parse '{}'", path.display()))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
