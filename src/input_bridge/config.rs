use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Intervalle du tir continu tant que le pointeur reste appuyé.
    pub repeat_interval_ms: u64,
    /// Décalage horizontal maximal (±) de l'origine autour du centre de l'écran.
    pub origin_spread: f32,
    /// Tirs rendus au plus par frame quand l'hôte a pris du retard.
    pub max_catch_up: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            repeat_interval_ms: 150,
            origin_spread: 50.0,
            max_catch_up: 2,
        }
    }
}

impl InputConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.repeat_interval_ms > 0, "repeat_interval_ms must be > 0");
        ensure!(
            self.origin_spread.is_finite() && self.origin_spread >= 0.0,
            "origin_spread must be >= 0"
        );
        ensure!(self.max_catch_up > 0, "max_catch_up must be > 0");
        Ok(())
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }
}
