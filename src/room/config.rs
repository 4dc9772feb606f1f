use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomMode {
    /// Salon simulé avec deux bots.
    #[default]
    Mock,
    /// Joueur seul.
    Offline,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoomConfig {
    pub mode: RoomMode,
    pub bot_launch_interval_ms: u64,
    pub bot_launch_chance: f64,
    pub bot_chat_interval_ms: u64,
    pub bot_chat_chance: f64,
    pub chat_history_limit: usize,
    pub seed: Option<u64>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            mode: RoomMode::Mock,
            bot_launch_interval_ms: 2000,
            bot_launch_chance: 0.3,
            bot_chat_interval_ms: 5000,
            bot_chat_chance: 0.15,
            chat_history_limit: 200,
            seed: None,
        }
    }
}

impl RoomConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.bot_launch_interval_ms > 0 && self.bot_chat_interval_ms > 0,
            "bot intervals must be > 0"
        );
        ensure!(
            (0.0..=1.0).contains(&self.bot_launch_chance)
                && (0.0..=1.0).contains(&self.bot_chat_chance),
            "bot chances must be in [0, 1]"
        );
        ensure!(self.chat_history_limit > 0, "chat_history_limit must be > 0");
        Ok(())
    }

    pub fn bot_launch_interval(&self) -> Duration {
        Duration::from_millis(self.bot_launch_interval_ms)
    }

    pub fn bot_chat_interval(&self) -> Duration {
        Duration::from_millis(self.bot_chat_interval_ms)
    }
}
