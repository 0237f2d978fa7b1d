//! Настройки одной раздачи для dev-CLI и движка.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PLAYERS: usize = 4;
pub const MIN_PLAYERS: usize = 2;
/// 10 игроков × 2 карты + 5 на борд укладываются в 52.
pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Число игроков должно быть от 2 до 10, получено {0}")]
    PlayerCount(usize),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundConfig {
    pub players: usize,
    /// Seed для воспроизводимой раздачи; `None` – системный RNG.
    pub seed: Option<u64>,
    /// Печатать отчёты в JSON.
    pub json: bool,
    /// Вместо раздачи: дуэль по одной карте до конца колоды.
    #[serde(default)]
    pub duel: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            seed: None,
            json: false,
            duel: false,
        }
    }
}

impl RoundConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        Ok(())
    }
}
