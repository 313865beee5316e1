//! Конфигурация матча.
//!
//! Конфиг – обычная serde-структура: его можно собрать в коде
//! или загрузить из JSON (`MatchConfig::from_json`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::deck::DECK_SIZE;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;

/// Классическое число раундов матча.
pub const DEFAULT_TOTAL_ROUNDS: u8 = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatchConfig {
    /// Сколько раундов играть. `None` – `min(10, 60 / игроков)`.
    pub total_rounds: Option<u8>,
    pub min_players: usize,
    pub max_players: usize,
    /// Seed для воспроизводимых матчей (dev-CLI, тесты, реплей).
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_rounds: None,
            min_players: 2,
            max_players: 6,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        serde_json::from_str(raw).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }

    pub fn with_total_rounds(mut self, rounds: u8) -> Self {
        self.total_rounds = Some(rounds);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Сколько раундов максимально влезает в колоду при данном числе игроков.
    pub fn max_rounds_for(player_count: usize) -> u8 {
        if player_count == 0 {
            return 0;
        }
        (DECK_SIZE / player_count).min(u8::MAX as usize) as u8
    }

    /// Проверить состав игроков и вернуть итоговое число раундов.
    pub fn validate(&self, player_ids: &[PlayerId]) -> Result<u8, EngineError> {
        if self.min_players < 2 || self.min_players > self.max_players {
            return Err(EngineError::InvalidConfig(format!(
                "некорректные границы числа игроков: {}..={}",
                self.min_players, self.max_players
            )));
        }

        let count = player_ids.len();
        if count < self.min_players {
            return Err(EngineError::NotEnoughPlayers);
        }
        if count > self.max_players {
            return Err(EngineError::TooManyPlayers);
        }

        let mut seen = HashSet::with_capacity(count);
        for id in player_ids {
            if !seen.insert(id.as_str()) {
                return Err(EngineError::DuplicatePlayer(id.clone()));
            }
        }

        let capacity = Self::max_rounds_for(count);
        let rounds = self
            .total_rounds
            .unwrap_or_else(|| DEFAULT_TOTAL_ROUNDS.min(capacity));

        if rounds == 0 {
            return Err(EngineError::InvalidConfig("нужен хотя бы один раунд".into()));
        }
        if rounds > capacity {
            return Err(EngineError::InvalidConfig(format!(
                "{rounds} раундов не хватит колоды на {count} игроков (максимум {capacity})"
            )));
        }

        Ok(rounds)
    }
}
