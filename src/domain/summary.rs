use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Результат игрока в сыгранном раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRoundResult {
    pub player_id: PlayerId,
    pub bid: u8,
    pub tricks_won: u8,
    /// Изменение счёта за раунд (может быть отрицательным).
    pub score_delta: i32,
    /// Накопленный счёт после раунда.
    pub total_score: i32,
}

impl PlayerRoundResult {
    pub fn hit_forecast(&self) -> bool {
        self.bid == self.tricks_won
    }
}

/// Краткое описание завершённого раунда. Удобно для истории и табло.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_number: u8,
    pub results: Vec<PlayerRoundResult>,
}

impl RoundSummary {
    pub fn result_for(&self, player_id: &str) -> Option<&PlayerRoundResult> {
        self.results.iter().find(|r| r.player_id == player_id)
    }
}
