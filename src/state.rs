use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::round::Round;
use crate::domain::summary::RoundSummary;
use crate::domain::PlayerId;
use crate::engine::actions::{ActionKind, NextAction};
use crate::engine::errors::EngineError;
use crate::engine::match_history::MatchHistory;

/// Всё состояние одного матча в одной структуре.
///
/// Движок работает с ней через `&mut` (см. `engine::game_loop`),
/// а на границе раунда `round` заменяется целиком.
/// Структура сериализуема: её можно снять снапшотом и поднять обратно.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MatchState {
    /// Игроки в порядке мест.
    pub players: Vec<Player>,
    pub deck: Deck,
    /// Текущий раунд (после конца матча – последний сыгранный).
    pub round: Option<Round>,
    pub round_number: u8,
    pub total_rounds: u8,
    /// Индекс игрока, чей ход.
    pub current_turn: usize,
    /// Ожидаемое действие; `None` – матч завершён.
    pub expected: Option<ActionKind>,
    /// Накопленный счёт, никогда не сбрасывается.
    pub scores: HashMap<PlayerId, i32>,
    pub completed_rounds: Vec<RoundSummary>,
    pub history: MatchHistory,
}

impl MatchState {
    /// Пустое состояние до первой раздачи.
    pub fn new(player_ids: &[PlayerId], total_rounds: u8) -> Self {
        Self {
            players: player_ids.iter().cloned().map(Player::new).collect(),
            deck: Deck::new(),
            round: None,
            round_number: 1,
            total_rounds,
            current_turn: 0,
            expected: None,
            scores: player_ids.iter().map(|id| (id.clone(), 0)).collect(),
            completed_rounds: Vec::new(),
            history: MatchHistory::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    pub fn player_index(&self, player_id: &str) -> Result<usize, EngineError> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| EngineError::PlayerNotFound(player_id.to_string()))
    }

    pub fn player(&self, player_id: &str) -> Result<&Player, EngineError> {
        let idx = self.player_index(player_id)?;
        Ok(&self.players[idx])
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_turn)
    }

    pub fn round(&self) -> Result<&Round, EngineError> {
        self.round.as_ref().ok_or(EngineError::RoundNotFound)
    }

    pub fn round_mut(&mut self) -> Result<&mut Round, EngineError> {
        self.round.as_mut().ok_or(EngineError::RoundNotFound)
    }

    pub fn score_of(&self, player_id: &str) -> i32 {
        self.scores.get(player_id).copied().unwrap_or(0)
    }

    pub fn is_finished(&self) -> bool {
        self.expected.is_none() && self.round.is_some()
    }

    /// Следующее ожидаемое действие или `None`, если матч окончен.
    pub fn next_action(&self) -> Option<NextAction> {
        let action = self.expected?;
        let player = self.current_player()?;
        Some(NextAction {
            player_id: player.id.clone(),
            action,
        })
    }
}
