// src/engine/match_manager.rs

use std::collections::HashMap;

use thiserror::Error;
use tracing::info;

use crate::domain::config::MatchConfig;
use crate::domain::PlayerId;
use crate::engine::{ActionOutcome, EngineError, GameEngine, PlayerAction, RandomSource};
use crate::infra::ids::IdGenerator;

pub type MatchId = u64;

/// Ошибки уровня менеджера матчей (над движком одного матча).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// Матч с таким ID не найден.
    #[error("Матч {0} не найден")]
    MatchNotFound(MatchId),

    /// Проброшенная ошибка из движка (EngineError).
    #[error(transparent)]
    Engine(EngineError),
}

impl From<EngineError> for ManagerError {
    fn from(e: EngineError) -> Self {
        ManagerError::Engine(e)
    }
}

/// Менеджер матчей:
/// - один движок на матч, матчи между собой не связаны;
/// - команды маршрутизируются по MatchId.
pub struct MatchManager<R: RandomSource> {
    matches: HashMap<MatchId, GameEngine<R>>,
    ids: IdGenerator,
}

impl<R: RandomSource> MatchManager<R> {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self {
            matches: HashMap::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Запустить новый матч и вернуть его id.
    pub fn create_match(
        &mut self,
        player_ids: Vec<PlayerId>,
        config: &MatchConfig,
        rng: R,
    ) -> Result<MatchId, ManagerError> {
        let engine = GameEngine::new(player_ids, config, rng)?;
        let id = self.ids.next_match_id();
        self.matches.insert(id, engine);
        info!(match_id = id, "match registered in manager");
        Ok(id)
    }

    pub fn has_match(&self, match_id: MatchId) -> bool {
        self.matches.contains_key(&match_id)
    }

    pub fn engine(&self, match_id: MatchId) -> Option<&GameEngine<R>> {
        self.matches.get(&match_id)
    }

    /// Применить действие игрока в нужном матче.
    pub fn apply(
        &mut self,
        match_id: MatchId,
        action: PlayerAction,
    ) -> Result<ActionOutcome, ManagerError> {
        let engine = self
            .matches
            .get_mut(&match_id)
            .ok_or(ManagerError::MatchNotFound(match_id))?;
        Ok(engine.apply(action)?)
    }

    /// Убрать матч (например, после его окончания).
    pub fn remove_match(&mut self, match_id: MatchId) -> Option<GameEngine<R>> {
        self.matches.remove(&match_id)
    }

    pub fn match_ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<MatchId> = self.matches.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl<R: RandomSource> Default for MatchManager<R> {
    fn default() -> Self {
        Self::new()
    }
}
