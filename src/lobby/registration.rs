use thiserror::Error;
use tracing::info;

use crate::domain::config::MatchConfig;
use crate::domain::PlayerId;
use crate::engine::{EngineError, GameEngine, RandomSource};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LobbyError {
    #[error("Матч уже начался, регистрация закрыта")]
    AlreadyStarted,

    #[error("Игрок {0} не зарегистрирован")]
    NotRegistered(PlayerId),

    #[error("Нужно минимум {min} игроков, зарегистрировано {registered}")]
    NotEnoughPlayers { min: usize, registered: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Регистрация игроков до старта матча.
///
/// Порядок регистрации = порядок мест в матче.
#[derive(Clone, Debug, Default)]
pub struct MatchLobby {
    registered: Vec<PlayerId>,
    started: bool,
}

impl MatchLobby {
    pub fn new() -> Self {
        Self::default()
    }

    /// Повторная регистрация того же игрока ничего не меняет.
    pub fn register(&mut self, player_id: impl Into<PlayerId>) -> Result<&[PlayerId], LobbyError> {
        if self.started {
            return Err(LobbyError::AlreadyStarted);
        }
        let player_id = player_id.into();
        if !self.registered.contains(&player_id) {
            info!(player = %player_id, "player registered");
            self.registered.push(player_id);
        }
        Ok(&self.registered)
    }

    /// Убрать игрока (например, при отключении). Возвращает, был ли он в списке.
    pub fn unregister(&mut self, player_id: &str) -> bool {
        let before = self.registered.len();
        self.registered.retain(|p| p != player_id);
        before != self.registered.len()
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.registered
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Запустить матч. Стартовать может только зарегистрированный игрок.
    pub fn start<R: RandomSource>(
        &mut self,
        requested_by: &str,
        config: &MatchConfig,
        rng: R,
    ) -> Result<GameEngine<R>, LobbyError> {
        if self.started {
            return Err(LobbyError::AlreadyStarted);
        }
        if !self.registered.iter().any(|p| p == requested_by) {
            return Err(LobbyError::NotRegistered(requested_by.to_string()));
        }
        if self.registered.len() < config.min_players {
            return Err(LobbyError::NotEnoughPlayers {
                min: config.min_players,
                registered: self.registered.len(),
            });
        }

        let engine = GameEngine::new(self.registered.clone(), config, rng)?;
        self.started = true;
        info!(players = self.registered.len(), "match started from lobby");
        Ok(engine)
    }
}
