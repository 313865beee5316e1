use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что транспорт пересылает игроку).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Игрок не участвует в матче.
    PlayerNotFound(PlayerId),

    /// Ход другого игрока.
    NotYourTurn(PlayerId),

    /// Действие нарушает правила (фаза, заявка, масть, карта).
    RuleViolation(String),

    /// Внутренняя ошибка движка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::PlayerNotFound(id) => ApiError::PlayerNotFound(id),
            EngineError::NotYourTurn(id) => ApiError::NotYourTurn(id),
            EngineError::RoundNotFound | EngineError::EmptyDeck | EngineError::Internal(_) => {
                ApiError::Internal(err.to_string())
            }
            other => ApiError::RuleViolation(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
