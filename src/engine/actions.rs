use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color};
use crate::domain::PlayerId;

/// Какое действие движок ждёт следующим.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    SelectTrump,
    SetForecast,
    PlayCard,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::SelectTrump => "selectTrump",
            ActionKind::SetForecast => "setForecast",
            ActionKind::PlayCard => "playCard",
        };
        write!(f, "{s}")
    }
}

/// Полезная нагрузка действия игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PlayerActionKind {
    SelectTrump(Color),
    /// Знаковое число: отрицательную заявку транспорт тоже может прислать.
    SetForecast(i32),
    PlayCard(Card),
}

impl PlayerActionKind {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerActionKind::SelectTrump(_) => ActionKind::SelectTrump,
            PlayerActionKind::SetForecast(_) => ActionKind::SetForecast,
            PlayerActionKind::PlayCard(_) => ActionKind::PlayCard,
        }
    }
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player_id: PlayerId,
    /// Само действие.
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(player_id: impl Into<PlayerId>, kind: PlayerActionKind) -> Self {
        Self {
            player_id: player_id.into(),
            kind,
        }
    }
}

/// Кто и что должен сделать дальше.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextAction {
    pub player_id: PlayerId,
    pub action: ActionKind,
}
