//! Доменная модель игры: карты, колода, игроки, раунды и взятки, конфиг матча.

pub mod card;
pub mod config;
pub mod deck;
pub mod player;
pub mod round;
pub mod summary;

/// Непрозрачный идентификатор игрока (его выдаёт транспорт).
pub type PlayerId = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use config::*;
pub use deck::*;
pub use player::*;
pub use round::*;
pub use summary::*;
