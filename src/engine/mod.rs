//! Игровой движок: фазы раунда, очерёдность, легальность ходов, подсчёт очков.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `select_trump` – выбрать козырь после открытой Z
//!   - `set_forecast` – заявка на число взяток
//!   - `play_card` – ход картой (сбор взятки, конец раунда, конец матча)

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod match_history;
pub mod match_manager;
pub mod positions;
pub mod scoring;
pub mod validation;

pub use actions::{ActionKind, NextAction, PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use game_loop::{
    apply_action, play_card, select_trump, set_forecast, standings, start_match, start_round,
    ActionOutcome, GameEngine,
};
pub use match_history::{MatchEvent, MatchEventKind, MatchHistory};
pub use match_manager::{ManagerError, MatchId, MatchManager};
pub use validation::is_card_allowed;

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс из `0..upper` (`upper > 0`).
    fn index_below(&mut self, upper: usize) -> usize;
}
