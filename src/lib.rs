//! Движок правил карточной игры на взятки (Wizard-подобной).
//!
//! Матч – последовательность раундов с растущим размером руки:
//! открытие козыря, заявки на число взяток, розыгрыш взяток, подсчёт очков.
//! Движок не делает I/O: транспорт вызывает три изменяющие операции
//! (`select_trump`, `set_forecast`, `play_card`) и забирает снапшот
//! для каждого игрока через `api::build_state_view`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod lobby;
pub mod state;

pub use domain::{Card, Color, MatchConfig, PlayerId};
pub use engine::{start_match, ActionOutcome, EngineError, GameEngine};
pub use state::MatchState;
