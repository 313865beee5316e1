//! Оценка взяток.

pub mod evaluator;

pub use evaluator::{card_value, evaluate_trick, TRUMP_MULTIPLIER};
