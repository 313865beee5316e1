use std::sync::atomic::{AtomicU64, Ordering};

use crate::engine::match_manager::MatchId;

/// Простая генерация ID матчей на основе монотонного счётчика.
#[derive(Debug)]
pub struct IdGenerator {
    match_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            match_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_match_id(&self) -> MatchId {
        self.match_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
