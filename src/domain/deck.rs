use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color, MAX_RANK, MIN_RANK};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Количество карт в полной колоде: 13 × 4 + 4 Z + 4 N.
pub const DECK_SIZE: usize = 60;

/// Сколько копий каждой спецкарты в колоде.
pub const SPECIAL_COPIES: usize = 4;

/// Колода карт. Верх колоды – конец вектора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Полная колода в фиксированном порядке (см. `reset`).
    pub fn new() -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.reset();
        deck
    }

    /// Пересобрать все 60 карт:
    /// Humans 1..13, Dwarves 1..13, Elves 1..13, Giants 1..13, затем 4 Z, затем 4 N.
    pub fn reset(&mut self) {
        self.cards.clear();
        for color in Color::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                self.cards.push(Card::number(rank, color));
            }
        }
        self.cards
            .extend(std::iter::repeat(Card::Wizard).take(SPECIAL_COPIES));
        self.cards
            .extend(std::iter::repeat(Card::Jester).take(SPECIAL_COPIES));
    }

    /// Перемешать колоду на месте.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять верхнюю карту.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
