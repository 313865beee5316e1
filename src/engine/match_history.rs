use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color};
use crate::domain::round::Trump;
use crate::domain::PlayerId;

/// Тип события в матче. Розданные руки сюда не пишутся.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum MatchEventKind {
    /// Новый раунд: карты розданы, козырь открыт.
    RoundStarted {
        round_number: u8,
        first_player: PlayerId,
        trump_card: Option<Card>,
        trump: Trump,
    },

    /// Игрок выбрал козырь после открытой Z.
    TrumpSelected {
        player_id: PlayerId,
        color: Color,
    },

    ForecastSet {
        player_id: PlayerId,
        bid: u8,
    },

    CardPlayed {
        trick_index: usize,
        player_id: PlayerId,
        card: Card,
    },

    TrickWon {
        trick_index: usize,
        player_id: PlayerId,
    },

    /// Очки за раунд начислены.
    RoundScored {
        round_number: u8,
        deltas: Vec<(PlayerId, i32)>,
    },

    MatchFinished {
        final_scores: Vec<(PlayerId, i32)>,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub index: u32,
    pub kind: MatchEventKind,
}

/// Полная история матча.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchHistory {
    pub events: Vec<MatchEvent>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: MatchEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(MatchEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&MatchEvent> {
        self.events.last()
    }
}
