use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;

/// Состояние игрока в матче. Создаётся один раз при старте матча;
/// рука и счётчики перезаполняются движком на границе раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Vec<Card>,
    /// Взятки, взятые в текущем раунде.
    pub tricks_taken: u8,
    /// Заявка на текущий раунд (None – ещё не заявлял).
    pub forecasted_bid: Option<u8>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            hand: Vec::new(),
            tricks_taken: 0,
            forecasted_bid: None,
        }
    }

    pub fn add_card_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Убрать карту из руки. Ищем по значению, не по позиции:
    /// две одинаковые карты (например, два Z) взаимозаменяемы.
    pub fn play_card(&mut self, card: &Card) -> Result<Card, EngineError> {
        let idx = self
            .hand
            .iter()
            .position(|c| c == card)
            .ok_or(EngineError::CardNotInHand)?;
        Ok(self.hand.remove(idx))
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Диапазон не проверяется – это делает движок.
    pub fn set_forecast(&mut self, bid: u8) {
        self.forecasted_bid = Some(bid);
    }

    /// Сброс перед новым раундом.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.tricks_taken = 0;
        self.forecasted_bid = None;
    }
}
