use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color};
use crate::domain::PlayerId;

/// Цвет взятки. Три состояния, и их нельзя схлопывать:
/// «ещё не определён» (пока лежат только N) и «явно без цвета» (первой была Z).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TrickColor {
    #[default]
    Undetermined,
    Colorless,
    Of(Color),
}

impl TrickColor {
    /// Конкретный цвет, если он установлен.
    pub fn color(&self) -> Option<Color> {
        match self {
            TrickColor::Of(c) => Some(*c),
            TrickColor::Undetermined | TrickColor::Colorless => None,
        }
    }
}

/// Козырь раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Trump {
    /// Открыта Z – козырь ещё выбирает игрок.
    Pending,
    /// Открыта N или карт на открытие не хватило.
    NoTrump,
    Color(Color),
}

impl Trump {
    /// Козырь по открытой карте.
    pub fn from_indicator(indicator: Option<&Card>) -> Self {
        match indicator {
            Some(Card::Wizard) => Trump::Pending,
            Some(Card::Number { color, .. }) => Trump::Color(*color),
            Some(Card::Jester) | None => Trump::NoTrump,
        }
    }

    /// Козырный цвет для оценки взятки; `None`, если козырь ещё не выбран.
    pub fn resolved(&self) -> Option<Option<Color>> {
        match self {
            Trump::Pending => None,
            Trump::NoTrump => Some(None),
            Trump::Color(c) => Some(Some(*c)),
        }
    }
}

/// Один ход во взятке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Play {
    pub player_id: PlayerId,
    pub card: Card,
}

/// Взятка: порядок `plays` = порядок ходов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trick {
    pub index: usize,
    pub plays: Vec<Play>,
    pub trick_color: TrickColor,
    /// Выставляется один раз, когда взятка собрана целиком.
    pub winner: Option<PlayerId>,
}

impl Trick {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            plays: Vec::new(),
            trick_color: TrickColor::Undetermined,
            winner: None,
        }
    }

    /// Собрать взятку из готовых ходов, выставляя цвет по тем же правилам,
    /// что и при живой игре.
    pub fn from_plays(index: usize, plays: impl IntoIterator<Item = (PlayerId, Card)>) -> Self {
        let mut trick = Trick::new(index);
        for (player_id, card) in plays {
            trick.record_play(player_id, card);
        }
        trick
    }

    /// Добавить ход. Пока цвет не определён:
    /// цветная карта задаёт цвет, Z делает взятку бесцветной, N ничего не меняет.
    pub fn record_play(&mut self, player_id: PlayerId, card: Card) {
        if self.trick_color == TrickColor::Undetermined {
            match card {
                Card::Number { color, .. } => self.trick_color = TrickColor::Of(color),
                Card::Wizard => self.trick_color = TrickColor::Colorless,
                Card::Jester => {}
            }
        }
        self.plays.push(Play { player_id, card });
    }

    pub fn is_complete(&self, player_count: usize) -> bool {
        self.plays.len() == player_count
    }
}

/// Заявка игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Forecast {
    pub player_id: PlayerId,
    pub bid: u8,
}

/// Раунд. Между раундами не мутируется «в следующий», а заменяется целиком.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub round_number: u8,
    pub tricks: Vec<Trick>,
    pub current_trick_index: usize,
    /// Не больше одной заявки на игрока, в порядке хода.
    pub forecasts: Vec<Forecast>,
    pub tricks_won: BTreeMap<PlayerId, u8>,
    /// Открытая карта козыря (None, если колода кончилась на раздаче).
    pub trump_card: Option<Card>,
    pub trump: Trump,
    pub first_player_index: usize,
}

impl Round {
    pub fn new(
        round_number: u8,
        first_player_index: usize,
        player_ids: &[PlayerId],
        trump_card: Option<Card>,
    ) -> Self {
        Self {
            round_number,
            tricks: Vec::new(),
            current_trick_index: 0,
            forecasts: Vec::new(),
            tricks_won: player_ids.iter().map(|id| (id.clone(), 0)).collect(),
            trump: Trump::from_indicator(trump_card.as_ref()),
            trump_card,
            first_player_index,
        }
    }

    pub fn forecast_of(&self, player_id: &str) -> Option<u8> {
        self.forecasts
            .iter()
            .find(|f| f.player_id == player_id)
            .map(|f| f.bid)
    }

    pub fn forecast_sum(&self) -> u32 {
        self.forecasts.iter().map(|f| f.bid as u32).sum()
    }

    pub fn tricks_won_by(&self, player_id: &str) -> u8 {
        self.tricks_won.get(player_id).copied().unwrap_or(0)
    }

    /// Текущая открытая (незавершённая) взятка, если она уже начата.
    pub fn open_trick(&self) -> Option<&Trick> {
        self.tricks.get(self.current_trick_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_trick_index >= self.round_number as usize
    }
}
