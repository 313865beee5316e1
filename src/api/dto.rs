use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::round::Round;
use crate::domain::summary::RoundSummary;
use crate::domain::PlayerId;
use crate::engine::{ActionOutcome, NextAction};

/// Публичная информация об игроке: руку видно только размером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicDto {
    pub id: PlayerId,
    pub tricks_taken: u8,
    pub tricks_forecasted: Option<u8>,
    pub cards_in_hand: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerScoreDto {
    pub player_id: PlayerId,
    pub score: i32,
}

/// Снапшот матча глазами одного игрока.
///
/// Это копия: ссылок на живое состояние движка в нём нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameStateDto {
    /// Текущий раунд со всей историей взяток и козырем.
    pub round: Option<Round>,
    pub round_number: u8,
    pub total_rounds: u8,
    /// Игроки в порядке мест.
    pub players: Vec<PlayerPublicDto>,
    /// Рука запросившего игрока.
    pub current_hand: Vec<Card>,
    pub current_turn: Option<PlayerId>,
    /// Накопленный счёт в порядке мест.
    pub scores: Vec<PlayerScoreDto>,
    /// Кто и что делает дальше; `None` – матч окончен.
    pub next_action: Option<NextAction>,
    pub finished: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Взятка собрана.
    TrickCompleted { trick_index: usize, winner: PlayerId },

    /// Раунд посчитан, начат следующий.
    RoundFinished(RoundSummary),

    /// Матч завершён; итоговая таблица по убыванию счёта.
    MatchFinished {
        last_round: RoundSummary,
        standings: Vec<PlayerScoreDto>,
    },
}

/// Помощник: преобразование результата движка в ответ API.
pub fn map_outcome_to_response(
    outcome: ActionOutcome,
    standings: Vec<(PlayerId, i32)>,
) -> CommandResponse {
    match outcome {
        ActionOutcome::Accepted => CommandResponse::Ok,
        ActionOutcome::TrickCompleted {
            trick_index,
            winner,
        } => CommandResponse::TrickCompleted {
            trick_index,
            winner,
        },
        ActionOutcome::RoundFinished(summary) => CommandResponse::RoundFinished(summary),
        ActionOutcome::MatchFinished(summary) => CommandResponse::MatchFinished {
            last_round: summary,
            standings: standings
                .into_iter()
                .map(|(player_id, score)| PlayerScoreDto { player_id, score })
                .collect(),
        },
    }
}
