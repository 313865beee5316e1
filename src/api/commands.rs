use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color};
use crate::domain::PlayerId;
use crate::engine::{GameEngine, PlayerAction, PlayerActionKind, RandomSource};

use super::dto::{map_outcome_to_response, CommandResponse};
use super::errors::ApiError;

/// Команда игрока в том виде, в каком её приносит транспорт:
/// `{"action":"playCard","player_id":"p1","card":{"Number":{"rank":10,"color":"humans"}}}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum GameCommand {
    SelectTrump { player_id: PlayerId, color: Color },
    SetForecast { player_id: PlayerId, bid: i32 },
    PlayCard { player_id: PlayerId, card: Card },
}

impl From<GameCommand> for PlayerAction {
    fn from(cmd: GameCommand) -> Self {
        match cmd {
            GameCommand::SelectTrump { player_id, color } => {
                PlayerAction::new(player_id, PlayerActionKind::SelectTrump(color))
            }
            GameCommand::SetForecast { player_id, bid } => {
                PlayerAction::new(player_id, PlayerActionKind::SetForecast(bid))
            }
            GameCommand::PlayCard { player_id, card } => {
                PlayerAction::new(player_id, PlayerActionKind::PlayCard(card))
            }
        }
    }
}

/// Разобрать команду из JSON.
pub fn parse_command(raw: &str) -> Result<GameCommand, ApiError> {
    Ok(serde_json::from_str(raw)?)
}

/// Выполнить команду над матчем. При ошибке состояние матча не меняется.
pub fn execute_command<R: RandomSource>(
    engine: &mut GameEngine<R>,
    command: GameCommand,
) -> Result<CommandResponse, ApiError> {
    let outcome = engine.apply(command.into())?;
    Ok(map_outcome_to_response(outcome, engine.standings()))
}
