use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::{EngineError, GameEngine, RandomSource};
use crate::state::MatchState;

use super::dto::{GameStateDto, PlayerPublicDto, PlayerScoreDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Снапшот матча для конкретного игрока.
    GetState { player_id: PlayerId },

    /// Текущая таблица очков.
    GetStandings,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    State(Box<GameStateDto>),
    Standings(Vec<PlayerScoreDto>),
}

/// Сформировать снапшот для игрока: чужие руки видны только размером.
pub fn build_state_view(state: &MatchState, player_id: &str) -> Result<GameStateDto, EngineError> {
    let me = state.player(player_id)?;

    let players = state
        .players
        .iter()
        .map(|p| PlayerPublicDto {
            id: p.id.clone(),
            tricks_taken: p.tricks_taken,
            tricks_forecasted: p.forecasted_bid,
            cards_in_hand: p.hand.len(),
        })
        .collect();

    let scores = state
        .players
        .iter()
        .map(|p| PlayerScoreDto {
            player_id: p.id.clone(),
            score: state.score_of(&p.id),
        })
        .collect();

    Ok(GameStateDto {
        round: state.round.clone(),
        round_number: state.round_number,
        total_rounds: state.total_rounds,
        players,
        current_hand: me.hand.clone(),
        current_turn: state.current_player().map(|p| p.id.clone()),
        scores,
        next_action: state.next_action(),
        finished: state.is_finished(),
    })
}

pub fn answer_query<R: RandomSource>(
    engine: &GameEngine<R>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetState { player_id } => {
            let view = build_state_view(engine.state(), &player_id)?;
            Ok(QueryResponse::State(Box::new(view)))
        }
        Query::GetStandings => Ok(QueryResponse::Standings(
            engine
                .standings()
                .into_iter()
                .map(|(player_id, score)| PlayerScoreDto { player_id, score })
                .collect(),
        )),
    }
}
