use tracing::{debug, info};

use crate::domain::card::{Card, Color};
use crate::domain::config::MatchConfig;
use crate::domain::deck::DECK_SIZE;
use crate::domain::round::{Forecast, Round, Trick, Trump};
use crate::domain::summary::RoundSummary;
use crate::domain::PlayerId;
use crate::engine::actions::{ActionKind, NextAction, PlayerAction, PlayerActionKind};
use crate::engine::errors::EngineError;
use crate::engine::match_history::MatchEventKind;
use crate::engine::positions::{next_index, rotate_first_player, trump_chooser_index};
use crate::engine::scoring::score_round;
use crate::engine::validation::{
    validate_dealer_constraint, validate_forecast_range, validate_play,
};
use crate::engine::RandomSource;
use crate::eval::evaluate_trick;
use crate::infra::rng::MatchRng;
use crate::state::MatchState;

/// Результат принятого действия для внешнего кода.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// Действие принято, взятка (если шла) продолжается.
    Accepted,
    /// Взятка собрана.
    TrickCompleted {
        trick_index: usize,
        winner: PlayerId,
    },
    /// Раунд закончен и посчитан, следующий уже начат.
    RoundFinished(RoundSummary),
    /// Последний раунд посчитан, матч завершён.
    MatchFinished(RoundSummary),
}

/// Старт нового раунда:
/// - пересобирает и тасует колоду;
/// - раздаёт по `round_number` карт каждому в порядке мест;
/// - открывает карту козыря (если колода не кончилась);
/// - выбирает первого игрока и ожидаемое действие.
///
/// Раунд заменяется целиком.
pub fn start_round<R: RandomSource>(state: &mut MatchState, rng: &mut R) -> Result<(), EngineError> {
    let n = state.player_count();
    if n == 0 {
        return Err(EngineError::NotEnoughPlayers);
    }
    if state.round_number as usize * n > DECK_SIZE {
        return Err(EngineError::EmptyDeck);
    }

    let first_player_index = match &state.round {
        Some(previous) => rotate_first_player(previous.first_player_index, n),
        None => rng.index_below(n),
    };

    state.deck.reset();
    state.deck.shuffle(rng);

    for player in state.players.iter_mut() {
        player.reset_for_round();
    }
    for _ in 0..state.round_number {
        for player in state.players.iter_mut() {
            player.add_card_to_hand(state.deck.draw()?);
        }
    }

    let trump_card = if state.deck.is_empty() {
        None
    } else {
        Some(state.deck.draw()?)
    };

    let round = Round::new(
        state.round_number,
        first_player_index,
        &state.player_ids(),
        trump_card,
    );

    if round.trump == Trump::Pending {
        state.expected = Some(ActionKind::SelectTrump);
        state.current_turn = trump_chooser_index(first_player_index, n);
    } else {
        state.expected = Some(ActionKind::SetForecast);
        state.current_turn = first_player_index;
    }

    let first_player = state.players[first_player_index].id.clone();
    info!(
        round = state.round_number,
        first_player = %first_player,
        trump = ?round.trump,
        "round started"
    );
    state.history.push(MatchEventKind::RoundStarted {
        round_number: state.round_number,
        first_player,
        trump_card,
        trump: round.trump,
    });

    state.round = Some(round);
    Ok(())
}

/// Общая проверка перед любым изменяющим действием.
/// Возвращает индекс действующего игрока.
fn authorize(
    state: &MatchState,
    player_id: &str,
    requested: ActionKind,
) -> Result<usize, EngineError> {
    state.round()?;
    let expected = state.expected.ok_or(EngineError::MatchFinished)?;
    let idx = state.player_index(player_id)?;

    if idx != state.current_turn {
        return Err(EngineError::NotYourTurn(player_id.to_string()));
    }
    if expected != requested {
        return Err(EngineError::WrongPhase);
    }

    Ok(idx)
}

/// Выбор козыря после открытой Z.
/// Заявки после этого всегда начинает первый игрок раунда.
pub fn select_trump(state: &mut MatchState, player_id: &str, color: Color) -> Result<(), EngineError> {
    authorize(state, player_id, ActionKind::SelectTrump)?;

    let round = state.round_mut()?;
    round.trump = Trump::Color(color);
    let first = round.first_player_index;

    state.expected = Some(ActionKind::SetForecast);
    state.current_turn = first;

    debug!(player = player_id, ?color, "trump selected");
    state.history.push(MatchEventKind::TrumpSelected {
        player_id: player_id.to_string(),
        color,
    });
    Ok(())
}

/// Заявка игрока на число взяток.
pub fn set_forecast(state: &mut MatchState, player_id: &str, bid: i32) -> Result<(), EngineError> {
    let idx = authorize(state, player_id, ActionKind::SetForecast)?;
    let n = state.player_count();

    let round = state.round()?;
    let bid = validate_forecast_range(bid, round.round_number)?;
    if round.forecast_of(player_id).is_some() {
        return Err(EngineError::ForecastAlreadySet);
    }
    validate_dealer_constraint(
        bid,
        round.round_number,
        round.forecast_sum(),
        round.forecasts.len(),
        n,
    )?;

    let round = state.round_mut()?;
    round.forecasts.push(Forecast {
        player_id: player_id.to_string(),
        bid,
    });
    let all_forecast = round.forecasts.len() == n;

    state.players[idx].set_forecast(bid);
    state.current_turn = next_index(idx, n);
    if all_forecast {
        state.expected = Some(ActionKind::PlayCard);
    }

    debug!(player = player_id, bid, all_forecast, "forecast set");
    state.history.push(MatchEventKind::ForecastSet {
        player_id: player_id.to_string(),
        bid,
    });
    Ok(())
}

/// Ход картой.
///
/// Все проверки идут до первой мутации, поэтому отклонённый ход
/// состояние не меняет.
pub fn play_card<R: RandomSource>(
    state: &mut MatchState,
    rng: &mut R,
    player_id: &str,
    card: Card,
) -> Result<ActionOutcome, EngineError> {
    let idx = authorize(state, player_id, ActionKind::PlayCard)?;
    let n = state.player_count();

    let round = state.round()?;
    let (trick_color, plays_so_far) = match round.open_trick() {
        Some(trick) => (trick.trick_color, trick.plays.len()),
        None => (Default::default(), 0),
    };

    if plays_so_far > 0 {
        validate_play(&card, trick_color, &state.players[idx].hand)?;
    }
    if !state.players[idx].has_card(&card) {
        return Err(EngineError::CardNotInHand);
    }

    let completes_trick = plays_so_far + 1 == n;
    let trump = match round.trump.resolved() {
        Some(trump) => trump,
        None if completes_trick => {
            return Err(EngineError::Internal("козырь не выбран к концу взятки"));
        }
        None => None,
    };

    // Дальше только мутации.
    let played = state.players[idx].play_card(&card)?;

    let round = state.round.as_mut().ok_or(EngineError::RoundNotFound)?;
    let trick_index = round.current_trick_index;
    if round.tricks.len() <= trick_index {
        round.tricks.push(Trick::new(trick_index));
    }
    let trick = &mut round.tricks[trick_index];
    trick.record_play(player_id.to_string(), played);

    state.history.push(MatchEventKind::CardPlayed {
        trick_index,
        player_id: player_id.to_string(),
        card: played,
    });
    state.current_turn = next_index(idx, n);
    debug!(player = player_id, card = %played, trick = trick_index, "card played");

    if !trick.is_complete(n) {
        return Ok(ActionOutcome::Accepted);
    }

    let winner = evaluate_trick(trick, trump).ok_or(EngineError::Internal("пустая взятка"))?;
    trick.winner = Some(winner.clone());
    *round.tricks_won.entry(winner.clone()).or_insert(0) += 1;
    round.current_trick_index += 1;
    let round_finished = round.is_finished();

    let winner_idx = state.player_index(&winner)?;
    state.players[winner_idx].tricks_taken += 1;
    state.current_turn = winner_idx;

    info!(trick = trick_index, winner = %winner, "trick won");
    state.history.push(MatchEventKind::TrickWon {
        trick_index,
        player_id: winner.clone(),
    });

    if round_finished {
        finish_round(state, rng)
    } else {
        Ok(ActionOutcome::TrickCompleted {
            trick_index,
            winner,
        })
    }
}

/// Подсчёт очков раунда и переход к следующему раунду / концу матча.
fn finish_round<R: RandomSource>(
    state: &mut MatchState,
    rng: &mut R,
) -> Result<ActionOutcome, EngineError> {
    let round = state.round.as_ref().ok_or(EngineError::RoundNotFound)?;
    let summary = score_round(round, &mut state.scores);

    info!(round = summary.round_number, "round scored");
    state.history.push(MatchEventKind::RoundScored {
        round_number: summary.round_number,
        deltas: summary
            .results
            .iter()
            .map(|r| (r.player_id.clone(), r.score_delta))
            .collect(),
    });
    state.completed_rounds.push(summary.clone());
    state.round_number += 1;

    if state.round_number <= state.total_rounds {
        start_round(state, rng)?;
        return Ok(ActionOutcome::RoundFinished(summary));
    }

    state.expected = None;
    let final_scores = standings(state);
    info!(?final_scores, "match finished");
    state
        .history
        .push(MatchEventKind::MatchFinished { final_scores });
    Ok(ActionOutcome::MatchFinished(summary))
}

/// Применить действие игрока (единая точка входа для транспорта).
pub fn apply_action<R: RandomSource>(
    state: &mut MatchState,
    rng: &mut R,
    action: PlayerAction,
) -> Result<ActionOutcome, EngineError> {
    match action.kind {
        PlayerActionKind::SelectTrump(color) => {
            select_trump(state, &action.player_id, color).map(|_| ActionOutcome::Accepted)
        }
        PlayerActionKind::SetForecast(bid) => {
            set_forecast(state, &action.player_id, bid).map(|_| ActionOutcome::Accepted)
        }
        PlayerActionKind::PlayCard(card) => play_card(state, rng, &action.player_id, card),
    }
}

/// Итоговая таблица: по убыванию счёта, при равенстве – в порядке мест.
pub fn standings(state: &MatchState) -> Vec<(PlayerId, i32)> {
    let mut table: Vec<(PlayerId, i32)> = state
        .players
        .iter()
        .map(|p| (p.id.clone(), state.score_of(&p.id)))
        .collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

/// Владелец одного матча: состояние + RNG.
///
/// Один экземпляр – один матч; вызовы обрабатываются строго по одному.
#[derive(Clone, Debug)]
pub struct GameEngine<R: RandomSource> {
    pub state: MatchState,
    rng: R,
}

/// Старт матча с RNG, выбранным по конфигу.
pub fn start_match(
    player_ids: Vec<PlayerId>,
    config: &MatchConfig,
) -> Result<GameEngine<MatchRng>, EngineError> {
    GameEngine::new(player_ids, config, MatchRng::from_config(config))
}

impl<R: RandomSource> GameEngine<R> {
    /// Создать матч и сразу раздать первый раунд.
    pub fn new(player_ids: Vec<PlayerId>, config: &MatchConfig, mut rng: R) -> Result<Self, EngineError> {
        let total_rounds = config.validate(&player_ids)?;
        let mut state = MatchState::new(&player_ids, total_rounds);
        start_round(&mut state, &mut rng)?;

        info!(players = player_ids.len(), total_rounds, "match started");
        Ok(Self { state, rng })
    }

    /// Поднять движок из готового состояния (снапшот, тестовая раскладка).
    pub fn from_state(state: MatchState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_state(self) -> MatchState {
        self.state
    }

    pub fn select_trump(&mut self, player_id: &str, color: Color) -> Result<(), EngineError> {
        select_trump(&mut self.state, player_id, color)
            .inspect_err(|e| debug!(player = player_id, error = %e, "select_trump rejected"))
    }

    pub fn set_forecast(&mut self, player_id: &str, bid: i32) -> Result<(), EngineError> {
        set_forecast(&mut self.state, player_id, bid)
            .inspect_err(|e| debug!(player = player_id, error = %e, "set_forecast rejected"))
    }

    pub fn play_card(&mut self, player_id: &str, card: Card) -> Result<ActionOutcome, EngineError> {
        play_card(&mut self.state, &mut self.rng, player_id, card)
            .inspect_err(|e| debug!(player = player_id, error = %e, "play_card rejected"))
    }

    pub fn apply(&mut self, action: PlayerAction) -> Result<ActionOutcome, EngineError> {
        let player_id = action.player_id.clone();
        let kind = action.kind.kind();
        apply_action(&mut self.state, &mut self.rng, action)
            .inspect_err(|e| debug!(player = %player_id, action = %kind, error = %e, "action rejected"))
    }

    pub fn next_action(&self) -> Option<NextAction> {
        self.state.next_action()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn standings(&self) -> Vec<(PlayerId, i32)> {
        standings(&self.state)
    }
}
