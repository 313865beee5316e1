// Общие помощники для интеграционных тестов.
#![allow(dead_code)]

use wizard_engine::domain::{Card, PlayerId, Round, TrickColor, Trump};
use wizard_engine::engine::positions::trump_chooser_index;
use wizard_engine::engine::validation::{allowed_forecasts, legal_cards};
use wizard_engine::engine::{ActionKind, ActionOutcome, GameEngine};
use wizard_engine::infra::DeterministicRng;
use wizard_engine::state::MatchState;

pub fn ids(n: usize) -> Vec<PlayerId> {
    (1..=n).map(|i| format!("p{i}")).collect()
}

/// Карта из короткой записи: "10h", "1e", "Z", "N".
pub fn c(s: &str) -> Card {
    s.parse().expect("valid card notation")
}

pub fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| c(s)).collect()
}

/// Движок с заранее заданными руками.
///
/// Раунд `round_number`, первый игрок `first`, открытая карта `trump_card`.
/// Фаза выставляется так же, как при обычном старте раунда.
pub fn crafted_engine(
    hands: &[&[&str]],
    round_number: u8,
    first: usize,
    trump_card: Option<Card>,
    total_rounds: u8,
) -> GameEngine<DeterministicRng> {
    let player_ids = ids(hands.len());
    let mut state = MatchState::new(&player_ids, total_rounds);
    state.round_number = round_number;

    for (player, hand) in state.players.iter_mut().zip(hands) {
        player.hand = cards(hand);
    }

    let round = Round::new(round_number, first, &player_ids, trump_card);
    if round.trump == Trump::Pending {
        state.expected = Some(ActionKind::SelectTrump);
        state.current_turn = trump_chooser_index(first, hands.len());
    } else {
        state.expected = Some(ActionKind::SetForecast);
        state.current_turn = first;
    }
    state.round = Some(round);

    GameEngine::from_state(state, DeterministicRng::from_seed(7))
}

/// Сделать заявки по очереди хода.
pub fn forecast_all(engine: &mut GameEngine<DeterministicRng>, bids: &[i32]) {
    for &bid in bids {
        let next = engine.next_action().expect("match in progress");
        assert_eq!(next.action, ActionKind::SetForecast);
        engine
            .set_forecast(&next.player_id, bid)
            .expect("forecast accepted");
    }
}

/// Доиграть матч до конца, выбирая первый легальный вариант.
/// Возвращает все результаты принятых действий.
pub fn play_out(engine: &mut GameEngine<DeterministicRng>) -> Vec<ActionOutcome> {
    let mut outcomes = Vec::new();

    while let Some(next) = engine.next_action() {
        let state = engine.state();
        let round = state.round.as_ref().expect("round exists");
        let outcome = match next.action {
            ActionKind::SelectTrump => engine
                .select_trump(&next.player_id, wizard_engine::domain::Color::Dwarves)
                .map(|_| ActionOutcome::Accepted),
            ActionKind::SetForecast => {
                let allowed = allowed_forecasts(
                    round.round_number,
                    round.forecast_sum(),
                    round.forecasts.len(),
                    state.player_count(),
                );
                // Берём последний допустимый: заявки получаются разнообразнее.
                let bid = *allowed.last().expect("some bid is always allowed");
                engine
                    .set_forecast(&next.player_id, bid as i32)
                    .map(|_| ActionOutcome::Accepted)
            }
            ActionKind::PlayCard => {
                let trick_color = round
                    .open_trick()
                    .map(|t| t.trick_color)
                    .unwrap_or(TrickColor::Undetermined);
                let hand = &state.player(&next.player_id).expect("player").hand;
                let card = legal_cards(trick_color, hand)
                    .first()
                    .copied()
                    .expect("some card is always legal");
                engine.play_card(&next.player_id, card)
            }
        };
        outcomes.push(outcome.expect("legal action accepted"));
    }

    outcomes
}
