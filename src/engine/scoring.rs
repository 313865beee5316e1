use std::collections::HashMap;

use crate::domain::round::Round;
use crate::domain::summary::{PlayerRoundResult, RoundSummary};
use crate::domain::PlayerId;

/// Очки за точное попадание: база + за каждую заявленную взятку.
pub const EXACT_BASE: i32 = 20;
pub const PER_TRICK: i32 = 10;

/// Изменение счёта за раунд: точно – `20 + 10 × заявка`,
/// иначе минус `10 × |заявка − взято|`.
pub fn round_score_delta(bid: u8, tricks_won: u8) -> i32 {
    let bid = bid as i32;
    let won = tricks_won as i32;
    if bid == won {
        EXACT_BASE + bid * PER_TRICK
    } else {
        -PER_TRICK * (bid - won).abs()
    }
}

/// Начислить очки за раунд и вернуть его итог.
/// Порядок результатов – порядок заявок.
pub fn score_round(round: &Round, scores: &mut HashMap<PlayerId, i32>) -> RoundSummary {
    let results = round
        .forecasts
        .iter()
        .map(|forecast| {
            let won = round.tricks_won_by(&forecast.player_id);
            let delta = round_score_delta(forecast.bid, won);
            let total = scores.entry(forecast.player_id.clone()).or_insert(0);
            *total += delta;

            PlayerRoundResult {
                player_id: forecast.player_id.clone(),
                bid: forecast.bid,
                tricks_won: won,
                score_delta: delta,
                total_score: *total,
            }
        })
        .collect();

    RoundSummary {
        round_number: round.round_number,
        results,
    }
}
