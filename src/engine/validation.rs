use crate::domain::card::Card;
use crate::domain::round::TrickColor;
use crate::engine::errors::EngineError;

/// Можно ли сыграть `card` при текущем цвете взятки.
///
/// Проверяется по руке ДО того, как карта из неё убрана.
/// - Z и N можно всегда.
/// - Если цвет взятки задан, другой цвет запрещён только когда
///   в руке есть хотя бы одна карта цвета взятки.
/// - Если цвет не определён или взятка бесцветная – можно любую.
pub fn is_card_allowed(card: &Card, trick_color: TrickColor, hand: &[Card]) -> bool {
    let Some(card_color) = card.color() else {
        return true;
    };

    match trick_color {
        TrickColor::Of(lead) if lead != card_color => {
            !hand.iter().any(|c| c.color() == Some(lead))
        }
        _ => true,
    }
}

/// То же правило в виде Result для движка.
pub fn validate_play(card: &Card, trick_color: TrickColor, hand: &[Card]) -> Result<(), EngineError> {
    if is_card_allowed(card, trick_color, hand) {
        Ok(())
    } else {
        Err(EngineError::MustFollowSuit)
    }
}

/// Все карты руки, которые сейчас можно сыграть.
pub fn legal_cards(trick_color: TrickColor, hand: &[Card]) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|c| is_card_allowed(c, trick_color, hand))
        .collect()
}

/// Заявка в диапазоне `0..=round_number`.
pub fn validate_forecast_range(bid: i32, round_number: u8) -> Result<u8, EngineError> {
    if bid < 0 || bid > round_number as i32 {
        return Err(EngineError::InvalidForecast {
            bid,
            max: round_number,
        });
    }
    Ok(bid as u8)
}

/// Последний заявляющий не может сделать сумму заявок равной числу взяток раунда.
///
/// `forecast_sum` – сумма уже сделанных заявок, `forecasts_made` – их число.
pub fn validate_dealer_constraint(
    bid: u8,
    round_number: u8,
    forecast_sum: u32,
    forecasts_made: usize,
    player_count: usize,
) -> Result<(), EngineError> {
    let is_last = forecasts_made + 1 == player_count;
    if is_last && forecast_sum + bid as u32 == round_number as u32 {
        return Err(EngineError::IllegalForecast { round_number });
    }
    Ok(())
}

/// Полная проверка заявки (диапазон + ограничение для последнего).
pub fn validate_forecast(
    bid: i32,
    round_number: u8,
    forecast_sum: u32,
    forecasts_made: usize,
    player_count: usize,
) -> Result<u8, EngineError> {
    let bid = validate_forecast_range(bid, round_number)?;
    validate_dealer_constraint(bid, round_number, forecast_sum, forecasts_made, player_count)?;
    Ok(bid)
}

/// Какие заявки сейчас допустимы для игрока на очереди.
pub fn allowed_forecasts(
    round_number: u8,
    forecast_sum: u32,
    forecasts_made: usize,
    player_count: usize,
) -> Vec<u8> {
    (0..=round_number)
        .filter(|&bid| {
            validate_forecast(
                bid as i32,
                round_number,
                forecast_sum,
                forecasts_made,
                player_count,
            )
            .is_ok()
        })
        .collect()
}
