use crate::domain::card::{Card, Color};
use crate::domain::round::{Trick, TrickColor};
use crate::domain::PlayerId;

/// Множитель козыря: любой козырь (≥ 100) старше любой некозырной
/// числовой карты (≤ 13), порядок внутри козыря и внутри масти сохраняется.
pub const TRUMP_MULTIPLIER: u32 = 100;

/// Сила карты во взятке.
///
/// Козырь – ранг × 100; карта в цвет взятки – ранг; прочее – 0.
/// Спецкарты здесь не оцениваются (Z обрабатывается отдельно, N = 0).
pub fn card_value(card: &Card, trick_color: TrickColor, trump: Option<Color>) -> u32 {
    match card {
        Card::Number { rank, color } => {
            let rank = *rank as u32;
            if Some(*color) == trump {
                rank * TRUMP_MULTIPLIER
            } else if TrickColor::Of(*color) != trick_color {
                0
            } else {
                rank
            }
        }
        Card::Wizard | Card::Jester => 0,
    }
}

/// Победитель взятки.
///
/// Первая сыгранная Z выигрывает сразу. Иначе побеждает наибольшее значение
/// (`card_value`), при равенстве – более ранний ход. Если все сыграли N,
/// берёт первый ходивший. Пустая взятка – `None`.
pub fn evaluate_trick(trick: &Trick, trump: Option<Color>) -> Option<PlayerId> {
    let first = trick.plays.first()?;

    let mut winner = first;
    let mut winning_value = match first.card.color() {
        Some(color) if Some(color) == trump => first.card.numeric_rank() * TRUMP_MULTIPLIER,
        _ => first.card.numeric_rank(),
    };

    for play in &trick.plays {
        match play.card {
            Card::Wizard => return Some(play.player_id.clone()),
            Card::Jester => continue,
            Card::Number { .. } => {
                let value = card_value(&play.card, trick.trick_color, trump);
                if value > winning_value {
                    winner = play;
                    winning_value = value;
                }
            }
        }
    }

    Some(winner.player_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_suit_non_trump_scores_zero() {
        let tc = TrickColor::Of(Color::Humans);
        assert_eq!(card_value(&Card::number(13, Color::Giants), tc, Some(Color::Elves)), 0);
        assert_eq!(card_value(&Card::number(13, Color::Humans), tc, Some(Color::Elves)), 13);
        assert_eq!(card_value(&Card::number(1, Color::Elves), tc, Some(Color::Elves)), 100);
    }

    #[test]
    fn empty_trick_has_no_winner() {
        assert_eq!(evaluate_trick(&Trick::new(0), None), None);
    }
}
