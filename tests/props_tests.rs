//! Property-тесты правил: победитель взятки, легальность хода, заявки, очки.
//!
//! Число кейсов можно поднять локально: `PROPTEST_CASES=2000 cargo test --test props_tests`.

use std::env;

use proptest::prelude::*;
use wizard_engine::domain::{Card, Color, Trick, TrickColor};
use wizard_engine::engine::is_card_allowed;
use wizard_engine::engine::positions::{rotate_first_player, trump_chooser_index};
use wizard_engine::engine::scoring::round_score_delta;
use wizard_engine::engine::validation::allowed_forecasts;
use wizard_engine::eval::{card_value, evaluate_trick};

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(256);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Humans),
        Just(Color::Dwarves),
        Just(Color::Elves),
        Just(Color::Giants),
    ]
}

fn number_card() -> impl Strategy<Value = Card> {
    (1u8..=13, color()).prop_map(|(rank, color)| Card::number(rank, color))
}

fn card() -> impl Strategy<Value = Card> {
    prop_oneof![
        8 => number_card(),
        1 => Just(Card::Wizard),
        1 => Just(Card::Jester),
    ]
}

fn trick_of(cards: &[Card]) -> Trick {
    Trick::from_plays(
        0,
        cards
            .iter()
            .enumerate()
            .map(|(i, card)| (format!("p{i}"), *card)),
    )
}

fn seat(player_id: &str) -> usize {
    player_id[1..].parse().expect("seat-based id")
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn earliest_wizard_always_wins(
        cards in prop::collection::vec(card(), 2..=6),
        trump in prop::option::of(color()),
    ) {
        let first_wizard = cards.iter().position(Card::is_wizard);
        prop_assume!(first_wizard.is_some());

        let winner = evaluate_trick(&trick_of(&cards), trump).unwrap();
        prop_assert_eq!(Some(seat(&winner)), first_wizard);
    }

    #[test]
    fn all_jesters_go_to_first_player(
        len in 2usize..=6,
        trump in prop::option::of(color()),
    ) {
        let cards = vec![Card::Jester; len];
        let winner = evaluate_trick(&trick_of(&cards), trump).unwrap();
        prop_assert_eq!(winner, "p0");
    }

    #[test]
    fn winner_matches_highest_value_oracle(
        cards in prop::collection::vec(prop_oneof![4 => number_card(), 1 => Just(Card::Jester)], 2..=6),
        trump in prop::option::of(color()),
    ) {
        let trick = trick_of(&cards);
        let values: Vec<u32> = cards
            .iter()
            .map(|c| card_value(c, trick.trick_color, trump))
            .collect();
        let best = values.iter().copied().max().unwrap_or(0);
        let expected = values.iter().position(|&v| v == best).unwrap_or(0);

        let winner = evaluate_trick(&trick, trump).unwrap();
        prop_assert_eq!(seat(&winner), expected);

        // Если во взятке есть козырь, берёт козырь.
        if let Some(t) = trump {
            if cards.iter().any(|c| c.color() == Some(t)) {
                prop_assert_eq!(cards[expected].color(), Some(t));
            }
        }
    }

    #[test]
    fn legality_matches_follow_rule(
        hand in prop::collection::vec(card(), 0..=10),
        candidate in card(),
        lead in prop_oneof![
            Just(TrickColor::Undetermined),
            Just(TrickColor::Colorless),
            color().prop_map(TrickColor::Of),
        ],
    ) {
        let allowed = is_card_allowed(&candidate, lead, &hand);
        let expected = match (candidate.color(), lead) {
            (None, _) => true,
            (Some(c), TrickColor::Of(l)) if c != l => {
                !hand.iter().any(|h| h.color() == Some(l))
            }
            _ => true,
        };
        prop_assert_eq!(allowed, expected);
    }

    #[test]
    fn score_is_exact_bonus_or_distance_penalty(bid in 0u8..=20, won in 0u8..=20) {
        let delta = round_score_delta(bid, won);
        if bid == won {
            prop_assert_eq!(delta, 20 + 10 * bid as i32);
            prop_assert!(delta >= 20);
        } else {
            prop_assert_eq!(delta, -10 * (bid as i32 - won as i32).abs());
            prop_assert!(delta < 0);
        }
    }

    #[test]
    fn only_last_forecaster_is_constrained(
        round_number in 1u8..=15,
        players in 2usize..=6,
        bids in prop::collection::vec(0u8..=15, 5),
    ) {
        let made = players - 1;
        let sum: u32 = bids
            .iter()
            .take(made)
            .map(|&b| b.min(round_number) as u32)
            .sum();

        // Не последний – любые 0..=round.
        let earlier = allowed_forecasts(round_number, sum, made - 1, players);
        prop_assert_eq!(earlier.len(), round_number as usize + 1);

        let last = allowed_forecasts(round_number, sum, made, players);
        prop_assert!(!last.is_empty());
        for bid in 0..=round_number {
            let forbidden = sum + bid as u32 == round_number as u32;
            prop_assert_eq!(last.contains(&bid), !forbidden);
        }
    }

    #[test]
    fn rotation_and_chooser_are_neighbours(players in 2usize..=6, first in 0usize..6) {
        let first = first % players;
        let next = rotate_first_player(first, players);
        let chooser = trump_chooser_index(first, players);

        prop_assert_eq!(next, (first + 1) % players);
        prop_assert_eq!(rotate_first_player(chooser, players), first);
    }
}
