// src/bin/wizard_dev_cli.rs
//
// Самоигрывающий матч для локальной проверки движка.
// Запуск: `RUST_LOG=debug cargo run --bin wizard_dev_cli -- [seed] [players]`

use tracing_subscriber::EnvFilter;

use wizard_engine::api::{build_state_view, execute_command, CommandResponse, GameCommand};
use wizard_engine::domain::{Color, MatchConfig, TrickColor};
use wizard_engine::engine::validation::{allowed_forecasts, legal_cards};
use wizard_engine::engine::{start_match, ActionKind};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let players: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);

    let player_ids: Vec<String> = (1..=players).map(|i| format!("p{i}")).collect();
    let config = MatchConfig::default().with_seed(seed);

    println!("=== WIZARD DEV CLI === seed={seed} players={players}\n");

    let mut engine = match start_match(player_ids, &config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Не удалось начать матч: {err}");
            std::process::exit(1);
        }
    };

    while let Some(next) = engine.next_action() {
        let state = engine.state();
        let Ok(view) = build_state_view(state, &next.player_id) else {
            eprintln!("Игрок {} пропал из матча", next.player_id);
            std::process::exit(1);
        };
        let Some(round) = view.round.as_ref() else {
            eprintln!("Нет текущего раунда");
            std::process::exit(1);
        };

        let command = match next.action {
            ActionKind::SelectTrump => GameCommand::SelectTrump {
                player_id: next.player_id.clone(),
                color: Color::ALL[round.round_number as usize % Color::ALL.len()],
            },
            ActionKind::SetForecast => {
                let allowed = allowed_forecasts(
                    round.round_number,
                    round.forecast_sum(),
                    round.forecasts.len(),
                    view.players.len(),
                );
                GameCommand::SetForecast {
                    player_id: next.player_id.clone(),
                    bid: allowed.first().copied().unwrap_or(0) as i32,
                }
            }
            ActionKind::PlayCard => {
                let trick_color = round
                    .open_trick()
                    .map(|t| t.trick_color)
                    .unwrap_or(TrickColor::Undetermined);
                let Some(card) = legal_cards(trick_color, &view.current_hand).first().copied()
                else {
                    eprintln!("У игрока {} нет легального хода", next.player_id);
                    std::process::exit(1);
                };
                GameCommand::PlayCard {
                    player_id: next.player_id.clone(),
                    card,
                }
            }
        };

        match execute_command(&mut engine, command) {
            Ok(CommandResponse::RoundFinished(summary)) => {
                println!("Раунд {} завершён:", summary.round_number);
                for r in &summary.results {
                    let mark = if r.hit_forecast() { '+' } else { ' ' };
                    println!(
                        "  {mark}{:>4} | заявка={} взято={} дельта={:+} итого={}",
                        r.player_id, r.bid, r.tricks_won, r.score_delta, r.total_score
                    );
                }
            }
            Ok(CommandResponse::MatchFinished { standings, .. }) => {
                println!("\nМатч завершён. Итог:");
                for (place, s) in standings.iter().enumerate() {
                    println!("  {}. {} – {}", place + 1, s.player_id, s.score);
                }
            }
            Ok(_) => {}
            Err(err) => {
                eprintln!("Ход отклонён: {err:?}");
                std::process::exit(1);
            }
        }
    }
}
