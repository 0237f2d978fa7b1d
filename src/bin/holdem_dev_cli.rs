// src/bin/holdem_dev_cli.rs

use std::error::Error;

use poker_hand_eval::api::{build_street_report, DuelDto, StreetReportDto};
use poker_hand_eval::config::{RoundConfig, DEFAULT_PLAYERS};
use poker_hand_eval::domain::hand::Street;
use poker_hand_eval::domain::Deck;
use poker_hand_eval::engine::{HoldemRound, RandomSource};
use poker_hand_eval::eval::play_duels;
use poker_hand_eval::infra::{DeterministicRng, IdGenerator, SystemRng};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("[CLI] Ошибка: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = parse_args()?;
    config.validate()?;

    match config.seed {
        Some(seed) => play(&config, &mut DeterministicRng::from_seed(seed)),
        None => play(&config, &mut SystemRng),
    }
}

fn play<R: RandomSource>(config: &RoundConfig, rng: &mut R) -> Result<(), Box<dyn Error>> {
    if config.duel {
        play_duel(config, rng)
    } else {
        play_round(config, rng)
    }
}

/// `--players N --seed S --json --duel`
fn parse_args() -> Result<RoundConfig, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(RoundConfig {
        players: args
            .opt_value_from_str("--players")?
            .unwrap_or(DEFAULT_PLAYERS),
        seed: args.opt_value_from_str("--seed")?,
        json: args.contains("--json"),
        duel: args.contains("--duel"),
    })
}

/// Одна раздача: сдача, затем отчёт после флопа, тёрна и ривера.
fn play_round<R: RandomSource>(config: &RoundConfig, rng: &mut R) -> Result<(), Box<dyn Error>> {
    let ids = IdGenerator::new();
    let mut round = HoldemRound::new(config, &ids, rng)?;

    if !config.json {
        println!("================ HAND {} =================", round.hand_id());
        for p in round.players() {
            let hole: Vec<String> = p.hole_cards.iter().map(|c| c.to_string()).collect();
            println!("Игрок {}: {}", p.player_id, hole.join(" "));
        }
    }

    while round.street() < Street::River {
        round.advance()?;
        let report = build_street_report(&round)?;
        if config.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_report(&report);
        }
    }

    Ok(())
}

/// Перемешанная колода, по две карты до конца: старшая по value выигрывает.
fn play_duel<R: RandomSource>(config: &RoundConfig, rng: &mut R) -> Result<(), Box<dyn Error>> {
    let mut deck = Deck::standard_52();
    deck.shuffle(rng);

    for outcome in play_duels(&mut deck) {
        if config.json {
            println!("{}", serde_json::to_string(&DuelDto::from(&outcome))?);
            continue;
        }
        let winner = match outcome.winning_card() {
            Some(card) => card.to_string(),
            None => "ничья".to_string(),
        };
        println!(
            "#{:>2}: {} ({}) vs {} ({}) -> {winner}",
            outcome.round,
            outcome.first,
            outcome.first.value(),
            outcome.second,
            outcome.second.value(),
        );
    }

    Ok(())
}

fn print_report(report: &StreetReportDto) {
    let board: Vec<&str> = report.board.iter().map(|c| c.glyph.as_str()).collect();
    println!();
    println!("------ {:?} | борд: {} ------", report.street, board.join(" "));

    for p in &report.players {
        let best: Vec<&str> = p.best.cards.iter().map(|c| c.glyph.as_str()).collect();
        println!(
            "  Игрок {}: {} [{}] tie_value={}",
            p.player_id,
            p.best.description,
            best.join(" "),
            p.best.tie_value
        );
    }

    let leaders = &report.leaders;
    let kind = if leaders.winners.len() > 1 { "Сплит" } else { "Лидер" };
    println!(
        "  {kind}: {:?} – {} ({})",
        leaders.winners, leaders.description, leaders.tie_value
    );
}
