//! Riichi League CLI
//!
//! Loads a roster and game log from JSON, runs a full replay, and prints
//! standings, per-player history, or the rank ladder. This is the
//! presentation boundary: numeric seat indices become wind names here and
//! nowhere else.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use rl_core::{ladder, GameRecord, League, PlayerAggregate, Wind};

#[derive(Parser)]
#[command(name = "rl_cli")]
#[command(about = "Replay a riichi league game log and inspect standings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full replay, then the standings table
    Standings {
        /// Roster JSON file (array of players)
        #[arg(long)]
        players: PathBuf,

        /// Game log JSON file (array of games)
        #[arg(long)]
        games: PathBuf,
    },

    /// Full replay, then one player's game history
    History {
        /// Roster JSON file (array of players)
        #[arg(long)]
        players: PathBuf,

        /// Game log JSON file (array of games)
        #[arg(long)]
        games: PathBuf,

        /// Player id to inspect
        #[arg(long)]
        player: String,
    },

    /// Print the rank ladder
    Ladder,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Standings { players, games } => {
            let league = load_league(&players, &games)?;
            print_standings(&league)
        }
        Commands::History { players, games, player } => {
            let id = Uuid::parse_str(&player).context("invalid player id")?;
            let league = load_league(&players, &games)?;
            print_history(&league, id)
        }
        Commands::Ladder => {
            print_ladder();
            Ok(())
        }
    }
}

fn load_league(players: &Path, games: &Path) -> Result<League> {
    let roster: Vec<PlayerAggregate> = read_json(players)?;
    let log: Vec<GameRecord> = read_json(games)?;
    League::open(roster, log).context("replay failed")
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_standings(league: &League) -> Result<()> {
    let standings = league.standings()?;
    if standings.is_empty() {
        bail!("roster is empty");
    }

    println!("{:<4} {:<20} {:<8} {:<12} {:>8}", "#", "Player", "Rank", "Title", "Points");
    for (pos, player) in standings.iter().enumerate() {
        let tier = player.tier()?;
        println!(
            "{:<4} {:<20} {:<8} {:<12} {:>8}",
            pos + 1,
            player.nickname,
            tier.kanji,
            tier.title,
            player.total_points
        );
    }
    Ok(())
}

fn print_history(league: &League, id: Uuid) -> Result<()> {
    let player = league.player(id)?;
    let history = league.game_history(id)?;
    println!("{} — {} games", player.nickname, history.len());

    println!(
        "{:<12} {:<10} {:<6} {:<5} {:>8} {:>7}  {}",
        "Date", "Length", "Seat", "Place", "Score", "Delta", "Rank"
    );
    for entry in &history {
        let wind = Wind::from_seat(entry.seat)
            .with_context(|| format!("seat index {} out of range", entry.seat))?;
        println!(
            "{:<12} {:<10} {:<6} {:<5} {:>8} {:>+7}  {}",
            entry.played_at.format("%Y-%m-%d"),
            entry.length.to_string(),
            wind.to_string(),
            entry.placement,
            entry.score,
            entry.point_delta,
            entry.rank_after
        );
    }
    Ok(())
}

fn print_ladder() {
    println!(
        "{:<4} {:<8} {:<12} {:>8} {:>8}  {}",
        "#", "Rank", "Title", "Floor", "Next", "Demotion floor"
    );
    for tier in ladder().tiers() {
        let next = tier
            .points_to_next
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        let demotion = tier
            .demotion_floor
            .map_or_else(|| "protected".to_string(), |f| f.to_string());
        println!(
            "{:<4} {:<8} {:<12} {:>8} {:>8}  {}",
            tier.order, tier.kanji, tier.title, tier.point_floor, next, demotion
        );
    }
}
