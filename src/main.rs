//! bathala-sim - play a simulated Bathala encounter from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};
use bathala_combat::combat::Encounter;
use bathala_combat::entities::{EnemyTier, Player};
use bathala_combat::registry::DEFAULT_CHAPTER;
use bathala_combat::{sim, Catalog, Config};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "bathala-sim", version, about = "Simulate a Bathala combat encounter")]
struct Cli {
    /// Enemy id or display name
    #[arg(long, conflicts_with = "node")]
    enemy: Option<String>,

    /// Node tier to draw a random enemy from
    #[arg(long, value_parser = parse_tier)]
    node: Option<EnemyTier>,

    /// Chapter for node selection
    #[arg(long, default_value_t = DEFAULT_CHAPTER)]
    chapter: u8,

    /// RNG seed, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many player turns
    #[arg(long, default_value_t = 50)]
    max_turns: u32,

    /// Config file (defaults to ./bathala.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check every enemy sprite key against an asset directory
    Sprites {
        /// Directory holding `<key>.png` files
        #[arg(long)]
        assets: PathBuf,
    },
}

fn parse_tier(s: &str) -> Result<EnemyTier, String> {
    s.parse()
        .map_err(|_| format!("unknown node type '{}', expected common, elite or boss", s))
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bathala_combat=info,bathala_sim=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = Config::load(cli.config.as_deref()).context("loading config")?;
    let catalog = Catalog::builtin().context("loading built-in content")?;

    if let Some(Command::Sprites { assets }) = &cli.command {
        let missing = catalog
            .enemies
            .validate_sprites(|key| assets.join(format!("{}.png", key)).exists());
        if missing.is_empty() {
            println!("All {} sprite keys present", catalog.enemies.sprite_keys().len());
            return Ok(());
        }
        for key in &missing {
            println!("missing: {}", key);
        }
        anyhow::bail!("{} sprite keys missing", missing.len());
    }

    let seed = cli.seed.or(config.seed).unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let selector = catalog.selector();
    let enemy = match (&cli.enemy, cli.node) {
        (Some(name), _) => selector.by_id(name, &mut rng)?,
        (None, Some(tier)) => selector.for_node(tier, cli.chapter, &mut rng)?,
        (None, None) => selector.for_node(EnemyTier::Common, cli.chapter, &mut rng)?,
    };
    info!("Seed {} selected {}", seed, enemy.vitals.name);

    let player = Player::from_settings(&config.player);
    let encounter = Encounter::new(player, enemy, config.rules, Some(seed));
    let report = sim::simulate(encounter, cli.max_turns)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let outcome = match report.winner {
            Some(side) => format!("{} wins", side),
            None => "no winner".to_string(),
        };
        println!(
            "{} after {} turns: {} at {}/{} HP, {} at {}/{} HP",
            outcome,
            report.turns,
            report.player.vitals.name,
            report.player.vitals.current_health,
            report.player.vitals.max_health,
            report.enemy.name,
            report.enemy.current_health,
            report.enemy.max_health,
        );
        println!(
            "dealt {} / taken {} / best hand {}",
            report.metrics.damage_dealt,
            report.metrics.damage_taken,
            report
                .metrics
                .best_hand
                .map(|h| h.to_string())
                .unwrap_or_else(|| "none".to_string()),
        );
    }
    Ok(())
}
