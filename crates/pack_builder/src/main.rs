//! Pack Builder CLI
//!
//! Loads a match event feed, squad files, and an asset description index,
//! runs the highlight pipeline, and writes the assembled pack JSON.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hl_core::assets::load_asset_descriptions;
use hl_core::data::{load_squad_players, MatchFeed};
use hl_core::engine::{select, Normalizer, ScoringConfig, ScoringEngine};
use hl_core::models::HighlightPack;
use hl_core::pack::assemble_pack;

#[derive(Parser)]
#[command(name = "pack_builder")]
#[command(about = "Build a highlight pack from a match event feed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a pack from feed and squad files
    Build {
        /// Match events JSON file
        #[arg(long)]
        events: PathBuf,

        /// Home squad JSON file
        #[arg(long)]
        home_squad: Option<PathBuf>,

        /// Away squad JSON file
        #[arg(long)]
        away_squad: Option<PathBuf>,

        /// Asset description index JSON file
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Number of highlight pages to include
        #[arg(long, default_value = "7")]
        top_n: usize,

        /// Output pack JSON path
        #[arg(long, default_value = "out/story.json")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { events, home_squad, away_squad, assets, top_n, out } => {
            println!("🔨 Building highlight pack...");
            println!("   Events: {}", events.display());
            println!("   Top N:  {}", top_n);

            let feed = MatchFeed::from_file(&events)
                .with_context(|| format!("failed to load match feed {}", events.display()))?;

            let mut players_by_id: HashMap<String, String> = HashMap::new();
            for path in [home_squad, away_squad].into_iter().flatten() {
                let squad = load_squad_players(&path)
                    .with_context(|| format!("failed to load squad {}", path.display()))?;
                players_by_id.extend(squad);
            }

            let asset_index = match assets {
                Some(path) => load_asset_descriptions(&path)
                    .with_context(|| format!("failed to load assets {}", path.display()))?,
                None => Vec::new(),
            };

            let engine = ScoringEngine::with_config(ScoringConfig::from_env_or_default());
            let normalized = Normalizer::new()
                .with_teams(&feed.home_team_id, &feed.away_team_id)
                .normalize(&feed.events);
            let (scored, final_state) = engine.score_with_state(&normalized);
            let selected = select(scored, top_n);

            let pack = assemble_pack(
                &feed,
                &selected,
                &final_state,
                &players_by_id,
                &asset_index,
                engine.config(),
            );

            save_pack(&out, &pack)?;
            print_summary(&pack, &out);
        }
    }

    Ok(())
}

fn save_pack(path: &PathBuf, pack: &HighlightPack) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(pack)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn print_summary(pack: &HighlightPack, out: &PathBuf) {
    println!("\n✅ Pack built successfully!");
    println!("   Title:      {}", pack.title);
    println!("   Pages:      {}", pack.pages.len());
    println!("   Highlights: {}", pack.metrics.highlights);
    println!("   Goals:      {}", pack.metrics.goals);
    println!("   Output:     {}", out.display());
}
