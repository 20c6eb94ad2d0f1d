//! Interactive advisor CLI: load a trained table, prompt for a table
//! configuration, and recommend an action for the live state (§4.9, §6).

use clap::Parser;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use nlhe_solver::advisor;
use nlhe_solver::gameplay::state::GameState;
use nlhe_solver::mccfr::persistence;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query a trained MCCFR blueprint for a recommendation")]
struct Args {
    /// Strategy table produced by `train`.
    #[arg(short, long, default_value = "blueprint.bin")]
    table: PathBuf,
}

fn main() -> anyhow::Result<()> {
    nlhe_solver::init_logging();
    let args = Args::parse();

    let file = File::open(&args.table)?;
    let table = persistence::load(file)?;
    println!(
        "{}",
        format!("loaded {} information sets from {}", table.len(), args.table.display()).cyan()
    );

    let theme = ColorfulTheme::default();
    let n_players: usize = Input::with_theme(&theme)
        .with_prompt("players at the table")
        .default(2)
        .interact_text()?;
    let dealer: usize = Input::with_theme(&theme)
        .with_prompt("dealer seat")
        .default(0)
        .interact_text()?;
    let stack: u32 = Input::with_theme(&theme)
        .with_prompt("starting stack (chips)")
        .default(200)
        .interact_text()?;

    let mut stacks = [0u32; nlhe_solver::gameplay::state::MAX_PLAYERS];
    for s in stacks.iter_mut().take(n_players) {
        *s = stack;
    }
    let state = GameState::new_hand(
        n_players,
        dealer,
        nlhe_solver::DEFAULT_SMALL_BLIND,
        nlhe_solver::DEFAULT_BIG_BLIND,
        stacks,
    );

    let mut rng = SmallRng::seed_from_u64(std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0));
    let recommendation = advisor::advise(&state, &table, &mut rng);

    println!("{}", "recommendation".green().bold());
    for (action, probability) in recommendation.actions.iter().zip(&recommendation.probabilities) {
        println!("  {action}  {:.1}%", probability * 100.0);
    }
    let choice = Select::with_theme(&theme)
        .with_prompt("take the sampled action?")
        .items(&["yes", "let me pick"])
        .default(0)
        .interact()?;
    if choice == 0 {
        println!("{} {}", "->".yellow(), recommendation.sampled);
    } else {
        println!("{}", "(sampled action ignored)".dimmed());
    }
    Ok(())
}
