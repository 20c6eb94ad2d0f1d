//! Offline training CLI: run MCCFR iterations and persist the resulting
//! strategy table.

use clap::Parser;
use colored::Colorize;
use nlhe_solver::mccfr::persistence;
use nlhe_solver::mccfr::{Trainer, TrainerConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Train a no-limit hold'em MCCFR blueprint")]
struct Args {
    /// Number of training iterations.
    #[arg(short, long, default_value_t = 10_000)]
    iterations: usize,

    /// Where to write the resulting strategy table.
    #[arg(short, long, default_value = "blueprint.bin")]
    output: PathBuf,

    /// Resume training from an existing table instead of starting cold.
    #[arg(short, long)]
    resume: Option<PathBuf>,

    /// Fixed PRNG seed, for reproducible training runs.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    nlhe_solver::init_logging();
    let args = Args::parse();

    let mut trainer = match &args.resume {
        Some(path) => {
            log::info!("resuming from {}", path.display());
            let file = File::open(path)?;
            let table = persistence::load(file)?;
            Trainer::from_table(table, TrainerConfig::default())
        }
        None => Trainer::new(TrainerConfig::default()),
    };

    let mut rng = SmallRng::seed_from_u64(args.seed);
    println!(
        "{}",
        format!("training for {} iterations", args.iterations).cyan()
    );
    trainer.run(args.iterations, &mut rng);

    let table = trainer.into_table();
    println!(
        "{}",
        format!("trained {} information sets", table.len()).green()
    );

    let file = BufWriter::new(File::create(&args.output)?);
    persistence::save(&table, file)?;
    println!("{}", format!("wrote {}", args.output.display()).green());
    Ok(())
}
