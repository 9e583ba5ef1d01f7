// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates the work to Layer 2 (application).
//
// Three commands are supported:
//   1. `prepare` - run the preprocessing pipeline over a corpus
//   2. `inspect` - list the most frequent saved tokens
//   3. `encode`  - frame one new review with the saved vocabulary
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EncodeArgs, InspectArgs, PrepareArgs};

use crate::application::encode_use_case::EncodeUseCase;
use crate::application::prepare_use_case::{PrepareConfig, PrepareUseCase};

#[derive(Parser, Debug)]
#[command(
    name = "review-prep",
    version,
    about = "Turn a movie review corpus into fixed-length id sequences for sentiment training."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand to its use case. No computation here.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Inspect(args) => run_inspect(args),
            Commands::Encode(args)  => run_encode(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    tracing::info!("Preparing '{}' / '{}'", args.reviews.display(), args.labels.display());

    let config  = PrepareConfig::try_from(args)?;
    let out_dir = config.out_dir.clone();
    let outcome = PrepareUseCase::new(config).execute()?;

    println!(
        "Vocabulary: {} tokens, {} empty reviews dropped",
        outcome.data.vocabulary.len(),
        outcome.data.dropped_reviews
    );
    println!("{:<6} {:>8} {:>9} {:>8} {:>8}", "split", "rows", "positive", "batches", "dropped");
    for r in &outcome.reports {
        println!(
            "{:<6} {:>8} {:>8.1}% {:>8} {:>8}",
            r.split,
            r.rows,
            r.positive_ratio() * 100.0,
            r.batches,
            r.dropped
        );
    }
    println!("Artifacts written to '{}'", out_dir.display());
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let use_case = EncodeUseCase::new(&args.out_dir)?;

    println!("Vocabulary size: {}", use_case.vocabulary_size());
    for (i, entry) in use_case.top_tokens(args.top).iter().enumerate() {
        println!("{:>6}  {:<20} {}", i + 1, entry.token, entry.count);
    }
    Ok(())
}

fn run_encode(args: EncodeArgs) -> Result<()> {
    let use_case = EncodeUseCase::new(&args.out_dir)?;
    let encoded  = use_case.encode(&args.text);

    if encoded.unknown > 0 {
        tracing::warn!(
            "{} of {} words are not in the vocabulary and were skipped",
            encoded.unknown,
            encoded.words
        );
    }

    println!("{}", serde_json::to_string(&encoded)?);
    Ok(())
}
