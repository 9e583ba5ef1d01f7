// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the subcommands `prepare`, `inspect` and `encode` and
// all their flags.
//
// clap's derive macros generate help text, error messages for
// missing args and the string -> number conversions.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::{
    framer::DEFAULT_SEQ_LEN,
    pipeline::PipelineConfig,
    splitter::SplitFractions,
};
use crate::error::PipelineError;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean, encode, frame and split a review corpus
    Prepare(PrepareArgs),

    /// Show the most frequent tokens of a saved vocabulary
    Inspect(InspectArgs),

    /// Frame a single new review with a saved vocabulary
    Encode(EncodeArgs),
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Reviews file, one review per line
    #[arg(long, default_value = "data/reviews.txt")]
    pub reviews: PathBuf,

    /// Labels file, "positive" or "negative" per line
    #[arg(long, default_value = "data/labels.txt")]
    pub labels: PathBuf,

    /// Where vocab.json, pipeline_config.json and split_report.csv go
    #[arg(long, default_value = "artifacts")]
    pub out_dir: PathBuf,

    /// Length every review is truncated or padded to
    #[arg(long, default_value_t = DEFAULT_SEQ_LEN)]
    pub seq_len: usize,

    /// Fraction of rows used for training
    #[arg(long, default_value_t = 0.8)]
    pub train_frac: f64,

    /// Fraction of rows used for validation
    #[arg(long, default_value_t = 0.1)]
    pub valid_frac: f64,

    /// Fraction of rows used for testing
    #[arg(long, default_value_t = 0.1)]
    pub test_frac: f64,

    /// Rows per batch
    #[arg(long, default_value_t = 500)]
    pub batch_size: usize,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// Settings are validated here, before any file is opened.
impl TryFrom<PrepareArgs> for PrepareConfig {
    type Error = PipelineError;

    fn try_from(a: PrepareArgs) -> Result<Self, Self::Error> {
        let split    = SplitFractions::new(a.train_frac, a.valid_frac, a.test_frac)?;
        let pipeline = PipelineConfig::new(a.batch_size)?
            .with_seq_len(a.seq_len)?
            .with_split(split)?;

        Ok(PrepareConfig {
            reviews_path: a.reviews,
            labels_path:  a.labels,
            out_dir:      a.out_dir,
            pipeline,
        })
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory written by `prepare`
    #[arg(long, default_value = "artifacts")]
    pub out_dir: PathBuf,

    /// How many tokens to list
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// The review text to frame
    #[arg(long)]
    pub text: String,

    /// Directory written by `prepare`
    #[arg(long, default_value = "artifacts")]
    pub out_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn prepare_args(argv: &[&str]) -> PrepareArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Prepare(args) => args,
            other => panic!("expected prepare, got {other:?}"),
        }
    }

    #[test]
    fn test_prepare_defaults() {
        let args = prepare_args(&["review-prep", "prepare"]);
        let cfg  = PrepareConfig::try_from(args).unwrap();
        assert_eq!(cfg.pipeline.seq_len, 200);
        assert_eq!(cfg.pipeline.batch_size, 500);
        assert_eq!(cfg.pipeline.split, SplitFractions::default());
    }

    #[test]
    fn test_prepare_rejects_zero_batch() {
        let args = prepare_args(&["review-prep", "prepare", "--batch-size", "0"]);
        assert!(PrepareConfig::try_from(args).is_err());
    }

    #[test]
    fn test_prepare_rejects_bad_fractions() {
        let args = prepare_args(&["review-prep", "prepare", "--train-frac", "0.9"]);
        assert!(PrepareConfig::try_from(args).is_err());
    }

    #[test]
    fn test_encode_requires_text() {
        assert!(Cli::try_parse_from(["review-prep", "encode"]).is_err());
    }
}
