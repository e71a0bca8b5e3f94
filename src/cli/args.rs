//! Command line argument parsing for the textsim CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::distance::EditDistanceMetric;

/// textsim - string similarity and prediction reliability scoring
#[derive(Parser, Debug, Clone)]
#[command(name = "textsim")]
#[command(about = "String similarity and prediction reliability scoring")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextsimArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Scorer configuration file (JSON)
    #[arg(short, long, env = "TEXTSIM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Similarity threshold (overrides the configuration file)
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Edit distance metric (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub metric: Option<MetricArg>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextsimArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Edit distance between two strings
    Distance(PairArgs),

    /// Word-level similarity of the first string against the second
    Words(PairArgs),

    /// Composite score and similarity verdict for two strings
    Score(PairArgs),

    /// Check one string against a list of candidates
    Similar(SimilarArgs),

    /// Reliability verdict for four evaluation metrics
    Reliable(ReliableArgs),

    /// Predict a label from a lexicon file
    Predict(PredictArgs),
}

/// Arguments naming two strings
#[derive(Parser, Debug, Clone)]
pub struct PairArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,
}

/// Arguments for matching against candidates
#[derive(Parser, Debug, Clone)]
pub struct SimilarArgs {
    /// String to match
    #[arg(value_name = "ONE")]
    pub one: String,

    /// Candidate strings
    #[arg(value_name = "CANDIDATES", required = true)]
    pub candidates: Vec<String>,

    /// Score candidates in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for parallel scoring
    #[arg(long, requires = "parallel")]
    pub threads: Option<usize>,
}

/// Arguments for the reliability verdict
#[derive(Parser, Debug, Clone)]
pub struct ReliableArgs {
    /// Micro accuracy
    #[arg(value_name = "MICRO", allow_negative_numbers = true)]
    pub micro: f64,

    /// Macro accuracy
    #[arg(value_name = "MACRO", allow_negative_numbers = true)]
    pub macro_accuracy: f64,

    /// Log loss
    #[arg(value_name = "LOSS", allow_negative_numbers = true)]
    pub loss: f64,

    /// Log loss reduction
    #[arg(value_name = "REDUCTION", allow_negative_numbers = true)]
    pub reduction: f64,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Lexicon file (JSON array of {"text", "label"} samples)
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,

    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Edit distance metrics selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricArg {
    /// Classic Levenshtein distance
    Levenshtein,
    /// Levenshtein with adjacent transpositions
    DamerauLevenshtein,
}

impl From<MetricArg> for EditDistanceMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Levenshtein => EditDistanceMetric::Levenshtein,
            MetricArg::DamerauLevenshtein => EditDistanceMetric::DamerauLevenshtein,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
