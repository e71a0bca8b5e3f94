//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextsimArgs};
use crate::error::Result;
use crate::prediction::Prediction;
use crate::reliability::PredictionMetrics;

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub metric: String,
    pub distance: f64,
}

/// Result structure for the words command.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordSimilarityResult {
    pub word_similarity: f64,
}

/// Result structure for the score command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResult {
    pub distance: f64,
    pub word_similarity: f64,
    pub value: f64,
    pub threshold: f64,
    pub similar: bool,
}

/// Score of a single candidate.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateScore {
    pub candidate: String,
    pub value: f64,
    pub similar: bool,
}

/// Result structure for the similar command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarResult {
    pub similar: bool,
    pub first_match: Option<usize>,
    pub candidates: Vec<CandidateScore>,
}

/// Result structure for the reliable command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReliabilityResult {
    pub metrics: PredictionMetrics,
    pub within_bounds: bool,
    pub default_metrics: bool,
    pub reliable: bool,
}

/// Result structure for the predict command.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Prediction,
    pub reliable: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TextsimArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TextsimArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Array(items) if items.iter().all(|i| i.is_object()) => {
                        println!("{key}:");
                        for item in &items {
                            println!("  - {}", format_value(item));
                        }
                    }
                    _ => println!("{key}: {}", format_value(&val)),
                }
            }
        }
        _ => println!("{}", format_value(&value)),
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextsimArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output a single result object as key-value CSV rows.
fn output_csv<T: Serialize>(result: &T, _args: &TextsimArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;

    println!("key,value");
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key},{}", format_csv_value(&val));
            }
        }
        _ => println!("value,{}", format_csv_value(&value)),
    }

    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
        serde_json::Value::Null => "none".to_string(),
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    let text = match value {
        serde_json::Value::Null => return String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => format_value(other),
    };

    if text.contains(',') || text.contains('"') || text.contains('\n') {
        let escaped = text.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        text
    }
}
