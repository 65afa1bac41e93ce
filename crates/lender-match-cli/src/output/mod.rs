pub mod csv_out;
pub mod minimal;
pub mod table;

use lender_match_core::eligibility::CRITERIA;
use serde_json::Value;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Render a scalar-ish JSON value as plain text. Arrays of strings are
/// joined with `"; "` so rejection reasons stay readable in one cell.
pub(crate) fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(plain).collect::<Vec<_>>().join("; "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Flatten a ranked verdict list into display rows.
pub(crate) fn verdict_rows(verdicts: &[Value]) -> Vec<[String; 6]> {
    verdicts
        .iter()
        .enumerate()
        .map(|(i, v)| {
            [
                (i + 1).to_string(),
                plain(&v["program_id"]),
                plain(&v["program_name"]),
                plain(&v["is_eligible"]),
                plain(&v["fit_score"]),
                plain(&v["rejection_reasons"]),
            ]
        })
        .collect()
}

pub(crate) const VERDICT_HEADERS: [&str; 6] =
    ["rank", "program_id", "program", "eligible", "fit_score", "rejection_reasons"];

/// Per-criterion rows of a single verdict, in execution order.
pub(crate) fn criterion_rows(criteria: &serde_json::Map<String, Value>) -> Vec<[String; 3]> {
    CRITERIA
        .iter()
        .filter_map(|c| {
            criteria.get(c.as_str()).map(|outcome| {
                [
                    c.as_str().to_string(),
                    plain(&outcome["passed"]),
                    plain(&outcome["reason"]),
                ]
            })
        })
        .collect()
}
