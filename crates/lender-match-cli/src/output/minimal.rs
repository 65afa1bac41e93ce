use serde_json::Value;

use super::plain;

/// Print just the key answer from the output.
///
/// Match runs print the best program and the eligible count, single
/// evaluations print the fit score and eligibility, listings print one line
/// per row.
pub fn print_minimal(value: &Value) {
    for line in minimal_lines(value) {
        println!("{}", line);
    }
}

fn minimal_lines(value: &Value) -> Vec<String> {
    let result = value.get("result").unwrap_or(value);

    if result.get("verdicts").is_some() {
        let best = match result.get("best_program_id") {
            Some(id) if !id.is_null() => plain(id),
            _ => "none".to_string(),
        };
        return vec![format!(
            "best={} eligible={}/{}",
            best,
            plain(&result["eligible_count"]),
            plain(&result["programs_evaluated"])
        )];
    }

    if let Some(score) = result.get("fit_score") {
        let label = if result["is_eligible"] == Value::Bool(true) {
            "eligible"
        } else {
            "ineligible"
        };
        return vec![format!("{} {}", plain(score), label)];
    }

    if let Value::Array(rows) = result {
        return rows
            .iter()
            .map(|row| format!("{} {}", plain(&row["criterion"]), plain(&row["weight"])))
            .collect();
    }

    vec![plain(result)]
}
