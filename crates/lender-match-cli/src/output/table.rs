use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{criterion_rows, plain, verdict_rows, VERDICT_HEADERS};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => {
                print_result(result);
                print_envelope_notes(map);
            }
            _ => print_fields(map),
        },
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", plain(value)),
    }
}

fn print_result(result: &Map<String, Value>) {
    if let Some(Value::Array(verdicts)) = result.get("verdicts") {
        print_fields(result);
        println!();
        print_ranking(verdicts);
    } else if let Some(Value::Object(criteria)) = result.get("criteria_results") {
        print_fields(result);
        println!();
        print_criteria(criteria);
    } else {
        print_fields(result);
    }
}

/// Scalar fields only; nested collections get their own tables.
fn print_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if matches!(val, Value::Object(_)) || key == "verdicts" || key == "rejection_reasons" {
            continue;
        }
        builder.push_record([key.as_str(), &plain(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_ranking(verdicts: &[Value]) {
    if verdicts.is_empty() {
        println!("(no active programs)");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(VERDICT_HEADERS);
    for row in verdict_rows(verdicts) {
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}

fn print_criteria(criteria: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Criterion", "Passed", "Reason"]);
    for row in criterion_rows(criteria) {
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                println!("  - {}", plain(w));
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_array_table(arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", plain(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for item in arr {
        let row: Vec<String> = headers.iter().map(|h| plain(&item[h.as_str()])).collect();
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}
