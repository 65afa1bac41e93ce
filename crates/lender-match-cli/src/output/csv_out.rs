use serde_json::Value;
use std::io;

use super::{criterion_rows, plain, verdict_rows, VERDICT_HEADERS};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Err(e) = write_csv(&mut wtr, value) {
        eprintln!("CSV output error: {}", e);
    }
    let _ = wtr.flush();
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    let result = value.get("result").unwrap_or(value);

    if let Some(Value::Array(verdicts)) = result.get("verdicts") {
        // One row per ranked program
        wtr.write_record(VERDICT_HEADERS)?;
        for row in verdict_rows(verdicts) {
            wtr.write_record(&row)?;
        }
    } else if let Some(Value::Object(criteria)) = result.get("criteria_results") {
        wtr.write_record(["criterion", "passed", "reason"])?;
        for row in criterion_rows(criteria) {
            wtr.write_record(&row)?;
        }
    } else if let Value::Array(arr) = result {
        write_array(wtr, arr)?;
    } else if let Value::Object(map) = result {
        wtr.write_record(["field", "value"])?;
        for (key, val) in map {
            wtr.write_record([key.as_str(), &plain(val)])?;
        }
    } else {
        wtr.write_record([plain(result)])?;
    }
    Ok(())
}

fn write_array<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            wtr.write_record([plain(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;
    for item in arr {
        let row: Vec<String> = headers.iter().map(|h| plain(&item[*h])).collect();
        wtr.write_record(&row)?;
    }
    Ok(())
}
