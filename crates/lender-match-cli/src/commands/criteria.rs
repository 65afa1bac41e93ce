use clap::Args;
use serde_json::Value;

use lender_match_core::eligibility::{criterion_table, TOTAL_WEIGHT};

/// Arguments for the weight table listing
#[derive(Args)]
pub struct CriteriaArgs {
    /// Include each criterion's share of the total weight
    #[arg(long)]
    pub with_share: bool,
}

pub fn run_criteria(args: CriteriaArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows: Vec<Value> = criterion_table()
        .into_iter()
        .map(|info| {
            let mut row = serde_json::json!({
                "criterion": info.criterion,
                "weight": info.weight,
                "description": info.description,
            });
            if args.with_share {
                // Tenths of a percent, truncated.
                let tenths = info.weight * 1000 / TOTAL_WEIGHT;
                row["share_pct"] = Value::String(format!("{}.{}", tenths / 10, tenths % 10));
            }
            row
        })
        .collect();
    Ok(Value::Array(rows))
}
