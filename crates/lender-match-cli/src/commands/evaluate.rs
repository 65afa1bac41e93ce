use clap::Args;
use serde_json::Value;

use lender_match_core::eligibility::{self, Application, EvaluationInput, Program};

use crate::input;

/// Arguments for a single application/program evaluation
#[derive(Args)]
pub struct EvaluateArgs {
    /// Path to an input file holding both `application` and `program`
    /// (overrides the individual file flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Path to the application file (JSON or YAML)
    #[arg(long)]
    pub application: Option<String>,

    /// Path to the program file (JSON or YAML)
    #[arg(long)]
    pub program: Option<String>,
}

pub fn run_evaluate(args: EvaluateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let evaluation_input: EvaluationInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let (Some(app_path), Some(program_path)) = (&args.application, &args.program) {
        let application: Application = input::file::read_document(app_path)?;
        let program: Program = input::file::read_document(program_path)?;
        EvaluationInput {
            application,
            program,
        }
    } else if let Some(data) = input::stdin::read_piped()? {
        data
    } else {
        return Err(
            "--application and --program are required (or provide --input, or pipe JSON)".into(),
        );
    };

    let result = eligibility::evaluate_application(&evaluation_input)?;
    Ok(serde_json::to_value(result)?)
}
