use clap::Args;
use serde_json::Value;

use lender_match_core::eligibility::{self, Application, MatchInput, Program};

use crate::input;

/// Arguments for ranking a program portfolio
#[derive(Args)]
pub struct MatchArgs {
    /// Path to an input file holding `application` and `programs`
    /// (overrides the individual file flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Path to the application file (JSON or YAML)
    #[arg(long)]
    pub application: Option<String>,

    /// Path to a file holding an array of programs (JSON or YAML)
    #[arg(long)]
    pub programs: Option<String>,

    /// Only report eligible programs
    #[arg(long)]
    pub eligible_only: bool,
}

pub fn run_match(args: MatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let match_input: MatchInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let (Some(app_path), Some(programs_path)) = (&args.application, &args.programs) {
        let application: Application = input::file::read_document(app_path)?;
        let programs: Vec<Program> = input::file::read_document(programs_path)?;
        MatchInput {
            application,
            programs,
        }
    } else if let Some(data) = input::stdin::read_piped()? {
        data
    } else {
        return Err(
            "--application and --programs are required (or provide --input, or pipe JSON)".into(),
        );
    };

    let mut result = eligibility::match_application(&match_input)?;
    if args.eligible_only {
        result.result.retain_eligible();
    }
    Ok(serde_json::to_value(result)?)
}
