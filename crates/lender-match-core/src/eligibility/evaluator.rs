use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::application::Application;
use super::checks::run_check;
use super::criteria::{Criterion, CriterionOutcome, CriterionResult, CRITERIA};
use super::program::Program;
use super::validation::{advisory_warnings, validate_application, validate_program};
use crate::types::{with_metadata, ComputationOutput};
use crate::LenderMatchResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub application: Application,
    pub program: Program,
}

/// Full evaluation of one application against one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramVerdict {
    pub program_id: u64,
    pub program_name: String,
    /// True only when every criterion passed.
    pub is_eligible: bool,
    /// Weighted share of criteria passed, 0–100, truncated.
    pub fit_score: u32,
    pub criteria_results: BTreeMap<Criterion, CriterionOutcome>,
    /// Reasons of the failed criteria, in execution order.
    pub rejection_reasons: Vec<String>,
}

impl ProgramVerdict {
    pub fn failed_criteria(&self) -> Vec<Criterion> {
        self.criteria_results
            .iter()
            .filter(|(_, outcome)| !outcome.passed)
            .map(|(criterion, _)| *criterion)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Run every criterion check in execution order.
pub fn run_all_checks(app: &Application, program: &Program) -> Vec<CriterionResult> {
    CRITERIA
        .iter()
        .map(|criterion| run_check(*criterion, app, program))
        .collect()
}

/// `trunc(100 * passed_weight / total_weight)`.
pub fn fit_score(results: &[CriterionResult]) -> u32 {
    let total: u32 = results.iter().map(|r| r.weight).sum();
    if total == 0 {
        return 0;
    }
    let earned: u32 = results.iter().filter(|r| r.passed).map(|r| r.weight).sum();
    earned * 100 / total
}

/// Evaluate one application against one program. Pure and total for
/// well-formed input; see [`evaluate_application`] for the validating entry
/// point.
pub fn evaluate_program(app: &Application, program: &Program) -> ProgramVerdict {
    let results = run_all_checks(app, program);

    let rejection_reasons: Vec<String> = results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| {
            debug!(
                program_id = program.id,
                criterion = %r.criterion,
                reason = %r.reason,
                "criterion failed"
            );
            r.reason.clone()
        })
        .collect();

    let fit_score = fit_score(&results);
    let is_eligible = rejection_reasons.is_empty();

    debug!(
        program_id = program.id,
        program = %program.name,
        is_eligible,
        fit_score,
        "program evaluated"
    );

    ProgramVerdict {
        program_id: program.id,
        program_name: program.name.clone(),
        is_eligible,
        fit_score,
        criteria_results: results.iter().map(|r| (r.criterion, r.outcome())).collect(),
        rejection_reasons,
    }
}

/// Validate the inputs, evaluate, and wrap the verdict in the standard
/// computation envelope.
pub fn evaluate_application(
    input: &EvaluationInput,
) -> LenderMatchResult<ComputationOutput<ProgramVerdict>> {
    let start = Instant::now();

    validate_application(&input.application)?;
    validate_program(&input.program)?;

    let warnings = advisory_warnings(&input.application, &input.program);
    let verdict = evaluate_program(&input.application, &input.program);

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "criteria_count": CRITERIA.len(),
        "total_weight": super::criteria::TOTAL_WEIGHT,
        "has_alt_credit_score": input.application.has_alt_credit_score(),
        "program_active": input.program.active,
    });

    Ok(with_metadata(
        "Weighted criteria eligibility evaluation",
        &assumptions,
        warnings,
        elapsed,
        verdict,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
