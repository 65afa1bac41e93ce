use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::application::{Application, ApplicationStatus};
use super::evaluator::{evaluate_program, ProgramVerdict};
use super::program::Program;
use super::validation::{advisory_warnings, validate_application, validate_program};
use crate::types::{with_metadata, ComputationOutput};
use crate::LenderMatchResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInput {
    pub application: Application,
    /// Candidate programs in caller order; inactive ones are skipped.
    pub programs: Vec<Program>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutput {
    pub status: ApplicationStatus,
    pub programs_considered: usize,
    pub programs_evaluated: usize,
    pub eligible_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_program_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_fit_score: Option<u32>,
    /// Ranked verdicts: eligible first, then by fit score, ties in input order.
    pub verdicts: Vec<ProgramVerdict>,
}

impl MatchOutput {
    /// Drop ineligible verdicts, keeping the summary consistent with what
    /// remains. `eligible_count` is unchanged.
    pub fn retain_eligible(&mut self) {
        self.verdicts.retain(|v| v.is_eligible);
        let best = self.verdicts.first();
        self.best_program_id = best.map(|v| v.program_id);
        self.best_fit_score = best.map(|v| v.fit_score);
    }
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Evaluate every active program and rank the verdicts.
///
/// The sort is stable on `(is_eligible, fit_score)` descending, so programs
/// with equal keys keep their relative input order. `priority` plays no part.
pub fn match_programs(app: &Application, programs: &[Program]) -> Vec<ProgramVerdict> {
    let mut verdicts: Vec<ProgramVerdict> = programs
        .iter()
        .filter(|p| p.active)
        .map(|p| evaluate_program(app, p))
        .collect();

    verdicts.sort_by(|a, b| (b.is_eligible, b.fit_score).cmp(&(a.is_eligible, a.fit_score)));
    verdicts
}

/// Validate, match and summarise one application against a program set.
pub fn match_application(input: &MatchInput) -> LenderMatchResult<ComputationOutput<MatchOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_application(&input.application)?;
    for program in input.programs.iter().filter(|p| p.active) {
        validate_program(program)?;
    }

    for program in &input.programs {
        if program.active {
            warnings.extend(advisory_warnings(&input.application, program));
        } else {
            warnings.push(format!("Program '{}' is inactive; skipped.", program.name));
        }
    }

    let verdicts = match_programs(&input.application, &input.programs);
    let eligible_count = verdicts.iter().filter(|v| v.is_eligible).count();
    let best = verdicts.first();

    info!(
        application_id = ?input.application.id,
        considered = input.programs.len(),
        evaluated = verdicts.len(),
        eligible = eligible_count,
        "match run complete"
    );

    let output = MatchOutput {
        status: ApplicationStatus::Completed,
        programs_considered: input.programs.len(),
        programs_evaluated: verdicts.len(),
        eligible_count,
        best_program_id: best.map(|v| v.program_id),
        best_fit_score: best.map(|v| v.fit_score),
        verdicts,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "ranking": "is_eligible desc, fit_score desc, input order on ties",
        "inactive_programs_skipped": input.programs.len() - output.programs_evaluated,
    });

    Ok(with_metadata(
        "Portfolio program matching",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::test_support::{sample_application, sample_program};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn program(id: u64, min_credit: u32) -> Program {
        Program {
            id,
            name: format!("Program {id}"),
            min_credit_score: Some(min_credit),
            ..sample_program()
        }
    }

    #[test]
    fn test_empty_portfolio() {
        assert!(match_programs(&sample_application(), &[]).is_empty());
    }

    #[test]
    fn test_inactive_programs_skipped() {
        let mut inactive = program(1, 600);
        inactive.active = false;
        let verdicts = match_programs(&sample_application(), &[inactive, program(2, 600)]);
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].program_id, 2);
    }

    #[test]
    fn test_eligible_ranked_first() {
        let app = Application {
            credit_score: 700,
            ..sample_application()
        };
        let verdicts = match_programs(&app, &[program(1, 750), program(2, 600)]);
        assert_eq!(verdicts[0].program_id, 2);
        assert!(verdicts[0].is_eligible);
        assert_eq!(verdicts[1].program_id, 1);
        assert!(!verdicts[1].is_eligible);
    }

    #[test]
    fn test_ties_keep_input_order_ignoring_priority() {
        let mut a = program(1, 600);
        a.priority = 1;
        let mut b = program(2, 600);
        b.priority = 9;
        let c = program(3, 600);
        let verdicts = match_programs(&sample_application(), &[a, b, c]);
        let ids: Vec<u64> = verdicts.iter().map(|v| v.program_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_match_application_summary() {
        let mut inactive = program(4, 500);
        inactive.active = false;
        let input = MatchInput {
            application: Application {
                credit_score: 700,
                ..sample_application()
            },
            programs: vec![program(1, 600), program(2, 750), program(3, 680), inactive],
        };
        let out = match_application(&input).unwrap();
        let r = &out.result;
        assert_eq!(r.status, ApplicationStatus::Completed);
        assert_eq!(r.programs_considered, 4);
        assert_eq!(r.programs_evaluated, 3);
        assert_eq!(r.eligible_count, 2);
        assert_eq!(r.best_program_id, Some(1));
        assert_eq!(r.best_fit_score, Some(100));
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.assumptions["inactive_programs_skipped"], 1);
    }

    #[test]
    fn test_zero_eligible_is_still_completed() {
        let input = MatchInput {
            application: Application {
                credit_score: 500,
                ..sample_application()
            },
            programs: vec![program(1, 600)],
        };
        let out = match_application(&input).unwrap();
        assert_eq!(out.result.status, ApplicationStatus::Completed);
        assert_eq!(out.result.eligible_count, 0);
    }

    #[test]
    fn test_invalid_program_rejected() {
        let mut bad = program(1, 600);
        bad.max_credit_score = Some(550);
        let input = MatchInput {
            application: sample_application(),
            programs: vec![bad],
        };
        assert!(match_application(&input).is_err());
    }

    #[test]
    fn test_inactive_program_is_not_validated() {
        let mut retired = program(2, 600);
        retired.active = false;
        retired.min_loan_amount = Some(dec!(200000));
        retired.max_loan_amount = Some(dec!(100000));
        let input = MatchInput {
            application: sample_application(),
            programs: vec![program(1, 600), retired],
        };

        let out = match_application(&input).unwrap();
        assert_eq!(out.result.programs_evaluated, 1);
        assert_eq!(out.result.verdicts[0].program_id, 1);
        assert!(out.warnings.iter().any(|w| w.contains("inactive")));
    }

    #[test]
    fn test_retain_eligible_clears_best_when_none_eligible() {
        let input = MatchInput {
            application: Application {
                credit_score: 500,
                ..sample_application()
            },
            programs: vec![program(1, 600), program(2, 650)],
        };
        let mut out = match_application(&input).unwrap().result;
        assert_eq!(out.best_program_id, Some(1));

        out.retain_eligible();
        assert!(out.verdicts.is_empty());
        assert_eq!(out.best_program_id, None);
        assert_eq!(out.best_fit_score, None);
    }

    #[test]
    fn test_retain_eligible_keeps_ranked_best() {
        let input = MatchInput {
            application: Application {
                credit_score: 700,
                ..sample_application()
            },
            programs: vec![program(1, 750), program(2, 680)],
        };
        let mut out = match_application(&input).unwrap().result;
        out.retain_eligible();
        assert_eq!(out.verdicts.len(), 1);
        assert_eq!(out.best_program_id, Some(2));
        assert_eq!(out.best_fit_score, Some(100));
    }
}
