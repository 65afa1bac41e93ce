//! Lender program eligibility and fit scoring.
//!
//! Criterion checks -> program evaluator -> portfolio matcher. Every stage is
//! a pure function of caller-owned records; nothing here performs I/O or
//! keeps state between calls.

pub mod application;
pub mod checks;
pub mod criteria;
pub mod evaluator;
pub mod matcher;
pub mod program;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use application::{Application, ApplicationStatus};
pub use criteria::{
    criterion_table, Criterion, CriterionInfo, CriterionOutcome, CriterionResult, CRITERIA,
    TOTAL_WEIGHT,
};
pub use evaluator::{evaluate_application, evaluate_program, EvaluationInput, ProgramVerdict};
pub use matcher::{match_application, match_programs, MatchInput, MatchOutput};
pub use program::{Program, ProgramUpdate};
