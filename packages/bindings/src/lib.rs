use napi::Result as NapiResult;
use napi_derive::napi;

use lender_match_core::eligibility;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

/// Evaluate one application against one program.
/// Input: `{"application": {...}, "program": {...}}`.
#[napi]
pub fn evaluate_application(input_json: String) -> NapiResult<String> {
    let input: eligibility::EvaluationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = eligibility::evaluate_application(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Rank every active program for one application.
/// Input: `{"application": {...}, "programs": [...]}`.
#[napi]
pub fn match_application(input_json: String) -> NapiResult<String> {
    let input: eligibility::MatchInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = eligibility::match_application(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Apply a partial edit to a program and return the updated program.
#[napi]
pub fn update_program(program_json: String, update_json: String) -> NapiResult<String> {
    let mut program: eligibility::Program =
        serde_json::from_str(&program_json).map_err(to_napi_error)?;
    let update: eligibility::ProgramUpdate =
        serde_json::from_str(&update_json).map_err(to_napi_error)?;
    update.apply(&mut program);
    eligibility::validation::validate_program(&program).map_err(to_napi_error)?;
    serde_json::to_string(&program).map_err(to_napi_error)
}

/// The criterion weight table.
#[napi]
pub fn criterion_table() -> NapiResult<String> {
    serde_json::to_string(&eligibility::criterion_table()).map_err(to_napi_error)
}
