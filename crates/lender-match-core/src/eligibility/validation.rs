//! Input-contract checks run before the engine, plus advisory warnings.
//!
//! The criterion checks assume well-formed records; these functions are the
//! boundary that rejects malformed ones with a descriptive error.

use rust_decimal::Decimal;

use super::application::Application;
use super::program::Program;
use crate::error::LenderMatchError;
use crate::LenderMatchResult;

fn non_negative(field: &str, value: Decimal) -> LenderMatchResult<()> {
    if value < Decimal::ZERO {
        return Err(LenderMatchError::invalid(field, "Must be non-negative."));
    }
    Ok(())
}

fn non_negative_opt(field: &str, value: Option<Decimal>) -> LenderMatchResult<()> {
    match value {
        Some(v) => non_negative(field, v),
        None => Ok(()),
    }
}

fn ordered<T: PartialOrd>(field: &str, min: Option<T>, max: Option<T>) -> LenderMatchResult<()> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(LenderMatchError::invalid(
                field,
                "Minimum must not exceed maximum.",
            ));
        }
    }
    Ok(())
}

pub fn validate_application(app: &Application) -> LenderMatchResult<()> {
    if app.industry.trim().is_empty() {
        return Err(LenderMatchError::invalid("industry", "Industry is required."));
    }
    if app.state.trim().is_empty() {
        return Err(LenderMatchError::invalid("state", "State is required."));
    }
    non_negative("years_in_business", app.years_in_business)?;
    non_negative("annual_revenue", app.annual_revenue)?;
    non_negative("loan_amount", app.loan_amount)?;
    non_negative("equipment_age_years", app.equipment_age_years)?;
    non_negative("soft_cost_pct", app.soft_cost_pct)?;
    if app.term_months == 0 {
        return Err(LenderMatchError::invalid(
            "term_months",
            "Term must be at least one month.",
        ));
    }
    Ok(())
}

pub fn validate_program(program: &Program) -> LenderMatchResult<()> {
    non_negative_opt("min_years_in_business", program.min_years_in_business)?;
    non_negative_opt("min_years_no_alt", program.min_years_no_alt)?;
    non_negative_opt("min_revenue", program.min_revenue)?;
    non_negative_opt("min_loan_amount", program.min_loan_amount)?;
    non_negative_opt("max_loan_amount", program.max_loan_amount)?;
    non_negative_opt("max_equipment_age_years", program.max_equipment_age_years)?;
    non_negative_opt("max_soft_cost_pct", program.max_soft_cost_pct)?;

    ordered("credit_score", program.min_credit_score, program.max_credit_score)?;
    ordered("loan_amount", program.min_loan_amount, program.max_loan_amount)?;
    ordered("term_months", program.min_term_months, program.max_term_months)?;

    for (industry, cap) in &program.industry_loan_limits {
        if *cap < Decimal::ZERO {
            return Err(LenderMatchError::invalid(
                format!("industry_loan_limits.{industry}"),
                "Industry cap must be non-negative.",
            ));
        }
    }
    Ok(())
}

/// Non-fatal observations about a pairing that a reviewer should see but
/// that do not change the verdict.
pub fn advisory_warnings(app: &Application, program: &Program) -> Vec<String> {
    let mut warnings = Vec::new();

    if let (Some(normal), Some(stricter)) =
        (program.min_credit_score, program.min_credit_score_no_alt)
    {
        if stricter < normal {
            warnings.push(format!(
                "Program '{}': credit floor without business credit ({stricter}) is below \
                 the normal floor ({normal}).",
                program.name
            ));
        }
    }
    if let (Some(normal), Some(stricter)) =
        (program.min_years_in_business, program.min_years_no_alt)
    {
        if stricter < normal {
            warnings.push(format!(
                "Program '{}': time-in-business minimum without business credit ({}) is \
                 below the normal minimum ({}).",
                program.name,
                stricter.normalize(),
                normal.normalize()
            ));
        }
    }
    if app.has_foreclosures && !program.allow_foreclosures {
        warnings.push(format!(
            "Program '{}' disallows foreclosures and the application reports one; \
             foreclosures are not scored and need manual review.",
            program.name
        ));
    }

    warnings
}
