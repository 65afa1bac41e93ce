//! The sixteen criterion checks.
//!
//! Each check is a pure, total function of the application and the program.
//! Failing reasons state the actual value, the threshold and the gap wherever
//! the gap is numerically meaningful.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::application::Application;
use super::criteria::{Criterion, CriterionResult};
use super::program::Program;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Case-insensitive substring match in either direction.
///
/// Deliberately loose: "Trucking" matches "Long Haul Trucking" and "Truck"
/// alike. Industry and equipment lists rely on this exact rule.
pub fn loosely_matches(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Whole-dollar amount with thousands separators, e.g. `$160,000`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run the check for one criterion.
pub fn run_check(criterion: Criterion, app: &Application, program: &Program) -> CriterionResult {
    match criterion {
        Criterion::CreditScore => check_credit_score(app, program),
        Criterion::AltCreditScore => check_alt_credit_score(app, program),
        Criterion::YearsInBusiness => check_years_in_business(app, program),
        Criterion::AnnualRevenue => check_annual_revenue(app, program),
        Criterion::LoanAmount => check_loan_amount(app, program),
        Criterion::TermMonths => check_term_months(app, program),
        Criterion::State => check_state(app, program),
        Criterion::Industry => check_industry(app, program),
        Criterion::EquipmentType => check_equipment_type(app, program),
        Criterion::EquipmentAge => check_equipment_age(app, program),
        Criterion::Bankruptcies => check_bankruptcies(app, program),
        Criterion::TaxLiens => check_tax_liens(app, program),
        Criterion::Judgments => check_judgments(app, program),
        Criterion::Homeownership => check_homeownership(app, program),
        Criterion::Citizenship => check_citizenship(app, program),
        Criterion::SoftCosts => check_soft_costs(app, program),
    }
}

// ---------------------------------------------------------------------------
// Credit
// ---------------------------------------------------------------------------

pub fn check_credit_score(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::CreditScore;
    let score = app.credit_score;
    let escalated = !app.has_alt_credit_score() && program.min_credit_score_no_alt.is_some();
    let floor = if escalated {
        program.min_credit_score_no_alt
    } else {
        program.min_credit_score
    };

    if let Some(min) = floor {
        if score < min {
            let gap = min - score;
            let note = if escalated {
                " (higher floor applies without a business credit score)"
            } else {
                ""
            };
            return CriterionResult::fail(
                c,
                format!(
                    "Credit score {score} is {gap} points below minimum {min}{note}. \
                     Needs a {gap}+ point improvement."
                ),
            );
        }
    }

    if let Some(max) = program.max_credit_score {
        if score > max {
            return CriterionResult::fail(
                c,
                format!("Credit score {score} exceeds maximum {max} by {} points.", score - max),
            );
        }
    }

    match floor {
        Some(min) => CriterionResult::pass(
            c,
            format!("Credit score {score} meets minimum {min} (+{})", score - min),
        ),
        None => CriterionResult::pass(c, format!("Credit score {score} accepted")),
    }
}

pub fn check_alt_credit_score(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::AltCreditScore;
    let Some(min) = program.min_alt_credit_score else {
        return CriterionResult::pass(c, "No business credit score requirement");
    };

    match app.alt_credit_score {
        None => CriterionResult::fail(
            c,
            format!(
                "Business credit score required (minimum {min}). \
                 A business credit report is needed."
            ),
        ),
        Some(score) if score < min => CriterionResult::fail(
            c,
            format!(
                "Business credit score {score} is {} points below minimum {min}.",
                min - score
            ),
        ),
        Some(score) => CriterionResult::pass(
            c,
            format!("Business credit score {score} meets minimum {min} (+{})", score - min),
        ),
    }
}

// ---------------------------------------------------------------------------
// Business
// ---------------------------------------------------------------------------

pub fn check_years_in_business(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::YearsInBusiness;
    let years = app.years_in_business;
    let escalated = !app.has_alt_credit_score() && program.min_years_no_alt.is_some();
    let floor = if escalated {
        program.min_years_no_alt
    } else {
        program.min_years_in_business
    };

    let Some(min) = floor else {
        return CriterionResult::pass(c, "No time-in-business requirement");
    };

    if years < min {
        let months = ((min - years) * dec!(12)).trunc().normalize();
        let note = if escalated {
            " (higher minimum applies without a business credit score)"
        } else {
            ""
        };
        return CriterionResult::fail(
            c,
            format!(
                "{years:.1} years in business is below the {} year minimum{note}. \
                 Needs about {months} more months.",
                min.normalize()
            ),
        );
    }

    CriterionResult::pass(
        c,
        format!("{years:.1} years in business meets the {} year minimum", min.normalize()),
    )
}

pub fn check_annual_revenue(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::AnnualRevenue;
    let revenue = app.annual_revenue;
    let Some(min) = program.min_revenue else {
        return CriterionResult::pass(c, "No revenue requirement");
    };

    if revenue < min {
        let gap = min - revenue;
        let pct_below = if min.is_zero() {
            Decimal::ZERO
        } else {
            (gap / min * dec!(100)).round_dp(0)
        };
        return CriterionResult::fail(
            c,
            format!(
                "Revenue {} is {} short of the {} minimum ({pct_below}% below).",
                format_money(revenue),
                format_money(gap),
                format_money(min)
            ),
        );
    }

    CriterionResult::pass(
        c,
        format!(
            "Revenue {} meets the {} minimum",
            format_money(revenue),
            format_money(min)
        ),
    )
}

// ---------------------------------------------------------------------------
// Loan
// ---------------------------------------------------------------------------

pub fn check_loan_amount(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::LoanAmount;
    let amount = app.loan_amount;

    // Industry caps take precedence over the global bounds.
    for (industry, cap) in &program.industry_loan_limits {
        if loosely_matches(industry, &app.industry) && amount > *cap {
            return CriterionResult::fail(
                c,
                format!(
                    "{} exceeds the {} limit for the {industry} industry by {}.",
                    format_money(amount),
                    format_money(*cap),
                    format_money(amount - *cap)
                ),
            );
        }
    }

    if let Some(min) = program.min_loan_amount {
        if amount < min {
            return CriterionResult::fail(
                c,
                format!(
                    "{} is below the {} minimum by {}. Program requires larger loans.",
                    format_money(amount),
                    format_money(min),
                    format_money(min - amount)
                ),
            );
        }
    }

    if let Some(max) = program.max_loan_amount {
        if amount > max {
            return CriterionResult::fail(
                c,
                format!(
                    "{} exceeds the {} maximum by {}.",
                    format_money(amount),
                    format_money(max),
                    format_money(amount - max)
                ),
            );
        }
    }

    CriterionResult::pass(c, format!("Loan amount {} within limits", format_money(amount)))
}

pub fn check_term_months(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::TermMonths;
    let term = app.term_months;

    if let Some(min) = program.min_term_months {
        if term < min {
            return CriterionResult::fail(
                c,
                format!("{term} month term is {} months below minimum {min}.", min - term),
            );
        }
    }
    if let Some(max) = program.max_term_months {
        if term > max {
            return CriterionResult::fail(
                c,
                format!("{term} month term exceeds maximum {max} by {} months.", term - max),
            );
        }
    }

    CriterionResult::pass(c, format!("{term} month term accepted"))
}

// ---------------------------------------------------------------------------
// Restrictions
// ---------------------------------------------------------------------------

pub fn check_state(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::State;
    if program.restricted_states.iter().any(|s| *s == app.state) {
        return CriterionResult::fail(
            c,
            format!(
                "State {} is restricted. Not available in: {}.",
                app.state,
                program.restricted_states.join(", ")
            ),
        );
    }
    CriterionResult::pass(c, format!("State {} eligible", app.state))
}

pub fn check_industry(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::Industry;
    if let Some(restricted) = program
        .restricted_industries
        .iter()
        .find(|r| loosely_matches(r, &app.industry))
    {
        return CriterionResult::fail(
            c,
            format!(
                "Industry '{}' is restricted by this program (matches '{restricted}').",
                app.industry
            ),
        );
    }
    CriterionResult::pass(c, format!("Industry '{}' eligible", app.industry))
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

pub fn check_equipment_type(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::EquipmentType;
    let equipment = &app.equipment_type;

    if program
        .excluded_equipment_types
        .iter()
        .any(|e| loosely_matches(e, equipment))
    {
        return CriterionResult::fail(
            c,
            format!(
                "Equipment '{equipment}' is excluded. Not allowed: {}.",
                program.excluded_equipment_types.join(", ")
            ),
        );
    }

    if program.allowed_equipment_types.is_empty() {
        return CriterionResult::pass(c, format!("Equipment '{equipment}' accepted"));
    }

    if program
        .allowed_equipment_types
        .iter()
        .any(|a| loosely_matches(a, equipment))
    {
        CriterionResult::pass(c, format!("Equipment '{equipment}' approved"))
    } else {
        CriterionResult::fail(
            c,
            format!(
                "Equipment '{equipment}' is not in the approved list: {}.",
                program.allowed_equipment_types.join(", ")
            ),
        )
    }
}

pub fn check_equipment_age(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::EquipmentAge;
    let age = app.equipment_age_years;
    let Some(max) = program.max_equipment_age_years else {
        return CriterionResult::pass(c, "No equipment age restriction");
    };

    if age > max {
        return CriterionResult::fail(
            c,
            format!(
                "Equipment age {age:.1} years exceeds the {} year maximum by {} years.",
                max.normalize(),
                (age - max).normalize()
            ),
        );
    }
    CriterionResult::pass(c, format!("Equipment age {age:.1} years accepted"))
}

pub fn check_soft_costs(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::SoftCosts;
    let pct = app.soft_cost_pct.normalize();
    let Some(max) = program.max_soft_cost_pct else {
        return CriterionResult::pass(c, "No soft cost restriction");
    };

    if app.soft_cost_pct > max {
        return CriterionResult::fail(
            c,
            format!(
                "Soft costs {pct}% exceed the {}% maximum by {} points.",
                max.normalize(),
                (app.soft_cost_pct - max).normalize()
            ),
        );
    }
    CriterionResult::pass(c, format!("Soft costs {pct}% accepted"))
}

// ---------------------------------------------------------------------------
// Adverse credit
// ---------------------------------------------------------------------------

pub fn check_bankruptcies(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::Bankruptcies;
    let count = app.bankruptcies;

    if count > program.max_bankruptcies {
        return CriterionResult::fail(
            c,
            format!(
                "{count} bankruptcies exceeds the maximum of {}.",
                program.max_bankruptcies
            ),
        );
    }

    if count > 0 {
        if let Some(min_years) = program.min_bankruptcy_years {
            match app.bankruptcy_discharge_years {
                None => {
                    return CriterionResult::fail(
                        c,
                        format!(
                            "Bankruptcy discharge not reported; program requires \
                             {min_years}+ years since discharge."
                        ),
                    );
                }
                Some(years) if years < min_years => {
                    return CriterionResult::fail(
                        c,
                        format!(
                            "Bankruptcy discharged {years} years ago, requires {min_years}+ \
                             years ({} more).",
                            min_years - years
                        ),
                    );
                }
                Some(_) => {}
            }
        }
    }

    if count == 0 {
        CriterionResult::pass(c, "No bankruptcies reported")
    } else {
        CriterionResult::pass(c, format!("{count} bankruptcies within policy"))
    }
}

pub fn check_tax_liens(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::TaxLiens;
    if app.has_tax_liens && !program.allow_tax_liens {
        return CriterionResult::fail(c, "Tax liens not allowed by this program.");
    }
    CriterionResult::pass(c, "No tax lien issues")
}

pub fn check_judgments(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::Judgments;
    if app.has_judgments && !program.allow_judgments {
        return CriterionResult::fail(c, "Judgments not allowed by this program.");
    }
    CriterionResult::pass(c, "No judgment issues")
}

// ---------------------------------------------------------------------------
// Applicant
// ---------------------------------------------------------------------------

pub fn check_homeownership(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::Homeownership;
    if program.require_homeownership && !app.is_homeowner {
        return CriterionResult::fail(c, "Homeownership required for this program.");
    }
    CriterionResult::pass(c, "Homeownership check passed")
}

pub fn check_citizenship(app: &Application, program: &Program) -> CriterionResult {
    let c = Criterion::Citizenship;
    if program.require_citizenship && !app.is_citizen {
        return CriterionResult::fail(c, "Citizenship required for this program.");
    }
    CriterionResult::pass(c, "Citizenship check passed")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
