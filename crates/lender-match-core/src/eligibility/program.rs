//! Lender program: published eligibility criteria and administrator edits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent, Years};

fn default_true() -> bool {
    true
}

/// One lender's published criteria. Every optional threshold uses `None` for
/// "no constraint"; `Some(0)` is a real requirement of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // -- Credit --
    #[serde(default)]
    pub min_credit_score: Option<u32>,
    #[serde(default)]
    pub max_credit_score: Option<u32>,
    /// Credit floor used instead of `min_credit_score` when the applicant has
    /// no alternate business credit score. Expected to be >= the normal floor.
    #[serde(default)]
    pub min_credit_score_no_alt: Option<u32>,
    #[serde(default)]
    pub min_alt_credit_score: Option<u32>,

    // -- Business --
    #[serde(default)]
    pub min_years_in_business: Option<Years>,
    /// Time-in-business floor used when the alternate score is absent.
    #[serde(default)]
    pub min_years_no_alt: Option<Years>,
    #[serde(default)]
    pub min_revenue: Option<Money>,

    // -- Loan --
    #[serde(default)]
    pub min_loan_amount: Option<Money>,
    #[serde(default)]
    pub max_loan_amount: Option<Money>,
    #[serde(default)]
    pub min_term_months: Option<u32>,
    #[serde(default)]
    pub max_term_months: Option<u32>,
    /// Per-industry caps, e.g. `{"Trucking": 150000}`. Keys are matched
    /// loosely against the application industry.
    #[serde(default)]
    pub industry_loan_limits: BTreeMap<String, Money>,

    // -- Adverse credit --
    #[serde(default)]
    pub max_bankruptcies: u32,
    /// Minimum years since discharge when any bankruptcy is reported.
    #[serde(default)]
    pub min_bankruptcy_years: Option<u32>,
    #[serde(default = "default_true")]
    pub allow_tax_liens: bool,
    #[serde(default = "default_true")]
    pub allow_judgments: bool,
    /// Carried for hosts and reporting; no fit-scoring criterion reads it.
    #[serde(default = "default_true")]
    pub allow_foreclosures: bool,

    // -- Applicant --
    #[serde(default)]
    pub require_homeownership: bool,
    #[serde(default)]
    pub require_citizenship: bool,

    // -- Equipment --
    /// Empty means any equipment type is accepted.
    #[serde(default)]
    pub allowed_equipment_types: Vec<String>,
    #[serde(default)]
    pub excluded_equipment_types: Vec<String>,
    #[serde(default)]
    pub max_equipment_age_years: Option<Years>,
    #[serde(default)]
    pub max_soft_cost_pct: Option<Percent>,

    // -- Restrictions --
    #[serde(default)]
    pub restricted_states: Vec<String>,
    #[serde(default)]
    pub restricted_industries: Vec<String>,

    /// Caller-visible tier. Never used for eligibility or ordering.
    #[serde(default)]
    pub priority: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Program {
    /// An active program with no constraints beyond the permissive defaults.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Program {
            id,
            name: name.into(),
            description: None,
            min_credit_score: None,
            max_credit_score: None,
            min_credit_score_no_alt: None,
            min_alt_credit_score: None,
            min_years_in_business: None,
            min_years_no_alt: None,
            min_revenue: None,
            min_loan_amount: None,
            max_loan_amount: None,
            min_term_months: None,
            max_term_months: None,
            industry_loan_limits: BTreeMap::new(),
            max_bankruptcies: 0,
            min_bankruptcy_years: None,
            allow_tax_liens: true,
            allow_judgments: true,
            allow_foreclosures: true,
            require_homeownership: false,
            require_citizenship: false,
            allowed_equipment_types: Vec::new(),
            excluded_equipment_types: Vec::new(),
            max_equipment_age_years: None,
            max_soft_cost_pct: None,
            restricted_states: Vec::new(),
            restricted_industries: Vec::new(),
            priority: 0,
            active: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Administrator edits
// ---------------------------------------------------------------------------

/// Partial edit of a program. `None` leaves the field unchanged; there is no
/// way to clear an optional threshold through an update, only to replace it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub min_credit_score: Option<u32>,
    pub max_credit_score: Option<u32>,
    pub min_credit_score_no_alt: Option<u32>,
    pub min_alt_credit_score: Option<u32>,
    pub min_years_in_business: Option<Years>,
    pub min_years_no_alt: Option<Years>,
    pub min_revenue: Option<Money>,
    pub min_loan_amount: Option<Money>,
    pub max_loan_amount: Option<Money>,
    pub min_term_months: Option<u32>,
    pub max_term_months: Option<u32>,
    pub industry_loan_limits: Option<BTreeMap<String, Money>>,
    pub max_bankruptcies: Option<u32>,
    pub min_bankruptcy_years: Option<u32>,
    pub allow_tax_liens: Option<bool>,
    pub allow_judgments: Option<bool>,
    pub allow_foreclosures: Option<bool>,
    pub require_homeownership: Option<bool>,
    pub require_citizenship: Option<bool>,
    pub allowed_equipment_types: Option<Vec<String>>,
    pub excluded_equipment_types: Option<Vec<String>>,
    pub max_equipment_age_years: Option<Years>,
    pub max_soft_cost_pct: Option<Percent>,
    pub restricted_states: Option<Vec<String>>,
    pub restricted_industries: Option<Vec<String>>,
    pub priority: Option<i32>,
    pub active: Option<bool>,
}

macro_rules! apply_value {
    ($update:ident, $program:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$update.$field {
                $program.$field = value.clone();
            }
        )+
    };
}

macro_rules! apply_threshold {
    ($update:ident, $program:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$update.$field {
                $program.$field = Some(value.clone());
            }
        )+
    };
}

impl ProgramUpdate {
    /// Overwrite every field of `program` that this update sets.
    pub fn apply(&self, program: &mut Program) {
        let update = self;
        apply_value!(
            update,
            program,
            name,
            industry_loan_limits,
            max_bankruptcies,
            allow_tax_liens,
            allow_judgments,
            allow_foreclosures,
            require_homeownership,
            require_citizenship,
            allowed_equipment_types,
            excluded_equipment_types,
            restricted_states,
            restricted_industries,
            priority,
            active,
        );
        apply_threshold!(
            update,
            program,
            description,
            min_credit_score,
            max_credit_score,
            min_credit_score_no_alt,
            min_alt_credit_score,
            min_years_in_business,
            min_years_no_alt,
            min_revenue,
            min_loan_amount,
            max_loan_amount,
            min_term_months,
            max_term_months,
            min_bankruptcy_years,
            max_equipment_age_years,
            max_soft_cost_pct,
        );
    }

    pub fn is_empty(&self) -> bool {
        *self == ProgramUpdate::default()
    }
}
