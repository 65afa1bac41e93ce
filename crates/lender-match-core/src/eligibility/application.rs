//! Financing application: the facts a broker submits for one request.

use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent, Years};

fn default_true() -> bool {
    true
}

/// One financing request: business, guarantor, adverse-credit, loan and
/// equipment facts. Read-only for the duration of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    // -- Business --
    #[serde(default)]
    pub business_name: String,
    pub industry: String,
    /// Two-letter state code, compared exactly against restriction lists.
    pub state: String,
    pub years_in_business: Years,
    pub annual_revenue: Money,

    // -- Guarantor --
    #[serde(default)]
    pub guarantor_name: String,
    /// Personal guarantor credit score (FICO-style).
    pub credit_score: u32,
    /// Business-level trade credit score (PayNet-style). `None` when no
    /// business credit report is on file, which can trigger stricter floors.
    #[serde(default)]
    pub alt_credit_score: Option<u32>,
    #[serde(default)]
    pub is_homeowner: bool,
    #[serde(default = "default_true")]
    pub is_citizen: bool,

    // -- Adverse credit --
    #[serde(default)]
    pub bankruptcies: u32,
    /// Years since the most recent bankruptcy discharge.
    #[serde(default)]
    pub bankruptcy_discharge_years: Option<u32>,
    #[serde(default)]
    pub has_tax_liens: bool,
    #[serde(default)]
    pub has_judgments: bool,
    #[serde(default)]
    pub has_foreclosures: bool,

    // -- Loan --
    pub loan_amount: Money,
    pub term_months: u32,

    // -- Equipment --
    pub equipment_type: String,
    #[serde(default)]
    pub equipment_age_years: Years,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_description: Option<String>,
    #[serde(default)]
    pub soft_cost_pct: Percent,
}

impl Application {
    pub fn has_alt_credit_score(&self) -> bool {
        self.alt_credit_score.is_some()
    }
}

/// Lifecycle a host records around a match run.
///
/// `Completed` with zero eligible programs is a valid outcome; `Failed` is
/// reserved for runs that could not evaluate at all (for example the host
/// could not load the application or programs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Processing => write!(f, "processing"),
            ApplicationStatus::Completed => write!(f, "completed"),
            ApplicationStatus::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimal_json_fills_defaults() {
        let app: Application = serde_json::from_value(serde_json::json!({
            "industry": "Construction",
            "state": "TX",
            "years_in_business": 3,
            "annual_revenue": "500000",
            "credit_score": 700,
            "loan_amount": 50000,
            "term_months": 36,
            "equipment_type": "Excavator"
        }))
        .unwrap();

        assert_eq!(app.annual_revenue, dec!(500000));
        assert_eq!(app.years_in_business, dec!(3));
        assert!(app.is_citizen);
        assert!(!app.is_homeowner);
        assert_eq!(app.bankruptcies, 0);
        assert_eq!(app.soft_cost_pct, dec!(0));
        assert!(!app.has_alt_credit_score());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ApplicationStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Pending);
    }
}
