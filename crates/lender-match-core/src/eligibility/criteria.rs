//! Criterion identifiers, the static weight table and per-check results.
//!
//! Weights are on a 0–25 scale and sum to [`TOTAL_WEIGHT`]; the sum is
//! checked at compile time so a table edit cannot silently change the
//! fit-score denominator.

use serde::{Deserialize, Serialize};

/// One independently evaluated eligibility dimension.
///
/// Declaration order is execution order: `Ord` follows it, so maps keyed by
/// `Criterion` iterate in the same order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    CreditScore,
    AltCreditScore,
    YearsInBusiness,
    AnnualRevenue,
    LoanAmount,
    TermMonths,
    State,
    Industry,
    EquipmentType,
    EquipmentAge,
    Bankruptcies,
    TaxLiens,
    Judgments,
    Homeownership,
    Citizenship,
    SoftCosts,
}

/// Every criterion, in execution order.
pub const CRITERIA: [Criterion; 16] = [
    Criterion::CreditScore,
    Criterion::AltCreditScore,
    Criterion::YearsInBusiness,
    Criterion::AnnualRevenue,
    Criterion::LoanAmount,
    Criterion::TermMonths,
    Criterion::State,
    Criterion::Industry,
    Criterion::EquipmentType,
    Criterion::EquipmentAge,
    Criterion::Bankruptcies,
    Criterion::TaxLiens,
    Criterion::Judgments,
    Criterion::Homeownership,
    Criterion::Citizenship,
    Criterion::SoftCosts,
];

/// Sum of all criterion weights; the fit-score denominator.
pub const TOTAL_WEIGHT: u32 = 154;

pub const MAX_WEIGHT: u32 = 25;

const fn table_weight() -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < CRITERIA.len() {
        total += CRITERIA[i].weight();
        i += 1;
    }
    total
}

const _: () = assert!(table_weight() == TOTAL_WEIGHT);

impl Criterion {
    pub const fn weight(self) -> u32 {
        match self {
            Criterion::CreditScore => 25,
            Criterion::AltCreditScore => 15,
            Criterion::YearsInBusiness => 15,
            Criterion::AnnualRevenue => 10,
            Criterion::LoanAmount => 15,
            Criterion::TermMonths => 5,
            Criterion::State => 10,
            Criterion::Industry => 10,
            Criterion::EquipmentType => 5,
            Criterion::EquipmentAge => 5,
            Criterion::Bankruptcies => 10,
            Criterion::TaxLiens => 8,
            Criterion::Judgments => 8,
            Criterion::Homeownership => 5,
            Criterion::Citizenship => 5,
            Criterion::SoftCosts => 3,
        }
    }

    /// Stable field identifier used in reports and serialized maps.
    pub const fn as_str(self) -> &'static str {
        match self {
            Criterion::CreditScore => "credit_score",
            Criterion::AltCreditScore => "alt_credit_score",
            Criterion::YearsInBusiness => "years_in_business",
            Criterion::AnnualRevenue => "annual_revenue",
            Criterion::LoanAmount => "loan_amount",
            Criterion::TermMonths => "term_months",
            Criterion::State => "state",
            Criterion::Industry => "industry",
            Criterion::EquipmentType => "equipment_type",
            Criterion::EquipmentAge => "equipment_age",
            Criterion::Bankruptcies => "bankruptcies",
            Criterion::TaxLiens => "tax_liens",
            Criterion::Judgments => "judgments",
            Criterion::Homeownership => "homeownership",
            Criterion::Citizenship => "citizenship",
            Criterion::SoftCosts => "soft_costs",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Criterion::CreditScore => "Guarantor credit score within program bounds",
            Criterion::AltCreditScore => "Business credit score meets program minimum",
            Criterion::YearsInBusiness => "Time in business meets program minimum",
            Criterion::AnnualRevenue => "Annual revenue meets program minimum",
            Criterion::LoanAmount => "Loan amount within program and industry limits",
            Criterion::TermMonths => "Term within program bounds",
            Criterion::State => "Business state not restricted",
            Criterion::Industry => "Industry not restricted",
            Criterion::EquipmentType => "Equipment type permitted",
            Criterion::EquipmentAge => "Equipment age within program maximum",
            Criterion::Bankruptcies => "Bankruptcy history within policy",
            Criterion::TaxLiens => "Tax lien policy",
            Criterion::Judgments => "Judgment policy",
            Criterion::Homeownership => "Homeownership requirement",
            Criterion::Citizenship => "Citizenship requirement",
            Criterion::SoftCosts => "Soft costs within program maximum",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Output of a single criterion check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub passed: bool,
    /// Human-readable explanation, usable verbatim in a rejection report.
    pub reason: String,
    pub weight: u32,
}

impl CriterionResult {
    pub fn pass(criterion: Criterion, reason: impl Into<String>) -> Self {
        CriterionResult {
            criterion,
            passed: true,
            reason: reason.into(),
            weight: criterion.weight(),
        }
    }

    pub fn fail(criterion: Criterion, reason: impl Into<String>) -> Self {
        CriterionResult {
            criterion,
            passed: false,
            reason: reason.into(),
            weight: criterion.weight(),
        }
    }

    pub fn outcome(&self) -> CriterionOutcome {
        CriterionOutcome {
            passed: self.passed,
            reason: self.reason.clone(),
        }
    }
}

/// The `{passed, reason}` pair reported per criterion in a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionOutcome {
    pub passed: bool,
    pub reason: String,
}

/// Row of the weight table, for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionInfo {
    pub criterion: Criterion,
    pub weight: u32,
    pub description: String,
}

pub fn criterion_table() -> Vec<CriterionInfo> {
    CRITERIA
        .iter()
        .map(|c| CriterionInfo {
            criterion: *c,
            weight: c.weight(),
            description: c.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_total() {
        let sum: u32 = CRITERIA.iter().map(|c| c.weight()).sum();
        assert_eq!(sum, TOTAL_WEIGHT);
    }

    #[test]
    fn test_weights_within_scale() {
        for c in CRITERIA {
            assert!(c.weight() <= MAX_WEIGHT, "{c} weight {} out of range", c.weight());
        }
    }

    #[test]
    fn test_criteria_listed_in_ord_order() {
        let mut sorted = CRITERIA;
        sorted.sort();
        assert_eq!(sorted, CRITERIA);
    }

    #[test]
    fn test_serde_key_matches_as_str() {
        for c in CRITERIA {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
        }
    }

    #[test]
    fn test_result_carries_table_weight() {
        let r = CriterionResult::fail(Criterion::TaxLiens, "Tax liens not allowed.");
        assert_eq!(r.weight, 8);
        assert!(!r.passed);
        assert_eq!(r.outcome().reason, "Tax liens not allowed.");
    }

    #[test]
    fn test_table_has_every_criterion() {
        let table = criterion_table();
        assert_eq!(table.len(), 16);
        assert_eq!(table[0].criterion, Criterion::CreditScore);
        assert_eq!(table[0].weight, 25);
        assert_eq!(table[15].criterion, Criterion::SoftCosts);
    }
}
