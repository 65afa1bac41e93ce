use rust_decimal_macros::dec;

use super::application::Application;
use super::program::Program;

/// Clean application that passes every check against [`sample_program`].
pub(crate) fn sample_application() -> Application {
    Application {
        id: Some(1),
        business_name: "Acme Excavation LLC".into(),
        industry: "Construction".into(),
        state: "TX".into(),
        years_in_business: dec!(3),
        annual_revenue: dec!(500000),
        guarantor_name: "Jordan Reyes".into(),
        credit_score: 700,
        alt_credit_score: None,
        is_homeowner: false,
        is_citizen: true,
        bankruptcies: 0,
        bankruptcy_discharge_years: None,
        has_tax_liens: false,
        has_judgments: false,
        has_foreclosures: false,
        loan_amount: dec!(50000),
        term_months: 36,
        equipment_type: "Excavator".into(),
        equipment_age_years: dec!(2),
        equipment_description: None,
        soft_cost_pct: dec!(0),
    }
}

pub(crate) fn sample_program() -> Program {
    Program::new(1, "Test Program")
}
