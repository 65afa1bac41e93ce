use lender_match_core::eligibility::{
    evaluate_program, Application, Criterion, Program, ProgramVerdict, CRITERIA, TOTAL_WEIGHT,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn applicant() -> Application {
    Application {
        id: Some(42),
        business_name: "Lone Star Paving".into(),
        industry: "Construction".into(),
        state: "TX".into(),
        years_in_business: dec!(5),
        annual_revenue: dec!(750_000),
        guarantor_name: "Sam Ortiz".into(),
        credit_score: 720,
        alt_credit_score: None,
        is_homeowner: true,
        is_citizen: true,
        bankruptcies: 0,
        bankruptcy_discharge_years: None,
        has_tax_liens: false,
        has_judgments: false,
        has_foreclosures: false,
        loan_amount: dec!(50_000),
        term_months: 48,
        equipment_type: "Asphalt Paver".into(),
        equipment_age_years: dec!(3),
        equipment_description: Some("2021 paver".into()),
        soft_cost_pct: dec!(5),
    }
}

fn standard_program() -> Program {
    Program {
        min_credit_score: Some(650),
        min_years_in_business: Some(dec!(2)),
        min_loan_amount: Some(dec!(10_000)),
        max_loan_amount: Some(dec!(100_000)),
        ..Program::new(1, "Standard")
    }
}

fn expected_score(verdict: &ProgramVerdict) -> u32 {
    let failed: u32 = verdict.failed_criteria().iter().map(|c| c.weight()).sum();
    (TOTAL_WEIGHT - failed) * 100 / TOTAL_WEIGHT
}

// ===========================================================================
// Concrete scenarios
// ===========================================================================

#[test]
fn test_clean_application_is_eligible_with_full_score() {
    let verdict = evaluate_program(&applicant(), &standard_program());
    assert!(verdict.is_eligible);
    assert_eq!(verdict.fit_score, 100);
    assert_eq!(verdict.program_name, "Standard");
}

#[test]
fn test_low_credit_reports_value_and_gap() {
    let app = Application {
        credit_score: 600,
        ..applicant()
    };
    let verdict = evaluate_program(&app, &standard_program());

    let outcome = &verdict.criteria_results[&Criterion::CreditScore];
    assert!(!outcome.passed);
    assert!(outcome.reason.contains("600"));
    assert!(outcome.reason.contains("50"));
    assert_eq!(verdict.criteria_results.len(), CRITERIA.len());
    assert!(!verdict.is_eligible);
}

#[test]
fn test_restricted_state_blocks_eligibility() {
    let app = Application {
        state: "CA".into(),
        ..applicant()
    };
    let program = Program {
        restricted_states: vec!["CA".into(), "NY".into()],
        ..standard_program()
    };
    let verdict = evaluate_program(&app, &program);
    assert!(!verdict.is_eligible);
    assert_eq!(verdict.failed_criteria(), vec![Criterion::State]);
}

#[test]
fn test_industry_cap_fails_even_without_global_max() {
    let mut program = Program::new(9, "Trucking Specialist");
    program
        .industry_loan_limits
        .insert("Trucking".into(), dec!(150_000));
    let app = Application {
        industry: "Trucking".into(),
        loan_amount: dec!(160_000),
        ..applicant()
    };

    let verdict = evaluate_program(&app, &program);
    assert!(!verdict.criteria_results[&Criterion::LoanAmount].passed);

    program.max_loan_amount = Some(dec!(1_000_000));
    let verdict = evaluate_program(&app, &program);
    assert!(!verdict.criteria_results[&Criterion::LoanAmount].passed);
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_score_equals_weight_formula() {
    let apps = vec![
        applicant(),
        Application {
            credit_score: 600,
            ..applicant()
        },
        Application {
            state: "NY".into(),
            has_tax_liens: true,
            ..applicant()
        },
        Application {
            loan_amount: dec!(5_000),
            years_in_business: dec!(1),
            soft_cost_pct: dec!(40),
            bankruptcies: 2,
            ..applicant()
        },
    ];
    let program = Program {
        restricted_states: vec!["NY".into()],
        allow_tax_liens: false,
        max_soft_cost_pct: Some(dec!(20)),
        ..standard_program()
    };

    for app in &apps {
        let verdict = evaluate_program(app, &program);
        assert_eq!(verdict.fit_score, expected_score(&verdict));
        assert!(verdict.fit_score <= 100);
        assert_eq!(verdict.fit_score == 100, verdict.is_eligible);
        assert_eq!(
            verdict.rejection_reasons.len(),
            verdict.failed_criteria().len()
        );
    }
}

#[test]
fn test_everything_failing_scores_zero() {
    let app = Application {
        credit_score: 500,
        alt_credit_score: None,
        years_in_business: dec!(0.5),
        annual_revenue: dec!(10_000),
        loan_amount: dec!(1_000),
        term_months: 6,
        state: "CA".into(),
        industry: "Cannabis".into(),
        equipment_type: "Salon Chair".into(),
        equipment_age_years: dec!(20),
        bankruptcies: 1,
        has_tax_liens: true,
        has_judgments: true,
        is_homeowner: false,
        is_citizen: false,
        soft_cost_pct: dec!(50),
        ..applicant()
    };
    let program = Program {
        min_credit_score: Some(650),
        min_alt_credit_score: Some(60),
        min_years_in_business: Some(dec!(2)),
        min_revenue: Some(dec!(250_000)),
        min_loan_amount: Some(dec!(10_000)),
        min_term_months: Some(12),
        restricted_states: vec!["CA".into()],
        restricted_industries: vec!["Cannabis".into()],
        excluded_equipment_types: vec!["Salon".into()],
        max_equipment_age_years: Some(dec!(10)),
        allow_tax_liens: false,
        allow_judgments: false,
        require_homeownership: true,
        require_citizenship: true,
        max_soft_cost_pct: Some(dec!(10)),
        ..Program::new(2, "Strict")
    };

    let verdict = evaluate_program(&app, &program);
    assert_eq!(verdict.fit_score, 0);
    assert_eq!(verdict.rejection_reasons.len(), 16);
    assert_eq!(verdict.failed_criteria(), CRITERIA.to_vec());
}

#[test]
fn test_idempotent_evaluation() {
    let app = Application {
        credit_score: 640,
        annual_revenue: dec!(90_000),
        ..applicant()
    };
    let program = Program {
        min_revenue: Some(dec!(100_000)),
        ..standard_program()
    };
    let first = evaluate_program(&app, &program);
    let second = evaluate_program(&app, &program);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_relaxing_thresholds_is_monotone() {
    let app = Application {
        credit_score: 660,
        years_in_business: dec!(2),
        loan_amount: dec!(120_000),
        equipment_age_years: dec!(9),
        ..applicant()
    };
    let strict = Program {
        min_credit_score: Some(700),
        min_years_in_business: Some(dec!(3)),
        max_loan_amount: Some(dec!(100_000)),
        max_equipment_age_years: Some(dec!(7)),
        ..Program::new(3, "Strict")
    };

    let relaxations: Vec<Program> = vec![
        Program {
            min_credit_score: Some(650),
            ..strict.clone()
        },
        Program {
            min_credit_score: None,
            ..strict.clone()
        },
        Program {
            min_years_in_business: Some(dec!(1)),
            ..strict.clone()
        },
        Program {
            max_loan_amount: Some(dec!(150_000)),
            ..strict.clone()
        },
        Program {
            max_equipment_age_years: None,
            ..strict.clone()
        },
    ];

    let base = evaluate_program(&app, &strict);
    for relaxed in &relaxations {
        let verdict = evaluate_program(&app, relaxed);
        assert!(verdict.fit_score >= base.fit_score);
        if base.is_eligible {
            assert!(verdict.is_eligible);
        }
    }
}

#[test]
fn test_missing_alt_score_escalates_floors() {
    let program = Program {
        min_credit_score: Some(650),
        min_credit_score_no_alt: Some(700),
        min_years_in_business: Some(dec!(2)),
        min_years_no_alt: Some(dec!(4)),
        ..Program::new(4, "PayNet preferred")
    };
    let thin_file = Application {
        credit_score: 680,
        years_in_business: dec!(3),
        alt_credit_score: None,
        ..applicant()
    };
    let verdict = evaluate_program(&thin_file, &program);
    assert_eq!(
        verdict.failed_criteria(),
        vec![Criterion::CreditScore, Criterion::YearsInBusiness]
    );
    // 154 - 25 - 15 = 114 -> 74.03
    assert_eq!(verdict.fit_score, 74);

    let with_report = Application {
        alt_credit_score: Some(72),
        ..thin_file
    };
    let verdict = evaluate_program(&with_report, &program);
    assert!(verdict.is_eligible);
}

#[test]
fn test_verdict_json_shape() {
    let verdict = evaluate_program(&applicant(), &standard_program());
    let json = serde_json::to_value(&verdict).unwrap();
    let keys: Vec<&str> = json["criteria_results"]
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    assert_eq!(keys.len(), 16);
    assert!(keys.contains(&"alt_credit_score"));
    assert!(keys.contains(&"equipment_age"));
    assert_eq!(json["is_eligible"], true);
    assert_eq!(json["fit_score"], 100);
    assert_eq!(json["program_id"], 1);
}
