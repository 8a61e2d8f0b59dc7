use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use routh::prelude::*;

#[test]
fn test_degree_five_unstable_report() {
    let report = analyze("s^5+s^4+10s^3+72s^2+152s+240").unwrap();

    assert_eq!(report.equation, "s^5 + s^4 + 10s^3 + 72s^2 + 152s + 240");
    assert_eq!(report.coefficients, vec![1.0, 1.0, 10.0, 72.0, 152.0, 240.0]);
    assert_eq!(report.degree(), 5);
    assert!(!report.is_stable);
    assert_eq!(report.sign_changes, 2);
    assert_eq!(report.rhs_poles.len(), 2);
    assert!(report.imaginary_poles.is_empty());
    assert_eq!(report.roots.as_ref().map(Vec::len), Some(5));
    assert_eq!(report.methods_agree(), Some(true));
    assert!(report.pivot_substitutions.is_empty());
    assert_eq!(
        report.to_string(),
        "UNSTABLE with 2 poles in the right half of the s-plane"
    );
}

#[test]
fn test_report_matches_core_array() {
    let coefficients = [1.0, 1.0, 10.0, 72.0, 152.0, 240.0];
    let report = analyze_coefficients(&coefficients).unwrap();
    let array = RouthArray::build(&coefficients).unwrap();

    assert_eq!(report.routh_array, array.to_rows());
    assert_eq!(report.first_column(), array.first_column());
    assert_eq!(report.sign_changes, classify(&array).sign_changes);
}

#[test]
fn test_zero_pivot_reported_not_raised() {
    let report = analyze_coefficients(&[1.0, 0.0, 0.0]).unwrap();

    assert_eq!(report.sign_changes, 0);
    assert!(report.is_stable);
    assert_eq!(report.pivot_substitutions.len(), 1);
    assert_eq!(report.pivot_substitutions[0].row, 1);
    assert_eq!(report.pivot_substitutions[0].derived_row, 2);
    assert_eq!(report.pivot_substitutions[0].substitute, 1e-10);
    // s^2 has a double root at the origin, which is neither RHP nor on the axis.
    assert!(report.rhs_poles.is_empty());
    assert!(report.imaginary_poles.is_empty());
}

#[test]
fn test_marginal_system() {
    // (s + 1)(s^2 + 4)
    let report = analyze("(s+1)(s^2+4)").unwrap();

    assert!(report.is_stable);
    assert!(report.is_marginal());
    assert_eq!(report.imaginary_poles.len(), 2);
    assert!(!report.pivot_substitutions.is_empty());
    assert_eq!(
        report.to_string(),
        "STABLE (all poles in the left half of the s-plane); 2 poles on the imaginary axis"
    );
}

#[test]
fn test_stable_binomial() {
    let report = analyze("(s+1)^3").unwrap();
    assert!(report.is_stable);
    assert_relative_eq!(report.first_column()[2], 8.0 / 3.0);
    assert_eq!(report.to_string(), "STABLE (all poles in the left half of the s-plane)");
    assert_eq!(report.methods_agree(), Some(true));
}

#[test]
fn test_constant_polynomial() {
    let report = analyze("5").unwrap();
    assert_eq!(report.routh_array, vec![vec![5.0]]);
    assert!(report.is_stable);
    assert_eq!(report.roots, Some(Vec::new()));
}

#[test]
fn test_parse_error_is_wrapped() {
    let err = analyze("s^2 + 3x").unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(err, AnalysisError::Parse(_)));

    assert!(matches!(
        analyze("").unwrap_err(),
        AnalysisError::Parse(routh::routh_poly::ParseError::Empty)
    ));
}

#[test]
fn test_custom_tolerance_flows_into_array() {
    let analyzer = Analyzer::new(AnalysisConfig::new().with_tolerance(1e-6));
    let report = analyzer.analyze_coefficients(&[1.0, 0.0, 0.0]).unwrap();
    assert_eq!(report.pivot_substitutions[0].substitute, 1e-6);
}

#[test]
fn test_batch_preserves_order() {
    let equations = ["(s+1)^3", "s^2 - 1", "s^2 + 3x", "s^5+s^4+10s^3+72s^2+152s+240"];
    let results = Analyzer::default().analyze_batch(&equations);

    assert_eq!(results.len(), 4);
    assert!(results[0].as_ref().unwrap().is_stable);
    assert_eq!(results[1].as_ref().unwrap().sign_changes, 1);
    assert!(results[2].is_err());
    assert_eq!(results[3].as_ref().unwrap().sign_changes, 2);

    let owned: Vec<String> = equations.iter().map(|e| e.to_string()).collect();
    let again = Analyzer::default().analyze_batch(&owned);
    assert_eq!(again, results);
}

#[test]
fn test_analyzer_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Analyzer>();
    assert_send_sync::<StabilityReport>();
    assert_send_sync::<AnalysisError>();
}

proptest! {
    #[test]
    fn prop_real_left_half_plane_roots_are_stable(
        roots in prop::collection::vec(-5.0f64..-0.1, 1..5)
    ) {
        let polynomial = roots.iter().fold(Polynomial::constant(1.0), |acc, &r| {
            acc * Polynomial::from_descending(&[1.0, -r])
        });
        let report = Analyzer::default().analyze_polynomial(&polynomial).unwrap();

        prop_assert!(report.is_stable);
        prop_assert_eq!(report.sign_changes, 0);
        prop_assert!(report.rhs_poles.is_empty());
        prop_assert_eq!(report.methods_agree(), Some(true));
    }
}
