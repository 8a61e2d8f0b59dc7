//! Cross-validation of the Routh sign-change count against the roots.
//!
//! For polynomials with no roots on the imaginary axis, the number of sign
//! changes in the first column of the Routh array must equal the number of
//! roots with strictly positive real part.

use routh_core::prelude::*;
use routh_poly::{find_roots_of, parse_polynomial};

/// Descending coefficients and the known number of right-half-plane roots.
const CASES: &[(&[f64], usize)] = &[
    (&[1.0, 1.0, 10.0, 72.0, 152.0, 240.0], 2),
    (&[1.0, 3.0, 3.0, 1.0], 0),
    (&[1.0, 4.0, 1.0, -6.0], 1),
    (&[1.0, 2.0, 3.0, 4.0, 5.0], 2),
    (&[1.0, -4.0, 1.0, 6.0], 2),
    (&[1.0, 2.0, 5.0], 0),
    (&[1.0, -2.0, 5.0], 2),
    (&[1.0, 1.0, 2.0, 2.0, 3.0], 2),
];

#[test]
fn test_sign_changes_match_right_half_plane_roots() {
    for &(coefficients, expected) in CASES {
        let array = RouthArray::build(coefficients).unwrap();
        let verdict = classify(&array);

        let roots = find_roots_of(coefficients).unwrap();
        let groups = classify_roots(&roots);

        assert!(groups.imaginary_axis.is_empty(), "{coefficients:?}");
        assert_eq!(verdict.sign_changes, expected, "Routh count for {coefficients:?}");
        assert_eq!(groups.unstable_count(), expected, "root count for {coefficients:?}");
        assert_eq!(verdict.sign_changes, groups.right_half_plane.len());
    }
}

#[test]
fn test_marginal_pair_is_reported_by_roots_only() {
    // (s + 1)(s^2 + 4): the Routh scan sees no sign change, the roots show +/-2i.
    let p = parse_polynomial("(s + 1)(s^2 + 4)").unwrap();
    let array = RouthArray::build(&p.coefficients()).unwrap();
    assert!(array.has_substitutions());
    assert_eq!(classify(&array).sign_changes, 0);

    let roots = find_roots_of(&p.coefficients()).unwrap();
    let groups = classify_roots(&roots);
    assert_eq!(groups.imaginary_axis.len(), 2);
    assert!(groups.right_half_plane.is_empty());
    assert_eq!(groups.left_half_plane, 1);
}

#[test]
fn test_double_integrator() {
    let roots = find_roots_of(&[1.0, 0.0, 0.0]).unwrap();
    let groups = classify_roots(&roots);
    // Both roots sit at the origin: neither unstable nor on the axis proper.
    assert!(groups.right_half_plane.is_empty());
    assert!(groups.imaginary_axis.is_empty());
    assert_eq!(groups.left_half_plane, 2);

    let array = RouthArray::build(&[1.0, 0.0, 0.0]).unwrap();
    assert_eq!(classify(&array).sign_changes, 0);
}
