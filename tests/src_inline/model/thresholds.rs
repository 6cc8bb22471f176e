use super::*;

#[test]
fn test_round1_ties_to_even_on_exact_values() {
    assert_eq!(round1(2.25), 2.2);
    assert_eq!(round1(0.25), 0.2);
    assert_eq!(round1(0.75), 0.8);
}

#[test]
fn test_round1_uses_stored_binary_value() {
    // 0.15 and 0.35 sit just below their midpoints, 0.45 just above.
    assert_eq!(round1(0.15), 0.1);
    assert_eq!(round1(0.35), 0.3);
    assert_eq!(round1(0.45), 0.5);
    assert_eq!(round1(2.675), 2.7);
}

#[test]
fn test_round1_negative() {
    assert_eq!(round1(-2.16), -2.2);
    assert_eq!(round1(-1.04), -1.0);
}

#[test]
fn test_cap_only_bounds_from_above() {
    assert_eq!(cap(7.5), SCORE_CAP);
    assert_eq!(cap(4.2), 4.2);
    assert_eq!(cap(-3.0), -3.0);
}
