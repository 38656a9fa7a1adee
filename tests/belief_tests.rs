use mayday::{revise_priors, EngineError};

#[test]
fn test_revision_stays_normalized() {
    let revised = revise_priors([0.2, 0.5, 0.3], [0.3, 0.7, 0.5]).unwrap();
    let sum: f64 = revised.iter().sum();
    assert!((sum - 1.0).abs() < 1e-12);
    for p in revised {
        assert!((0.0..=1.0).contains(&p));
    }
}

#[test]
fn test_unsearched_round_is_identity() {
    let revised = revise_priors([0.2, 0.5, 0.3], [0.0, 0.0, 0.0]).unwrap();
    assert!((revised[0] - 0.2).abs() < 1e-12);
    assert!((revised[1] - 0.5).abs() < 1e-12);
    assert!((revised[2] - 0.3).abs() < 1e-12);
}

#[test]
fn test_partial_sweep_shifts_mass() {
    // searching only the middle area at 60% coverage leaves masses
    // 0.2 : 0.2 : 0.3, i.e. 2/7, 2/7, 3/7 after renormalization
    let revised = revise_priors([0.2, 0.5, 0.3], [0.0, 0.6, 0.0]).unwrap();
    assert!((revised[0] - 2.0 / 7.0).abs() < 1e-9);
    assert!((revised[1] - 2.0 / 7.0).abs() < 1e-9);
    assert!((revised[2] - 3.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_full_sweep_eliminates_area() {
    let revised = revise_priors([0.2, 0.5, 0.3], [0.0, 1.0, 0.0]).unwrap();
    assert_eq!(revised[1], 0.0);
    assert!((revised[0] - 0.4).abs() < 1e-9);
    assert!((revised[2] - 0.6).abs() < 1e-9);
}

#[test]
fn test_zero_prior_area_stays_zero() {
    let revised = revise_priors([0.0, 0.6, 0.4], [0.0, 0.5, 0.0]).unwrap();
    assert_eq!(revised[0], 0.0);
    let sum: f64 = revised.iter().sum();
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn test_collapse_reported() {
    let err = revise_priors([0.2, 0.5, 0.3], [1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err, EngineError::BeliefCollapse);
}
