use mayday::revise_priors;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn revision_preserves_normalization(
        w1 in 1e-3..1.0f64,
        w2 in 1e-3..1.0f64,
        w3 in 1e-3..1.0f64,
        e1 in 0.0..0.9f64,
        e2 in 0.0..0.9f64,
        e3 in 0.0..0.9f64,
    ) {
        let total = w1 + w2 + w3;
        let priors = [w1 / total, w2 / total, w3 / total];
        let revised = revise_priors(priors, [e1, e2, e3]).unwrap();
        let sum: f64 = revised.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        for p in revised {
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn unsearched_round_changes_nothing(
        w1 in 1e-3..1.0f64,
        w2 in 1e-3..1.0f64,
        w3 in 1e-3..1.0f64,
    ) {
        let total = w1 + w2 + w3;
        let priors = [w1 / total, w2 / total, w3 / total];
        let revised = revise_priors(priors, [0.0, 0.0, 0.0]).unwrap();
        for (before, after) in priors.iter().zip(revised.iter()) {
            prop_assert!((before - after).abs() < 1e-12);
        }
    }

    #[test]
    fn fully_swept_area_is_eliminated(
        w1 in 1e-3..1.0f64,
        w2 in 1e-3..1.0f64,
        w3 in 1e-3..1.0f64,
        e2 in 0.0..0.9f64,
    ) {
        let total = w1 + w2 + w3;
        let priors = [w1 / total, w2 / total, w3 / total];
        let revised = revise_priors(priors, [1.0, e2, 0.0]).unwrap();
        prop_assert_eq!(revised[0], 0.0);
        prop_assert!(revised[2] > 0.0);
    }

    #[test]
    fn searched_mass_shifts_to_unsearched(
        w1 in 1e-3..1.0f64,
        w2 in 1e-3..1.0f64,
        w3 in 1e-3..1.0f64,
        e1 in 1e-3..0.9f64,
    ) {
        let total = w1 + w2 + w3;
        let priors = [w1 / total, w2 / total, w3 / total];
        let revised = revise_priors(priors, [e1, 0.0, 0.0]).unwrap();
        prop_assert!(revised[0] < priors[0]);
        prop_assert!(revised[1] >= priors[1]);
        prop_assert!(revised[2] >= priors[2]);
    }
}
