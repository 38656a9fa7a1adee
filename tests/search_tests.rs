use mayday::{
    observed_effectiveness, resolve, sweep, AreaBounds, AreaId, CellGrid, SearchOutcome,
    TargetLocation,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_sweep_quota() {
    let mut rng = SmallRng::seed_from_u64(7);
    let bounds = AreaBounds::new(0, 0, 50, 50);

    let none = sweep(&mut rng, &bounds, 0.0).unwrap();
    assert!(none.is_empty());

    let some = sweep(&mut rng, &bounds, 0.6).unwrap();
    assert_eq!(some.count_ones(), 1500);

    let all = sweep(&mut rng, &bounds, 1.0).unwrap();
    assert_eq!(all.count_ones(), 2500);
}

#[test]
fn test_sweep_clamps_effectiveness() {
    let mut rng = SmallRng::seed_from_u64(11);
    let bounds = AreaBounds::new(0, 0, 50, 50);

    let over = sweep(&mut rng, &bounds, 2.5).unwrap();
    assert_eq!(over.count_ones(), 2500);

    let under = sweep(&mut rng, &bounds, -0.3).unwrap();
    assert!(under.is_empty());
}

#[test]
fn test_sweep_cells_stay_in_extent() {
    let mut rng = SmallRng::seed_from_u64(99);
    // offset corners like a charted rectangle; cells are still area-local
    let bounds = AreaBounds::new(105, 205, 155, 255);
    let coverage = sweep(&mut rng, &bounds, 0.5).unwrap();
    assert_eq!(coverage.count_ones(), 1250);
    for (x, y) in coverage.iter_set_cells() {
        assert!(x < 50 && y < 50);
    }
}

#[test]
fn test_resolve_requires_area_and_cell() {
    let target = TargetLocation::new(AreaId::new(3), (10, 10));

    let mut covered = CellGrid::new(50, 50).unwrap();
    covered.set(10, 10).unwrap();
    let mut missed = CellGrid::new(50, 50).unwrap();
    missed.set(10, 11).unwrap();

    // right area, target cell swept
    assert_eq!(
        resolve(AreaId::new(3), &covered, &target),
        SearchOutcome::Found
    );
    // right area, target cell missed
    assert_eq!(
        resolve(AreaId::new(3), &missed, &target),
        SearchOutcome::NotFound
    );
    // wrong area, even with the matching local cell swept
    assert_eq!(
        resolve(AreaId::new(1), &covered, &target),
        SearchOutcome::NotFound
    );
}

#[test]
fn test_full_sweep_always_finds() {
    let bounds = AreaBounds::new(0, 0, 50, 50);
    let target = TargetLocation::new(AreaId::new(2), (49, 0));
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let coverage = sweep(&mut rng, &bounds, 1.0).unwrap();
        assert_eq!(
            resolve(AreaId::new(2), &coverage, &target),
            SearchOutcome::Found
        );
    }
}

#[test]
fn test_observed_effectiveness_counts_union() {
    let a = CellGrid::from_iter(50, 50, (0..30).map(|x| (x, 0))).unwrap();
    let b = CellGrid::from_iter(50, 50, (20..40).map(|x| (x, 0))).unwrap();

    // 40 distinct cells of 2500; the 10-cell overlap counts once
    let observed = observed_effectiveness(&a, &b);
    assert!((observed - 40.0 / 2500.0).abs() < 1e-12);

    let mut full = CellGrid::new(50, 50).unwrap();
    full.fill();
    assert_eq!(observed_effectiveness(&full, &full), 1.0);
}
