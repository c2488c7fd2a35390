use maint_ordering::{LevelEntry, LocationOverrides, OrderingChecker, check_level_order};
use proptest::prelude::*;

/// Sorted level vectors of matching length for subsystems and their paths.
fn monotone_levels() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(-1000i64..1000, n),
            prop::collection::vec(0i64..100, n),
        )
    })
}

proptest! {
    #[test]
    fn monotone_inputs_are_consistent((mut declared, mut topo) in monotone_levels()) {
        declared.sort_unstable();
        topo.sort_unstable();

        let subsystems: Vec<LevelEntry> = declared
            .iter()
            .enumerate()
            .map(|(i, level)| LevelEntry::new(*level, format!("subsys{i}")))
            .collect();
        let sorting: Vec<LevelEntry> = topo
            .iter()
            .enumerate()
            .map(|(i, level)| LevelEntry::new(*level, format!("src/lib/subsys{i}")))
            .collect();

        let overrides = LocationOverrides::empty();
        let report = OrderingChecker::new(&sorting, &overrides).check(&subsystems);

        prop_assert!(report.is_consistent());
        prop_assert!(report.findings().is_empty());
    }

    #[test]
    fn level_findings_match_decreasing_pairs(levels in prop::collection::vec(-50i64..50, 0..60)) {
        let subsystems: Vec<LevelEntry> = levels
            .iter()
            .enumerate()
            .map(|(i, level)| LevelEntry::new(*level, format!("s{i}")))
            .collect();

        let decreases = levels.windows(2).filter(|w| w[0] > w[1]).count();
        prop_assert_eq!(check_level_order(&subsystems).len(), decreases);
    }
}
