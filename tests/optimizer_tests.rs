mod common;

use cohort::config::ScoringMode;
use cohort::error::CohortError;
use cohort::export::{to_index_groups, to_name_groups};
use cohort::optimizer::{OptimizationOptions, Optimizer, TrialObserver};
use cohort::partition::compute_sizes;
use cohort::roster::RosterBuilder;
use common::{conflict_roster, mixed_roster, zero_roster};
use rstest::rstest;
use std::cell::RefCell;

struct Recorder {
    seen: RefCell<Vec<(usize, f64, f64)>>,
}

impl TrialObserver for Recorder {
    fn on_trial(&self, trial: usize, score: f64, best_score: f64) {
        self.seen.borrow_mut().push((trial, score, best_score));
    }
}

#[test]
fn test_all_zero_roster_splits_evenly_with_zero_score() {
    let roster = zero_roster(&["A", "B", "C", "D", "E", "F"]);
    let sizes = compute_sizes(roster.len(), 2).unwrap();
    let optimizer = Optimizer::new(&roster, sizes, 50, ScoringMode::GroupPosition);

    let result = optimizer.run(None).unwrap();

    assert_eq!(result.score, 0.0);
    assert_eq!(result.partition.len(), 2);
    assert!(result.partition.groups().iter().all(|g| g.len() == 3));
}

#[test]
fn test_conflicting_pair_is_separated_by_index() {
    let roster = conflict_roster();
    let sizes = compute_sizes(roster.len(), 2).unwrap();
    let optimizer = Optimizer::new(&roster, sizes, 100, ScoringMode::RegistryIndex);

    let result = optimizer.run(Some(7)).unwrap();
    assert_eq!(result.score, 0.0);

    let names = to_name_groups(&result.partition);
    for group in &names {
        let has_a = group.iter().any(|n| n == "A");
        let has_b = group.iter().any(|n| n == "B");
        assert!(!(has_a && has_b), "A and B share a group: {:?}", names);
    }
}

#[test]
fn test_conflicting_pair_under_group_position_scoring() {
    // Every 2+2 split reads rows[0][0] (the A-B cell) once per group.
    let roster = conflict_roster();
    let sizes = compute_sizes(roster.len(), 2).unwrap();
    let optimizer = Optimizer::new(&roster, sizes, 100, ScoringMode::GroupPosition);

    let result = optimizer.run(Some(7)).unwrap();
    assert_eq!(result.score, 20.0);
    assert_eq!(result.best_trial, 0);
}

#[rstest]
#[case(7, 3)]
#[case(10, 5)]
#[case(13, 4)]
#[case(3, 5)]
#[case(1, 1)]
fn test_every_entity_placed_exactly_once(#[case] n: usize, #[case] groups: usize) {
    let roster = mixed_roster(n);
    let options = OptimizationOptions {
        num_groups: groups,
        trials: 30,
        ..Default::default()
    };
    let optimizer = Optimizer::from_options(&roster, &options).unwrap();
    let result = optimizer.run(Some(11)).unwrap();

    let mut seen: Vec<usize> = to_index_groups(&result.partition).concat();
    seen.sort_unstable();
    assert_eq!(seen, (0..n).collect::<Vec<_>>());

    for group in result.partition.groups() {
        assert!(group.len() <= group.capacity());
    }
    assert_eq!(result.partition.len(), groups);
}

#[test]
fn test_seeded_runs_are_identical() {
    let roster = mixed_roster(12);
    let sizes = compute_sizes(roster.len(), 3).unwrap();
    let optimizer = Optimizer::new(&roster, sizes, 200, ScoringMode::RegistryIndex);

    let a = optimizer.run(Some(12345)).unwrap();
    let b = optimizer.run(Some(12345)).unwrap();

    assert_eq!(a.score, b.score);
    assert_eq!(a.best_trial, b.best_trial);
    assert_eq!(to_index_groups(&a.partition), to_index_groups(&b.partition));
}

#[rstest]
#[case(ScoringMode::GroupPosition, 0)]
#[case(ScoringMode::RegistryIndex, 0)]
#[case(ScoringMode::RegistryIndex, 3)]
fn test_parallel_matches_sequential(#[case] mode: ScoringMode, #[case] threads: usize) {
    let roster = mixed_roster(15);
    let sizes = compute_sizes(roster.len(), 4).unwrap();
    let optimizer = Optimizer::new(&roster, sizes, 300, mode);

    let seq = optimizer.run(Some(99)).unwrap();
    let par = optimizer.run_parallel(Some(99), threads).unwrap();

    assert_eq!(seq.score, par.score);
    assert_eq!(seq.best_trial, par.best_trial);
    assert_eq!(to_index_groups(&seq.partition), to_index_groups(&par.partition));
}

#[test]
fn test_best_score_never_gets_worse() {
    let roster = mixed_roster(14);
    let sizes = compute_sizes(roster.len(), 3).unwrap();
    let optimizer = Optimizer::new(&roster, sizes, 250, ScoringMode::RegistryIndex);
    let recorder = Recorder {
        seen: RefCell::new(Vec::new()),
    };

    let result = optimizer.run_with_observer(Some(3), &recorder).unwrap();
    let seen = recorder.seen.into_inner();

    assert_eq!(seen.len(), 250);
    for (i, &(trial, score, best)) in seen.iter().enumerate() {
        assert_eq!(trial, i);
        assert!(best <= score);
    }
    assert!(seen.windows(2).all(|w| w[1].2 <= w[0].2));
    assert_eq!(seen.last().map(|s| s.2), Some(result.score));

    let min_seen = seen.iter().map(|s| s.1).fold(f64::INFINITY, f64::min);
    assert_eq!(result.score, min_seen);
    // First trial reaching the minimum wins ties
    let first_min = seen.iter().position(|s| s.1 == min_seen).unwrap();
    assert_eq!(result.best_trial, first_min);
}

#[test]
fn test_zero_trials_is_invalid() {
    let roster = mixed_roster(4);
    let sizes = compute_sizes(roster.len(), 2).unwrap();
    let optimizer = Optimizer::new(&roster, sizes, 0, ScoringMode::GroupPosition);

    assert!(matches!(
        optimizer.run(None),
        Err(CohortError::InvalidArgument(_))
    ));
    assert!(matches!(
        optimizer.run_parallel(None, 0),
        Err(CohortError::InvalidArgument(_))
    ));
}

#[test]
fn test_empty_roster_with_groups_has_no_partition() {
    let roster = RosterBuilder::new().freeze().unwrap();
    let sizes = compute_sizes(0, 4).unwrap();
    let optimizer = Optimizer::new(&roster, sizes, 10, ScoringMode::GroupPosition);

    assert!(matches!(
        optimizer.run(None),
        Err(CohortError::NoValidPartition(_))
    ));
}

#[test]
fn test_entities_without_groups_has_no_partition() {
    let roster = mixed_roster(3);
    let optimizer = Optimizer::new(&roster, vec![], 10, ScoringMode::GroupPosition);

    assert!(matches!(
        optimizer.run(None),
        Err(CohortError::NoValidPartition(_))
    ));
}

#[test]
fn test_capacity_mismatch_has_no_partition() {
    let roster = mixed_roster(5);
    let optimizer = Optimizer::new(&roster, vec![2, 2], 10, ScoringMode::GroupPosition);

    assert!(matches!(
        optimizer.run(Some(1)),
        Err(CohortError::NoValidPartition(_))
    ));
}

#[test]
fn test_zero_groups_in_options_is_invalid() {
    let roster = mixed_roster(5);
    let options = OptimizationOptions {
        num_groups: 0,
        ..Default::default()
    };

    assert!(matches!(
        Optimizer::from_options(&roster, &options),
        Err(CohortError::InvalidArgument(_))
    ));
}
