use std::collections::HashSet;
use std::thread;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pass_planner::domain::candidate::{Allocation, PredictedPass};
use pass_planner::domain::scheduler::PassScheduler;
use pass_planner::domain::strategy::StrategyType;

const STRATEGIES: [StrategyType; 2] = [StrategyType::Aos, StrategyType::MaxElevation];

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap()
}

/// A day of randomly overlapping passes, some of them degenerate.
fn random_passes(seed: u64, count: usize) -> Vec<(usize, PredictedPass)> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|index| {
            let aos = epoch() + Duration::seconds(rng.random_range(0..86_400));
            let los = aos + Duration::seconds(rng.random_range(0..900));
            let elevation = rng.random_range(0.0..90.0);
            let peak_fraction = rng.random_range(0.0..=1.0);

            (index, PredictedPass::with_peak_fraction(aos, los, elevation, peak_fraction))
        })
        .collect()
}

fn check_invariants(passes: &[(usize, PredictedPass)], allocations: &[Allocation<usize>], min_duration: f64, label: &str) {
    let mut seen = HashSet::new();
    for allocation in allocations {
        assert!(seen.insert(allocation.id), "{}: pass {} allocated twice", label, allocation.id);

        let original = passes[allocation.id].1.range();
        assert!(original.encloses(&allocation.range), "{}: {} is outside of pass {} {}", label, allocation.range, allocation.id, original);
        assert!(allocation.range.is_valid(), "{}: invalid range {}", label, allocation.range);
        assert!(
            allocation.range.duration_seconds() >= min_duration,
            "{}: {} is shorter than {} s",
            label,
            allocation.range,
            min_duration
        );
    }

    for (i, a) in allocations.iter().enumerate() {
        for b in &allocations[i + 1..] {
            assert!(!a.range.intersects(&b.range), "{}: passes {} {} and {} {} overlap", label, a.id, a.range, b.id, b.range);
        }
    }
}

#[test]
fn test_random_catalogs_hold_invariants() {
    for seed in 0..25 {
        let passes = random_passes(seed, 120);

        for strategy in STRATEGIES {
            for min_duration in [0.0, 1.0, 120.0] {
                let scheduler = PassScheduler::from_type(strategy, min_duration).unwrap();
                let allocations = scheduler.schedule_passes(passes.clone()).unwrap();

                let label = format!("seed {} strategy {} min {}", seed, strategy, min_duration);
                assert!(!allocations.is_empty(), "{}: nothing scheduled", label);
                check_invariants(&passes, &allocations, min_duration, &label);
            }
        }
    }
}

#[test]
fn test_scheduling_is_deterministic() {
    let passes = random_passes(42, 200);

    for strategy in STRATEGIES {
        let scheduler = PassScheduler::from_type(strategy, 1.0).unwrap();
        let first = scheduler.schedule_passes(passes.clone()).unwrap();
        let second = scheduler.schedule_passes(passes.clone()).unwrap();

        assert_eq!(first, second, "strategy {} is not deterministic", strategy);
    }
}

#[test]
fn test_non_overlapping_passes_pass_through_unchanged() {
    let passes: Vec<(usize, PredictedPass)> = (0..10)
        .map(|index| {
            let aos = epoch() + Duration::minutes(index as i64 * 20);
            (index, PredictedPass::with_peak_fraction(aos, aos + Duration::minutes(10), 10.0 + index as f64, 0.5))
        })
        .collect();

    for strategy in STRATEGIES {
        let scheduler = PassScheduler::from_type(strategy, 1.0).unwrap();
        let allocations = scheduler.schedule_passes(passes.clone()).unwrap();

        assert_eq!(allocations.len(), passes.len());
        for allocation in &allocations {
            assert_eq!(allocation.range, passes[allocation.id].1.range(), "strategy {} trimmed a free pass", strategy);
        }
    }
}

#[test]
fn test_shared_scheduler_across_threads() {
    let scheduler = PassScheduler::from_type(StrategyType::MaxElevation, 1.0).unwrap();
    let expected: Vec<Vec<Allocation<usize>>> = (0..4).map(|seed| scheduler.schedule_passes(random_passes(seed, 80)).unwrap()).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let scheduler = &scheduler;
                scope.spawn(move || scheduler.schedule_passes(random_passes(seed, 80)).unwrap())
            })
            .collect();

        for (seed, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), expected[seed], "thread for seed {} diverged", seed);
        }
    });
}
