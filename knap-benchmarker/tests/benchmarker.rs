use knap_algorithms::Algorithm;
use knap_benchmarker::*;
use knap_challenges::knapsack::Challenge;
use knap_challenges::KnapsackError;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;

fn classic() -> Challenge {
    Challenge::from_pairs(&[(10, 60.0), (20, 100.0), (30, 120.0)]).unwrap()
}

#[test]
fn test_run_benchmark_classic_instance() {
    let config = BenchmarkConfig {
        item_counts: vec![3],
        capacities: vec![0, 50],
        ..Default::default()
    };
    let mut source = FixedItemSource::new(classic());
    let mut sink = MemorySink::default();
    let summary = run_benchmark(&config, &mut source, &mut sink).unwrap();

    assert_eq!(
        summary,
        BenchmarkSummary {
            instances: 2,
            records: 8,
            failures: 0
        }
    );
    let names: Vec<&str> = sink.records[..4]
        .iter()
        .map(|r| r.algorithm.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Brute Force", "Dynamic Programming", "Greedy", "Backtracking"]
    );

    for record in &sink.records[..4] {
        assert_eq!(record.capacity, 0);
        assert_eq!(record.total_weight, 0);
        assert_eq!(record.total_value, 0.0);
    }
    let values: HashMap<&str, (u32, f64)> = sink.records[4..]
        .iter()
        .map(|r| (r.algorithm.as_str(), (r.total_weight, r.total_value)))
        .collect();
    assert_eq!(values["Brute Force"], (50, 220.0));
    assert_eq!(values["Dynamic Programming"], (50, 220.0));
    assert_eq!(values["Backtracking"], (50, 220.0));
    assert_eq!(values["Greedy"], (30, 160.0));
    for record in &sink.records {
        assert_eq!(record.num_items, 3);
        assert!(record.elapsed_ms >= 0.0);
    }
}

#[test]
fn test_run_benchmark_follows_policy() {
    let config = BenchmarkConfig {
        seed: "policy".to_string(),
        item_counts: vec![12, 150],
        capacities: vec![500, 25000],
        ..Default::default()
    };
    let mut source = SeededItemSource::new(config.seed.clone());
    let mut sink = MemorySink::default();
    let summary = run_benchmark(&config, &mut source, &mut sink).unwrap();
    assert_eq!(summary.instances, 4);

    let ran: Vec<(usize, u32, String)> = sink
        .records
        .iter()
        .map(|r| (r.num_items, r.capacity, r.algorithm.clone()))
        .collect();
    let expected: Vec<(usize, u32, String)> = [
        (12, 500, Algorithm::BruteForce),
        (12, 500, Algorithm::Dynamic),
        (12, 500, Algorithm::Greedy),
        (12, 500, Algorithm::Backtracking),
        (12, 25000, Algorithm::BruteForce),
        (12, 25000, Algorithm::Dynamic),
        (12, 25000, Algorithm::Greedy),
        (150, 500, Algorithm::Dynamic),
        (150, 500, Algorithm::Greedy),
        (150, 25000, Algorithm::Dynamic),
        (150, 25000, Algorithm::Greedy),
    ]
    .into_iter()
    .map(|(n, c, a)| (n, c, a.name().to_string()))
    .collect();
    assert_eq!(ran, expected);
    assert_eq!(summary.records, expected.len());
}

#[test]
fn test_exact_solvers_agree_in_sweep() {
    let config = BenchmarkConfig {
        seed: "agree".to_string(),
        item_counts: vec![8, 14],
        capacities: vec![100, 300, 700],
        ..Default::default()
    };
    let mut source = SeededItemSource::new(config.seed.clone());
    let mut sink = MemorySink::default();
    run_benchmark(&config, &mut source, &mut sink).unwrap();

    for chunk in sink.records.chunks(4) {
        let brute_force = chunk[0].total_value;
        let dynamic = chunk[1].total_value;
        let greedy = chunk[2].total_value;
        let backtracking = chunk[3].total_value;
        assert!((brute_force - dynamic).abs() < 1e-6);
        assert!((brute_force - backtracking).abs() < 1e-6);
        assert!(greedy <= dynamic + 1e-6);
        assert!(chunk.iter().all(|r| r.total_weight <= r.capacity));
    }
}

#[test]
fn test_run_benchmark_reuses_item_set_across_capacities() {
    struct CountingSource {
        inner: SeededItemSource,
        calls: Vec<usize>,
    }
    impl ItemSource for CountingSource {
        fn item_set(&mut self, num_items: usize) -> anyhow::Result<Challenge> {
            self.calls.push(num_items);
            self.inner.item_set(num_items)
        }
    }

    let config = BenchmarkConfig {
        item_counts: vec![5, 40],
        capacities: vec![10, 20, 30],
        ..Default::default()
    };
    let mut source = CountingSource {
        inner: SeededItemSource::new("count"),
        calls: vec![],
    };
    let mut sink = MemorySink::default();
    run_benchmark(&config, &mut source, &mut sink).unwrap();
    assert_eq!(source.calls, vec![5, 40]);
}

#[test]
fn test_run_benchmark_rejects_mismatched_source() {
    let config = BenchmarkConfig {
        item_counts: vec![4],
        capacities: vec![10],
        ..Default::default()
    };
    let mut source = FixedItemSource::new(classic());
    let mut sink = MemorySink::default();
    assert!(run_benchmark(&config, &mut source, &mut sink).is_err());
    assert!(sink.records.is_empty());
}

#[test]
fn test_run_instance_skips_failures_when_configured() {
    // An item set the solvers refuse, to exercise failure handling
    let invalid = Challenge {
        seed: [0u8; 32],
        num_items: 1,
        items: vec![knap_challenges::knapsack::Item {
            id: 1,
            weight: 0,
            value: 1.0,
        }],
    };
    let policy = AdmissionPolicy::default();

    let mut sink = MemorySink::default();
    let mut summary = BenchmarkSummary::default();
    run_instance(&policy, &invalid, 10, true, &mut sink, &mut summary).unwrap();
    assert_eq!(summary.failures, 4);
    assert_eq!(summary.records, 0);
    assert!(sink.records.is_empty());

    let mut summary = BenchmarkSummary::default();
    assert!(run_instance(&policy, &invalid, 10, false, &mut sink, &mut summary).is_err());
}

#[test]
fn test_run_instance_failure_keeps_error_kind() {
    let invalid = Challenge {
        seed: [0u8; 32],
        num_items: 1,
        items: vec![knap_challenges::knapsack::Item {
            id: 1,
            weight: 0,
            value: 1.0,
        }],
    };
    let mut sink = MemorySink::default();
    let mut summary = BenchmarkSummary::default();
    let err = run_instance(
        &AdmissionPolicy::default(),
        &invalid,
        10,
        false,
        &mut sink,
        &mut summary,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KnapsackError>(),
        Some(KnapsackError::InvalidItem { id: 1, .. })
    ));
    assert!(err.to_string().contains("Brute Force failed on 1 items, capacity 10"));
}

#[test]
fn test_run_instance_size_limit_is_downcastable() {
    let mut rng = StdRng::seed_from_u64(3);
    let pairs: Vec<(u32, f64)> = (0..31)
        .map(|_| (rng.gen_range(1..=100), rng.gen_range(100.0..1000.0)))
        .collect();
    let challenge = Challenge::from_pairs(&pairs).unwrap();
    // Looser than the solver's own limit, bypassing policy validation
    let policy = AdmissionPolicy {
        brute_force_max_items: 31,
        ..AdmissionPolicy::default()
    };
    let mut sink = MemorySink::default();
    let mut summary = BenchmarkSummary::default();
    let err = run_instance(&policy, &challenge, 100, false, &mut sink, &mut summary).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KnapsackError>(),
        Some(KnapsackError::SizeLimitExceeded { num_items: 31, .. })
    ));
}

#[test]
fn test_timed_solve() {
    let (solution, elapsed_ms) = timed_solve(Algorithm::Dynamic, &classic(), 50).unwrap();
    assert_eq!(solution.selected_ids(), vec![2, 3]);
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_timed_solve_validates_item_set() {
    let mut challenge = classic();
    challenge.items[1].value = f64::NAN;
    for algorithm in Algorithm::ALL {
        assert!(matches!(
            timed_solve(algorithm, &challenge, 50),
            Err(KnapsackError::InvalidItem { id: 2, .. })
        ));
    }
    let empty = Challenge {
        seed: [0u8; 32],
        num_items: 0,
        items: Vec::new(),
    };
    assert!(matches!(
        timed_solve(Algorithm::Greedy, &empty, 50),
        Err(KnapsackError::EmptyItemSet)
    ));
}
