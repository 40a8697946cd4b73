use knap_algorithms::Algorithm;
use knap_benchmarker::AdmissionPolicy;

#[test]
fn test_default_thresholds() {
    let policy = AdmissionPolicy::default();
    assert_eq!(
        policy.eligible(10, 1000),
        vec![
            Algorithm::BruteForce,
            Algorithm::Dynamic,
            Algorithm::Greedy,
            Algorithm::Backtracking
        ]
    );
    // Brute force capacity bound is inclusive, backtracking's is exclusive
    assert_eq!(
        policy.eligible(30, 20000),
        vec![Algorithm::BruteForce, Algorithm::Dynamic, Algorithm::Greedy]
    );
    assert_eq!(
        policy.eligible(30, 19999),
        vec![
            Algorithm::BruteForce,
            Algorithm::Dynamic,
            Algorithm::Greedy,
            Algorithm::Backtracking
        ]
    );
    assert_eq!(
        policy.eligible(30, 30001),
        vec![Algorithm::Dynamic, Algorithm::Greedy]
    );
    assert_eq!(
        policy.eligible(31, 1000),
        vec![Algorithm::Dynamic, Algorithm::Greedy, Algorithm::Backtracking]
    );
    assert_eq!(
        policy.eligible(1000, 1000),
        vec![Algorithm::Dynamic, Algorithm::Greedy]
    );
    assert_eq!(
        policy.eligible(10000, 100000),
        vec![Algorithm::Dynamic, Algorithm::Greedy]
    );
    assert_eq!(policy.eligible(10001, 1000), vec![Algorithm::Greedy]);
    assert_eq!(policy.eligible(320000, 100000), vec![Algorithm::Greedy]);
}

#[test]
fn test_greedy_is_always_admitted() {
    let policy = AdmissionPolicy::default();
    for num_items in [1, 30, 100, 10000, usize::MAX] {
        for capacity in [0, 20000, u32::MAX] {
            assert!(policy.admits(Algorithm::Greedy, num_items, capacity));
        }
    }
}

#[test]
fn test_validate_rejects_looser_policies() {
    assert!(AdmissionPolicy::default().validate().is_ok());

    let stricter = AdmissionPolicy {
        brute_force_max_items: 20,
        backtracking_capacity_limit: 5000,
        ..Default::default()
    };
    assert!(stricter.validate().is_ok());

    let looser = AdmissionPolicy {
        brute_force_max_items: 40,
        ..Default::default()
    };
    assert!(looser.validate().is_err());

    let looser = AdmissionPolicy {
        backtracking_capacity_limit: 50000,
        ..Default::default()
    };
    assert!(looser.validate().is_err());
}
