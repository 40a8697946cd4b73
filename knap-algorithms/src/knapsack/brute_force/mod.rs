//! Exhaustive search over every subset of the item set.
//!
//! Subsets are enumerated as the integers `0..2^n`, bit `i` meaning item `i`
//! is selected. Among equal-valued feasible subsets the first one enumerated
//! wins.
use knap_challenges::knapsack::{Challenge, Solution};
use knap_challenges::{KnapsackError, Result};

pub const NAME: &str = "Brute Force";

/// Largest item count accepted; `2^30` subsets is already minutes of work.
pub const MAX_NUM_ITEMS: usize = 30;

pub fn solve_challenge(challenge: &Challenge, capacity: u32) -> Result<Solution> {
    challenge.validate()?;
    solve_validated(challenge, capacity)
}

/// Same as [`solve_challenge`] for an item set that already passed
/// [`Challenge::validate`].
pub fn solve_validated(challenge: &Challenge, capacity: u32) -> Result<Solution> {
    let num_items = challenge.num_items;
    if num_items > MAX_NUM_ITEMS {
        return Err(KnapsackError::SizeLimitExceeded {
            algorithm: NAME,
            num_items,
            capacity,
            limit: format!("at most {} items", MAX_NUM_ITEMS),
        });
    }

    let num_subsets = 1u64 << num_items;
    let mut best_mask = 0u64;
    let mut best_weight = 0u64;
    let mut best_value = 0.0f64;

    for mask in 0..num_subsets {
        let mut weight = 0u64;
        let mut value = 0.0f64;
        for (i, item) in challenge.items.iter().enumerate() {
            if mask & (1u64 << i) != 0 {
                weight += item.weight as u64;
                value += item.value;
            }
        }

        if weight <= capacity as u64 && value > best_value {
            best_mask = mask;
            best_weight = weight;
            best_value = value;
        }
    }

    let mut solution = Solution::empty(num_items)?;
    for (i, selected) in solution.selected.iter_mut().enumerate() {
        *selected = best_mask & (1u64 << i) != 0;
    }
    // Feasible, so bounded by capacity
    solution.total_weight = best_weight as u32;
    solution.total_value = best_value;
    Ok(solution)
}
