//! Value-to-weight heuristic. Always feasible, not always optimal.
use knap_challenges::knapsack::{Challenge, Item, Solution};
use knap_challenges::{KnapsackError, Result};

pub const NAME: &str = "Greedy";

pub fn solve_challenge(challenge: &Challenge, capacity: u32) -> Result<Solution> {
    challenge.validate()?;
    solve_validated(challenge, capacity)
}

/// Same as [`solve_challenge`] for an item set that already passed
/// [`Challenge::validate`].
pub fn solve_validated(challenge: &Challenge, capacity: u32) -> Result<Solution> {
    // Sort a private copy so the shared item set keeps its order
    let mut sorted_items: Vec<Item> = Vec::new();
    sorted_items
        .try_reserve_exact(challenge.num_items)
        .map_err(|source| KnapsackError::AllocationFailed {
            what: "sorted items",
            source,
        })?;
    sorted_items.extend_from_slice(&challenge.items);
    // Stable: equal ratios keep source order
    sorted_items.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

    let mut solution = Solution::empty(challenge.num_items)?;
    for item in &sorted_items {
        if solution.total_weight as u64 + item.weight as u64 <= capacity as u64 {
            solution.total_weight += item.weight;
            solution.total_value += item.value;
            solution.selected[item.id as usize - 1] = true;
        }
    }
    Ok(solution)
}
