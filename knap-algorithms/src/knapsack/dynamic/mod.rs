//! Exact solver filling a `(n + 1) x (capacity + 1)` table where `dp[i][w]`
//! is the best value reachable with the first `i` items and budget `w`.
//!
//! The selection is recovered by walking the table backwards: item `i - 1`
//! is taken iff `dp[i][w] != dp[i - 1][w]`. This relies on every item value
//! being strictly positive, which [`Challenge::validate`] guarantees.
use knap_challenges::knapsack::{try_filled_vec, Challenge, Solution};
use knap_challenges::{KnapsackError, Result};

pub const NAME: &str = "Dynamic Programming";

pub const MAX_NUM_ITEMS: usize = 10_000;

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

    let width = capacity as usize + 1;
    let num_cells = (num_items + 1)
        .checked_mul(width)
        .ok_or_else(|| KnapsackError::SizeLimitExceeded {
            algorithm: NAME,
            num_items,
            capacity,
            limit: "table size must fit in memory".to_string(),
        })?;
    // Row 0 stays all zeros
    let mut dp = try_filled_vec(num_cells, 0.0f64, "dynamic programming table")?;

    for i in 1..=num_items {
        let item = &challenge.items[i - 1];
        let item_weight = item.weight as usize;
        let (done, rest) = dp.split_at_mut(i * width);
        let prev = &done[(i - 1) * width..];
        let curr = &mut rest[..width];
        for (w, cell) in curr.iter_mut().enumerate() {
            *cell = if item_weight > w {
                prev[w]
            } else {
                prev[w].max(prev[w - item_weight] + item.value)
            };
        }
    }

    let mut solution = Solution::empty(num_items)?;
    let mut w = capacity as usize;
    for i in (1..=num_items).rev() {
        if dp[i * width + w] != dp[(i - 1) * width + w] {
            let item = &challenge.items[i - 1];
            solution.selected[i - 1] = true;
            solution.total_weight += item.weight;
            solution.total_value += item.value;
            w -= item.weight as usize;
        }
    }
    Ok(solution)
}
