//! Depth-first search over the include/exclude tree.
//!
//! A branch ends when every item has been decided or when the running weight
//! exactly equals the capacity. There is no value bound, so the worst case is
//! still exponential and the size limits below are what keep it tractable.
use knap_challenges::knapsack::{try_filled_vec, Challenge, Item, Solution};
use knap_challenges::{KnapsackError, Result};

pub const NAME: &str = "Backtracking";

pub const MAX_NUM_ITEMS: usize = 100;

/// Exclusive upper bound on the capacity.
pub const CAPACITY_LIMIT: u32 = 20_000;

struct Search<'a> {
    items: &'a [Item],
    capacity: u32,
    current: Vec<bool>,
    best: Solution,
    nodes: u64,
}

impl Search<'_> {
    fn descend(&mut self, index: usize, weight: u32, value: f64) {
        self.nodes += 1;
        if index == self.items.len() || weight == self.capacity {
            if value > self.best.total_value {
                self.best.total_value = value;
                self.best.total_weight = weight;
                self.best.selected.copy_from_slice(&self.current);
            }
            return;
        }

        let item = self.items[index];
        // weight <= capacity holds on every call
        if item.weight <= self.capacity - weight {
            self.current[index] = true;
            self.descend(index + 1, weight + item.weight, value + item.value);
            self.current[index] = false;
        }
        self.descend(index + 1, weight, value);
    }
}

pub fn solve_challenge(challenge: &Challenge, capacity: u32) -> Result<Solution> {
    challenge.validate()?;
    solve_validated(challenge, capacity)
}

/// Same as [`solve_challenge`] for an item set that already passed
/// [`Challenge::validate`].
pub fn solve_validated(challenge: &Challenge, capacity: u32) -> Result<Solution> {
    let (solution, nodes) = run_search(challenge, capacity)?;
    log::trace!(
        "{} visited {} nodes for {} items, capacity {}",
        NAME,
        nodes,
        challenge.num_items,
        capacity
    );
    Ok(solution)
}

/// Solves and also returns the number of search-tree nodes visited.
pub fn solve_with_stats(challenge: &Challenge, capacity: u32) -> Result<(Solution, u64)> {
    challenge.validate()?;
    run_search(challenge, capacity)
}

fn run_search(challenge: &Challenge, capacity: u32) -> Result<(Solution, u64)> {
    let num_items = challenge.num_items;
    if num_items > MAX_NUM_ITEMS || capacity >= CAPACITY_LIMIT {
        return Err(KnapsackError::SizeLimitExceeded {
            algorithm: NAME,
            num_items,
            capacity,
            limit: format!(
                "at most {} items and capacity below {}",
                MAX_NUM_ITEMS, CAPACITY_LIMIT
            ),
        });
    }

    let mut search = Search {
        items: &challenge.items,
        capacity,
        current: try_filled_vec(num_items, false, "current selection")?,
        best: Solution::empty(num_items)?,
        nodes: 0,
    };
    search.descend(0, 0, 0.0);
    Ok((search.best, search.nodes))
}
