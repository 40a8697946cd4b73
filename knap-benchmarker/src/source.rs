use anyhow::{anyhow, Result};
use knap_challenges::knapsack::{Challenge, Track};
use knap_utils::seed_for_item_count;

/// Supplies the item set for a given item count.
pub trait ItemSource {
    fn item_set(&mut self, num_items: usize) -> Result<Challenge>;
}

/// Deterministic item sets derived from a base seed and the item count.
#[derive(Debug, Clone)]
pub struct SeededItemSource {
    seed: String,
}

impl SeededItemSource {
    pub fn new(seed: impl Into<String>) -> Self {
        Self { seed: seed.into() }
    }
}

impl ItemSource for SeededItemSource {
    fn item_set(&mut self, num_items: usize) -> Result<Challenge> {
        let seed = seed_for_item_count(&self.seed, num_items);
        Challenge::generate_instance(&seed, &Track { num_items })
    }
}

/// Hands out a pre-built item set.
#[derive(Debug, Clone)]
pub struct FixedItemSource {
    challenge: Challenge,
}

impl FixedItemSource {
    pub fn new(challenge: Challenge) -> Self {
        Self { challenge }
    }
}

impl ItemSource for FixedItemSource {
    fn item_set(&mut self, num_items: usize) -> Result<Challenge> {
        if num_items != self.challenge.num_items {
            return Err(anyhow!(
                "Fixed item set has {} items, {} were requested",
                self.challenge.num_items,
                num_items
            ));
        }
        Ok(self.challenge.clone())
    }
}
