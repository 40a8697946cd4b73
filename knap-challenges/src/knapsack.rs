use crate::{KnapsackError, VALUE_TOLERANCE};
use anyhow::{anyhow, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;

pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 100;
pub const MIN_VALUE: u32 = 100;
pub const MAX_VALUE: u32 = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// 1-based position of the item in its item set.
    pub id: u32,
    pub weight: u32,
    pub value: f64,
}

impl Item {
    pub fn ratio(&self) -> f64 {
        self.value / self.weight as f64
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub num_items: usize,
}

/// An item set. Generated once per item count and shared, read-only, by every
/// solver and every capacity tested against it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub num_items: usize,
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    /// Indexed by original position, i.e. `selected[id - 1]`.
    pub selected: Vec<bool>,
    pub total_weight: u32,
    pub total_value: f64,
}

impl Solution {
    pub fn empty(num_items: usize) -> Result<Self, KnapsackError> {
        Ok(Self {
            selected: try_filled_vec(num_items, false, "selection")?,
            total_weight: 0,
            total_value: 0.0,
        })
    }

    pub fn selected_ids(&self) -> Vec<u32> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| if s { Some(i as u32 + 1) } else { None })
            .collect()
    }

    pub fn num_selected(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }
}

/// Allocates a vector of `len` copies of `value`, reporting allocation failure
/// instead of aborting.
pub fn try_filled_vec<T: Clone>(
    len: usize,
    value: T,
    what: &'static str,
) -> Result<Vec<T>, KnapsackError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|source: TryReserveError| KnapsackError::AllocationFailed { what, source })?;
    v.resize(len, value);
    Ok(v)
}

impl Challenge {
    pub fn new(items: Vec<Item>) -> Result<Self, KnapsackError> {
        let challenge = Challenge {
            seed: [0u8; 32],
            num_items: items.len(),
            items,
        };
        challenge.validate()?;
        Ok(challenge)
    }

    /// Builds an item set from `(weight, value)` pairs, numbering items from 1.
    pub fn from_pairs(pairs: &[(u32, f64)]) -> Result<Self, KnapsackError> {
        Self::new(
            pairs
                .iter()
                .enumerate()
                .map(|(i, &(weight, value))| Item {
                    id: i as u32 + 1,
                    weight,
                    value,
                })
                .collect(),
        )
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.num_items == 0 {
            return Err(KnapsackError::EmptyItemSet.into());
        }
        let mut rng = StdRng::from_seed(seed.clone());

        let items = (0..track.num_items)
            .map(|i| {
                let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
                // Whole part in [100, 999], cents in [0, 99]
                let value = rng.gen_range(MIN_VALUE..MAX_VALUE) as f64
                    + rng.gen_range(0..100u32) as f64 / 100.0;
                Item {
                    id: i as u32 + 1,
                    weight,
                    value,
                }
            })
            .collect();

        Ok(Challenge {
            seed: seed.clone(),
            num_items: track.num_items,
            items,
        })
    }

    /// Checks the preconditions every solver relies on: a non-empty set,
    /// positional 1-based ids, positive weights and finite positive values.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.items.is_empty() {
            return Err(KnapsackError::EmptyItemSet);
        }
        if self.num_items != self.items.len() {
            return Err(KnapsackError::invalid_item(
                0,
                format!(
                    "num_items ({}) does not match the number of items ({})",
                    self.num_items,
                    self.items.len()
                ),
            ));
        }
        for (i, item) in self.items.iter().enumerate() {
            if item.id as usize != i + 1 {
                return Err(KnapsackError::invalid_item(
                    item.id,
                    format!("expected id {} at position {}", i + 1, i),
                ));
            }
            if item.weight < MIN_WEIGHT {
                return Err(KnapsackError::invalid_item(item.id, "weight must be at least 1"));
            }
            if !item.value.is_finite() || item.value <= 0.0 {
                return Err(KnapsackError::invalid_item(
                    item.id,
                    format!("value must be finite and positive, got {}", item.value),
                ));
            }
        }
        Ok(())
    }

    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight as u64).sum()
    }

    /// Recomputes weight and value of a selection, rejecting malformed ones.
    pub fn evaluate_selection(&self, selected: &[bool]) -> Result<(u64, f64)> {
        if selected.len() != self.items.len() {
            return Err(anyhow!(
                "Selection length ({}) does not match number of items ({})",
                selected.len(),
                self.items.len()
            ));
        }
        Ok(self
            .items
            .iter()
            .zip(selected)
            .filter(|(_, s)| **s)
            .fold((0u64, 0.0f64), |(w, v), (item, _)| {
                (w + item.weight as u64, v + item.value)
            }))
    }

    pub fn verify_solution(&self, solution: &Solution, capacity: u32) -> Result<()> {
        let (total_weight, total_value) = self.evaluate_selection(&solution.selected)?;
        if total_weight != solution.total_weight as u64 {
            return Err(anyhow!(
                "Reported weight ({}) does not match selected weight ({})",
                solution.total_weight,
                total_weight
            ));
        }
        if (total_value - solution.total_value).abs() > VALUE_TOLERANCE * total_value.max(1.0) {
            return Err(anyhow!(
                "Reported value ({}) does not match selected value ({})",
                solution.total_value,
                total_value
            ));
        }
        if total_weight > capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                capacity
            ));
        }
        Ok(())
    }
}
