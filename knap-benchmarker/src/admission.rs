use anyhow::{anyhow, Result};
use knap_algorithms::knapsack::{backtracking, brute_force, dynamic};
use knap_algorithms::Algorithm;
use serde::{Deserialize, Serialize};

/// Capacity ceiling (inclusive) above which brute force is not scheduled.
pub const BRUTE_FORCE_MAX_CAPACITY: u32 = 30_000;

/// Decides which solvers are safe to run for an instance size. Greedy is
/// always admitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AdmissionPolicy {
    pub brute_force_max_items: usize,
    pub brute_force_max_capacity: u32,
    pub dynamic_max_items: usize,
    pub backtracking_max_items: usize,
    /// Exclusive.
    pub backtracking_capacity_limit: u32,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self {
            brute_force_max_items: brute_force::MAX_NUM_ITEMS,
            brute_force_max_capacity: BRUTE_FORCE_MAX_CAPACITY,
            dynamic_max_items: dynamic::MAX_NUM_ITEMS,
            backtracking_max_items: backtracking::MAX_NUM_ITEMS,
            backtracking_capacity_limit: backtracking::CAPACITY_LIMIT,
        }
    }
}

impl AdmissionPolicy {
    pub fn admits(&self, algorithm: Algorithm, num_items: usize, capacity: u32) -> bool {
        match algorithm {
            Algorithm::BruteForce => {
                num_items <= self.brute_force_max_items
                    && capacity <= self.brute_force_max_capacity
            }
            Algorithm::Dynamic => num_items <= self.dynamic_max_items,
            Algorithm::Greedy => true,
            Algorithm::Backtracking => {
                num_items <= self.backtracking_max_items
                    && capacity < self.backtracking_capacity_limit
            }
        }
    }

    pub fn eligible(&self, num_items: usize, capacity: u32) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|&algorithm| self.admits(algorithm, num_items, capacity))
            .collect()
    }

    /// A policy may be stricter than the solvers' own limits, never looser.
    pub fn validate(&self) -> Result<()> {
        if self.brute_force_max_items > brute_force::MAX_NUM_ITEMS {
            return Err(anyhow!(
                "brute_force_max_items ({}) exceeds the solver limit ({})",
                self.brute_force_max_items,
                brute_force::MAX_NUM_ITEMS
            ));
        }
        if self.dynamic_max_items > dynamic::MAX_NUM_ITEMS {
            return Err(anyhow!(
                "dynamic_max_items ({}) exceeds the solver limit ({})",
                self.dynamic_max_items,
                dynamic::MAX_NUM_ITEMS
            ));
        }
        if self.backtracking_max_items > backtracking::MAX_NUM_ITEMS {
            return Err(anyhow!(
                "backtracking_max_items ({}) exceeds the solver limit ({})",
                self.backtracking_max_items,
                backtracking::MAX_NUM_ITEMS
            ));
        }
        if self.backtracking_capacity_limit > backtracking::CAPACITY_LIMIT {
            return Err(anyhow!(
                "backtracking_capacity_limit ({}) exceeds the solver limit ({})",
                self.backtracking_capacity_limit,
                backtracking::CAPACITY_LIMIT
            ));
        }
        Ok(())
    }
}
