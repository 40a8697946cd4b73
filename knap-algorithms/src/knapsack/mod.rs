use anyhow::{anyhow, Result};
use knap_challenges::knapsack::{Challenge, Solution};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub mod backtracking;
pub mod brute_force;
pub mod dynamic;
pub mod greedy;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    BruteForce,
    Dynamic,
    Greedy,
    Backtracking,
}

impl Algorithm {
    /// Dispatch order used by the benchmarker.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BruteForce,
        Algorithm::Dynamic,
        Algorithm::Greedy,
        Algorithm::Backtracking,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute_force",
            Algorithm::Dynamic => "dynamic",
            Algorithm::Greedy => "greedy",
            Algorithm::Backtracking => "backtracking",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => brute_force::NAME,
            Algorithm::Dynamic => dynamic::NAME,
            Algorithm::Greedy => greedy::NAME,
            Algorithm::Backtracking => backtracking::NAME,
        }
    }

    pub fn solve(
        &self,
        challenge: &Challenge,
        capacity: u32,
    ) -> knap_challenges::Result<Solution> {
        match self {
            Algorithm::BruteForce => brute_force::solve_challenge(challenge, capacity),
            Algorithm::Dynamic => dynamic::solve_challenge(challenge, capacity),
            Algorithm::Greedy => greedy::solve_challenge(challenge, capacity),
            Algorithm::Backtracking => backtracking::solve_challenge(challenge, capacity),
        }
    }

    /// Dispatches without re-checking the item set. The caller must have run
    /// [`Challenge::validate`] on it.
    pub fn solve_validated(
        &self,
        challenge: &Challenge,
        capacity: u32,
    ) -> knap_challenges::Result<Solution> {
        match self {
            Algorithm::BruteForce => brute_force::solve_validated(challenge, capacity),
            Algorithm::Dynamic => dynamic::solve_validated(challenge, capacity),
            Algorithm::Greedy => greedy::solve_validated(challenge, capacity),
            Algorithm::Backtracking => backtracking::solve_validated(challenge, capacity),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == s || a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow!(
                    "Unknown algorithm '{}', expected one of: {}",
                    s,
                    Algorithm::ALL.map(|a| a.id()).join(", ")
                )
            })
    }
}
