use crate::AdmissionPolicy;
use anyhow::{anyhow, Result};
use knap_utils::load_json_arg;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SEED: &str = "knapsack";

pub const DEFAULT_ITEM_COUNTS: [usize; 20] = [
    10, 15, 20, 25, 30, 1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000, 10000, 20000,
    40000, 80000, 160000, 320000,
];

pub const DEFAULT_CAPACITIES: [u32; 8] = [1000, 2000, 5000, 10000, 20000, 30000, 50000, 100000];

/// Dumps the item set of one item count as JSON when the sweep reaches it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemStatsConfig {
    pub num_items: usize,
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub seed: String,
    pub item_counts: Vec<usize>,
    pub capacities: Vec<u32>,
    pub policy: AdmissionPolicy,
    /// Log and count solver failures instead of aborting the sweep.
    pub continue_on_error: bool,
    pub item_stats: Option<ItemStatsConfig>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            item_counts: DEFAULT_ITEM_COUNTS.to_vec(),
            capacities: DEFAULT_CAPACITIES.to_vec(),
            policy: AdmissionPolicy::default(),
            continue_on_error: false,
            item_stats: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.item_counts.is_empty() {
            return Err(anyhow!("item_counts must not be empty"));
        }
        if self.item_counts.contains(&0) {
            return Err(anyhow!("item_counts must be positive"));
        }
        if self.capacities.is_empty() {
            return Err(anyhow!("capacities must not be empty"));
        }
        self.policy.validate()
    }
}

/// Loads a config from a JSON string or a path to a `.json` file.
pub fn load_config(config: &str) -> Result<BenchmarkConfig> {
    let config: BenchmarkConfig = load_json_arg(config)?;
    config
        .validate()
        .map_err(|e| anyhow!("Invalid config: {}", e))?;
    Ok(config)
}
