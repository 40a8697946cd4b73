use crate::BenchmarkRecord;
use anyhow::{anyhow, Result};
use knap_algorithms::Algorithm;
use knap_utils::dejsonify;
use serde::{Deserialize, Serialize};
use statrs::statistics::{self as stats, Data, Median, OrderStatistics};
use std::{collections::BTreeMap, fs, path::Path};

/// Timing statistics of one `(algorithm, capacity)` group, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimingStats {
    pub algorithm: String,
    pub capacity: u32,
    pub count: usize,
    pub mean_ms: f64,
    /// Sample standard deviation; `None` for a single record.
    pub std_ms: Option<f64>,
    pub min_ms: f64,
    pub lower_quartile_ms: f64,
    pub median_ms: f64,
    pub upper_quartile_ms: f64,
    pub max_ms: f64,
    pub min_items: usize,
    pub max_items: usize,
    /// Median time divided by the theoretical growth term at the median item
    /// count. `None` when the algorithm is unknown or the term is zero.
    pub scale_factor: Option<f64>,
}

/// Reads a JSON lines results file as written by `JsonLinesSink`. Blank lines
/// are ignored.
pub fn read_records(path: &Path) -> Result<Vec<BenchmarkRecord>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read results file {}: {}", path.display(), e))?;
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            dejsonify::<BenchmarkRecord>(line)
                .map_err(|e| anyhow!("{}:{}: invalid record: {}", path.display(), i + 1, e))
        })
        .collect()
}

/// Growth term of an algorithm's running time: `2^n` for the exhaustive
/// searches, `n * capacity` for the table and `n * log2(n)` for the sort.
pub fn theoretical_complexity(algorithm: Algorithm, num_items: f64, capacity: u32) -> f64 {
    match algorithm {
        Algorithm::BruteForce | Algorithm::Backtracking => num_items.exp2(),
        Algorithm::Dynamic => num_items * capacity as f64,
        Algorithm::Greedy => num_items * num_items.max(1.0).log2(),
    }
}

/// Groups records by `(algorithm, capacity)`, sorted on both, and describes
/// their timings. Records without a positive finite time are dropped.
pub fn summarize_records(records: &[BenchmarkRecord]) -> Vec<TimingStats> {
    let mut groups: BTreeMap<(&str, u32), Vec<&BenchmarkRecord>> = BTreeMap::new();
    for record in records {
        if !record.elapsed_ms.is_finite() || record.elapsed_ms <= 0.0 {
            log::debug!(
                "Dropping {} record for {} items, capacity {}: elapsed_ms = {}",
                record.algorithm,
                record.num_items,
                record.capacity,
                record.elapsed_ms
            );
            continue;
        }
        groups
            .entry((record.algorithm.as_str(), record.capacity))
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .map(|((algorithm, capacity), group)| describe(algorithm, capacity, &group))
        .collect()
}

fn describe(algorithm: &str, capacity: u32, group: &[&BenchmarkRecord]) -> TimingStats {
    let times: Vec<f64> = group.iter().map(|r| r.elapsed_ms).collect();
    let item_counts: Vec<f64> = group.iter().map(|r| r.num_items as f64).collect();
    let mut order = Data::new(times.clone());
    let median_ms = order.median();
    let median_items = Data::new(item_counts).median();

    let scale_factor = algorithm.parse::<Algorithm>().ok().and_then(|a| {
        let term = theoretical_complexity(a, median_items, capacity);
        (term.is_finite() && term > 0.0).then_some(median_ms / term)
    });

    TimingStats {
        algorithm: algorithm.to_string(),
        capacity,
        count: times.len(),
        mean_ms: stats::Statistics::mean(times.iter()),
        std_ms: (times.len() > 1).then(|| stats::Statistics::std_dev(times.iter())),
        min_ms: stats::Statistics::min(times.iter()),
        lower_quartile_ms: order.lower_quartile(),
        median_ms,
        upper_quartile_ms: order.upper_quartile(),
        max_ms: stats::Statistics::max(times.iter()),
        min_items: group.iter().map(|r| r.num_items).min().unwrap_or(0),
        max_items: group.iter().map(|r| r.num_items).max().unwrap_or(0),
        scale_factor,
    }
}
