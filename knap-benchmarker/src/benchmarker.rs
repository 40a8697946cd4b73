use crate::{AdmissionPolicy, BenchmarkConfig, ItemSource, ResultSink};
use anyhow::{anyhow, Result};
use knap_algorithms::Algorithm;
use knap_challenges::knapsack::{Challenge, Solution};
use knap_utils::jsonify;
use serde::{Deserialize, Serialize};
use std::{fs, time::Instant};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub algorithm: String,
    pub num_items: usize,
    pub capacity: u32,
    pub total_weight: u32,
    pub total_value: f64,
    pub elapsed_ms: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkSummary {
    pub instances: usize,
    pub records: usize,
    pub failures: usize,
}

/// Runs one solver and times it on its own. The item set is validated before
/// the clock starts.
pub fn timed_solve(
    algorithm: Algorithm,
    challenge: &Challenge,
    capacity: u32,
) -> knap_challenges::Result<(Solution, f64)> {
    challenge.validate()?;
    let start = Instant::now();
    let solution = algorithm.solve_validated(challenge, capacity)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok((solution, elapsed_ms))
}

/// Runs every solver the policy admits for `(challenge.num_items, capacity)`,
/// one after another, forwarding a record per solver to the sink.
pub fn run_instance(
    policy: &AdmissionPolicy,
    challenge: &Challenge,
    capacity: u32,
    continue_on_error: bool,
    sink: &mut dyn ResultSink,
    summary: &mut BenchmarkSummary,
) -> Result<()> {
    let num_items = challenge.num_items;
    summary.instances += 1;
    for algorithm in policy.eligible(num_items, capacity) {
        match timed_solve(algorithm, challenge, capacity) {
            Ok((solution, elapsed_ms)) => {
                let record = BenchmarkRecord {
                    algorithm: algorithm.name().to_string(),
                    num_items,
                    capacity,
                    total_weight: solution.total_weight,
                    total_value: solution.total_value,
                    elapsed_ms,
                };
                log::debug!(
                    "{}: weight {}, value {:.2}, {:.2} ms",
                    record.algorithm,
                    record.total_weight,
                    record.total_value,
                    record.elapsed_ms
                );
                sink.record(&record)?;
                summary.records += 1;
            }
            Err(e) if continue_on_error => {
                log::warn!(
                    "{} failed on {} items, capacity {}: {}",
                    algorithm,
                    num_items,
                    capacity,
                    e
                );
                summary.failures += 1;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!(
                    "{} failed on {} items, capacity {}",
                    algorithm, num_items, capacity
                )))
            }
        }
    }
    Ok(())
}

/// Sweeps every `(item count, capacity)` pair of the config. Each item set is
/// requested once and reused for all capacities.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    source: &mut dyn ItemSource,
    sink: &mut dyn ResultSink,
) -> Result<BenchmarkSummary> {
    config.validate()?;
    let mut summary = BenchmarkSummary::default();

    for &num_items in &config.item_counts {
        let challenge = source.item_set(num_items)?;
        if challenge.num_items != num_items {
            return Err(anyhow!(
                "Item source returned {} items, {} were requested",
                challenge.num_items,
                num_items
            ));
        }
        if let Some(item_stats) = &config.item_stats {
            if item_stats.num_items == num_items {
                fs::write(&item_stats.path, jsonify(&challenge)?).map_err(|e| {
                    anyhow!(
                        "Failed to write item stats to {}: {}",
                        item_stats.path.display(),
                        e
                    )
                })?;
                log::info!("Item set saved to {}", item_stats.path.display());
            }
        }

        for &capacity in &config.capacities {
            log::info!("num_items={}, capacity={}", num_items, capacity);
            run_instance(
                &config.policy,
                &challenge,
                capacity,
                config.continue_on_error,
                sink,
                &mut summary,
            )?;
        }
    }

    sink.flush()?;
    log::info!(
        "Benchmark finished: {} instances, {} records, {} failures",
        summary.instances,
        summary.records,
        summary.failures
    );
    Ok(summary)
}
