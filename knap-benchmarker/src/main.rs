use anyhow::Result;
use clap::{arg, Command};
use knap_algorithms::Algorithm;
use knap_benchmarker::*;
use knap_utils::jsonify;
use serde_json::json;
use std::{
    io,
    path::{Path, PathBuf},
};

fn cli() -> Command {
    Command::new("knap-benchmarker")
        .about("Benchmarks 0/1 knapsack solvers")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Runs every admitted solver over the configured sweep")
                .arg(
                    arg!([CONFIG] "Config json string or path to json file (defaults if omitted)")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, records are written to this file as json lines (default stdout)")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("solve")
                .about("Runs a single solver on a seeded item set")
                .arg(
                    arg!(<ALGORITHM> "One of brute_force, dynamic, greedy, backtracking")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<NUM_ITEMS> "Number of items to generate")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(arg!(<CAPACITY> "Knapsack capacity").value_parser(clap::value_parser!(u32)))
                .arg(
                    arg!(--seed [SEED] "Base seed for item generation")
                        .default_value(DEFAULT_SEED)
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("policy")
                .about("Lists the solvers admitted for an instance size")
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(arg!(<CAPACITY> "Knapsack capacity").value_parser(clap::value_parser!(u32)))
                .arg(
                    arg!([CONFIG] "Config json string or path to json file (defaults if omitted)")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("summarize")
                .about("Prints timing statistics per algorithm and capacity from a results file")
                .arg(
                    arg!(<RESULTS> "Path to a json lines results file written by run")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("run", sub_m)) => run(
            sub_m.get_one::<String>("CONFIG").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("ALGORITHM").unwrap(),
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("CAPACITY").unwrap(),
            sub_m.get_one::<String>("seed").unwrap(),
        ),
        Some(("policy", sub_m)) => policy(
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("CAPACITY").unwrap(),
            sub_m.get_one::<String>("CONFIG").cloned(),
        ),
        Some(("summarize", sub_m)) => summarize(sub_m.get_one::<PathBuf>("RESULTS").unwrap()),
        _ => Err(anyhow::anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config_or_default(config: Option<String>) -> Result<BenchmarkConfig> {
    match config {
        Some(config) => load_config(&config),
        None => Ok(BenchmarkConfig::default()),
    }
}

fn run(config: Option<String>, output_file: Option<PathBuf>) -> Result<()> {
    let config = load_config_or_default(config)?;
    let mut source = SeededItemSource::new(config.seed.clone());
    let summary = match output_file {
        Some(path) => {
            let mut sink = JsonLinesSink::create(&path)?;
            let summary = run_benchmark(&config, &mut source, &mut sink)?;
            log::info!("Results saved to {}", path.display());
            summary
        }
        None => {
            let mut sink = JsonLinesSink::new(io::stdout().lock());
            run_benchmark(&config, &mut source, &mut sink)?
        }
    };
    if summary.failures > 0 {
        log::warn!("{} solver invocations failed", summary.failures);
    }
    Ok(())
}

fn solve(algorithm: &str, num_items: usize, capacity: u32, seed: &str) -> Result<()> {
    let algorithm: Algorithm = algorithm.parse()?;
    let challenge = SeededItemSource::new(seed).item_set(num_items)?;
    let (solution, elapsed_ms) = timed_solve(algorithm, &challenge, capacity)?;
    challenge.verify_solution(&solution, capacity)?;
    println!(
        "{}",
        jsonify(&json!({
            "algorithm": algorithm.name(),
            "num_items": num_items,
            "capacity": capacity,
            "selected": solution.selected_ids(),
            "total_weight": solution.total_weight,
            "total_value": solution.total_value,
            "elapsed_ms": elapsed_ms,
        }))?
    );
    Ok(())
}

fn policy(num_items: usize, capacity: u32, config: Option<String>) -> Result<()> {
    let config = load_config_or_default(config)?;
    let eligible: Vec<&str> = config
        .policy
        .eligible(num_items, capacity)
        .iter()
        .map(|a| a.id())
        .collect();
    println!(
        "{}",
        jsonify(&json!({
            "num_items": num_items,
            "capacity": capacity,
            "eligible": eligible,
        }))?
    );
    Ok(())
}

fn summarize(results: &Path) -> Result<()> {
    let records = read_records(results)?;
    let stats = summarize_records(&records);
    log::info!(
        "{} records in {} groups from {}",
        records.len(),
        stats.len(),
        results.display()
    );
    for group in &stats {
        println!("{}", jsonify(group)?);
    }
    Ok(())
}
