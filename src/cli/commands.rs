//! Command implementations for the fuzzhop CLI.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::{Document, InputFormat, load_documents};
use crate::error::{FuzzhopError, Result};
use crate::filter::{FilterConfig, FuzzyFilter, FuzzyFilterResult};
use crate::highlight::fuzzy_match_scored;

/// Execute a CLI command.
pub fn execute_command(args: FuzzhopArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => match_target(match_args, &args),
        Command::Filter(filter_args) => filter_records(filter_args, &args),
        Command::Benchmark(benchmark_args) => run_benchmark(benchmark_args, &args),
    }
}

/// Match a single target string.
fn match_target(args: &MatchArgs, cli_args: &FuzzhopArgs) -> Result<()> {
    let result = fuzzy_match_scored(&args.target, &args.search);

    output_result(
        "Match completed",
        &MatchOutput {
            target: args.target.clone(),
            search: args.search.clone(),
            matched: result.is_some(),
            score: result.as_ref().map(|m| m.score),
            highlights: result.map(|m| m.highlights),
            markers: (args.markers.open.clone(), args.markers.close.clone()),
        },
        cli_args,
    )
}

/// Filter the records of a file.
fn filter_records(args: &FilterArgs, cli_args: &FuzzhopArgs) -> Result<()> {
    let mut config = build_filter_config(&args.input)?;
    if let Some(n) = args.max_results_shown {
        config = config.max_results_shown(n);
    }
    let filter = FuzzyFilter::new(config)?;

    let documents = load_input(&args.input)?;

    let start_time = Instant::now();
    let results = run_filter(&filter, &documents, &args.search, args.input.parallel);
    let duration = start_time.elapsed();

    let total_matches = results.len();
    let limit = args.limit.unwrap_or(total_matches);
    let hits = results
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, result)| FilterHit {
            rank: i + 1,
            score: result.score,
            record: result.item.clone(),
            highlights: result.highlights,
        })
        .collect();

    output_result(
        "Filter completed",
        &FilterOutput {
            search: args.search.clone(),
            fields: filter.config().fields.clone(),
            total_items: documents.len(),
            total_matches,
            duration_ms: duration.as_millis() as u64,
            hits,
            markers: (args.markers.open.clone(), args.markers.close.clone()),
        },
        cli_args,
    )
}

/// Run repeated searches over a file and report timings.
fn run_benchmark(args: &BenchmarkArgs, cli_args: &FuzzhopArgs) -> Result<()> {
    if args.iterations == 0 {
        return Err(FuzzhopError::invalid_argument(
            "iterations must be greater than zero",
        ));
    }

    let filter = FuzzyFilter::new(build_filter_config(&args.input)?)?;
    let documents = load_input(&args.input)?;

    info!(
        "benchmarking {} searches x {} iterations over {} records",
        args.searches.len(),
        args.iterations,
        documents.len()
    );

    for _ in 0..args.warmup {
        for search in &args.searches {
            run_filter(&filter, &documents, search, args.input.parallel);
        }
    }

    let start_time = Instant::now();
    let mut latencies = Vec::with_capacity(args.iterations * args.searches.len());
    let mut matches = BTreeMap::new();

    for _ in 0..args.iterations {
        for search in &args.searches {
            let start = Instant::now();
            let count = run_filter(&filter, &documents, search, args.input.parallel).len();
            latencies.push(start.elapsed().as_secs_f64() * 1000.0);
            matches.insert(search.clone(), count);
        }
    }

    let total_duration = start_time.elapsed();
    let average_latency_ms = latencies.iter().sum::<f64>() / latencies.len() as f64;
    let min_latency_ms = latencies.iter().copied().fold(f64::INFINITY, f64::min);
    let max_latency_ms = latencies.iter().copied().fold(0.0f64, f64::max);

    let results = BenchmarkResults {
        total_items: documents.len(),
        searches_per_second: if average_latency_ms > 0.0 {
            1000.0 / average_latency_ms
        } else {
            0.0
        },
        average_latency_ms,
        min_latency_ms,
        max_latency_ms,
        total_searches: latencies.len(),
        matches,
        total_duration_ms: total_duration.as_millis() as u64,
    };

    if let Some(output_file) = &args.output_file {
        save_benchmark_results(&results, output_file)?;
    }

    output_result("Benchmark completed", &results, cli_args)
}

/// Build the filter configuration from a config file and/or `--fields`.
///
/// Fields given on the command line replace those of the config file.
/// Plain line records fall back to their single text field.
fn build_filter_config(args: &InputArgs) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading filter config from {}", path.display());
            FilterConfig::from_json_file(path)?
        }
        None => FilterConfig::new(Vec::<String>::new()),
    };

    if !args.fields.is_empty() {
        config.fields = args.fields.clone();
    } else if config.fields.is_empty() && input_format(args) == InputFormat::Lines {
        config.fields = vec![args.text_field.clone()];
    }

    config.validate()?;
    Ok(config)
}

fn input_format(args: &InputArgs) -> InputFormat {
    args.input_format
        .unwrap_or_else(|| InputFormat::from_path(&args.input))
}

fn load_input(args: &InputArgs) -> Result<Vec<Document>> {
    load_documents(
        &args.input,
        input_format(args),
        &args.text_field,
        args.infer_types,
    )
}

fn run_filter<'a>(
    filter: &FuzzyFilter,
    documents: &'a [Document],
    search: &str,
    parallel: bool,
) -> Vec<FuzzyFilterResult<'a, Document>> {
    if parallel {
        filter.filter_par(documents, search)
    } else {
        filter.filter(documents, search)
    }
}

/// Save benchmark results to a JSON file.
fn save_benchmark_results(results: &BenchmarkResults, output_file: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(output_file, json)?;
    info!("benchmark results saved to {}", output_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Searchable;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_args(cli: &[&str]) -> InputArgs {
        let args = FuzzhopArgs::try_parse_from(cli).unwrap();
        match args.command {
            Command::Filter(filter_args) => filter_args.input,
            _ => panic!("Expected Filter command"),
        }
    }

    #[test]
    fn test_lines_default_to_text_field() {
        let args = input_args(&["fuzzhop", "filter", "catalog.txt", "ab"]);
        let config = build_filter_config(&args).unwrap();
        assert_eq!(config.fields, vec!["text"]);
    }

    #[test]
    fn test_csv_requires_fields() {
        let args = input_args(&["fuzzhop", "filter", "heroes.csv", "ab"]);
        let err = build_filter_config(&args).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_cli_fields_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"fields": ["name"], "max_results_shown": 5}}"#).unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let args = input_args(&["fuzzhop", "filter", "heroes.csv", "-c", path, "ab"]);
        let config = build_filter_config(&args).unwrap();
        assert_eq!(config.fields, vec!["name"]);
        assert_eq!(config.max_results_shown, Some(5));

        let args = input_args(&[
            "fuzzhop",
            "filter",
            "heroes.csv",
            "-c",
            path,
            "-F",
            "ability",
            "ab",
        ]);
        let config = build_filter_config(&args).unwrap();
        assert_eq!(config.fields, vec!["ability"]);
        assert_eq!(config.max_results_shown, Some(5));
    }

    #[test]
    fn test_infer_types_reaches_csv_loading() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "title,year\nRoute 66,1966\n").unwrap();
        file.flush().unwrap();
        let path = file.path().to_str().unwrap();

        let args = input_args(&["fuzzhop", "filter", path, "-F", "title,year", "66"]);
        assert!(!args.infer_types);
        let docs = load_input(&args).unwrap();
        assert_eq!(docs[0].field_text("year"), Some("1966"));

        let args = input_args(&[
            "fuzzhop",
            "filter",
            path,
            "-F",
            "title,year",
            "--infer-types",
            "66",
        ]);
        assert!(args.infer_types);
        let docs = load_input(&args).unwrap();
        assert_eq!(docs[0].field_text("year"), None);
        assert_eq!(docs[0].field_text("title"), Some("Route 66"));
    }

    #[test]
    fn test_benchmark_rejects_zero_iterations() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Claire Bennet").unwrap();
        file.flush().unwrap();

        let args = FuzzhopArgs::try_parse_from([
            "fuzzhop",
            "--quiet",
            "benchmark",
            file.path().to_str().unwrap(),
            "-i",
            "lines",
            "-s",
            "cb",
            "-n",
            "0",
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }
}
