//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{FuzzhopArgs, OutputFormat};
use crate::document::{Document, FieldValue};
use crate::error::Result;
use crate::highlight::HighlightSequence;

/// Result of matching a single target.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchOutput {
    pub target: String,
    pub search: String,
    pub matched: bool,
    pub score: Option<i64>,
    pub highlights: Option<HighlightSequence>,
    #[serde(skip)]
    pub markers: (String, String),
}

/// One ranked record of a filter run.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterHit {
    pub rank: usize,
    pub score: i64,
    pub record: Document,
    pub highlights: BTreeMap<String, HighlightSequence>,
}

/// Result of filtering a record file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterOutput {
    pub search: String,
    pub fields: Vec<String>,
    pub total_items: usize,
    pub total_matches: usize,
    pub duration_ms: u64,
    pub hits: Vec<FilterHit>,
    #[serde(skip)]
    pub markers: (String, String),
}

/// Benchmark results.
#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkResults {
    pub total_items: usize,
    pub searches_per_second: f64,
    pub average_latency_ms: f64,
    pub min_latency_ms: f64,
    pub max_latency_ms: f64,
    pub total_searches: usize,
    pub matches: BTreeMap<String, usize>,
    pub total_duration_ms: u64,
}

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    fn write_human(&self, args: &FuzzhopArgs) -> Result<()>;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &FuzzhopArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.write_human(args)
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FuzzhopArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for MatchOutput {
    fn write_human(&self, _args: &FuzzhopArgs) -> Result<()> {
        let (open, close) = (&self.markers.0, &self.markers.1);
        match (&self.score, &self.highlights) {
            (Some(score), Some(highlights)) => {
                println!("{}", highlights.render_with(open, close));
                println!("Score: {score}");
            }
            _ => println!("No match"),
        }
        Ok(())
    }
}

impl HumanOutput for FilterOutput {
    fn write_human(&self, args: &FuzzhopArgs) -> Result<()> {
        let (open, close) = (&self.markers.0, &self.markers.1);

        for hit in &self.hits {
            println!("{}. (Score: {})", hit.rank, hit.score);
            for field in &self.fields {
                let rendered = match hit.highlights.get(field) {
                    Some(highlights) => highlights.render_with(open, close),
                    None => match hit.record.get_field(field) {
                        Some(value) => format_field_value(value),
                        None => continue,
                    },
                };
                println!("   {field}: {rendered}");
            }
        }

        if args.verbosity() > 0 {
            println!();
            println!(
                "{} of {} records matched ({}ms)",
                self.total_matches, self.total_items, self.duration_ms
            );
        }
        Ok(())
    }
}

impl HumanOutput for BenchmarkResults {
    fn write_human(&self, _args: &FuzzhopArgs) -> Result<()> {
        println!("Benchmark Results:");
        println!("═════════════════");
        println!("Records: {}", self.total_items);
        println!("Searches per second: {:.1}", self.searches_per_second);
        println!("Average latency: {:.3}ms", self.average_latency_ms);
        println!("Min latency: {:.3}ms", self.min_latency_ms);
        println!("Max latency: {:.3}ms", self.max_latency_ms);
        println!("Total searches: {}", self.total_searches);

        if !self.matches.is_empty() {
            println!();
            println!("Matches per search:");
            println!("──────────────────");
            for (search, count) in &self.matches {
                println!("  {search:?}: {count}");
            }
        }

        println!();
        println!("Total benchmark time: {}ms", self.total_duration_ms);
        Ok(())
    }
}

/// Format a non-text field value for display.
fn format_field_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Integer(i) => i.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Boolean(b) => b.to_string(),
        FieldValue::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_value() {
        assert_eq!(format_field_value(&FieldValue::Integer(3)), "3");
        assert_eq!(format_field_value(&FieldValue::Boolean(false)), "false");
        assert_eq!(format_field_value(&FieldValue::Null), "null");
        assert_eq!(format_field_value(&FieldValue::from("Flight")), "Flight");
    }

    #[test]
    fn test_filter_output_json_shape() {
        let output = FilterOutput {
            search: "el".to_string(),
            fields: vec!["name".to_string()],
            total_items: 2,
            total_matches: 1,
            duration_ms: 0,
            hits: vec![FilterHit {
                rank: 1,
                score: 2200,
                record: Document::builder().add_text("name", "Elle Bishop").build(),
                highlights: BTreeMap::from([(
                    "name".to_string(),
                    crate::highlight::fuzzy_match("Elle Bishop", "el").unwrap(),
                )]),
            }],
            markers: ("[".to_string(), "]".to_string()),
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["hits"][0]["record"]["name"], "Elle Bishop");
        assert_eq!(
            value["hits"][0]["highlights"]["name"],
            serde_json::json!(["", "El", "le Bishop"])
        );
        assert!(value.get("markers").is_none());
    }
}
