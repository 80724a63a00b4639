use std::path::PathBuf;

use clap::Args;

use crate::analysis::{AnalysisSummary, Analyzer};
use crate::cli::{load_catalog, truncate, OutputFormat};
use crate::core::marker::GroupName;
use crate::matching::engine::AnalysisResult;
use crate::parsing::input::{read_export, read_stdin};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Raw export file (plain or .gz). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Vendor that produced the export (genera, 23andme, ancestrydna, myheritage)
    #[arg(long, required = true)]
    pub vendor: String,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Only report markers in this group
    #[arg(long, value_enum)]
    pub group: Option<GroupName>,
}

/// Execute analyze subcommand
///
/// # Errors
///
/// Returns an error if the vendor is unsupported, the input or catalog
/// cannot be read, or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;

    let raw = if args.input.to_string_lossy() == "-" {
        read_stdin()?
    } else {
        read_export(&args.input)?
    };

    let rt = tokio::runtime::Runtime::new()?;
    let results = rt.block_on(Analyzer::new(&catalog).analyze(&raw, &args.vendor))?;

    let results: Vec<AnalysisResult<'_>> = results
        .into_iter()
        .filter(|r| match args.group {
            Some(group) => r.marker.is_some_and(|m| m.group == group),
            None => true,
        })
        .collect();

    if verbose {
        eprintln!("Found {} catalogued markers in input", results.len());
    }

    match format {
        OutputFormat::Text => print_text_results(&results, verbose),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn print_text_results(results: &[AnalysisResult<'_>], verbose: bool) {
    let summary = AnalysisSummary::from_results(results);

    if summary.is_empty() {
        println!("No catalogued markers found in input.");
        return;
    }

    println!(
        "Found {} catalogued markers ({} with a known outcome)\n",
        summary.total, summary.with_outcome
    );

    for group in &summary.groups {
        println!("{} ({})", group.info.pretty_name, group.results.len());
        println!("{}", "=".repeat(60));

        for result in &group.results {
            let Some(marker) = result.marker else {
                continue;
            };
            println!(
                "  {:<12} {:<4} {}",
                marker.id.as_str(),
                result.pair.to_string(),
                truncate(&marker.description, 60)
            );
            match result.outcome {
                Some(outcome) => println!("               -> {}", outcome.outcome),
                None => println!("               -> No outcome recorded for this genotype"),
            }
            if verbose {
                for source in &marker.sources {
                    println!("               source: {source}");
                }
            }
        }
        println!();
    }
}

fn print_json_results(results: &[AnalysisResult<'_>]) -> anyhow::Result<()> {
    let summary = AnalysisSummary::from_results(results);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_tsv_results(results: &[AnalysisResult<'_>]) {
    println!("marker\tgroup\tgenotype\tpair\toutcome");
    for result in results {
        let Some(marker) = result.marker else {
            continue;
        };
        println!(
            "{}\t{}\t{}\t{}\t{}",
            marker.id,
            marker.group.pretty_name(),
            result.pair,
            result.pair.value(),
            result.outcome.map_or("", |o| o.outcome.as_str())
        );
    }
}
