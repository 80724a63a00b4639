use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::table::MarkerTable;
use crate::cli::{load_catalog, truncate, OutputFormat};
use crate::core::marker::{GroupName, MarkerEntry};

#[derive(Args)]
pub struct MarkersArgs {
    #[command(subcommand)]
    pub command: MarkersCommands,
}

#[derive(Subcommand)]
pub enum MarkersCommands {
    /// List all markers in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by group
        #[arg(long, value_enum)]
        group: Option<GroupName>,
    },

    /// Show details of a specific marker
    Show {
        /// Marker ID (e.g. rs4680)
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List marker groups
    Groups,
}

/// Execute markers subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a marker is not found,
/// or output fails.
pub fn run(args: MarkersArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        MarkersCommands::List { catalog, group } => run_list(catalog, group, format, verbose),
        MarkersCommands::Show { id, catalog } => run_show(&id, catalog, format, verbose),
        MarkersCommands::Export { output, catalog } => run_export(output, catalog, verbose),
        MarkersCommands::Groups => run_groups(format),
    }
}

#[allow(clippy::needless_pass_by_value)]
fn run_list(
    catalog_path: Option<PathBuf>,
    group: Option<GroupName>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    let filtered: Vec<&MarkerEntry> = catalog
        .markers()
        .iter()
        .filter(|m| group.map_or(true, |g| m.group == g))
        .collect();

    match format {
        OutputFormat::Text => {
            let id_width = filtered
                .iter()
                .map(|m| m.id.as_str().len())
                .max()
                .unwrap_or(2)
                .max(2);
            let group_width = filtered
                .iter()
                .map(|m| m.group.pretty_name().len())
                .max()
                .unwrap_or(5)
                .max(5);
            let desc_width = 50;

            println!("Marker Catalog ({} markers)\n", filtered.len());
            println!(
                "{:<id_w$} {:<grp_w$} {:<desc_w$} {:>8}",
                "ID",
                "Group",
                "Description",
                "Outcomes",
                id_w = id_width,
                grp_w = group_width,
                desc_w = desc_width,
            );
            println!("{}", "-".repeat(id_width + group_width + desc_width + 8 + 3));

            for m in &filtered {
                println!(
                    "{:<id_w$} {:<grp_w$} {:<desc_w$} {:>8}",
                    m.id.as_str(),
                    m.group.pretty_name(),
                    truncate(&m.description, desc_width),
                    m.outcomes.len(),
                    id_w = id_width,
                    grp_w = group_width,
                    desc_w = desc_width,
                );
                if verbose {
                    for source in &m.sources {
                        println!("  └─ {source}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("id\tgroup\torientation\toutcomes\tdescription");
            for m in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    m.id,
                    m.group.pretty_name(),
                    m.orientation,
                    m.outcomes.len(),
                    m.description
                );
            }
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_show(
    id: &str,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    let marker = catalog
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Marker '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Marker: {}\n", marker.id);
            println!("Group:       {}", marker.group.pretty_name());
            println!("Orientation: {}", marker.orientation);
            println!("Description: {}", marker.description);

            println!("\nOutcomes:");
            for outcome in &marker.outcomes {
                println!(
                    "  {:<3} ({:>2})  {}",
                    outcome.pair.to_string(),
                    outcome.pair.value(),
                    outcome.outcome
                );
            }

            if !marker.sources.is_empty() {
                println!("\nSources:");
                for source in &marker.sources {
                    println!("  {source}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(marker)?);
        }
        OutputFormat::Tsv => {
            println!("id\tgenotype\tpair\toutcome");
            for outcome in &marker.outcomes {
                println!(
                    "{}\t{}\t{}\t{}",
                    marker.id,
                    outcome.pair,
                    outcome.pair.value(),
                    outcome.outcome
                );
            }
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_export(
    output: PathBuf,
    catalog_path: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} markers to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn run_groups(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for info in GroupName::all_info() {
                println!("{:<26} {}", info.pretty_name, info.description);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(GroupName::all_info())?);
        }
        OutputFormat::Tsv => {
            println!("name\tpretty_name\tdescription");
            for info in GroupName::all_info() {
                println!(
                    "{}\t{}\t{}",
                    info.name.as_str(),
                    info.pretty_name,
                    info.description
                );
            }
        }
    }
    Ok(())
}
