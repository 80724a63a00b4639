use crate::cli::OutputFormat;
use crate::parsing::tabular::{GenotypeColumns, TabularConfig};
use crate::parsing::vendor::Vendor;

fn delimiter_name(config: &TabularConfig) -> &'static str {
    match config.delimiter {
        b',' => "comma",
        b'\t' => "tab",
        _ => "other",
    }
}

fn genotype_columns(columns: GenotypeColumns) -> String {
    match columns {
        GenotypeColumns::Single(column) => column.to_string(),
        GenotypeColumns::Split(first, second) => format!("{first}+{second}"),
    }
}

/// Execute vendors subcommand
///
/// # Errors
///
/// Returns an error if JSON output fails.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Supported vendors\n");
            println!(
                "{:<12} {:<12} {:<10} {:<7} {:<8} Genotype",
                "Selector", "Name", "Delimiter", "Header", "Marker"
            );
            println!("{}", "-".repeat(70));
            for vendor in Vendor::ALL {
                let adapter = vendor.adapter();
                println!(
                    "{:<12} {:<12} {:<10} {:<7} {:<8} {}",
                    vendor.selector(),
                    vendor.display_name(),
                    delimiter_name(&adapter.config),
                    if adapter.config.has_headers { "yes" } else { "no" },
                    adapter.columns.marker.to_string(),
                    genotype_columns(adapter.columns.genotype),
                );
            }
        }
        OutputFormat::Json => {
            let vendors: Vec<serde_json::Value> = Vendor::ALL
                .iter()
                .map(|vendor| {
                    let adapter = vendor.adapter();
                    serde_json::json!({
                        "selector": vendor.selector(),
                        "name": vendor.display_name(),
                        "delimiter": delimiter_name(&adapter.config),
                        "has_headers": adapter.config.has_headers,
                        "marker_column": adapter.columns.marker.to_string(),
                        "genotype_columns": genotype_columns(adapter.columns.genotype),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&vendors)?);
        }
        OutputFormat::Tsv => {
            println!("selector\tname\tdelimiter\thas_headers");
            for vendor in Vendor::ALL {
                let config = vendor.adapter().config;
                println!(
                    "{}\t{}\t{}\t{}",
                    vendor.selector(),
                    vendor.display_name(),
                    delimiter_name(&config),
                    config.has_headers
                );
            }
        }
    }
    Ok(())
}
