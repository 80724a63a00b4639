use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::core::nucleobase::EncodedPair;

#[derive(Args)]
pub struct GenotypeArgs {
    #[command(subcommand)]
    pub command: GenotypeCommands,
}

#[derive(Subcommand)]
pub enum GenotypeCommands {
    /// Encode genotype text (e.g. "AG") to its packed value
    Encode {
        #[arg(required = true)]
        text: String,
    },

    /// Decode a packed value to its canonical genotype text
    Decode {
        #[arg(required = true)]
        value: u32,
    },
}

/// Execute genotype subcommand
///
/// # Errors
///
/// Returns an error if a value has no genotype form or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GenotypeArgs, format: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        GenotypeCommands::Encode { text } => {
            let pair = EncodedPair::encode(&text);
            print_pair(&text, pair, format)
        }
        GenotypeCommands::Decode { value } => {
            let pair = EncodedPair(value);
            let text = pair
                .decode()
                .ok_or_else(|| anyhow::anyhow!("{value} is not a valid genotype value"))?;
            print_pair(&text, pair, format)
        }
    }
}

fn print_pair(text: &str, pair: EncodedPair, format: OutputFormat) -> anyhow::Result<()> {
    let canonical = pair.decode();

    match format {
        OutputFormat::Text => {
            println!("Genotype:  {text}");
            println!("Value:     {}", pair.value());
            match &canonical {
                Some(canonical) => {
                    let zygosity = if pair.is_homozygous() {
                        "homozygous"
                    } else {
                        "heterozygous"
                    };
                    println!("Canonical: {canonical} ({zygosity})");
                }
                None => println!("Canonical: none (not a two-letter genotype)"),
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "genotype": text,
                "value": pair.value(),
                "canonical": canonical,
                "homozygous": pair.is_homozygous(),
                "heterozygous": pair.is_heterozygous(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("genotype\tvalue\tcanonical");
            println!("{text}\t{}\t{}", pair.value(), canonical.unwrap_or_default());
        }
    }
    Ok(())
}
