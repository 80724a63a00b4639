use clap::Parser;
use tracing_subscriber::EnvFilter;

use snp_annotator::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("snp_annotator=debug,info")
    } else {
        EnvFilter::new("snp_annotator=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => {
            cli::analyze::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Markers(args) => {
            cli::markers::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Genotype(args) => {
            cli::genotype::run(args, cli.format)?;
        }
        cli::Commands::Vendors => {
            cli::vendors::run(cli.format)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
