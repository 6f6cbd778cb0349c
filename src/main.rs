use anyhow::Result;
use clap::Parser;
use modelschema::cli::{Cli, Commands};
use modelschema::commands::extract::{handle_extract, ExtractConfig};
use modelschema::observability::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Extract {
            catalog,
            types,
            format,
            config,
        } => {
            let passed = handle_extract(ExtractConfig {
                catalog,
                types,
                format: format.into(),
                config,
            })?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Init { force } => {
            modelschema::commands::init::init_config(&std::env::current_dir()?, force)
        }
    }
}
