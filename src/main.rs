mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;
use unicorn_options::ModuleRegistry;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = ModuleRegistry::with_builtin_modules();

    match cli.command {
        Commands::Modules => commands::list_modules(&registry),
        Commands::Defaults { module, query } => {
            let patterns: Vec<&str> = query.iter().map(String::as_str).collect();
            commands::show_defaults(&registry, &module, &patterns)
        }
        Commands::Generate {
            module,
            edits,
            set,
            strict,
            format,
            output,
        } => commands::generate(
            &registry,
            &module,
            edits.as_deref(),
            &set,
            strict,
            format,
            output.as_deref(),
        ),
        Commands::Endpoint { module, base_url } => {
            commands::show_endpoint(&registry, &module, &base_url)
        }
        Commands::ParseResponse { module, file } => {
            commands::parse_response_file(&registry, &module, &file)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
