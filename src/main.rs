use catalog_audit::cli;
use catalog_audit::commands;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Audit {
            files,
            sku_column,
            url_column,
            list_limit,
            format,
            config,
        } => commands::audit::run(commands::audit::AuditOptions {
            files,
            sku_column,
            url_column,
            list_limit,
            format,
            config,
        }),
        cli::Commands::InitConfig => commands::init_config::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
