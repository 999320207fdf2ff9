use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count rows with SKUs and URLs in one or more CSV files
    Audit {
        /// CSV files to audit, processed in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Column holding the SKU (default from config, else "SKU")
        #[arg(long = "sku-column")]
        sku_column: Option<String>,

        /// Column holding the URL (default from config, else "Origin URL")
        #[arg(long = "url-column")]
        url_column: Option<String>,

        /// List missing SKUs only when fewer than this many (0 lists all)
        #[arg(long)]
        list_limit: Option<usize>,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Config file to use instead of the default location
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },

    /// Write a config file with the default settings
    InitConfig,
}
