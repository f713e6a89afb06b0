use asset_scan_common::Category;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asset-scan")]
#[command(about = "Barcode asset counter with PDF report export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive scanning session
    Scan {
        /// Output folder for generated reports (default: configured folder or current dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report title (default: configured title)
        #[arg(short, long)]
        title: Option<String>,

        /// Initial category (monitor/cabinet/stabilizer)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show or edit settings
    Config {
        /// Set the default report title
        #[arg(long)]
        set_title: Option<String>,

        /// Set the default output folder
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}
