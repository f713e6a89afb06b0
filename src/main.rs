use asset_scan_rust::{cli, config, error, scan};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { output, title, category } => {
            println!("🔎 asset-scan - scanning session\n");

            let output_dir = output
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            let title = title.unwrap_or_else(|| config.report_title.clone());

            let mut session = asset_scan_common::ScanSession::new();
            if let Some(category) = category {
                session.select_category(category);
            }

            let mut camera = scan::TerminalCamera;
            let mut sink = scan::TerminalSink;
            scan::run_scan_session(&mut session, &mut camera, &mut sink, &output_dir, &title)?;

            println!("\n✅ Session finished");
        }

        Commands::Config { set_title, set_output_dir, show } => {
            let mut config = config;

            if let Some(title) = set_title {
                config.set_title(title)?;
                println!("✔ Report title updated");
            }

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ Output folder updated");
            }

            if show {
                println!("Settings:");
                println!("  Report title: {}", config.report_title);
                println!(
                    "  Output folder: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(current dir)".to_string())
                );
            }
        }
    }

    Ok(())
}
