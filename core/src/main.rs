use clap::Parser;
use exifcat_core::{Cli, ImageInspector, OutputFormat, Style, TextReport};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let style = Style::new(!cli.no_color);

    info!("Inspecting {}", cli.file.display());
    let inspection = match ImageInspector::inspect(&cli.file) {
        Ok(inspection) => inspection,
        Err(e) => {
            error!("Inspection failed: {}", e);
            println!("{}", style.warn(&e.to_string()));
            process::exit(1);
        }
    };

    match cli.format {
        OutputFormat::Text => {
            print!("{}", TextReport::new(&inspection, style));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&inspection) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                eprintln!("Error: Failed to serialize report: {}", e);
                process::exit(1);
            }
        },
    }
}

/// Setup logging based on verbosity
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
