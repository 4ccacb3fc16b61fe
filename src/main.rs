use atlas::core::config::{self, AtlasConfig, CliOverrides, StartupNotes};
use atlas::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the world's countries in your terminal")]
struct Args {
    /// Dataset URL returning the full country list as JSON
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists; its log lines are replayed afterwards
    let mut notes = StartupNotes::default();
    let (file_config, config_error) = match config::load_config(&mut notes) {
        Ok(c) => (c, None),
        Err(e) => (AtlasConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            log_file: args.log_file,
        },
        &mut notes,
    );

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    notes.replay();
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Atlas starting up with endpoint: {}", resolved.endpoint);

    tui::run(resolved)
}
