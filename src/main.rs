use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use pacesim::core::config;

#[derive(Parser)]
#[command(
    name = "pacesim",
    about = "Interactive walkthrough of a pacemaker firmware TOCTOU exploit"
)]
struct Args {
    /// Start with the heart monitor tone muted
    #[arg(short, long)]
    muted: bool,

    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to pacesim.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("pacesim.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::error!("failed to load config: {e}");
            eprintln!("pacesim: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.muted);

    log::info!("pacesim starting up: {:?}", resolved);

    pacesim::tui::run(resolved)
}
