use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use drillbook::content;
use drillbook::core::catalog::Catalog;
use drillbook::core::config;
use drillbook::tui;

#[derive(Parser)]
#[command(name = "drillbook", about = "Grammar drills for the terminal")]
struct Args {
    /// Topic id to open at startup (e.g. "transport")
    #[arg(short, long)]
    topic: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("drillbook: {e}");
        std::process::exit(1);
    });
    let resolved = config::resolve(&file_config, args.topic.as_deref());

    // Initialize file logger - writes to drillbook.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("drillbook.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Drillbook starting up (start_topic: {:?})", resolved.start_topic);

    // Catalog violations are programmer errors in the shipped content;
    // fail fast before the terminal is put into raw mode.
    let catalog = Catalog::new(content::builtin()).expect("built-in catalog must validate");

    tui::run(catalog, &resolved)
}
