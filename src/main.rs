use std::io;

use anyhow::Result;
use browse_history::{OutputFormat, Session, Settings};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "browse-history")]
#[command(about = "Per-user browsing history with back/forward navigation")]
struct Args {
    /// Disable colored output (also disabled by NO_COLOR)
    #[arg(long = "no-color", default_value_t = false)]
    no_color: bool,

    /// Output format
    #[arg(long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Username that logs in as administrator (default: BROWSE_HISTORY_ADMIN or "admin")
    #[arg(long = "admin")]
    admin: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr; keep them quiet unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut settings = Settings::from_env();
    if args.no_color {
        settings.color = false;
    }
    if let Some(format) = args.format {
        settings.format = format;
    }
    if let Some(admin) = args.admin.filter(|name| !name.trim().is_empty()) {
        settings.admin_name = admin;
    }

    info!("Starting browse-history as {:?}", settings);

    let stdin = io::stdin();
    Session::new(&settings, stdin.lock(), io::stdout()).run()?;

    Ok(())
}
