//! Kennel adoption catalog - standalone server

use clap::Parser;
use config::{PathManager, Settings};
use kennel_web::AppState;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (0 for random); overrides the settings file
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to; overrides the settings file
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Log level
    #[arg(short, long, env = "KENNEL_LOG", default_value = "info")]
    log_level: String,

    /// Settings file to read instead of the default location
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Serve from an in-memory table and a small fixed breed catalog
    #[arg(long)]
    memory: bool,

    /// Log to stderr instead of the log file
    #[arg(long)]
    stderr: bool,

    /// Write the default settings file and exit
    #[arg(long)]
    init_settings: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env_file();
    let args = Args::parse();

    if args.init_settings {
        Settings::default().save().map_err(anyhow::Error::msg)?;
        if let Some(path) = PathManager::settings_path() {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    let logs_dir = if args.stderr { None } else { PathManager::logs_dir() };
    let _log_guard = kennel_web::logging::init_logging(logs_dir.as_deref(), &args.log_level);

    let settings = match &args.settings {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    }
    .with_env_overrides()?;

    let host = args.host.unwrap_or_else(|| settings.server.host.clone());
    let port = args.port.unwrap_or(settings.server.port);

    let state = if args.memory {
        AppState::in_memory(settings)
    } else {
        AppState::from_settings(settings)
    };

    let handle = kennel_web::start_server_on(Arc::new(state), &host, port).await?;

    println!("Kennel running at {}", handle.url());
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;

    handle.stop();
    Ok(())
}
