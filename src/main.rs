//! swipe-delete - replay recorded gesture scripts against a list of items
//!
//! Prints which items were deleted, which one is left revealed and the
//! final offsets of the rest.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use swipe_delete::replay::{Replay, Script};
use swipe_delete::Config;

#[derive(Parser, Debug)]
#[command(name = "swipe-delete")]
#[command(about = "Replay a swipe-to-delete gesture script", long_about = None)]
struct Args {
    /// Gesture script (TOML)
    script: PathBuf,

    /// Gesture tuning overrides (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Milliseconds between replayed events
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let log_dir = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join("swipe-delete");

    std::fs::create_dir_all(&log_dir).ok();

    let crash_log = log_dir.join("crash.log");
    std::panic::set_hook(Box::new(move |panic_info| {
        eprintln!("PANIC: {}", panic_info);
        if let Ok(mut f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&crash_log)
        {
            use std::io::Write;
            let _ = writeln!(f, "[{}] PANIC: {}", chrono::Local::now(), panic_info);
        }
    }));

    let args = Args::parse();

    let file_appender = rolling::daily(&log_dir, "swipe-delete.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Quiet by default, verbose with --debug
    let default_filter = if args.debug {
        "debug,swipe_delete=debug"
    } else {
        "warn,swipe_delete=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    info!(log_path = %log_dir.display(), script = %args.script.display(), "swipe-delete starting");

    let config = Config::load_or_default(args.config.as_deref());
    let script = Script::load(&args.script)
        .with_context(|| format!("Failed to load script {}", args.script.display()))?;
    let replay = Replay::new(script, &config).context("Invalid script")?;

    let report = replay.run(Duration::from_millis(args.frame_ms))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
