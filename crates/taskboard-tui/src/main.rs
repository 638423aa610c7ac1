use clap::Parser;
use std::path::PathBuf;
use taskboard_tui::App;
use tracing_subscriber::EnvFilter;

/// Terminal kanban board with drag-and-drop task movement.
#[derive(Parser)]
#[command(name = "taskboard", version, about)]
struct Cli {
    /// Append debug logs to this file (the TUI owns the terminal).
    #[arg(long, env = "TASKBOARD_DEBUG_LOG")]
    log_file: Option<PathBuf>,

    /// Start with no boards instead of the demo set.
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log_file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let mut app = if cli.empty {
        App::new()
    } else {
        App::with_demo_boards()
    };
    app.run().await?;

    Ok(())
}
