//! Interactive navigation console for the ear-trainer router.
//!
//! Builds the application's route table from configuration and drives it
//! from stdin, printing the rendered view after every committed
//! navigation:
//!
//! ```text
//! > /game
//! [game] Ear Trainer — listen to the interval and name it
//! > back
//! > state
//! { "entries": [...], "cursor": 0 }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trainer_router::app;
use trainer_router::config;
use trainer_router::router::{Outcome, Router};

#[derive(Parser)]
#[command(name = "trainer-router")]
#[command(about = "Navigation console for the ear-trainer route table", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_config(cli.config.as_deref())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "trainer_router={}",
                    config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        base_path = %config.base.path,
        about_enabled = config.routes.about_enabled,
        lazy_load_timeout_ms = config.lazy_load.timeout_ms,
        "Configuration loaded"
    );

    let table = app::route_table(&config)?;
    let router = Arc::new(Router::new(&config, table));

    println!("Routes: {}", router.table().names().collect::<Vec<_>>().join(", "));
    println!("Enter a path (e.g. /game), or: back, forward, state, quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => break,
            "back" => match router.back().await {
                Some(outcome) => print_outcome(&outcome),
                None => println!("(nothing to go back to)"),
            },
            "forward" => match router.forward().await {
                Some(outcome) => print_outcome(&outcome),
                None => println!("(nothing to go forward to)"),
            },
            "state" => {
                let snapshot = router.history_snapshot();
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            path if path.starts_with('/') => {
                let outcome = router.navigate(path).await;
                print_outcome(&outcome);
            }
            other => println!("unrecognized command {:?}", other),
        }
    }

    tracing::info!("console closed");
    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Rendered { route, view } => println!("[{}] {}", route, view.render()),
        Outcome::NotFound { path, fallback } => match fallback {
            Some(view) => println!("[not found: {}] {}", path, view.render()),
            None => println!("no route matches {}", path),
        },
        Outcome::LoadFailed {
            route,
            error,
            fallback,
        } => match fallback {
            Some(view) => println!("[{} failed: {}] {}", route, error, view.render()),
            None => println!("loading {} failed: {}", route, error),
        },
        Outcome::Superseded { path } => println!("navigation to {} superseded", path),
    }
}
