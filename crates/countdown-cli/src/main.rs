//! `countdown` CLI — render and configure countdown surfaces from the command line.
//!
//! Plays the host's role: reads the shared-store dump and the bindings file,
//! calls into `countdown-engine`, and prints what a surface would show.
//!
//! ## Usage
//!
//! ```sh
//! # Render surface 7 (text)
//! countdown render --surface 7
//!
//! # Render as JSON with the English vocabulary
//! countdown --locale en render --surface 7 --json
//!
//! # List the events a surface can be bound to
//! countdown list
//!
//! # Bind surface 7 to event 3, then forget the binding again
//! countdown bind --surface 7 --event 3
//! countdown unbind --surface 7
//!
//! # Show every stored binding
//! countdown bindings
//! ```

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countdown_engine::{
    choices, configure_surface, render_surface, BindingStore, FileBindingStore, SharedSnapshot,
    Vocabulary,
};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::Level;

use config::Config;

#[derive(Parser)]
#[command(
    name = "countdown",
    version,
    about = "Render and configure countdown surfaces"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./countdown.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Shared-store dump with the event list and Global Defaults
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Bindings file
    #[arg(long, global = true)]
    bindings: Option<PathBuf>,

    /// Display language (zh, en)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Deep-link scheme
    #[arg(long, global = true)]
    scheme: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what a surface renders
    Render {
        /// Surface id
        #[arg(short, long, allow_negative_numbers = true)]
        surface: i64,
        /// Print the render model, view and deep link as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the events a surface can be bound to
    List,
    /// Bind a surface to an event
    Bind {
        /// Surface id
        #[arg(short, long, allow_negative_numbers = true)]
        surface: i64,
        /// Event id
        #[arg(short, long, allow_negative_numbers = true)]
        event: i64,
    },
    /// Remove a surface's binding
    Unbind {
        /// Surface id
        #[arg(short, long, allow_negative_numbers = true)]
        surface: i64,
    },
    /// Show every stored binding
    Bindings,
}

#[derive(Serialize)]
struct SurfaceOutput<'a> {
    surface_id: i64,
    model: &'a countdown_engine::RenderModel,
    view: countdown_engine::LocalizedView,
    deep_link: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    if let Some(bindings) = cli.bindings {
        config.bindings_file = bindings;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(scheme) = cli.scheme {
        config.scheme = scheme;
    }

    let vocab = Vocabulary::for_locale(&config.locale).with_context(|| {
        format!(
            "Unknown locale: '{}'. Available locales: zh, en",
            config.locale
        )
    })?;
    let mut store = FileBindingStore::new(&config.bindings_file);

    match cli.command {
        Commands::Render { surface, json } => {
            let data = load_shared_data(&config.data_file);
            let model = render_surface(surface, &store, &data);
            let view = model.localized(&vocab);
            let deep_link = model.deep_link(&config.scheme);

            if json {
                let output = SurfaceOutput {
                    surface_id: surface,
                    model: &model,
                    view,
                    deep_link,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", view.name);
                if view.unit.is_empty() {
                    println!("{} {}", view.label, view.days);
                } else {
                    println!("{} {} {}", view.label, view.days, view.unit);
                }
                if !view.date.is_empty() {
                    println!("{}", view.date);
                }
                println!("{}", deep_link);
            }
        }
        Commands::List => {
            let data = load_shared_data(&config.data_file);
            let list = choices(&data.events, &vocab);
            if list.is_empty() {
                println!("No events available.");
            }
            for choice in list {
                println!("{:>6}  {}", choice.event_id, choice.title);
            }
        }
        Commands::Bind { surface, event } => {
            configure_surface(&mut store, surface, event).with_context(|| {
                format!("Failed to bind surface {} to event {}", surface, event)
            })?;
            println!("Surface {} bound to event {}", surface, event);
        }
        Commands::Unbind { surface } => {
            store
                .clear_binding(surface)
                .with_context(|| format!("Failed to unbind surface {}", surface))?;
            println!("Surface {} unbound", surface);
        }
        Commands::Bindings => {
            let entries = store.entries().context("Failed to read bindings")?;
            if entries.is_empty() {
                println!("No surfaces bound.");
            }
            for (surface, event) in entries {
                println!("surface {} -> event {}", surface, event);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the shared-store dump. Rendering never fails on it: an absent or
/// unreadable file means built-in defaults and no events.
fn load_shared_data(path: &Path) -> SharedSnapshot {
    match std::fs::read_to_string(path) {
        Ok(raw) => SharedSnapshot::from_json(&raw),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("{} not found, rendering built-in defaults", path.display());
            SharedSnapshot::default()
        }
        Err(e) => {
            tracing::warn!("failed to read {}: {e}, rendering built-in defaults", path.display());
            SharedSnapshot::default()
        }
    }
}
