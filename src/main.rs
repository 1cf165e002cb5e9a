//! `snapping-stepper` demo driver
//!
//! Stands in for a GUI: replays a command script against a stepper, printing every
//! change notification and every `show` label to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use snapping_stepper::{
    ValueController,
    config::ConfigManager,
    error::get_user_friendly_error,
    script::{Command, ScriptRunner, parse_script},
    stepper::format_value,
    utils,
};
use std::cell::RefCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{error, info};

/// Replay a stepper command script
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON configuration for the stepper (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Script to run (stdin when omitted)
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    let cli = Cli::parse();
    info!("snapping-stepper v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load_or_default(cli.config.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        anyhow::anyhow!(get_user_friendly_error(&e))
    })?;

    let source = read_script(cli.script.as_deref())?;
    let commands = parse_script(&source).map_err(|e| anyhow::anyhow!(get_user_friendly_error(&e)))?;
    info!("Loaded {} commands", commands.len());

    // Collected per command so they print in order with `show` output
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut controller = ValueController::from_config(&config);
    controller.set_value_changed_block(move |value| sink.borrow_mut().push(value));

    let mut runner = ScriptRunner::new(controller);
    for (index, command) in commands.iter().enumerate() {
        let shown = runner
            .apply(index + 1, command)
            .map_err(|e| anyhow::anyhow!(get_user_friendly_error(&e)))?;

        print_changes(&changes);
        if let Some(text) = shown {
            println!("label {text:?}");
        }
    }

    if runner.is_dragging() {
        info!("Script ended mid-drag; releasing");
        runner
            .apply(commands.len() + 1, &Command::Release)
            .map_err(|e| anyhow::anyhow!(get_user_friendly_error(&e)))?;
        print_changes(&changes);
    }

    let final_config = runner.controller().config();
    println!(
        "{}",
        serde_json::to_string_pretty(&final_config).context("Failed to serialize final state")?
    );

    Ok(())
}

fn print_changes(changes: &RefCell<Vec<f64>>) {
    for value in changes.borrow_mut().drain(..) {
        println!("changed {}", format_value(value));
    }
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}
