//! # Page Bar CLI
//!
//! Command-line interface for Page Bar.
//!
//! The page bar is a headless controller; the CLI drives it from recorded
//! event scripts so its behavior can be inspected without a renderer.
//!
//! ## Commands
//!
//! - `catalog` - List the page types offered by the add-page menu
//! - `replay` - Run a JSON event script through a fresh page bar and print the result
//!

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pagebar_model::{PageBarConfig, PageEntry, catalog, info};
use pagebar_ui::{MenuState, PageBar, PageBarEvent};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

// Re-export dependencies for use in main.rs
pub use pagebar_core;
pub use pagebar_model;
pub use pagebar_ui;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Arguments
// ============================================================================

/// Headless page-tab bar for multi-page form editors
#[derive(Debug, Parser)]
#[command(name = "pagebar", version, about)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "PAGEBAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the page types offered by the add-page menu
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Replay a JSON array of page bar events and print the resulting state
    Replay {
        /// Event script
        script: PathBuf,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Log filter implied by `--verbose`
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

// ============================================================================
// Execution
// ============================================================================

/// Result of replaying a script
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    pub events: usize,
    pub mutations: usize,
    pub selected_index: usize,
    pub menu: MenuState,
    pub pages: &'a [PageEntry],
}

/// Run a parsed command line, writing results to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match &cli.config {
        Some(path) => PageBarConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => PageBarConfig::default(),
    };

    match &cli.command {
        Command::Catalog { json } => print_catalog(*json, out),
        Command::Replay { script, json } => replay(script, config, *json, out),
    }
}

/// Load an event script
pub fn load_script(path: &Path) -> Result<Vec<PageBarEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let events = serde_json::from_str(&text)
        .with_context(|| format!("Invalid event script {}", path.display()))?;
    Ok(events)
}

fn replay(script: &Path, config: PageBarConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let events = load_script(script)?;
    let mut bar = PageBar::new(config);

    let mut mutations = 0;
    for event in &events {
        if bar.dispatch(event) {
            mutations += 1;
        }
    }
    tracing::info!(
        "Replayed {} event(s) from {}, {} changed the page list",
        events.len(),
        script.display(),
        mutations
    );

    let report = ReplayReport {
        events: events.len(),
        mutations,
        selected_index: bar.selected_index(),
        menu: *bar.menu(),
        pages: bar.pages().as_slice(),
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        print_report(&report, out)?;
    }
    Ok(())
}

fn print_report(report: &ReplayReport<'_>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} ({})", "Pages".bold(), report.pages.len())?;
    for (index, page) in report.pages.iter().enumerate() {
        let marker = if index == report.selected_index { "▸" } else { " " };
        let label = if index == report.selected_index {
            page.label.bold().yellow()
        } else {
            page.label.normal()
        };
        writeln!(
            out,
            "  {} {:>2}  {:<24} {:<12} {:<14} {}",
            marker,
            index,
            label,
            page.page_type().to_string().cyan(),
            info(page.page_type()).icon.dimmed(),
            page.id.to_string().dimmed()
        )?;
    }
    writeln!(out, "{} {}", "Menu:".bold(), describe_menu(&report.menu))?;
    writeln!(
        out,
        "{} {} applied, {} changed the page list",
        "Events:".bold(),
        report.events,
        report.mutations
    )?;
    Ok(())
}

fn describe_menu(menu: &MenuState) -> String {
    match menu {
        MenuState::Closed => "closed".to_string(),
        MenuState::AddPage { target, .. } => match target.insert_index() {
            Some(gap) => format!("add page (after page {})", gap),
            None => "add page (append)".to_string(),
        },
        MenuState::Settings { page, .. } => format!("settings (page {})", page),
    }
}

fn print_catalog(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog())?)?;
        return Ok(());
    }
    for entry in catalog() {
        writeln!(
            out,
            "{:<12} {:<14} {}",
            entry.title.bold(),
            entry.icon.dimmed(),
            entry.description
        )?;
    }
    Ok(())
}
