//! pypin CLI - pin a Python script to the desktop.
//!
//! Thin front-end over the pypin library: collects the request from flags,
//! runs one build, reports warnings on stderr and the result on stdout.

use anyhow::Result;
use clap::Parser;
use pypin::services::reveal;
use pypin::{PreferencesStore, PythonEnv, ShortcutBuilder, ShortcutRequest};
use std::path::PathBuf;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pypin")]
#[command(about = "Pin a Python script to the Windows desktop as a .lnk shortcut")]
struct Args {
    /// Python script the shortcut should launch
    script: PathBuf,

    /// Image to convert into the shortcut icon (default: interpreter icon)
    #[arg(short, long)]
    icon: Option<PathBuf>,

    /// Display name for the shortcut (default: script file name)
    #[arg(short, long)]
    name: Option<String>,

    /// Launch without a console window (pythonw.exe)
    #[arg(short, long)]
    windowless: bool,

    /// Keep the console window even when preferences default to windowless
    #[arg(long, conflicts_with = "windowless")]
    console: bool,

    /// Python executable to target instead of scanning PATH
    #[arg(long)]
    python: Option<PathBuf>,

    /// Skip opening Explorer with the new shortcut selected
    #[arg(long)]
    no_reveal: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let store = PreferencesStore::new();
    let mut prefs = store.load();

    let python = match &args.python {
        Some(exe) => PythonEnv::from_executable(exe),
        None => PythonEnv::detect()?,
    };

    let request = ShortcutRequest {
        script: args.script,
        image: args.icon,
        name: args.name,
        hide_console: prefs.resolve_hide_console(args.windowless, args.console),
    };

    let outcome = ShortcutBuilder::new(python)?.build(&request)?;

    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    println!(
        "Shortcut created: {}",
        outcome.shortcut.link_path.display()
    );
    println!("Right-click it and choose 'Pin to taskbar' to finish pinning.");

    prefs.last_script_dir = Some(outcome.shortcut.working_dir.clone());
    if let Err(e) = store.save(&prefs) {
        warn!("could not save preferences: {e}");
    }

    if !args.no_reveal {
        reveal::reveal_in_explorer(&outcome.shortcut.link_path);
    }

    Ok(())
}
