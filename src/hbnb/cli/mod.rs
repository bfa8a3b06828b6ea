//! # CLI Layer
//!
//! The only place that knows about the process: flags, config lookup,
//! logging, and whether stdin is a terminal.
//!
//! - Terminal: line editing via rustyline, prompt from config
//! - Pipe or file: plain line-by-line reading, no prompt
//!
//! Both paths hand every line to the same [`Shell`].

mod repl;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use hbnb::api::HbnbApi;
use hbnb::config::HbnbConfig;
use hbnb::error::Result;
use hbnb::shell::Shell;
use hbnb::store::fs::FileStore;
use setup::Cli;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let store = FileStore::open(&config.file_path)?;
    debug!(file = %store.path().display(), "storage ready");

    let mut shell = Shell::new(HbnbApi::new(store));
    let stdin = io::stdin();

    if stdin.is_terminal() {
        let mut shell = shell.with_styling(console::colors_enabled());
        repl::interactive(&mut shell, &config.prompt)
    } else {
        shell.run(stdin.lock(), &mut io::stdout())?;
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<HbnbConfig> {
    let config = match config_dir(cli) {
        Some(dir) => HbnbConfig::load(&dir)?,
        None => HbnbConfig::default(),
    };
    Ok(config.with_file_override(cli.file.clone()))
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "hbnb", "hbnb").map(|dirs| dirs.config_dir().to_path_buf())
    })
}
