//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use sq_core::Config;

use crate::cli::GlobalArgs;

/// Load the config named by `--config`.
///
/// A directory is taken to hold `config.json`.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config = if global.config.is_dir() {
        Config::load_from_dir(&global.config)
    } else {
        Config::load(&global.config)
    };
    config.context("loading config")
}

/// Print an error as `Error <phase>: <detail>`.
///
/// The outermost context names the phase; the next error in the chain is the
/// detail. Lower levels are already part of the detail message.
pub(crate) fn report_error(err: &anyhow::Error) {
    let mut chain = err.chain();
    let phase = chain.next().map(ToString::to_string).unwrap_or_default();
    match chain.next() {
        Some(detail) => println!("Error {}: {}", phase, detail),
        None => println!("Error: {}", phase),
    }
}
