//! Implementation of the `modgen cache` subcommands.
//!
//! Cache maintenance never fails the process: the cache is a derived
//! artifact and every reader falls back to a live scan, so store
//! trouble is reported as a warning and the command exits cleanly.

use tracing::instrument;

use crate::{
    cli::{CacheCommands, global::GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: CacheCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        CacheCommands::Build => build(global, config, output),
        CacheCommands::Clear => clear(global, config, output),
    }
}

#[instrument(skip_all)]
fn build(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = config.resolved_root(global.root.as_deref());
    let cache = commands::cache_service(&config, &root, commands::filesystem());

    match cache.rebuild(&root) {
        Ok(index) => {
            let n = index.modules.len();
            let noun = if n == 1 { "module" } else { "modules" };
            output.success(&format!("Module cache rebuilt ({n} {noun})."))?;
        }
        Err(e) => output.warning(&format!("Cache build failed: {e}"))?,
    }
    Ok(())
}

#[instrument(skip_all)]
fn clear(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = config.resolved_root(global.root.as_deref());
    let cache = commands::cache_service(&config, &root, commands::filesystem());

    match cache.invalidate() {
        Ok(()) => output.success("Module cache cleared.")?,
        Err(e) => output.warning(&format!("Cache clear failed: {e}"))?,
    }
    Ok(())
}
