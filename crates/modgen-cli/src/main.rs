//! # Modgen CLI
//!
//! Module scaffolding for Laravel-style monoliths.
//!
//! `main` wires the pieces together in a fixed order: arguments, then
//! tracing, then configuration, then the [`OutputManager`], and finally the
//! command dispatch in [`run`]. Anything that fails before dispatch prints
//! its own message, because the error-rendering machinery in [`CliError`]
//! is not available yet at that point.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    // Let clap render help, version, and usage errors itself. Help and
    // version exit 0, a bad invocation exits 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = e.exit_code() as u8;
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // Config failures get their own exit code (4) so scripts can tell a
    // broken modgen.toml apart from a failed command.
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(4);
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    // Captured before `cli` moves into run(); handle_error needs it to
    // decide whether to print the Caused-by chain.
    let verbose = cli.global.verbose > 0;
    match run(cli, config, output) {
        Ok(()) => {
            info!("modgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Hand the parsed invocation to its command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Module(cmd) => commands::module::execute(cmd, cli.global, config, output),
        Commands::Entity(cmd) => commands::entity::execute(cmd, cli.global, config, output),
        Commands::Cache(cmd) => commands::cache::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Turn a [`CliError`] into stderr output and an exit code.
///
/// Every error from [`run`] funnels through here, so this is the only
/// place that chooses between the coloured and plain renderings.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Written to stderr so it survives stdout redirection; colour only
    // when stderr is an actual terminal.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_definition_is_internally_consistent() {
        // Panics on conflicting flags, missing value names, and the like.
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(
            Cli::command().get_version(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn author_is_declared() {
        assert!(Cli::command().get_author().is_some());
    }
}
