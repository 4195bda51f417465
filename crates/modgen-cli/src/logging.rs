//! Tracing subscriber setup.
//!
//! The CLI owns the subscriber; `modgen-core` and `modgen-adapters` emit
//! spans and events but never install one. Diagnostics go to stderr so
//! generated-file listings on stdout stay clean for piping.
//!
//! The filter is chosen in this order:
//!
//! 1. `MODGEN_LOG` (full `EnvFilter` directive syntax)
//! 2. `RUST_LOG`
//! 3. The `-v` / `--quiet` flags:
//!    `--quiet` → ERROR, none → WARN, `-v` → INFO, `-vv` → DEBUG,
//!    `-vvv` → TRACE, applied to the three modgen crates.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const ENV_VAR: &str = "MODGEN_LOG";

/// Install the global tracing subscriber. Call once, before the first
/// tracing macro fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    // try_init errors instead of panicking when a subscriber is already
    // set (integration tests share a process).
    tracing_subscriber::registry()
        .with(env_filter(args))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn env_filter(args: &GlobalArgs) -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(flag_directives(args)))
}

/// Filter string derived from `-v` / `--quiet`, scoped to our crates so a
/// chatty dependency never rides along.
fn flag_directives(args: &GlobalArgs) -> String {
    let level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    format!("modgen={level},modgen_core={level},modgen_adapters={level}")
}
