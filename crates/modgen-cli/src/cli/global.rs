//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`], so `modgen module create -v` and
//! `modgen -v module create` both work.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level once per occurrence.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Print nothing but errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes. Also honoured via the `NO_COLOR`
    /// convention (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Explicit configuration file; skips discovery.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Where the module directories live. The flag wins over
    /// `MODGEN_ROOT`, which wins over the config file.
    #[arg(
        short = 'r',
        long = "root",
        global = true,
        value_name = "DIR",
        env = "MODGEN_ROOT",
        help = "Modules root directory"
    )]
    pub root: Option<PathBuf>,

    /// Output rendering.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pick by destination: TTY gets `Human`, a pipe gets `Plain`.
    #[default]
    Auto,
    /// Coloured, glyph-prefixed lines.
    Human,
    /// The same lines without ANSI codes.
    Plain,
    /// JSON output.
    Json,
}
