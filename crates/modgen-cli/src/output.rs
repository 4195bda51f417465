//! Terminal output for command results.
//!
//! All user-facing lines funnel through [`OutputManager`] so quiet mode
//! and colour handling live in one place. Status lines carry a glyph
//! prefix; artifact listings from the commands go through [`print`]
//! unchanged.
//!
//! [`print`]: OutputManager::print

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Glyph and colour for one class of status line.
#[derive(Debug, Clone, Copy)]
enum Indicator {
    Success,
    Error,
    Warning,
    Info,
}

impl Indicator {
    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Error => "\u{2717}",   // ✗
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn paint(self, msg: &str) -> String {
        match self {
            Self::Success => format!("{} {}", self.glyph().green().bold(), msg.green()),
            Self::Error => format!("{} {}", self.glyph().red().bold(), msg.red()),
            Self::Warning => format!("{} {}", self.glyph().yellow().bold(), msg.yellow()),
            Self::Info => format!("{} {}", self.glyph().blue().bold(), msg.blue()),
        }
    }
}

/// Writes command output to stdout, honouring `--quiet` and colour flags.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto resolves by destination: a TTY gets the human rendering,
        // a pipe gets plain text.
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn status(&self, indicator: Indicator, msg: &str) -> io::Result<()> {
        let line = if self.no_color || self.resolved_format == OutputFormat::Plain {
            format!("{} {msg}", indicator.glyph())
        } else {
            indicator.paint(msg)
        };
        self.term.write_line(&line)
    }

    /// Plain line, suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status(Indicator::Success, msg)
    }

    /// Errors ignore quiet mode; they must always reach the user.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.status(Indicator::Error, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status(Indicator::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status(Indicator::Info, msg)
    }

    /// Section heading, bold cyan on a colour terminal.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color || self.resolved_format == OutputFormat::Plain {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (never `Auto`) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}
