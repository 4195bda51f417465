//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modgen",
    bin_name = "modgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Module scaffolding for Laravel-style monoliths",
    long_about = "Modgen generates and maintains self-contained application \
                  modules: directory skeletons, entity artifacts, route \
                  registrations, and the persisted module cache.",
    after_help = "EXAMPLES:\n\
        \x20 modgen module create Blog\n\
        \x20 modgen module create Shop --api\n\
        \x20 modgen entity create Blog Comment\n\
        \x20 modgen entity delete Blog Comment --yes\n\
        \x20 modgen cache build\n\
        \x20 modgen completions bash > /usr/share/bash-completion/completions/modgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create or delete whole modules.
    #[command(
        visible_alias = "m",
        about = "Manage modules",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modgen module create Blog\n\
            \x20 modgen module create Shop --api\n\
            \x20 modgen module delete Blog"
    )]
    Module(ModuleCommands),

    /// Create or delete entities inside a module.
    #[command(
        visible_alias = "e",
        about = "Manage entities within a module",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modgen entity create Blog Comment\n\
            \x20 modgen entity create Shop Order --api\n\
            \x20 modgen entity delete Blog Comment"
    )]
    Entity(EntityCommands),

    /// Maintain the persisted module cache.
    #[command(
        about = "Manage the module cache",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modgen cache build\n\
            \x20 modgen cache clear"
    )]
    Cache(CacheCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modgen completions bash > ~/.local/share/bash-completion/completions/modgen\n\
            \x20 modgen completions zsh  > ~/.zfunc/_modgen\n\
            \x20 modgen completions fish > ~/.config/fish/completions/modgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the modgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modgen config get root\n\
            \x20 modgen config list\n\
            \x20 modgen config path"
    )]
    Config(ConfigCommands),
}

// ── module ────────────────────────────────────────────────────────────────────

/// Subcommands for `modgen module`.
#[derive(Debug, Subcommand)]
pub enum ModuleCommands {
    /// Create a new module skeleton with seed artifacts.
    #[command(visible_alias = "c", about = "Create a new module")]
    Create(ModuleCreateArgs),

    /// Delete a module and everything under it.
    #[command(visible_alias = "d", about = "Delete a module")]
    Delete(ModuleDeleteArgs),
}

/// Arguments for `modgen module create`.
#[derive(Debug, Args)]
pub struct ModuleCreateArgs {
    /// Module name in any casing (`Blog`, `blog-post`, `blog_post`).
    #[arg(value_name = "NAME", help = "Module name")]
    pub name: String,

    /// Scaffold the API flavor: API controller and Routes/api.php.
    #[arg(long = "api", help = "Create an API module")]
    pub api: bool,
}

/// Arguments for `modgen module delete`.
#[derive(Debug, Args)]
pub struct ModuleDeleteArgs {
    /// Module name.
    #[arg(value_name = "NAME", help = "Module name")]
    pub name: String,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and delete immediately")]
    pub yes: bool,
}

// ── entity ────────────────────────────────────────────────────────────────────

/// Subcommands for `modgen entity`.
#[derive(Debug, Subcommand)]
pub enum EntityCommands {
    /// Add an entity to an existing module.
    #[command(visible_alias = "c", about = "Create an entity in a module")]
    Create(EntityCreateArgs),

    /// Remove an entity's files and route registrations.
    #[command(visible_alias = "d", about = "Delete an entity from a module")]
    Delete(EntityDeleteArgs),
}

/// Arguments for `modgen entity create`.
#[derive(Debug, Args)]
pub struct EntityCreateArgs {
    /// Module that receives the entity.
    #[arg(value_name = "MODULE", help = "Target module name")]
    pub module: String,

    /// Entity name in any casing.
    #[arg(value_name = "ENTITY", help = "Entity name")]
    pub entity: String,

    /// Also scaffold the API controller and register the api route.
    #[arg(long = "api", help = "Create API artifacts for the entity")]
    pub api: bool,
}

/// Arguments for `modgen entity delete`.
#[derive(Debug, Args)]
pub struct EntityDeleteArgs {
    /// Module that owns the entity.
    #[arg(value_name = "MODULE", help = "Module name")]
    pub module: String,

    /// Entity name.
    #[arg(value_name = "ENTITY", help = "Entity name")]
    pub entity: String,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and delete immediately")]
    pub yes: bool,
}

// ── cache ─────────────────────────────────────────────────────────────────────

/// Subcommands for `modgen cache`.
#[derive(Debug, Subcommand)]
pub enum CacheCommands {
    /// Scan the modules root and persist the index.
    #[command(about = "Rebuild the module cache")]
    Build,

    /// Forget all cache entries.
    #[command(about = "Clear the module cache")]
    Clear,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `modgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `capabilities.livewire`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path of the configuration file that would be loaded.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_module_create() {
        let cli = Cli::parse_from(["modgen", "module", "create", "Blog", "--api"]);
        match cli.command {
            Commands::Module(ModuleCommands::Create(args)) => {
                assert_eq!(args.name, "Blog");
                assert!(args.api);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_entity_delete_with_yes() {
        let cli = Cli::parse_from(["modgen", "entity", "delete", "Blog", "Comment", "-y"]);
        match cli.command {
            Commands::Entity(EntityCommands::Delete(args)) => {
                assert_eq!(args.module, "Blog");
                assert_eq!(args.entity, "Comment");
                assert!(args.yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn module_alias_is_accepted() {
        let cli = Cli::parse_from(["modgen", "m", "c", "Blog"]);
        assert!(matches!(
            cli.command,
            Commands::Module(ModuleCommands::Create(_))
        ));
    }

    #[test]
    fn root_flag_is_global() {
        let cli = Cli::parse_from(["modgen", "cache", "build", "--root", "/tmp/modules"]);
        assert_eq!(
            cli.global.root.as_deref(),
            Some(std::path::Path::new("/tmp/modules"))
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["modgen", "--quiet", "--verbose", "cache", "build"]);
        assert!(result.is_err());
    }
}
