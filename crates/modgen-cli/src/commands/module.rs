//! Implementation of the `modgen module` subcommands.
//!
//! Responsibility: wire the adapters, call `ModuleService`, display
//! results. No business logic lives here.

use std::sync::Arc;

use tracing::{info, instrument};

use modgen_core::application::{ModuleDeletion, ModuleService};
use modgen_core::domain::ModuleKind;

use crate::{
    cli::{ModuleCommands, ModuleCreateArgs, ModuleDeleteArgs, global::GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: ModuleCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ModuleCommands::Create(args) => create(args, global, config, output),
        ModuleCommands::Delete(args) => delete(args, global, config, output),
    }
}

#[instrument(skip_all, fields(module = %args.name, api = args.api))]
fn create(
    args: ModuleCreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = config.resolved_root(global.root.as_deref());
    let filesystem = commands::filesystem();
    // Creation never prompts, so the preset answer is never read.
    let service = ModuleService::new(
        Arc::clone(&filesystem),
        commands::stub_source(&config),
        commands::confirmation(true),
        config.capability_set(),
    );
    let kind = if args.api { ModuleKind::Api } else { ModuleKind::Plain };

    let creation = service.create(&root, &args.name, kind)?;
    info!(module = creation.names.studly(), kind = %creation.kind, "module created");

    commands::report_synthesis(&creation.report, &output)?;
    output.success(&format!(
        "Module '{}' created at {}",
        creation.names.studly(),
        root.join(creation.names.studly()).display()
    ))?;

    let cache = commands::cache_service(&config, &root, filesystem);
    commands::refresh_cache(&cache, &root, &output)
}

#[instrument(skip_all, fields(module = %args.name))]
fn delete(
    args: ModuleDeleteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = config.resolved_root(global.root.as_deref());
    let filesystem = commands::filesystem();
    let service = ModuleService::new(
        Arc::clone(&filesystem),
        commands::stub_source(&config),
        commands::confirmation(args.yes),
        config.capability_set(),
    );

    match service.delete(&root, &args.name)? {
        ModuleDeletion::Deleted { names } => {
            info!(module = names.studly(), "module deleted");
            output.success(&format!("Module '{}' deleted.", names.studly()))?;
            let cache = commands::cache_service(&config, &root, filesystem);
            commands::refresh_cache(&cache, &root, &output)
        }
        ModuleDeletion::Cancelled => {
            output.info("Deletion cancelled.")?;
            Ok(())
        }
    }
}
