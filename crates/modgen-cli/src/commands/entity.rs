//! Implementation of the `modgen entity` subcommands.
//!
//! Responsibility: wire the adapters, call `EntityService`, display
//! results. No business logic lives here.

use std::sync::Arc;

use tracing::{info, instrument};

use modgen_core::application::{
    EntityDeletion, EntityService, RemovalOutcome, RouteInsertion, RouteRemoval,
};

use crate::{
    cli::{EntityCommands, EntityCreateArgs, EntityDeleteArgs, global::GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: EntityCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        EntityCommands::Create(args) => create(args, global, config, output),
        EntityCommands::Delete(args) => delete(args, global, config, output),
    }
}

#[instrument(skip_all, fields(module = %args.module, entity = %args.entity, api = args.api))]
fn create(
    args: EntityCreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = config.resolved_root(global.root.as_deref());
    let filesystem = commands::filesystem();
    // Creation never prompts, so the preset answer is never read.
    let service = EntityService::new(
        Arc::clone(&filesystem),
        commands::stub_source(&config),
        commands::confirmation(true),
        config.capability_set(),
    );

    let creation = service.create(&root, &args.module, &args.entity, args.api)?;
    info!(
        module = creation.module.studly(),
        entity = creation.entity.studly(),
        "entity created"
    );

    commands::report_synthesis(&creation.report, &output)?;
    report_insertion(&creation.web_route, "Routes/web.php", &output)?;
    if let Some(api_route) = &creation.api_route {
        report_insertion(api_route, "Routes/api.php", &output)?;
    }
    output.success(&format!(
        "Entity '{}' created in module '{}'.",
        creation.entity.studly(),
        creation.module.studly()
    ))?;

    let cache = commands::cache_service(&config, &root, filesystem);
    commands::refresh_cache(&cache, &root, &output)
}

fn report_insertion(
    insertion: &RouteInsertion,
    file: &str,
    output: &OutputManager,
) -> CliResult<()> {
    match insertion {
        RouteInsertion::Inserted => output.print(&format!("  + route in {file}"))?,
        RouteInsertion::AlreadyRegistered => {
            output.info(&format!("route already registered in {file}"))?;
        }
        // The module simply has no such file; nothing to report.
        RouteInsertion::FileMissing => {}
    }
    Ok(())
}

#[instrument(skip_all, fields(module = %args.module, entity = %args.entity))]
fn delete(
    args: EntityDeleteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = config.resolved_root(global.root.as_deref());
    let filesystem = commands::filesystem();
    let service = EntityService::new(
        Arc::clone(&filesystem),
        commands::stub_source(&config),
        commands::confirmation(args.yes),
        config.capability_set(),
    );

    let removal = match service.delete(&root, &args.module, &args.entity)? {
        EntityDeletion::Completed(removal) => removal,
        EntityDeletion::Cancelled => {
            output.info("Deletion cancelled.")?;
            return Ok(());
        }
    };

    if removal.nothing_found() {
        output.warning(&format!(
            "No files found for entity {} in module {}.",
            removal.entity.studly(),
            removal.module.studly()
        ))?;
        return Ok(());
    }

    for record in removal.files.records() {
        match &record.outcome {
            RemovalOutcome::Removed => output.print(&format!("  - {}", record.target))?,
            RemovalOutcome::Missing => {}
            RemovalOutcome::Failed { reason } => {
                output.warning(&format!("could not remove {}: {reason}", record.target))?;
            }
        }
    }
    if removal.web_route == RouteRemoval::Removed {
        output.print("  - route in Routes/web.php")?;
    }
    if removal.api_route == RouteRemoval::Removed {
        output.print("  - route in Routes/api.php")?;
    }
    info!(
        module = removal.module.studly(),
        entity = removal.entity.studly(),
        files = removal.files.removed_count(),
        "entity deleted"
    );
    output.success(&format!(
        "Entity '{}' deleted from module '{}'.",
        removal.entity.studly(),
        removal.module.studly()
    ))?;

    let cache = commands::cache_service(&config, &root, filesystem);
    commands::refresh_cache(&cache, &root, &output)
}
