//! Surgical line-level edits on shared route files.
//!
//! Route files are treated as opaque text. Edits follow a narrow grammar:
//! one registration line per entity, inserted above a sentinel anchor
//! comment (with fallbacks), removed by an exact anchored match. No
//! attempt is made to parse the host language.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::error::AppResult;
use crate::application::ports::output::Filesystem;
use crate::domain::entities::name::NameVariantSet;
use crate::domain::value_objects::RouteKind;

/// Sentinel comment marking where new registrations are inserted.
pub const ROUTE_ANCHOR: &str = "// Entity routes will be added here";

/// Closing marker used as the secondary insertion point.
const CLOSING_TAG: &str = "?>";

/// Outcome of an insertion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteInsertion {
    Inserted,
    AlreadyRegistered,
    FileMissing,
}

/// Outcome of a removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRemoval {
    Removed,
    NotRegistered,
    FileMissing,
}

/// Inserts and removes entity route registrations.
pub struct RouteFileEditor {
    filesystem: Arc<dyn Filesystem>,
}

impl RouteFileEditor {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Registers `names` in the route file at `path`.
    ///
    /// Missing files and already-registered entities are no-ops. The
    /// registration line goes directly above the anchor comment, or
    /// before the closing marker, or at end of file. A controller
    /// import is added after the last existing import when absent.
    #[instrument(skip(self, names, module_ns), fields(file = %path.display(), entity = names.studly()))]
    pub fn insert(
        &self,
        path: &Path,
        names: &NameVariantSet,
        module_ns: &str,
        kind: RouteKind,
    ) -> AppResult<RouteInsertion> {
        if !self.filesystem.exists(path) {
            debug!("route file missing, skipping registration");
            return Ok(RouteInsertion::FileMissing);
        }
        let content = self.filesystem.read_to_string(path)?;

        let probe = registration_probe(names);
        if content.contains(&probe) {
            debug!("registration already present");
            return Ok(RouteInsertion::AlreadyRegistered);
        }

        // split('\n') keeps a trailing empty segment for files ending in
        // a newline, so join("\n") reproduces the input byte for byte.
        let mut lines: Vec<String> = content.split('\n').map(String::from).collect();

        let import = controller_import(names, module_ns, kind);
        if !lines.iter().any(|l| l.trim() == import) {
            let at = import_insertion_index(&lines);
            lines.insert(at, import);
        }

        let registration = registration_line(names, kind);
        if let Some(at) = lines.iter().rposition(|l| l.contains(ROUTE_ANCHOR)) {
            let indent: String = lines[at]
                .chars()
                .take_while(|c| c.is_whitespace())
                .collect();
            lines.insert(at, format!("{indent}{registration}"));
        } else if let Some(at) = lines.iter().rposition(|l| l.trim() == CLOSING_TAG) {
            lines.insert(at, registration);
        } else {
            append_line(&mut lines, registration);
        }

        self.filesystem.write_file(path, &lines.join("\n"))?;
        debug!("registration inserted");
        Ok(RouteInsertion::Inserted)
    }

    /// Unregisters `names` from the route file at `path`.
    ///
    /// Removes the first line matching the anchored probe, plus the
    /// entity's controller import. When the file or the registration is
    /// absent the file is left untouched.
    #[instrument(skip(self, names, module_ns), fields(file = %path.display(), entity = names.studly()))]
    pub fn remove(
        &self,
        path: &Path,
        names: &NameVariantSet,
        module_ns: &str,
        kind: RouteKind,
    ) -> AppResult<RouteRemoval> {
        if !self.filesystem.exists(path) {
            return Ok(RouteRemoval::FileMissing);
        }
        let content = self.filesystem.read_to_string(path)?;

        let probe = registration_probe(names);
        let mut lines: Vec<String> = content.split('\n').map(String::from).collect();

        let Some(at) = lines.iter().position(|l| l.contains(&probe)) else {
            debug!("no registration found, leaving file untouched");
            return Ok(RouteRemoval::NotRegistered);
        };
        lines.remove(at);

        let import = controller_import(names, module_ns, kind);
        if let Some(at) = lines.iter().position(|l| l.trim() == import) {
            lines.remove(at);
        }

        self.filesystem.write_file(path, &lines.join("\n"))?;
        debug!("registration removed");
        Ok(RouteRemoval::Removed)
    }
}

/// Duplicate/removal probe, anchored through the path's closing quote so
/// `post` never matches `post-category`.
fn registration_probe(names: &NameVariantSet) -> String {
    format!("Route::get('/{}'", names.kebab())
}

fn registration_line(names: &NameVariantSet, kind: RouteKind) -> String {
    format!(
        "Route::get('/{kebab}', [{studly}Controller::class, 'index'])->name('{prefix}{kebab}.index');",
        kebab = names.kebab(),
        studly = names.studly(),
        prefix = kind.name_prefix(),
    )
}

fn controller_import(names: &NameVariantSet, module_ns: &str, kind: RouteKind) -> String {
    match kind {
        RouteKind::Web => format!(
            "use {module_ns}\\Http\\Controllers\\{}Controller;",
            names.studly()
        ),
        RouteKind::Api => format!(
            "use {module_ns}\\Http\\Controllers\\Api\\{}Controller;",
            names.studly()
        ),
    }
}

/// Index to insert an import at: after the last `use` line, else after
/// the opening tag, else the top of the file.
fn import_insertion_index(lines: &[String]) -> usize {
    if let Some(at) = lines
        .iter()
        .rposition(|l| l.trim_start().starts_with("use ") && l.trim_end().ends_with(';'))
    {
        return at + 1;
    }
    if let Some(at) = lines.iter().position(|l| l.trim_start().starts_with("<?php")) {
        return at + 1;
    }
    0
}

/// Appends before the trailing empty segment so files keep their final
/// newline.
fn append_line(lines: &mut Vec<String>, line: String) {
    match lines.last().map(String::as_str) {
        Some("") => {
            let at = lines.len() - 1;
            lines.insert(at, line);
        }
        _ => lines.push(line),
    }
}
