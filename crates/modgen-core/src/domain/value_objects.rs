//! Core value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Module kind ──────────────────────────────────────────────────────────────

/// Flavor of a module, inferred from its on-disk tree.
///
/// A module is `Api` exactly when `Http/Controllers/Api` exists under its
/// root. There is no metadata file; the directory is the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Plain,
    Api,
}

impl ModuleKind {
    pub fn is_api(self) -> bool {
        matches!(self, Self::Api)
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Api => write!(f, "api"),
        }
    }
}

// ── Route kind ───────────────────────────────────────────────────────────────

/// Which shared route file a registration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Web,
    Api,
}

impl RouteKind {
    /// Name of the shared route file under `Routes/`.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Web => "web.php",
            Self::Api => "api.php",
        }
    }

    /// Middleware group the host attaches when loading this file.
    pub fn middleware(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
        }
    }

    /// Prefix applied to generated route names (`api.comment.index`).
    pub fn name_prefix(self) -> &'static str {
        match self {
            Self::Web => "",
            Self::Api => "api.",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.middleware())
    }
}

// ── Capabilities ─────────────────────────────────────────────────────────────

/// Host add-ons that unlock optional artifacts.
///
/// Resolved once at startup from configuration and passed into the
/// services; nothing in the pipeline probes the host at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// An API authentication package is installed; required for API
    /// modules and API route files.
    ApiAuth,
    /// Livewire is installed; unlocks component classes and views.
    Livewire,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiAuth => write!(f, "api_auth"),
            Self::Livewire => write!(f, "livewire"),
        }
    }
}

/// The set of capabilities resolved for this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    caps: Vec<Capability>,
}

impl CapabilitySet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style insertion; duplicates are ignored.
    pub fn with(mut self, cap: Capability) -> Self {
        if !self.caps.contains(&cap) {
            self.caps.push(cap);
        }
        self
    }

    pub fn has(&self, cap: Capability) -> bool {
        self.caps.contains(&cap)
    }
}

// ── Overwrite policy ─────────────────────────────────────────────────────────

/// What the synthesizer does when a destination file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Leave the existing file alone and record the entry as skipped.
    #[default]
    Reject,
    /// Replace the existing content.
    Replace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_kind_carries_file_and_prefix() {
        assert_eq!(RouteKind::Web.file_name(), "web.php");
        assert_eq!(RouteKind::Api.file_name(), "api.php");
        assert_eq!(RouteKind::Web.name_prefix(), "");
        assert_eq!(RouteKind::Api.name_prefix(), "api.");
    }

    #[test]
    fn capability_set_is_idempotent() {
        let caps = CapabilitySet::empty()
            .with(Capability::Livewire)
            .with(Capability::Livewire);
        assert!(caps.has(Capability::Livewire));
        assert!(!caps.has(Capability::ApiAuth));
    }

    #[test]
    fn overwrite_policy_defaults_to_reject() {
        assert_eq!(OverwritePolicy::default(), OverwritePolicy::Reject);
    }
}
