//! Shared domain primitives.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A path guaranteed to stay inside the module root.
///
/// Every destination in a [`ScaffoldPlan`](crate::domain::ScaffoldPlan) and
/// every removal target is a `RelativePath`; construction rejects absolute
/// paths and `..` components so arbitrary names can never write or delete
/// outside the tree being scaffolded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativePath {
    inner: PathBuf,
}

impl RelativePath {
    /// Builds a relative path, panicking on invalid input.
    ///
    /// Use [`RelativePath::try_new`] for caller-supplied values; this
    /// variant is for literals and registry-derived paths whose shape is
    /// covered by tests.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        match Self::try_new(path) {
            Ok(p) => p,
            Err(e) => panic!("invalid relative path: {e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let inner: PathBuf = path.into();
        if inner.as_os_str().is_empty() {
            return Err(DomainError::PathNotRelative(String::new()));
        }
        for component in inner.components() {
            match component {
                Component::Normal(_) => {}
                _ => {
                    return Err(DomainError::PathNotRelative(
                        inner.display().to_string(),
                    ));
                }
            }
        }
        Ok(Self { inner })
    }

    pub fn as_path(&self) -> &Path {
        &self.inner
    }

    /// File or directory name (the final component).
    pub fn file_name(&self) -> Option<&str> {
        self.inner.file_name().and_then(|n| n.to_str())
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_paths() {
        let p = RelativePath::try_new("Http/Controllers/PostController.php").unwrap();
        assert_eq!(p.file_name(), Some("PostController.php"));
    }

    #[test]
    fn rejects_absolute_paths() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
    }

    #[test]
    fn rejects_parent_traversal() {
        assert!(RelativePath::try_new("Models/../../escape.php").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(RelativePath::try_new("").is_err());
    }

    #[test]
    #[should_panic]
    fn new_panics_on_invalid() {
        RelativePath::new("../oops");
    }
}
