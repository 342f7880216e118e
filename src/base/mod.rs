//! Foundation types for the ranking core.
//!
//! This module provides the identifiers every other module refers to:
//! - [`FileId`] - Opaque identifier of a source file
//! - [`ModuleId`] - Opaque identifier of a module in the project graph
//! - [`FqName`] - A dot-separated fully-qualified name
//! - [`SourceLocation`] - Where a declaration is defined
//!
//! This module has NO dependencies on other modules of this crate.

use std::fmt;

use smol_str::SmolStr;

/// Identifier of a source file, assigned by whoever owns the file index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId(u32);

impl FileId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Identifier of a module (compilation unit grouping) in the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleId(u32);

impl ModuleId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> u32 {
        self.0
    }
}

/// A fully-qualified name such as `kotlin.collections.List`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FqName(SmolStr);

impl FqName {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last segment of the name (`List` for `kotlin.collections.List`).
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FqName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Physical location of a declaration.
///
/// `file` is `None` for declarations that only exist in compiled library
/// artifacts; `path` is kept for locality checks against source roots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: Option<FileId>,
    pub path: SmolStr,
}

impl SourceLocation {
    pub fn in_file(file: FileId, path: impl Into<SmolStr>) -> Self {
        Self {
            file: Some(file),
            path: path.into(),
        }
    }

    pub fn external(path: impl Into<SmolStr>) -> Self {
        Self {
            file: None,
            path: path.into(),
        }
    }
}
