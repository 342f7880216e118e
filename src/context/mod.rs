//! Session-wide, read-only inputs to ranking.
//!
//! A [`RankingContext`] is built once per completion session and passed by
//! reference into every weigher. It owns nothing mutable; the collaborators
//! it borrows (import classifier, locality index, smart-completion data) are
//! answered by the semantic layer and must be `Sync` so keys can be computed
//! in parallel.

mod config;

pub use config::RankingConfig;

use smol_str::SmolStr;

use crate::base::{FileId, FqName, ModuleId, SourceLocation};
use crate::smart::SmartCompletion;

/// Import relationship of a fully-qualified name to the edited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImportClassification {
    FromCurrentPackage,
    DefaultImport,
    PreciseImport,
    AllUnderImport,
    HasImportFromSamePackage,
    NotImported,
    /// Visible but discouraged in this language (e.g. platform aliases).
    NotToBeUsed,
    Other,
}

/// Classifies names against the imports of the file being edited.
pub trait FqNameClassifier: Send + Sync {
    fn classify(&self, fq_name: &FqName, is_package: bool) -> ImportClassification;
}

/// Module and source-root membership of declaration locations.
pub trait LocalityIndex: Send + Sync {
    fn module_for(&self, location: &SourceLocation) -> Option<ModuleId>;
    fn is_in_project_source(&self, location: &SourceLocation) -> bool;
}

/// Everything the weighers may read while ranking one candidate list.
pub struct RankingContext<'a> {
    /// Text already typed at the cursor.
    pub prefix: SmolStr,
    /// File being edited (the completion copy, if one was made).
    pub current_file: FileId,
    /// Module of the original, pre-completion file.
    pub original_module: Option<ModuleId>,
    pub classifier: &'a dyn FqNameClassifier,
    pub locality: &'a dyn LocalityIndex,
    /// Present only when smart completion ran for this session.
    pub smart: Option<SmartCompletion<'a>>,
    pub config: RankingConfig,
}

impl<'a> RankingContext<'a> {
    pub fn new(
        prefix: impl Into<SmolStr>,
        current_file: FileId,
        classifier: &'a dyn FqNameClassifier,
        locality: &'a dyn LocalityIndex,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            current_file,
            original_module: None,
            classifier,
            locality,
            smart: None,
            config: RankingConfig::default(),
        }
    }

    pub fn with_original_module(mut self, module: ModuleId) -> Self {
        self.original_module = Some(module);
        self
    }

    pub fn with_smart_completion(mut self, smart: SmartCompletion<'a>) -> Self {
        self.smart = Some(smart);
        self
    }

    pub fn with_config(mut self, config: RankingConfig) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for RankingContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingContext")
            .field("prefix", &self.prefix)
            .field("current_file", &self.current_file)
            .field("original_module", &self.original_module)
            .field("smart", &self.smart.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
