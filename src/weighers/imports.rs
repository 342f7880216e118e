//! Import-reachability weighers.
//!
//! Both weighers ask the same [`FqNameClassifier`](crate::context::FqNameClassifier);
//! [`NotImportedWeigher`] only looks at the classifications that mean "needs
//! work to use" and [`ImportedWeigher`] only at the ones that mean "already
//! reachable".

use crate::candidate::Candidate;
use crate::context::{FqNameClassifier, ImportClassification, RankingContext};

use super::{OrderKey, Weigher, ids};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NotImportedWeight {
    Default,
    HasImportFromSamePackage,
    NotImported,
    NotToBeUsed,
}

impl From<NotImportedWeight> for OrderKey {
    fn from(weight: NotImportedWeight) -> Self {
        OrderKey::NotImported(weight)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotImportedWeigher;

impl NotImportedWeigher {
    pub fn weight(candidate: &Candidate, classifier: &dyn FqNameClassifier) -> NotImportedWeight {
        if !candidate.not_imported {
            return NotImportedWeight::Default;
        }
        let Some((fq_name, is_package)) = candidate.importable_name() else {
            return NotImportedWeight::Default;
        };
        match classifier.classify(fq_name, is_package) {
            ImportClassification::HasImportFromSamePackage => {
                NotImportedWeight::HasImportFromSamePackage
            }
            ImportClassification::NotImported => NotImportedWeight::NotImported,
            ImportClassification::NotToBeUsed => NotImportedWeight::NotToBeUsed,
            ImportClassification::FromCurrentPackage
            | ImportClassification::DefaultImport
            | ImportClassification::PreciseImport
            | ImportClassification::AllUnderImport
            | ImportClassification::Other => NotImportedWeight::Default,
        }
    }
}

impl Weigher for NotImportedWeigher {
    fn id(&self) -> &'static str {
        ids::NOT_IMPORTED
    }

    fn weigh(&self, candidate: &Candidate, ctx: &RankingContext<'_>) -> OrderKey {
        Self::weight(candidate, ctx.classifier).into()
    }
}

/// Precise imports outrank wildcard imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ImportedWeight {
    CurrentPackage,
    DefaultImport,
    PreciseImport,
    AllUnderImport,
}

impl From<ImportedWeight> for OrderKey {
    fn from(weight: ImportedWeight) -> Self {
        OrderKey::Imported(weight)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportedWeigher;

impl ImportedWeigher {
    pub fn weight(candidate: &Candidate, classifier: &dyn FqNameClassifier) -> Option<ImportedWeight> {
        let (fq_name, is_package) = candidate.importable_name()?;
        match classifier.classify(fq_name, is_package) {
            ImportClassification::FromCurrentPackage => Some(ImportedWeight::CurrentPackage),
            ImportClassification::DefaultImport => Some(ImportedWeight::DefaultImport),
            ImportClassification::PreciseImport => Some(ImportedWeight::PreciseImport),
            ImportClassification::AllUnderImport => Some(ImportedWeight::AllUnderImport),
            ImportClassification::HasImportFromSamePackage
            | ImportClassification::NotImported
            | ImportClassification::NotToBeUsed
            | ImportClassification::Other => None,
        }
    }
}

impl Weigher for ImportedWeigher {
    fn id(&self) -> &'static str {
        ids::IMPORTED
    }

    fn weigh(&self, candidate: &Candidate, ctx: &RankingContext<'_>) -> OrderKey {
        Self::weight(candidate, ctx.classifier).into()
    }
}
