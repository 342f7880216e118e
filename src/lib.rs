//! # completion-ranking
//!
//! Weigher-based ranking of code-completion candidates.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → RankingPipeline, rank()
//!   ↓
//! weighers  → One ranking dimension per weigher, OrderKey
//!   ↓
//! smart     → Expected-type slots, type matching, name similarity
//!   ↓
//! context   → RankingContext, collaborator traits, RankingConfig
//!   ↓
//! candidate → Candidate, LookupObject, Descriptor, upstream tags
//!   ↓
//! types     → Type, FuzzyType, substitution-aware subtype check
//!   ↓
//! base      → Primitives (FileId, ModuleId, FqName, SourceLocation)
//! ```

// ============================================================================
// MODULES (dependency order: base → types → candidate → context → smart → weighers → ide)
// ============================================================================

/// Foundation types: FileId, ModuleId, FqName
pub mod base;

/// Types and fuzzy types
pub mod types;

/// Completion candidates and their upstream tags
pub mod candidate;

/// Session context and external collaborators
pub mod context;

/// Smart-completion data: expected types, name similarity
pub mod smart;

/// Individual weighers and their keys
pub mod weighers;

/// Ranking pipeline
pub mod ide;

mod error;

pub use base::{FileId, FqName, ModuleId, SourceLocation};
pub use candidate::{Candidate, Declaration, Descriptor, DescriptorId, DescriptorKind, LookupObject};
pub use context::{FqNameClassifier, ImportClassification, LocalityIndex, RankingConfig, RankingContext};
pub use error::{PipelineError, PipelineResult};
pub use ide::{RankingPipeline, rank};
pub use smart::{ExpectedInfo, SmartCastTypeResolver, SmartCompletion};
pub use weighers::{OrderKey, Weigher};
