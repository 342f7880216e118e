//! IDE features: high-level APIs for completion handlers.
//!
//! This module is the interface between the ranking core and whatever
//! serves completion requests. A handler collects candidates, builds a
//! [`RankingContext`](crate::RankingContext) for the session and calls
//! [`rank`] (or a customized [`RankingPipeline`]).
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No protocol types**: Uses our own types, converted at the boundary
//! 3. **Deterministic**: Same input, same order; ties keep input order
//!
//! ## Usage
//!
//! ```ignore
//! use ranking::ide::{RankingPipeline, rank};
//!
//! let ctx = RankingContext::new(prefix, file_id, &classifier, &locality)
//!     .with_smart_completion(SmartCompletion::new(expected_infos));
//! let ordered = rank(candidates, &ctx);
//! ```

mod completion;

pub use completion::{RankingPipeline, rank};
