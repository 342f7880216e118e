//! Physical locality of a declaration relative to the edit point.

use crate::candidate::Candidate;
use crate::context::RankingContext;

use super::{OrderKey, Weigher, ids};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LocationWeight {
    CurrentFile,
    CurrentModule,
    Project,
    Libraries,
}

impl From<LocationWeight> for OrderKey {
    fn from(weight: LocationWeight) -> Self {
        OrderKey::Location(weight)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationWeigher;

impl LocationWeigher {
    /// `None` for candidates without a declaration location.
    pub fn weight(candidate: &Candidate, ctx: &RankingContext<'_>) -> Option<LocationWeight> {
        let location = candidate.as_declaration()?.location.as_ref()?;

        if location.file == Some(ctx.current_file) {
            return Some(LocationWeight::CurrentFile);
        }

        let module = ctx.locality.module_for(location);
        if module.is_some() && module == ctx.original_module {
            return Some(LocationWeight::CurrentModule);
        }

        if ctx.locality.is_in_project_source(location) {
            Some(LocationWeight::Project)
        } else {
            Some(LocationWeight::Libraries)
        }
    }
}

impl Weigher for LocationWeigher {
    fn id(&self) -> &'static str {
        ids::LOCATION
    }

    fn weigh(&self, candidate: &Candidate, ctx: &RankingContext<'_>) -> OrderKey {
        Self::weight(candidate, ctx).into()
    }
}
