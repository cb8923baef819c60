//! SLA target resolution
//!
//! Maps `(category, stage, optionally time-of-creation)` to a target
//! duration in minutes. The resolver owns an immutable [`SlaProfile`]
//! supplied at construction time; nothing here mutates after that, so a
//! single resolver can serve any number of concurrent callers.

use crate::classify::FulfillmentCategory;
use crate::order::Stage;
use crate::profile::{SlaProfile, StageTargets};
use chrono::NaiveDateTime;
use tracing::debug;

/// Resolves SLA target minutes from an injected profile
///
/// # Example
///
/// ```
/// use sla_rs::classify::FulfillmentCategory;
/// use sla_rs::order::Stage;
/// use sla_rs::profile::SlaProfile;
/// use sla_rs::resolve::TargetResolver;
///
/// let resolver = TargetResolver::new(SlaProfile::builtin().clone());
/// let minutes = resolver.resolve(FulfillmentCategory::HotShot, Stage::Pick, None);
/// assert_eq!(minutes, 20);
/// ```
#[derive(Debug, Clone)]
pub struct TargetResolver {
    profile: SlaProfile,
}

impl TargetResolver {
    /// Create a resolver backed by the given profile
    pub fn new(profile: SlaProfile) -> Self {
        Self { profile }
    }

    /// The profile this resolver was built from
    pub fn profile(&self) -> &SlaProfile {
        &self.profile
    }

    /// Resolve the full target row for a category
    ///
    /// The cutoff rule is applied before table lookup: when the category is
    /// the cutoff-sensitive one and a creation time is supplied, the
    /// before/after row replaces the matrix row entirely. Categories without
    /// an explicit matrix entry resolve to the profile's default row.
    pub fn resolve_targets(
        &self,
        category: FulfillmentCategory,
        created_at: Option<NaiveDateTime>,
    ) -> StageTargets {
        if let (Some(rule), Some(at)) = (&self.profile.cutoff, created_at) {
            if rule.category == category {
                return rule.select(at).normalized();
            }
        }

        match self.profile.categories.get(&category) {
            Some(row) => row.normalized(),
            None => {
                debug!(category = %category, "no matrix row for category, using default row");
                self.profile.default.normalized()
            }
        }
    }

    /// Resolve the target minutes for one `(category, stage)` pair
    pub fn resolve(
        &self,
        category: FulfillmentCategory,
        stage: Stage,
        created_at: Option<NaiveDateTime>,
    ) -> u32 {
        self.resolve_targets(category, created_at).get(stage)
    }
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::new(SlaProfile::default())
    }
}
