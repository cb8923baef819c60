//! SLA profile documents: the category × stage target matrix plus the
//! optional creation-time cutoff rule
//!
//! Profiles are operator-tunable YAML so SLAs can change without a code
//! change. A profile is parsed and validated once, then injected into the
//! resolver; there is no process-wide mutable table.
//!
//! # Example
//!
//! ```
//! use sla_rs::profile::profile_from_yaml;
//!
//! # fn example() -> anyhow::Result<()> {
//! let yaml = br#"
//! categories:
//!   hot_shot: { pick: 20, stage: 20, pack: 10, ship: 10 }
//!   store_fulfillment: { pick: 15, stage: 15, pack: 10, ship: 0 }
//! default: { pick: 120, stage: 120, pack: 40, ship: 240 }
//! "#;
//!
//! let profile = profile_from_yaml(yaml)?;
//! assert_eq!(profile.categories.len(), 2);
//! # Ok(())
//! # }
//! ```

use crate::classify::FulfillmentCategory;
use crate::error::{Result, SlaError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod cutoff;
pub mod matrix;

pub use cutoff::CutoffRule;
pub use matrix::StageTargets;

/// A complete SLA profile: per-category target rows, a default row and an
/// optional cutoff rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlaProfile {
    /// Target rows per category; categories missing here resolve to
    /// `default`
    #[serde(default)]
    pub categories: HashMap<FulfillmentCategory, StageTargets>,
    /// Fallback row for categories without an explicit entry
    pub default: StageTargets,
    /// Creation-time cutoff override for one category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<CutoffRule>,
}

/// Built-in profile carrying the production SLA matrix
static BUILTIN: Lazy<SlaProfile> = Lazy::new(|| {
    let mut categories = HashMap::new();
    categories.insert(
        FulfillmentCategory::MajorAccount,
        StageTargets::new(60, 60, 20, 120),
    );
    categories.insert(
        FulfillmentCategory::StoreFulfillment,
        StageTargets::new(15, 15, 10, 0),
    );
    categories.insert(
        FulfillmentCategory::Ecommerce,
        StageTargets::new(120, 120, 40, 240),
    );
    categories.insert(
        FulfillmentCategory::HotShot,
        StageTargets::new(20, 20, 10, 10),
    );
    categories.insert(
        FulfillmentCategory::Transfer,
        StageTargets::new(30, 30, 10, 10),
    );
    categories.insert(FulfillmentCategory::Route, StageTargets::new(30, 30, 10, 10));

    SlaProfile {
        categories,
        default: StageTargets::new(120, 120, 40, 240),
        cutoff: None,
    }
});

impl SlaProfile {
    /// The built-in matrix used when no profile document is supplied
    pub fn builtin() -> &'static SlaProfile {
        &BUILTIN
    }
}

impl Default for SlaProfile {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Parse an SLA profile from YAML data with validation
pub fn profile_from_yaml(data: &[u8]) -> Result<SlaProfile> {
    let profile: SlaProfile = serde_yaml::from_slice(data)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile meets the minimum requirements
fn validate_profile(profile: &SlaProfile) -> Result<()> {
    if let Some(cutoff) = &profile.cutoff {
        if cutoff.cutoff_hour >= 24 {
            return Err(SlaError::Profile(format!(
                "cutoff hour {} is out of range (0-23)",
                cutoff.cutoff_hour
            )));
        }
    }
    Ok(())
}
