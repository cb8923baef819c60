//! Creation-time cutoff rule for the cutoff-sensitive category
//!
//! One category (the retail/jobber major account in demonstration data)
//! gets different SLA targets depending on when the order was placed:
//! orders created before the cutoff hour take one target row, orders at or
//! after it take another. The hour is configurable; 13:00 is the
//! conventional boundary the demo data exercises with 12:30 / 14:30 orders.

use crate::classify::FulfillmentCategory;
use crate::profile::StageTargets;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

fn default_cutoff_hour() -> u32 {
    13
}

/// Before/after-cutoff target selection for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CutoffRule {
    /// The category this rule applies to
    pub category: FulfillmentCategory,
    /// Local wall-clock hour of the boundary; orders created at or after
    /// this hour take the `after` row
    #[serde(default = "default_cutoff_hour")]
    pub cutoff_hour: u32,
    /// Targets for orders created before the cutoff
    pub before: StageTargets,
    /// Targets for orders created at or after the cutoff
    pub after: StageTargets,
}

impl CutoffRule {
    /// Pick the target row for an order created at the given local time
    pub fn select(&self, created_at: NaiveDateTime) -> &StageTargets {
        if created_at.hour() < self.cutoff_hour {
            &self.before
        } else {
            &self.after
        }
    }
}
