//! Derived verdict and assessment types
//!
//! Everything in this module is a value computed fresh from inputs — never
//! mutated in place by a caller. Raw per-stage durations and targets stay
//! exposed on [`StageVerdict`] so callers can layer their own rollup
//! policies (three-tier dashboards, weighted scoring) on top of the
//! two-tier met/breach primitive.

use crate::classify::FulfillmentCategory;
use crate::order::Stage;
use crate::profile::StageTargets;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of evaluating one stage against its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageOutcome {
    /// Stage completed within its target
    Met,
    /// Stage completed over its target
    Breached,
    /// Stage has started but not completed; no verdict yet
    Pending,
    /// Stage timestamps are inconsistent (end before start, or a missing
    /// end while a later stage already started); no verdict possible
    InvalidTiming,
}

impl StageOutcome {
    /// True for outcomes that carry a real met/breach verdict
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageOutcome::Met | StageOutcome::Breached)
    }

    /// The met/breach verdict, when one exists
    pub fn met(&self) -> Option<bool> {
        match self {
            StageOutcome::Met => Some(true),
            StageOutcome::Breached => Some(false),
            StageOutcome::Pending | StageOutcome::InvalidTiming => None,
        }
    }
}

/// Verdict for one stage of one order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageVerdict {
    /// The stage this verdict is for
    pub stage: Stage,
    /// Observed elapsed seconds; absent for pending or invalid stages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    /// The target the duration was compared against
    pub target_minutes: u32,
    /// The outcome of the comparison
    pub outcome: StageOutcome,
}

/// Overall health signal rolled up from stage verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderHealth {
    /// Every evaluated stage met its target
    Met,
    /// At least one stage breached its target
    Breached,
    /// Nothing breached, but pending or invalid stages (or no stages at
    /// all) leave the order without a full verdict
    Inconclusive,
}

impl OrderHealth {
    /// Roll a set of stage verdicts up into one health signal
    ///
    /// Any breach anywhere wins; a clean sweep of met verdicts is `Met`;
    /// everything else is `Inconclusive`.
    pub fn from_verdicts<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a StageVerdict>,
    {
        let mut any_terminal = false;
        let mut all_met = true;
        for verdict in verdicts {
            match verdict.outcome {
                StageOutcome::Breached => return OrderHealth::Breached,
                StageOutcome::Met => any_terminal = true,
                StageOutcome::Pending | StageOutcome::InvalidTiming => all_met = false,
            }
        }
        if any_terminal && all_met {
            OrderHealth::Met
        } else {
            OrderHealth::Inconclusive
        }
    }
}

/// Stage verdicts for one order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAssessment {
    /// Line identifier, unique within the order
    pub line_id: String,
    /// Verdicts for each observed stage, in lifecycle order
    pub verdicts: Vec<StageVerdict>,
    /// Health rolled up over this line's verdicts
    pub health: OrderHealth,
}

/// Complete assessment of one order: category, resolved targets and
/// per-line stage verdicts
///
/// Serializable so callers can persist rows keyed by order, line and stage
/// without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAssessment {
    /// Unique id of this assessment run
    pub assessment_id: Uuid,
    /// The order this assessment is for
    pub order_id: String,
    /// The fulfillment category the order classified into
    pub category: FulfillmentCategory,
    /// The resolved target row the verdicts were evaluated against
    pub targets: StageTargets,
    /// Per-line assessments
    pub lines: Vec<LineAssessment>,
    /// Health rolled up over every line's verdicts
    pub health: OrderHealth,
    /// Time taken to produce this assessment
    pub evaluation_time: std::time::Duration,
}

impl OrderAssessment {
    /// Iterate over every stage verdict across all lines
    pub fn all_verdicts(&self) -> impl Iterator<Item = &StageVerdict> {
        self.lines.iter().flat_map(|line| line.verdicts.iter())
    }
}
