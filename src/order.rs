//! Boundary input types for order records and stage timelines
//!
//! Upstream systems (message consumers, batch queries) deliver orders as
//! loose JSON documents. This module pins those payloads down to explicit
//! structs, with required and optional fields stated, and validates them
//! before anything reaches the classifier or evaluator.
//!
//! # Example
//!
//! ```
//! use sla_rs::order::OrderRecord;
//!
//! # fn example() -> anyhow::Result<()> {
//! let order: OrderRecord = serde_json::from_str(r#"{
//!     "order_id": "ORD-10001",
//!     "customer_id": 10000000064356,
//!     "route_type": "H",
//!     "created_at": "2024-03-14T12:30:00"
//! }"#)?;
//!
//! order.validate()?;
//! assert_eq!(order.route_code(), Some("H"));
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, SlaError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One discrete phase of order fulfillment, in lifecycle order.
///
/// The ordering of the variants is the physical ordering of the stages on
/// the warehouse floor; the evaluator relies on it to tell an in-progress
/// stage apart from one whose end timestamp was never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Items pulled from inventory
    Pick,
    /// Items moved to the staging area
    Stage,
    /// Staging confirmed complete
    StageComplete,
    /// Items packed for shipment
    Pack,
    /// Shipment handed to the carrier
    Ship,
}

impl Stage {
    /// All stages in lifecycle order
    pub const ALL: [Stage; 5] = [
        Stage::Pick,
        Stage::Stage,
        Stage::StageComplete,
        Stage::Pack,
        Stage::Ship,
    ];

    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Pick => "pick",
            Stage::Stage => "stage",
            Stage::StageComplete => "stage_complete",
            Stage::Pack => "pack",
            Stage::Ship => "ship",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer identifier as it arrives off the wire
///
/// Source feeds carry customer numbers either as JSON numbers or as strings.
/// The major-account residue rule needs a numeric value; a non-numeric
/// identifier simply never satisfies that rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerId {
    /// Numeric customer number
    Numeric(u64),
    /// Free-form identifier; digits-only strings are coerced on demand
    Text(String),
}

impl CustomerId {
    /// Numeric view of the identifier, coercing digit strings
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            CustomerId::Numeric(n) => Some(*n),
            CustomerId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<u64> for CustomerId {
    fn from(n: u64) -> Self {
        CustomerId::Numeric(n)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        CustomerId::Text(s.to_string())
    }
}

/// Observed start/end timestamps for one stage of one order line
///
/// Timestamps are wall-clock local time as recorded by the upstream
/// warehouse systems. `end` is absent while the stage is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEvent {
    /// Which fulfillment stage this timing belongs to
    pub stage: Stage,
    /// When the stage started
    pub start: NaiveDateTime,
    /// When the stage completed, if it has
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
}

impl StageEvent {
    /// Create a completed stage event
    pub fn completed(stage: Stage, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            stage,
            start,
            end: Some(end),
        }
    }

    /// Create an in-progress stage event with no end timestamp
    pub fn in_progress(stage: Stage, start: NaiveDateTime) -> Self {
        Self {
            stage,
            start,
            end: None,
        }
    }
}

/// A single line of an order with its observed stage timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Line identifier, unique within the order
    pub line_id: String,
    /// Observed stage events for this line
    #[serde(default)]
    pub events: Vec<StageEvent>,
}

/// A single customer order as received from upstream
///
/// Created once when the order is placed and read-only afterwards; all
/// mutation happens in the per-line stage timestamps, not on the order
/// itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Opaque order identifier, unique
    pub order_id: String,
    /// Customer identifier; participates in classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Route/delivery code; absence selects the ecommerce category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,
    /// When the order was placed, local wall-clock time
    pub created_at: NaiveDateTime,
    /// Order lines with their stage timelines
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl OrderRecord {
    /// Route code normalized for classification
    ///
    /// Empty strings mean the same as an absent field, matching the loose
    /// truthiness the source feeds rely on.
    pub fn route_code(&self) -> Option<&str> {
        self.route_type.as_deref().filter(|s| !s.is_empty())
    }

    /// Validate the record before it enters the engine
    ///
    /// Shape problems (empty identifiers, a stage reported twice on one
    /// line) are rejected here so the pure core never sees them. Timing
    /// problems inside a stage are *not* rejected here; the evaluator
    /// reports those per stage without aborting the order.
    pub fn validate(&self) -> Result<()> {
        if self.order_id.trim().is_empty() {
            return Err(SlaError::InvalidOrder("order_id cannot be empty".to_string()));
        }

        for line in &self.lines {
            if line.line_id.trim().is_empty() {
                return Err(SlaError::InvalidOrder(format!(
                    "order {}: line_id cannot be empty",
                    self.order_id
                )));
            }

            let mut seen = std::collections::HashSet::new();
            for event in &line.events {
                if !seen.insert(event.stage) {
                    return Err(SlaError::InvalidOrder(format!(
                        "order {} line {}: duplicate {} stage event",
                        self.order_id, line.line_id, event.stage
                    )));
                }
            }
        }

        Ok(())
    }
}
