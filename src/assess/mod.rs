//! Whole-order assessment: classify, resolve, evaluate
//!
//! The [`Assessor`] runs the three core steps in their strict dependency
//! order for one order at a time and hands back a structured
//! [`OrderAssessment`] for the caller to persist or publish. It holds only
//! an immutable resolver, so one assessor can be shared across any number
//! of concurrent workers without locking.

use crate::classify::classify;
use crate::error::Result;
use crate::evaluate::evaluate;
use crate::order::OrderRecord;
use crate::profile::SlaProfile;
use crate::resolve::TargetResolver;
use crate::verdict::{LineAssessment, OrderAssessment, OrderHealth};
use tracing::debug;
use uuid::Uuid;

/// Runs the classify → resolve → evaluate pipeline for whole orders
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sla_rs::assess::Assessor;
/// use sla_rs::classify::FulfillmentCategory;
/// use sla_rs::order::{OrderLine, OrderRecord, Stage, StageEvent};
/// use sla_rs::profile::SlaProfile;
/// use sla_rs::verdict::OrderHealth;
///
/// # fn example() -> anyhow::Result<()> {
/// let day = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
/// let order = OrderRecord {
///     order_id: "ORD-10001".to_string(),
///     customer_id: None,
///     route_type: Some("H".to_string()),
///     created_at: day.and_hms_opt(9, 0, 0).unwrap(),
///     lines: vec![OrderLine {
///         line_id: "L1".to_string(),
///         events: vec![StageEvent::completed(
///             Stage::Pick,
///             day.and_hms_opt(9, 5, 0).unwrap(),
///             day.and_hms_opt(9, 15, 0).unwrap(),
///         )],
///     }],
/// };
///
/// let assessor = Assessor::new(SlaProfile::builtin().clone());
/// let assessment = assessor.assess(&order)?;
/// assert_eq!(assessment.category, FulfillmentCategory::HotShot);
/// assert_eq!(assessment.health, OrderHealth::Met);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Assessor {
    resolver: TargetResolver,
}

impl Assessor {
    /// Create an assessor backed by the given profile
    pub fn new(profile: SlaProfile) -> Self {
        Self {
            resolver: TargetResolver::new(profile),
        }
    }

    /// Create an assessor from an existing resolver
    pub fn with_resolver(resolver: TargetResolver) -> Self {
        Self { resolver }
    }

    /// The resolver backing this assessor
    pub fn resolver(&self) -> &TargetResolver {
        &self.resolver
    }

    /// Assess one order end to end
    ///
    /// Validates the record at the boundary, classifies it, resolves the
    /// target row (applying the cutoff rule against the order's creation
    /// time) and evaluates every line's stage events. The assessment is a
    /// pure function of the order and the profile, apart from the fresh
    /// assessment id and the timing measurement.
    pub fn assess(&self, order: &OrderRecord) -> Result<OrderAssessment> {
        order.validate()?;
        let start = std::time::Instant::now();

        let category = classify(order.customer_id.as_ref(), order.route_code());
        let targets = self
            .resolver
            .resolve_targets(category, Some(order.created_at));

        let lines: Vec<LineAssessment> = order
            .lines
            .iter()
            .map(|line| {
                let verdicts = evaluate(&line.events, &targets);
                let health = OrderHealth::from_verdicts(&verdicts);
                LineAssessment {
                    line_id: line.line_id.clone(),
                    verdicts,
                    health,
                }
            })
            .collect();

        let health = OrderHealth::from_verdicts(lines.iter().flat_map(|l| l.verdicts.iter()));

        debug!(
            order_id = %order.order_id,
            category = %category,
            lines = lines.len(),
            ?health,
            "assessed order"
        );

        Ok(OrderAssessment {
            assessment_id: Uuid::new_v4(),
            order_id: order.order_id.clone(),
            category,
            targets,
            lines,
            health,
            evaluation_time: start.elapsed(),
        })
    }
}

impl Default for Assessor {
    fn default() -> Self {
        Self::new(SlaProfile::default())
    }
}
