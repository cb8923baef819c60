//! Stage evaluation: observed durations against resolved targets
//!
//! The evaluator is a pure function of its inputs. A single bad stage never
//! aborts a batch: inconsistent timestamps become an
//! [`StageOutcome::InvalidTiming`] verdict for that stage and evaluation
//! moves on.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sla_rs::evaluate::evaluate;
//! use sla_rs::order::{Stage, StageEvent};
//! use sla_rs::profile::StageTargets;
//! use sla_rs::verdict::StageOutcome;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
//! let events = [StageEvent::completed(
//!     Stage::Pick,
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//!     day.and_hms_opt(9, 1, 30).unwrap(),
//! )];
//!
//! let verdicts = evaluate(&events, &StageTargets::new(2, 2, 2, 2));
//! assert_eq!(verdicts[0].duration_seconds, Some(90));
//! assert_eq!(verdicts[0].outcome, StageOutcome::Met);
//! ```

use crate::order::StageEvent;
use crate::profile::StageTargets;
use crate::verdict::{StageOutcome, StageVerdict};
use tracing::warn;

/// Evaluate one stage event against its target minutes
///
/// `later_stage_started` tells the evaluator whether a stage after this one
/// in the lifecycle already has a start timestamp; a missing end is then an
/// integrity problem rather than work in progress.
pub fn evaluate_stage(
    event: &StageEvent,
    target_minutes: u32,
    later_stage_started: bool,
) -> StageVerdict {
    let outcome = match event.end {
        None if later_stage_started => {
            warn!(
                stage = %event.stage,
                "stage has no end timestamp but a later stage already started"
            );
            StageOutcome::InvalidTiming
        }
        None => StageOutcome::Pending,
        Some(end) if end < event.start => {
            warn!(
                stage = %event.stage,
                start = %event.start,
                end = %end,
                "stage end precedes its start"
            );
            StageOutcome::InvalidTiming
        }
        Some(end) => {
            let duration_seconds = (end - event.start).num_seconds();
            let met = duration_seconds <= i64::from(target_minutes) * 60;
            return StageVerdict {
                stage: event.stage,
                duration_seconds: Some(duration_seconds),
                target_minutes,
                outcome: if met {
                    StageOutcome::Met
                } else {
                    StageOutcome::Breached
                },
            };
        }
    };

    StageVerdict {
        stage: event.stage,
        duration_seconds: None,
        target_minutes,
        outcome,
    }
}

/// Evaluate a line's stage events against a resolved target row
///
/// Verdicts come back in lifecycle order regardless of input order. Each
/// stage is evaluated independently; exactly-at-target durations are
/// compliant.
pub fn evaluate(events: &[StageEvent], targets: &StageTargets) -> Vec<StageVerdict> {
    let latest_started = events.iter().map(|e| e.stage).max();

    let mut verdicts: Vec<StageVerdict> = events
        .iter()
        .map(|event| {
            let later_started = latest_started.is_some_and(|latest| latest > event.stage);
            evaluate_stage(event, targets.get(event.stage), later_started)
        })
        .collect();
    verdicts.sort_by_key(|v| v.stage);
    verdicts
}
