//! Stage evaluation semantics: boundaries, integrity problems, rollups

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use sla_rs::evaluate::{evaluate, evaluate_stage};
use sla_rs::order::{Stage, StageEvent};
use sla_rs::profile::StageTargets;
use sla_rs::verdict::{OrderHealth, StageOutcome, StageVerdict};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 14)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[test]
fn test_ninety_seconds_against_two_minutes_is_met() {
    let event = StageEvent::completed(Stage::Pick, t0(), t0() + Duration::seconds(90));
    let verdict = evaluate_stage(&event, 2, false);
    assert_eq!(
        verdict,
        StageVerdict {
            stage: Stage::Pick,
            duration_seconds: Some(90),
            target_minutes: 2,
            outcome: StageOutcome::Met,
        }
    );
}

#[test]
fn test_breach_boundary_is_inclusive() {
    // Exactly at target is compliant...
    let event = StageEvent::completed(Stage::Pick, t0(), t0() + Duration::seconds(120));
    assert_eq!(evaluate_stage(&event, 2, false).outcome, StageOutcome::Met);

    // ...one second over is not
    let event = StageEvent::completed(Stage::Pick, t0(), t0() + Duration::seconds(121));
    assert_eq!(
        evaluate_stage(&event, 2, false).outcome,
        StageOutcome::Breached
    );
}

#[test]
fn test_zero_target_breaches_any_elapsed_time() {
    // Store-fulfillment ship has a documented zero target
    let event = StageEvent::completed(Stage::Ship, t0(), t0() + Duration::seconds(1));
    assert_eq!(
        evaluate_stage(&event, 0, false).outcome,
        StageOutcome::Breached
    );

    // Instantaneous completion still meets it
    let event = StageEvent::completed(Stage::Ship, t0(), t0());
    assert_eq!(evaluate_stage(&event, 0, false).outcome, StageOutcome::Met);
}

#[test]
fn test_negative_duration_never_emitted() {
    let event = StageEvent::completed(Stage::Stage, t0(), t0() - Duration::minutes(5));
    let verdict = evaluate_stage(&event, 30, false);
    assert_eq!(verdict.outcome, StageOutcome::InvalidTiming);
    assert_eq!(verdict.duration_seconds, None);
    assert_eq!(verdict.outcome.met(), None);
}

#[test]
fn test_bad_stage_does_not_abort_the_line() {
    let events = [
        StageEvent::completed(Stage::Pick, t0(), t0() - Duration::minutes(1)),
        StageEvent::completed(
            Stage::Pack,
            t0() + Duration::minutes(10),
            t0() + Duration::minutes(15),
        ),
    ];
    let verdicts = evaluate(&events, &StageTargets::new(30, 30, 10, 10));
    assert_eq!(verdicts.len(), 2);
    assert_eq!(verdicts[0].outcome, StageOutcome::InvalidTiming);
    assert_eq!(verdicts[1].outcome, StageOutcome::Met);
}

#[test]
fn test_in_progress_stage_is_pending_not_false_verdict() {
    let events = [StageEvent::in_progress(Stage::Ship, t0())];
    let verdicts = evaluate(&events, &StageTargets::new(30, 30, 10, 10));
    assert_eq!(verdicts[0].outcome, StageOutcome::Pending);
    assert_eq!(verdicts[0].outcome.met(), None);
}

#[test]
fn test_missing_end_with_later_stage_started() {
    // Pick never closed but packing already began: integrity problem
    let events = [
        StageEvent::in_progress(Stage::Pick, t0()),
        StageEvent::in_progress(Stage::Pack, t0() + Duration::minutes(20)),
    ];
    let verdicts = evaluate(&events, &StageTargets::new(30, 30, 10, 10));
    assert_eq!(verdicts[0].outcome, StageOutcome::InvalidTiming);
    // The furthest stage itself is legitimately in progress
    assert_eq!(verdicts[1].outcome, StageOutcome::Pending);
}

#[test]
fn test_full_timeline_rollup() {
    // Timeline shaped like the dashboard seeder's "mixed" orders: pick
    // breaches, everything downstream meets
    let targets = StageTargets::new(15, 15, 10, 60);
    let pick_start = t0();
    let pick_end = pick_start + Duration::minutes(25);
    let stage_start = pick_end + Duration::minutes(3);
    let stage_end = stage_start + Duration::minutes(11);
    let pack_start = stage_end + Duration::minutes(2);
    let pack_end = pack_start + Duration::minutes(8);
    let ship = pack_end + Duration::minutes(10);

    let events = [
        StageEvent::completed(Stage::Pick, pick_start, pick_end),
        StageEvent::completed(Stage::Stage, stage_start, stage_end),
        StageEvent::completed(Stage::Pack, pack_start, pack_end),
        StageEvent::completed(Stage::Ship, pack_end, ship),
    ];

    let verdicts = evaluate(&events, &targets);
    let outcomes: Vec<StageOutcome> = verdicts.iter().map(|v| v.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            StageOutcome::Breached,
            StageOutcome::Met,
            StageOutcome::Met,
            StageOutcome::Met,
        ]
    );
    assert_eq!(OrderHealth::from_verdicts(&verdicts), OrderHealth::Breached);
}

#[test]
fn test_raw_durations_exposed_for_caller_policies() {
    // A caller layering a "moving slow" band needs the raw numbers
    let events = [StageEvent::completed(
        Stage::Pick,
        t0(),
        t0() + Duration::seconds(850),
    )];
    let verdicts = evaluate(&events, &StageTargets::new(15, 15, 10, 60));
    let v = &verdicts[0];
    assert_eq!(v.duration_seconds, Some(850));
    assert_eq!(v.target_minutes, 15);
    // 850s of a 900s budget: met, but a caller can flag it as close
    assert_eq!(v.outcome, StageOutcome::Met);
}
