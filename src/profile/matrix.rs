//! Per-category target rows of the SLA matrix

use crate::order::Stage;
use serde::{Deserialize, Serialize};

/// Target minutes for every fulfillment stage of one category
///
/// `stage_complete` is optional in profile documents; when absent it
/// resolves to the `stage` value, since the two are the same checkpoint in
/// most deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageTargets {
    /// Target minutes for the pick stage
    pub pick: u32,
    /// Target minutes for the stage stage
    pub stage: u32,
    /// Target minutes for stage-complete; defaults to `stage`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_complete: Option<u32>,
    /// Target minutes for the pack stage
    pub pack: u32,
    /// Target minutes for the ship stage
    pub ship: u32,
}

impl StageTargets {
    /// Construct a row from the four explicit stage values
    pub const fn new(pick: u32, stage: u32, pack: u32, ship: u32) -> Self {
        Self {
            pick,
            stage,
            stage_complete: None,
            pack,
            ship,
        }
    }

    /// Set an explicit stage-complete target
    pub const fn with_stage_complete(mut self, minutes: u32) -> Self {
        self.stage_complete = Some(minutes);
        self
    }

    /// Target minutes for one stage
    pub fn get(&self, stage: Stage) -> u32 {
        match stage {
            Stage::Pick => self.pick,
            Stage::Stage => self.stage,
            Stage::StageComplete => self.stage_complete.unwrap_or(self.stage),
            Stage::Pack => self.pack,
            Stage::Ship => self.ship,
        }
    }

    /// The same row with `stage_complete` made explicit
    pub fn normalized(&self) -> Self {
        Self {
            stage_complete: Some(self.get(Stage::StageComplete)),
            ..*self
        }
    }
}
