//! Order-fulfillment SLA engine
//!
//! This library is the consolidated home of the SLA logic that used to be
//! scattered across a demo pipeline's producer, consumer and seeder
//! scripts: it classifies an order into a fulfillment category, resolves
//! per-stage SLA targets for that category (including a creation-time
//! cutoff rule for one category), and evaluates observed stage durations
//! into met/breach verdicts.
//!
//! The three steps are pure, synchronous and stateless; surrounding
//! infrastructure (message consumption, persistence, dashboards) calls in
//! and persists what comes back.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sla_rs::{Assessor, OrderHealth};
//! use sla_rs::order::{OrderLine, OrderRecord, Stage, StageEvent};
//! use sla_rs::profile::SlaProfile;
//!
//! # fn example() -> anyhow::Result<()> {
//! let day = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
//! let order = OrderRecord {
//!     order_id: "ORD-10001".to_string(),
//!     customer_id: Some(10_000_000_064_356u64.into()),
//!     route_type: None,
//!     created_at: day.and_hms_opt(12, 30, 0).unwrap(),
//!     lines: vec![OrderLine {
//!         line_id: "L1".to_string(),
//!         events: vec![StageEvent::completed(
//!             Stage::Pick,
//!             day.and_hms_opt(12, 35, 0).unwrap(),
//!             day.and_hms_opt(13, 10, 0).unwrap(),
//!         )],
//!     }],
//! };
//!
//! let assessor = Assessor::new(SlaProfile::builtin().clone());
//! let assessment = assessor.assess(&order)?;
//! assert_eq!(assessment.health, OrderHealth::Met);
//! # Ok(())
//! # }
//! ```
//!
//! # Engine with an operator-supplied profile
//!
//! ```no_run
//! use sla_rs::SlaEngineBuilder;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let engine = SlaEngineBuilder::new()
//!     .with_profile_path("/etc/sla/profile.yml")
//!     .with_cutoff_hour(13)
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use assess::Assessor;
pub use classify::{classify, FulfillmentCategory};
pub use error::{Result, SlaError};
pub use evaluate::{evaluate, evaluate_stage};
pub use order::{OrderRecord, Stage, StageEvent};
pub use profile::{profile_from_yaml, SlaProfile};
pub use resolve::TargetResolver;
pub use verdict::{OrderAssessment, OrderHealth, StageOutcome, StageVerdict};

/// Boundary input types for orders and stage timelines
pub mod order;

/// Order classification into fulfillment categories
pub mod classify;

/// Error types
pub mod error;

/// SLA profile documents and their validation
pub mod profile;

/// SLA target resolution
pub mod resolve;

/// Derived verdict and assessment types
pub mod verdict;

/// Stage evaluation
pub mod evaluate;

/// Whole-order assessment
pub mod assess;

/// Core engine implementation
pub mod engine;

pub use engine::SlaEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber with default settings
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// Builder for configuring the SLA engine
#[derive(Debug, Clone, Default)]
pub struct SlaEngineBuilder {
    /// Path to an SLA profile YAML document; the built-in matrix is used
    /// when unset
    pub profile_path: Option<std::path::PathBuf>,
    /// Override for the cutoff rule's boundary hour
    pub cutoff_hour: Option<u32>,
}

impl SlaEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile document path
    pub fn with_profile_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.profile_path = Some(path.into());
        self
    }

    /// Override the cutoff rule's boundary hour
    pub fn with_cutoff_hour(mut self, hour: u32) -> Self {
        self.cutoff_hour = Some(hour);
        self
    }

    /// Build the SLA engine
    pub async fn build(self) -> Result<SlaEngine> {
        SlaEngine::new(self).await
    }

    pub(crate) fn apply_cutoff_hour(&self, profile: &mut SlaProfile, hour: u32) -> Result<()> {
        if hour >= 24 {
            return Err(SlaError::Configuration(format!(
                "cutoff hour {hour} is out of range (0-23)"
            )));
        }
        match profile.cutoff.as_mut() {
            Some(rule) => {
                rule.cutoff_hour = hour;
                Ok(())
            }
            None => Err(SlaError::Configuration(
                "cutoff hour override set but the profile has no cutoff rule".to_string(),
            )),
        }
    }
}
