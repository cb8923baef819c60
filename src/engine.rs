//! Core SLA engine implementation

use crate::assess::Assessor;
use crate::error::Result;
use crate::order::OrderRecord;
use crate::profile::{profile_from_yaml, SlaProfile};
use crate::verdict::OrderAssessment;
use crate::SlaEngineBuilder;
use std::sync::Arc;
use tracing::info;

/// The main SLA assessment engine
///
/// Owns an immutable [`Assessor`] built from the configured profile. Cheap
/// to clone and safe to share across workers.
#[derive(Debug, Clone)]
pub struct SlaEngine {
    /// The shared assessor
    assessor: Arc<Assessor>,
    /// Engine configuration
    pub config: SlaEngineBuilder,
}

impl SlaEngine {
    /// Create a new SLA engine from a builder configuration
    ///
    /// Loads the profile document from disk when a path is configured,
    /// otherwise falls back to the built-in matrix. A cutoff-hour override
    /// from the builder is applied on top of whatever profile was loaded.
    pub async fn new(builder: SlaEngineBuilder) -> Result<Self> {
        let mut profile = match &builder.profile_path {
            Some(path) => {
                let bytes = tokio::fs::read(path).await?;
                let profile = profile_from_yaml(&bytes)?;
                info!(
                    path = %path.display(),
                    categories = profile.categories.len(),
                    cutoff = profile.cutoff.is_some(),
                    "loaded SLA profile"
                );
                profile
            }
            None => SlaProfile::builtin().clone(),
        };

        if let Some(hour) = builder.cutoff_hour {
            builder.apply_cutoff_hour(&mut profile, hour)?;
        }

        Ok(Self {
            assessor: Arc::new(Assessor::new(profile)),
            config: builder,
        })
    }

    /// The assessor backing this engine
    pub fn assessor(&self) -> &Assessor {
        &self.assessor
    }

    /// Assess a single order
    pub fn assess(&self, order: &OrderRecord) -> Result<OrderAssessment> {
        self.assessor.assess(order)
    }
}
