use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::catalog::JobField;
use super::domain::{CandidateForm, CandidateProfile, PredictionResult};
use super::engine::PredictionEngine;
use super::validation::{validate, ValidationError};

/// Facade composing validation and the prediction engine.
#[derive(Debug, Clone)]
pub struct SalaryPredictor {
    engine: Arc<PredictionEngine>,
}

/// A priced candidate along with the catalog entry that matched, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    pub profile: CandidateProfile,
    pub matched_field: Option<JobField>,
    pub result: PredictionResult,
}

impl SalaryPredictor {
    pub fn new(engine: PredictionEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn standard() -> Self {
        Self::new(PredictionEngine::standard())
    }

    pub fn engine(&self) -> &PredictionEngine {
        &self.engine
    }

    pub fn predict(&self, form: &CandidateForm) -> Result<PredictionOutcome, ValidationError> {
        let profile = validate(form).map_err(|err| {
            debug!(kind = err.kind(), error = %err, "candidate rejected");
            err
        })?;

        Ok(self.price(profile))
    }

    /// Price an already validated profile.
    pub fn price(&self, profile: CandidateProfile) -> PredictionOutcome {
        let lookup = self.engine.resolve_field(&profile.job_field);
        if !lookup.is_recognized() {
            warn!(
                job_field = %profile.job_field,
                base_rate = lookup.base_rate,
                "unrecognized job field; using default base rate"
            );
        }

        let result = self.engine.predict(&profile);
        debug!(
            job_field = %profile.job_field,
            experience_years = profile.experience_years,
            avg_salary = result.avg_salary,
            demand = result.market_demand.label(),
            "salary predicted"
        );

        PredictionOutcome {
            matched_field: lookup.field,
            profile,
            result,
        }
    }
}

impl Default for SalaryPredictor {
    fn default() -> Self {
        Self::standard()
    }
}
