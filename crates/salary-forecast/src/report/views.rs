use serde::Serialize;

use super::currency::format_inr;
use crate::prediction::PredictionOutcome;

const RECOMMENDATION: &str = "Based on current market trends, consider developing skills in \
emerging technologies to increase your earning potential by 15-25%.";

/// Display-ready rendering of a priced candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub job_title: String,
    pub job_field: String,
    pub default_rate_applied: bool,
    pub minimum: String,
    pub expected: String,
    pub maximum: String,
    pub market_demand: &'static str,
    pub experience_bonus: String,
    pub recommendation: &'static str,
}

impl PredictionView {
    pub fn from_outcome(outcome: &PredictionOutcome) -> Self {
        let result = &outcome.result;
        Self {
            job_title: outcome.profile.job_title.clone(),
            job_field: outcome.profile.job_field.clone(),
            default_rate_applied: outcome.matched_field.is_none(),
            minimum: format_inr(result.min_salary),
            expected: format_inr(result.avg_salary),
            maximum: format_inr(result.max_salary),
            market_demand: result.market_demand.label(),
            experience_bonus: format!("+{:.1}%", result.experience_bonus_percent),
            recommendation: RECOMMENDATION,
        }
    }
}
