use axum::response::Response;
use serde_json::Value;

use crate::config::IntakeConfig;
use crate::prediction::domain::{CandidateForm, CandidateProfile};
use crate::prediction::engine::PredictionEngine;
use crate::prediction::service::SalaryPredictor;

pub(super) fn reference_form() -> CandidateForm {
    CandidateForm::new("25", "2", "Data Science", "ML Engineer")
}

pub(super) fn profile(age: u32, experience_years: u32, job_field: &str) -> CandidateProfile {
    CandidateProfile {
        age,
        experience_years,
        job_field: job_field.to_string(),
        job_title: "Engineer".to_string(),
    }
}

pub(super) fn engine() -> PredictionEngine {
    PredictionEngine::standard()
}

pub(super) fn predictor() -> SalaryPredictor {
    SalaryPredictor::standard()
}

pub(super) fn router_with_limit(max_batch_rows: usize) -> axum::Router {
    crate::prediction::prediction_router(predictor(), IntakeConfig { max_batch_rows })
}

pub(super) fn router() -> axum::Router {
    crate::prediction::prediction_router(predictor(), IntakeConfig::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
