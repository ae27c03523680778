use std::io::Cursor;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::batch::{BatchError, BatchPredictor, BatchSummary};
use super::domain::{CandidateForm, PredictionResult};
use super::service::SalaryPredictor;
use super::validation::ValidationError;
use crate::config::IntakeConfig;

#[derive(Debug, Clone)]
pub(crate) struct PredictionState {
    predictor: SalaryPredictor,
    intake: IntakeConfig,
}

impl PredictionState {
    pub(crate) fn new(predictor: SalaryPredictor, intake: IntakeConfig) -> Self {
        Self { predictor, intake }
    }
}

/// Router builder exposing HTTP endpoints for salary predictions.
pub fn prediction_router(predictor: SalaryPredictor, intake: IntakeConfig) -> Router {
    let state = PredictionState::new(predictor, intake);

    Router::new()
        .route("/api/v1/salary/predictions", post(predict_handler))
        .route("/api/v1/salary/predictions/batch", post(batch_handler))
        .route("/api/v1/salary/job-fields", get(job_fields_handler))
        .with_state(state)
}

pub(crate) async fn predict_handler(
    State(state): State<PredictionState>,
    payload: Result<Json<CandidateForm>, JsonRejection>,
) -> Response {
    let Json(form) = match payload {
        Ok(form) => form,
        Err(rejection) => return body_rejection(&rejection),
    };
    match state.predictor.predict(&form) {
        Ok(outcome) => (StatusCode::OK, Json(outcome.result)).into_response(),
        Err(error) => rejection(&error).into_response(),
    }
}

fn rejection(error: &ValidationError) -> (StatusCode, Json<serde_json::Value>) {
    let fields: Vec<&'static str> = error.fields().into_iter().map(|field| field.key()).collect();
    let payload = json!({
        "error": error.to_string(),
        "kind": error.kind(),
        "fields": fields,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload))
}

// Bodies that cannot be decoded keep axum's status but use the validation error shape.
fn body_rejection(rejection: &JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
        "kind": "invalid_body",
        "fields": Vec::<&str>::new(),
    });
    (rejection.status(), Json(payload)).into_response()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobFieldEntry {
    label: &'static str,
    base_rate: f64,
}

pub(crate) async fn job_fields_handler(State(state): State<PredictionState>) -> Response {
    let catalog = state.predictor.engine().catalog();
    let fields: Vec<JobFieldEntry> = catalog
        .entries()
        .map(|(field, base_rate)| JobFieldEntry {
            label: field.label(),
            base_rate,
        })
        .collect();

    let payload = json!({
        "fields": fields,
        "defaultBaseRate": catalog.default_rate(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchRowView {
    pub(crate) line: u64,
    pub(crate) job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prediction: Option<PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) fields: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    pub(crate) summary: BatchSummary,
    pub(crate) rows: Vec<BatchRowView>,
}

pub(crate) async fn batch_handler(
    State(state): State<PredictionState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return body_rejection(&rejection),
    };
    let reader = Cursor::new(request.csv.into_bytes());
    let report = match BatchPredictor::new(&state.predictor)
        .with_max_rows(state.intake.max_batch_rows)
        .price_csv(reader)
    {
        Ok(report) => report,
        Err(err @ BatchError::TooManyRows { .. }) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::PAYLOAD_TOO_LARGE, Json(payload)).into_response();
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let summary = report.summary();
    let rows = report
        .rows
        .into_iter()
        .map(|row| match row.outcome {
            Ok(prediction) => BatchRowView {
                line: row.line,
                job_title: row.job_title,
                prediction: Some(prediction),
                error: None,
                fields: Vec::new(),
            },
            Err(error) => BatchRowView {
                line: row.line,
                job_title: row.job_title,
                prediction: None,
                error: Some(error.to_string()),
                fields: error.fields().into_iter().map(|field| field.key()).collect(),
            },
        })
        .collect();

    (StatusCode::OK, Json(BatchResponse { summary, rows })).into_response()
}
