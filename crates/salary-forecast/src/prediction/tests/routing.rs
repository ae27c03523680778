use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::IntakeConfig;
use crate::prediction::domain::CandidateForm;
use crate::prediction::router::{predict_handler, PredictionState};

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn predict_handler_returns_result_fields() {
    let state = PredictionState::new(predictor(), IntakeConfig::default());
    let response = predict_handler(State(state), Ok(axum::Json(reference_form()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({
            "minSalary": 897_000,
            "maxSalary": 1_495_000,
            "avgSalary": 1_196_000,
            "marketDemand": "Moderate",
            "experienceBonusPercent": 30.0,
        })
    );
}

#[tokio::test]
async fn predict_handler_rejects_minors() {
    let state = PredictionState::new(predictor(), IntakeConfig::default());
    let form = CandidateForm::new("17", "0", "Healthcare", "Intern");
    let response = predict_handler(State(state), Ok(axum::Json(form))).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "invalid_age");
    assert_eq!(payload["fields"], json!(["age"]));
}

#[tokio::test]
async fn predict_route_names_missing_fields() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/salary/predictions",
            json!({ "age": "29", "experienceYears": "5" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "missing_field");
    assert_eq!(payload["fields"], json!(["jobField", "jobTitle"]));
}

#[tokio::test]
async fn predict_route_accepts_numeric_json() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/salary/predictions",
            json!({
                "age": 34,
                "experienceYears": 6,
                "jobField": "Information Technology",
                "jobTitle": "Platform Engineer",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["marketDemand"], "High");
    assert_eq!(payload["experienceBonusPercent"], json!(90.0));
}

#[tokio::test]
async fn job_fields_route_lists_catalog() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/salary/job-fields")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let fields = payload["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 8);
    assert!(fields
        .iter()
        .any(|entry| entry["label"] == "Data Science" && entry["baseRate"] == json!(9.2)));
    assert_eq!(payload["defaultBaseRate"], json!(5.0));
}

#[tokio::test]
async fn batch_route_reports_each_row() {
    let csv = "Age,Experience,Job Field,Job Title\n25,2,Data Science,ML Engineer\n16,1,Healthcare,Volunteer\n";
    let response = router()
        .oneshot(post_json(
            "/api/v1/salary/predictions/batch",
            json!({ "csv": csv }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["summary"],
        json!({ "total": 2, "accepted": 1, "rejected": 1 })
    );
    let rows = payload["rows"].as_array().expect("rows array");
    assert_eq!(rows[0]["prediction"]["avgSalary"], 1_196_000);
    assert_eq!(rows[1]["fields"], json!(["age"]));
    assert!(rows[1]["error"]
        .as_str()
        .expect("error message")
        .contains("18 or above"));
}

#[tokio::test]
async fn batch_route_enforces_row_limit() {
    let csv = "Age,Experience,Job Field,Job Title\n25,2,Data Science,A\n26,3,Healthcare,B\n";
    let response = router_with_limit(1)
        .oneshot(post_json(
            "/api/v1/salary/predictions/batch",
            json!({ "csv": csv }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn batch_route_rejects_ragged_csv() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/salary/predictions/batch",
            json!({ "csv": "Age,Experience,Job Field,Job Title\n25\n" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn predict_route_reports_undecodable_body_as_json() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/salary/predictions",
            json!({ "age": true, "experienceYears": "2" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "invalid_body");
    assert_eq!(payload["fields"], json!([]));
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn batch_route_reports_missing_csv_as_json() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/salary/predictions/batch",
            json!({ "rows": [] }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "invalid_body");
}
