use crate::infra::{AppState, CatalogView};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use career_fit::assessment::{Answer, AnswerSheet, AssessmentEngine, AssessmentResult};
use career_fit::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) answers: Vec<Answer>,
    #[serde(default)]
    pub(crate) completion_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) assessed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) result: AssessmentResult,
}

pub(crate) fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_endpoint))
        .route("/api/v1/assessment/results", post(results_endpoint))
        .with_state(engine)
}

pub(crate) fn with_assessment_routes(engine: Arc<AssessmentEngine>) -> Router {
    assessment_router(engine)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint(
    State(engine): State<Arc<AssessmentEngine>>,
) -> Json<CatalogView> {
    Json(CatalogView::from_catalog(engine.catalog()))
}

pub(crate) async fn results_endpoint(
    State(engine): State<Arc<AssessmentEngine>>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest {
        answers,
        completion_time_ms,
    } = payload;

    for answer in &answers {
        engine.catalog().validate_answer(answer)?;
    }

    let sheet: AnswerSheet = answers.into_iter().collect();
    let result = engine.generate_result(
        sheet.as_slice(),
        Duration::from_millis(completion_time_ms),
    );

    info!(
        answered = sheet.len(),
        overall = result.scores.overall,
        verdict = result.recommendation.verdict.label(),
        "assessment scored"
    );

    Ok(Json(AssessmentResponse {
        assessed_at: Utc::now(),
        result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use career_fit::assessment::QuestionCatalog;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn engine() -> Arc<AssessmentEngine> {
        Arc::new(AssessmentEngine::new(QuestionCatalog::standard()))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(recorder.handle()),
        };

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state
            .readiness
            .store(true, std::sync::atomic::Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn questions_route_lists_catalog() {
        let request = Request::builder()
            .uri("/api/v1/assessment/questions")
            .body(Body::empty())
            .expect("request builds");

        let response = assessment_router(engine())
            .oneshot(request)
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(14));
        assert_eq!(body["sections"].as_array().map(Vec::len), Some(11));
        assert_eq!(body["questions"][0]["id"], "psych_interest_1");
        assert_eq!(body["sections"][0]["question_count"], 3);
        assert_eq!(body["sections"][0]["category"], "Psychometric Fit");
    }

    #[tokio::test]
    async fn results_route_scores_submitted_answers() {
        let request = post_json(
            "/api/v1/assessment/results",
            json!({
                "answers": [
                    { "question_id": "psych_interest_1", "value": 5 },
                    { "question_id": "tech_logic_1", "value": "400" },
                    { "question_id": "tech_logic_1", "value": "200" }
                ],
                "completion_time_ms": 90000
            }),
        );

        let response = assessment_router(engine())
            .oneshot(request)
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["assessed_at"].is_string());
        assert_eq!(body["completion_time_ms"], 90000);
        assert_eq!(body["scores"]["technical"]["aptitude"], 0);
        assert_eq!(body["recommendation"]["verdict"], "negative");
        assert!(body["personalized_insights"]
            .as_str()
            .is_some_and(|text| !text.is_empty()));
    }

    #[tokio::test]
    async fn results_route_rejects_unknown_question() {
        let request = post_json(
            "/api/v1/assessment/results",
            json!({ "answers": [{ "question_id": "nope", "value": 3 }] }),
        );

        let response = assessment_router(engine())
            .oneshot(request)
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid answer: unknown question 'nope'");
    }

    #[tokio::test]
    async fn results_route_rejects_out_of_range_rating() {
        let request = post_json(
            "/api/v1/assessment/results",
            json!({ "answers": [{ "question_id": "psych_interest_1", "value": 9 }] }),
        );

        let response = assessment_router(engine())
            .oneshot(request)
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
