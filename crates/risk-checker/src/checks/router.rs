use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use super::catalog::Severity;
use super::evaluation::{EvaluationEngine, EvaluationOutcome, Finding, Verdict};
use super::profile::{ProfileError, ProfileSubmission};

/// Response body for a completed check, decorated with the verdict's indicator.
#[derive(Debug, Clone, Serialize)]
pub struct CheckView {
    pub verdict: Verdict,
    pub indicator: &'static str,
    pub icon: &'static str,
    pub matched: usize,
    pub rules: Vec<FindingView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FindingView {
    pub id: &'static str,
    pub severity: Severity,
    pub indicator: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub why: Vec<&'static str>,
}

impl From<Finding> for FindingView {
    fn from(finding: Finding) -> Self {
        Self {
            id: finding.id,
            severity: finding.severity,
            indicator: finding.severity.indicator(),
            title: finding.title,
            message: finding.message,
            why: finding.why,
        }
    }
}

impl From<EvaluationOutcome> for CheckView {
    fn from(outcome: EvaluationOutcome) -> Self {
        Self {
            verdict: outcome.verdict,
            indicator: outcome.verdict.indicator(),
            icon: outcome.verdict.icon(),
            matched: outcome.matched,
            rules: outcome.rules.into_iter().map(FindingView::from).collect(),
        }
    }
}

/// Router builder exposing the evaluator and the rule catalog over HTTP.
pub fn check_router(engine: EvaluationEngine<'static>) -> Router {
    Router::new()
        .route("/api/v1/checks", post(check_handler))
        .route("/api/v1/rules", get(rules_handler))
        .route("/api/v1/rules/:rule_id", get(rule_handler))
        .with_state(engine)
}

pub(crate) async fn check_handler(
    State(engine): State<EvaluationEngine<'static>>,
    body: Result<axum::Json<Value>, JsonRejection>,
) -> Response {
    let fields = match body {
        Ok(axum::Json(Value::Object(fields))) => fields,
        Ok(axum::Json(_)) => return reject_body("request body must be a JSON object"),
        Err(rejection) => return reject_body(&rejection.body_text()),
    };

    match ProfileSubmission::from_json_object(&fields).and_then(ProfileSubmission::validate) {
        Ok(profile) => {
            let view = CheckView::from(engine.evaluate(&profile));
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => reject_profile(&error),
    }
}

fn reject_profile(error: &ProfileError) -> Response {
    warn!(field = error.field(), "rejected project profile: {error}");
    let payload = json!({
        "error": error.to_string(),
        "field": error.field(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

/// Body-level failures (unparseable JSON, wrong content type) carry no field.
fn reject_body(reason: &str) -> Response {
    warn!("rejected check request body: {reason}");
    let payload = json!({
        "error": reason,
        "field": Value::Null,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

pub(crate) async fn rules_handler(State(engine): State<EvaluationEngine<'static>>) -> Response {
    let rules: Vec<FindingView> = engine
        .catalog()
        .rules()
        .iter()
        .map(|rule| FindingView::from(Finding::from(rule)))
        .collect();
    (StatusCode::OK, axum::Json(rules)).into_response()
}

pub(crate) async fn rule_handler(
    State(engine): State<EvaluationEngine<'static>>,
    Path(rule_id): Path<String>,
) -> Response {
    match engine.catalog().get(&rule_id) {
        Some(rule) => {
            let view = FindingView::from(Finding::from(rule));
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("rule {rule_id} not found"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
