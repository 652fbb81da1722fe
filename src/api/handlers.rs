//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::{info, warn};

use super::AppState;
use super::types::{ErrorResponse, RegionEntry};
use crate::error::EstimateError;
use crate::io::export::{FILE_NAME, MIME_TYPE, to_csv_string};
use crate::model::{Estimate, Inputs};
use crate::region::REGIONS;
use crate::report::EstimateReport;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Unwraps the JSON body, reporting malformed or unknown fields as 400.
fn inputs_from(body: Result<Json<Inputs>, JsonRejection>) -> Result<Inputs, ApiError> {
    body.map(|Json(inputs)| inputs).map_err(|rejection| {
        let message = rejection.body_text();
        warn!(error = %message, "rejected request body");
        error(StatusCode::BAD_REQUEST, message)
    })
}

/// Validates the inputs and runs the estimator.
fn evaluate(state: &AppState, inputs: &Inputs) -> Result<Estimate, ApiError> {
    inputs
        .validate()
        .and_then(|()| state.estimator.evaluate(inputs))
        .map_err(|e: EstimateError| {
            warn!(error = %e, "rejected request");
            error(StatusCode::BAD_REQUEST, e.to_string())
        })
}

/// Returns the region yield table in display order.
///
/// `GET /regions` → 200 + `Vec<RegionEntry>` JSON
pub async fn get_regions() -> Json<Vec<RegionEntry>> {
    Json(REGIONS.iter().map(RegionEntry::from).collect())
}

/// Computes an estimate with its metrics and chart.
///
/// `POST /estimate` + `Inputs` JSON → 200 + `EstimateReport` JSON
/// Malformed or invalid inputs → 400 + `ErrorResponse`
pub async fn post_estimate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Inputs>, JsonRejection>,
) -> Result<Json<EstimateReport>, ApiError> {
    let inputs = inputs_from(body)?;
    let estimate = evaluate(&state, &inputs)?;
    info!(region = %inputs.region, "estimate served");
    Ok(Json(EstimateReport::new(inputs, estimate)))
}

/// Computes an estimate and returns it as a downloadable CSV report.
///
/// `POST /report.csv` + `Inputs` JSON → 200 + `text/csv` attachment
/// Malformed or invalid inputs → 400 + `ErrorResponse`
pub async fn post_report_csv(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Inputs>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let inputs = inputs_from(body)?;
    let estimate = evaluate(&state, &inputs)?;
    let body = to_csv_string(&estimate)
        .map_err(|e| error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    info!(region = %inputs.region, "report served");
    Ok((
        [
            (header::CONTENT_TYPE, MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{FILE_NAME}\""),
            ),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::model::Estimator;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState {
            estimator: Estimator::default(),
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn regions_returns_table() {
        let app = router(make_test_state());

        let req = Request::builder()
            .uri("/regions")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.len(), 19);
        assert_eq!(json[0]["name"], "Andalucía");
        assert_eq!(json[0]["yield_kwh_per_kwp"], 1750.0);
    }

    #[tokio::test]
    async fn estimate_returns_report() {
        let app = router(make_test_state());

        let resp = app
            .oneshot(post_json(
                "/estimate",
                r#"{"mode": "eur", "value": 60, "region": "Cataluña"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let annual = json["estimate"]["annual_consumption_kwh"].as_f64().unwrap();
        assert!((annual - 3600.0).abs() < 1e-6);
        assert_eq!(json["metrics"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["chart"]["bars"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["inputs"]["region"], "Cataluña");
    }

    #[tokio::test]
    async fn zero_consumption_has_null_payback() {
        let app = router(make_test_state());

        let resp = app
            .oneshot(post_json("/estimate", r#"{"value": 0}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["estimate"]["payback_years"].is_null());
        assert_eq!(json["estimate"]["installed_kwp"], 0.5);
    }

    #[tokio::test]
    async fn unknown_region_returns_400() {
        let app = router(make_test_state());

        let resp = app
            .oneshot(post_json("/estimate", r#"{"region": "Atlantis"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("Atlantis"));
    }

    #[tokio::test]
    async fn out_of_range_area_returns_400() {
        let app = router(make_test_state());

        let resp = app
            .oneshot(post_json("/estimate", r#"{"area_m2": 5000}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn undecodable_body_returns_400_json() {
        for body in [
            r#"{"housing": "castle"}"#,
            r#"{"occupants": -1}"#,
            r#"{"garage": true}"#,
            "not json",
        ] {
            let resp = router(make_test_state())
                .oneshot(post_json("/estimate", body))
                .await
                .unwrap();

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(
                resp.headers()[header::CONTENT_TYPE].to_str().unwrap(),
                "application/json"
            );
            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
                .await
                .unwrap();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert!(json["error"].is_string(), "{body}");
        }
    }

    #[tokio::test]
    async fn overflowing_bill_returns_400() {
        let app = router(make_test_state());

        let resp = app
            .oneshot(post_json("/report.csv", r#"{"mode": "eur", "value": 1e308}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn report_csv_is_attachment() {
        let app = router(make_test_state());

        let resp = app
            .oneshot(post_json("/report.csv", r#"{"mode": "kwh", "value": 300}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "text/csv"
        );
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION].to_str().unwrap(),
            "attachment; filename=\"informe.csv\""
        );

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("kpi,valor\n"));
        assert_eq!(text.lines().count(), 7);
    }
}
