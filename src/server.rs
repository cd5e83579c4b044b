use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::error;

use crate::api::scrape_results;
use crate::config::Config;
use crate::error::ScrapeError;
use crate::types::{LotteryKind, ResponseResult};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/getResults", get(get_results))
        .with_state(state)
}

#[derive(Deserialize)]
struct ResultsQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// GET /getResults?type=<LotteryType>
///
/// Each request is one fresh fetch-and-parse round trip against the source
/// site; the payload's `Status` is "OK" only when the page was reached and
/// its expected layout was found.
async fn get_results(
    State(state): State<AppState>,
    Query(query): Query<ResultsQuery>,
) -> Response {
    let Some(param) = query.kind else {
        return failure(ScrapeError::MissingType, String::new());
    };

    let Some(kind) = LotteryKind::from_param(&param) else {
        return failure(ScrapeError::UnsupportedType(param), String::new());
    };

    let url = state
        .config
        .source_url(kind)
        .unwrap_or_default()
        .to_string();

    match scrape_results(&state.client, &state.config, kind).await {
        Ok(rewards) => (
            StatusCode::OK,
            Json(ResponseResult {
                url,
                status: "OK".to_string(),
                data: rewards,
            }),
        )
            .into_response(),
        Err(err) => {
            error!(kind = kind.as_str(), "scrape failed: {err}");
            failure(err, url)
        }
    }
}

fn failure(err: ScrapeError, url: String) -> Response {
    (
        err.http_status(),
        Json(ResponseResult {
            url,
            status: err.status_tag().to_string(),
            data: Vec::new(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(AppState {
            config: Arc::new(Config::for_tests(&[])),
            client: reqwest::Client::new(),
        })
    }

    async fn send_get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_type_parameter_is_a_bad_request() {
        let (status, body) = send_get(test_router(), "/getResults").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Status"], "MISSING_TYPE");
        assert_eq!(body["Reward"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn unsupported_type_is_a_bad_request() {
        let (status, body) = send_get(test_router(), "/getResults?type=LOTTO649").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Status"], "UNSUPPORTED_TYPE");
    }

    #[tokio::test]
    async fn known_type_without_configured_url_is_reported() {
        let (status, body) = send_get(test_router(), "/getResults?type=keno").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["Status"], "MISSING_SOURCE_URL");
        assert_eq!(body["URL"], "");
    }
}
