//! End-to-end tests for the REST API, driven through the router with
//! `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use datalabs_daemon::api::rest::handlers::{
    AlertsResponse, DataQueryResponse, DeleteResponse, DesignAgentResponse, HealthCheckResponse,
    IngestResponse, MetricsResponse, PlatformQueryResponse, QueryAgentResponse, WelcomeResponse,
    PLACEHOLDER_SQL,
};
use datalabs_daemon::error::ErrorResponse;
use datalabs_daemon::storage::{PlatformStore, StorageResult};
use datalabs_daemon::{
    create_router, AppState, DaemonConfig, InMemoryStorage, MetricsExporter, StorageError,
};
use datalabs_types::{Platform, PlatformId, PlatformSpec};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

fn router_with(config: DaemonConfig) -> Router {
    let state = AppState::new(
        Arc::new(InMemoryStorage::new()),
        config.api.clone(),
        MetricsExporter::new(None).unwrap(),
    );
    create_router(state, &config)
}

/// Registry that has run out of ids: every create fails
struct ExhaustedStore;

impl PlatformStore for ExhaustedStore {
    fn create(&self, _spec: PlatformSpec) -> StorageResult<Platform> {
        Err(StorageError::SequenceExhausted)
    }

    fn list(&self) -> StorageResult<Vec<Platform>> {
        Ok(Vec::new())
    }

    fn get(&self, _id: &PlatformId) -> StorageResult<Option<Platform>> {
        Ok(None)
    }

    fn delete(&self, _id: &PlatformId) -> StorageResult<bool> {
        Ok(false)
    }
}

fn test_router() -> Router {
    router_with(DaemonConfig::default())
}

fn strict_router() -> Router {
    let mut config = DaemonConfig::default();
    config.api.validate_platform_refs = true;
    router_with(config)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json<T: DeserializeOwned>(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, T) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create_platform(app: &Router, name: &str) -> Platform {
    let (status, platform) = send_json::<Platform>(
        app,
        "POST",
        "/api/v1/platforms/",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    platform
}

#[tokio::test]
async fn lifecycle_scenario() {
    let app = test_router();

    let sales = create_platform(&app, "Sales Analytics").await;
    assert_eq!(sales.id.as_str(), "plat_1");
    assert_eq!(sales.name, "Sales Analytics");

    let marketing = create_platform(&app, "Marketing").await;
    assert_eq!(marketing.id.as_str(), "plat_2");

    let (status, deleted) =
        send_json::<DeleteResponse>(&app, "DELETE", "/api/v1/platforms/plat_1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted.message, "Platform deleted successfully");

    let (status, error) =
        send_json::<ErrorResponse>(&app, "GET", "/api/v1/platforms/plat_1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.detail, "Platform not found");

    let (status, listed) = send_json::<Vec<Platform>>(&app, "GET", "/api/v1/platforms/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id.as_str(), "plat_2");
}

#[tokio::test]
async fn create_applies_fixed_defaults() {
    let app = test_router();

    let (status, json) = send_json::<serde_json::Value>(
        &app,
        "POST",
        "/api/v1/platforms/",
        Some(serde_json::json!({
            "name": "Custom",
            "description": "wants postgres",
            "requirements": "hourly rollups",
            "config": { "database": "postgres", "replicas": 3 }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "provisioning");
    assert_eq!(json["description"], "wants postgres");
    assert_eq!(
        json["config"],
        serde_json::json!({
            "database": "clickhouse",
            "monitoring": "grafana",
            "ai_agents": ["query", "design", "support"]
        })
    );
    assert!(chrono::DateTime::parse_from_rfc3339(json["created_at"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn create_without_name_is_rejected() {
    let app = test_router();
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/platforms/",
        Some(serde_json::json!({ "description": "no name" })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn create_failure_is_internal_error() {
    let config = DaemonConfig::default();
    let state = AppState::new(
        Arc::new(ExhaustedStore),
        config.api.clone(),
        MetricsExporter::new(None).unwrap(),
    );
    let app = create_router(state, &config);

    let (status, err) = send_json::<ErrorResponse>(
        &app,
        "POST",
        "/api/v1/platforms/",
        Some(serde_json::json!({ "name": "Sales Analytics" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code, "INTERNAL_ERROR");
    assert_eq!(err.detail, "Platform id sequence exhausted");

    let (status, platforms) = send_json::<Vec<Platform>>(&app, "GET", "/api/v1/platforms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(platforms.is_empty());
}

#[tokio::test]
async fn get_returns_created_record() {
    let app = test_router();
    let created = create_platform(&app, "Ops").await;

    let (status, fetched) = send_json::<Platform>(
        &app,
        "GET",
        &format!("/api/v1/platforms/{}", created.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = test_router();
    create_platform(&app, "Ops").await;

    for uri in [
        "/api/v1/platforms/plat_9",
        "/api/v1/platforms/anything",
    ] {
        let (status, _) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");

        let (status, _) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
    }
}

#[tokio::test]
async fn list_tracks_creates_minus_deletes() {
    let app = test_router();
    for name in ["a", "b", "c"] {
        create_platform(&app, name).await;
    }
    send(&app, "DELETE", "/api/v1/platforms/plat_2", None).await;

    let (_, listed) = send_json::<Vec<Platform>>(&app, "GET", "/api/v1/platforms", None).await;
    let ids: Vec<_> = listed.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, vec!["plat_1", "plat_3"]);
}

#[tokio::test]
async fn platform_query_returns_fixed_rows() {
    let app = test_router();
    let platform = create_platform(&app, "Sales").await;

    let mut seen = Vec::new();
    for natural_query in ["revenue%20by%20day", "top%20customers", ""] {
        let (status, resp) = send_json::<PlatformQueryResponse>(
            &app,
            "POST",
            &format!("/api/v1/platforms/{}/query?natural_query={}", platform.id, natural_query),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.sql, PLACEHOLDER_SQL);
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].revenue, 1000);
        assert_eq!(resp.results[1].date, "2025-01-02");

        seen.push(resp.results);
    }

    assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn platform_query_on_missing_platform() {
    let app = test_router();
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/platforms/plat_1/query?natural_query=hello",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn agents_echo_input() {
    let app = test_router();

    let (status, query) = send_json::<QueryAgentResponse>(
        &app,
        "POST",
        "/api/v1/agents/query?query=daily%20revenue",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(query.query, "daily revenue");
    assert_eq!(query.status, "processing");
    assert_eq!(query.message, "Query agent implementation pending");

    let (status, design) = send_json::<DesignAgentResponse>(
        &app,
        "POST",
        "/api/v1/agents/design?requirements=track%20signups",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(design.requirements, "track signups");
    assert_eq!(design.status, "analyzing");
}

#[tokio::test]
async fn agent_query_requires_parameter() {
    let app = test_router();
    let (status, _) = send(&app, "POST", "/api/v1/agents/query", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn data_stubs_accept_anything() {
    let app = test_router();

    let (status, ack) = send_json::<IngestResponse>(
        &app,
        "POST",
        "/api/v1/data/ingest?platform_id=plat_404",
        Some(serde_json::json!({ "events": [{ "type": "click" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack.status, "success");

    let (status, resp) = send_json::<DataQueryResponse>(
        &app,
        "GET",
        "/api/v1/data/query?platform_id=plat_404&sql=SELEKT%20nonsense",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.sql, "SELEKT nonsense");
    assert!(resp.results.is_empty());
    assert_eq!(resp.message, "Data query implementation pending");
}

#[tokio::test]
async fn monitoring_stubs_return_zeroes() {
    let app = test_router();

    let (status, metrics) = send_json::<MetricsResponse>(
        &app,
        "GET",
        "/api/v1/monitoring/metrics?platform_id=plat_7",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(metrics.platform_id, "plat_7");
    assert_eq!(metrics.metrics.queries_per_second, 0);
    assert_eq!(metrics.metrics.avg_latency_ms, 0);
    assert_eq!(metrics.metrics.storage_usage_bytes, 0);

    let (status, alerts) = send_json::<AlertsResponse>(
        &app,
        "GET",
        "/api/v1/monitoring/alerts?platform_id=plat_7",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(alerts.alerts.is_empty());
}

#[tokio::test]
async fn strict_mode_rejects_unknown_platform_refs() {
    let app = strict_router();

    for (method, uri) in [
        ("GET", "/api/v1/monitoring/metrics?platform_id=plat_1"),
        ("GET", "/api/v1/monitoring/alerts?platform_id=plat_1"),
        ("GET", "/api/v1/data/query?platform_id=plat_1&sql=SELECT%201"),
    ] {
        let (status, _) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
    }

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/data/ingest?platform_id=plat_1",
        Some(serde_json::json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    create_platform(&app, "Now exists").await;
    let (status, _) = send(&app, "GET", "/api/v1/monitoring/alerts?platform_id=plat_1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_is_independent_of_registry() {
    let app = test_router();

    let (status, before) = send_json::<HealthCheckResponse>(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(before.status, "healthy");
    assert_eq!(before.service, "ai-data-labs-api");

    create_platform(&app, "x").await;
    let (_, after) = send_json::<HealthCheckResponse>(&app, "GET", "/health", None).await;
    assert_eq!(after.status, "healthy");
    assert_eq!(after.version, before.version);
}

#[tokio::test]
async fn root_returns_welcome() {
    let app = test_router();
    let (status, welcome) = send_json::<WelcomeResponse>(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(welcome.message, "AI Data Labs - AI-Driven Data Infrastructure");
    assert_eq!(welcome.health, "/health");
    assert_eq!(welcome.docs, "/api/docs");
}

#[tokio::test]
async fn docs_link_resolves_to_openapi_document() {
    let app = test_router();
    let (_, welcome) = send_json::<WelcomeResponse>(&app, "GET", "/", None).await;

    let (status, doc) = send_json::<serde_json::Value>(&app, "GET", &welcome.docs, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "AI Data Labs API");
    assert_eq!(
        doc["components"]["schemas"]["PlatformStatus"]["enum"],
        serde_json::json!(["provisioning"])
    );
}

#[tokio::test]
async fn metrics_endpoint_serves_prometheus_text() {
    let app = test_router();
    let resp = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}
