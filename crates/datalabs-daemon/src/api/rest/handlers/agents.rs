//! Agent handlers
//!
//! Neither agent is wired to a model yet; both echo their input with a
//! pending status.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query agent parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QueryAgentParams {
    /// Natural-language question
    pub query: String,
}

/// Query agent response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueryAgentResponse {
    pub query: String,
    pub status: String,
    pub message: String,
}

/// Run the query agent
#[utoipa::path(
    post,
    path = "/api/v1/agents/query",
    params(QueryAgentParams),
    responses((status = 200, description = "Query accepted", body = QueryAgentResponse)),
    tag = "agents"
)]
pub async fn query_agent(Query(params): Query<QueryAgentParams>) -> Json<QueryAgentResponse> {
    tracing::info!(query = %params.query, "Query agent request");

    Json(QueryAgentResponse {
        query: params.query,
        status: "processing".to_string(),
        message: "Query agent implementation pending".to_string(),
    })
}

/// Design agent parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DesignAgentParams {
    /// Natural-language platform requirements
    pub requirements: String,
}

/// Design agent response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DesignAgentResponse {
    pub requirements: String,
    pub status: String,
    pub message: String,
}

/// Run the platform designer agent
#[utoipa::path(
    post,
    path = "/api/v1/agents/design",
    params(DesignAgentParams),
    responses((status = 200, description = "Requirements accepted", body = DesignAgentResponse)),
    tag = "agents"
)]
pub async fn design_agent(Query(params): Query<DesignAgentParams>) -> Json<DesignAgentResponse> {
    tracing::info!(requirements = %params.requirements, "Design agent request");

    Json(DesignAgentResponse {
        requirements: params.requirements,
        status: "analyzing".to_string(),
        message: "Design agent implementation pending".to_string(),
    })
}
