//! API request handlers

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::agent;

// Request bodies

#[derive(Debug, Deserialize, ToSchema)]
pub struct Query {
    /// Question posed to the agent
    pub question: String,
}

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct PredictResponse {
    /// Answer produced for the submitted question
    pub answer: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}

/// Answer a question
///
/// Placeholder prediction: the answer echoes the question behind a fixed prefix.
#[utoipa::path(
    post,
    path = "/predict",
    request_body = Query,
    responses(
        (status = 200, description = "Answer produced", body = PredictResponse),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Body decoded but `question` is missing or not text")
    ),
    tag = "predict"
)]
pub async fn predict(Json(query): Json<Query>) -> Json<PredictResponse> {
    Json(PredictResponse {
        answer: agent::answer(&query.question),
    })
}
