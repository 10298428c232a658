//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse, StopwatchReport};

/// Handle POST /start - Start or restart the stopwatch
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start() {
        Ok(stopwatch) => {
            info!("Start endpoint called");
            Ok(Json(ApiResponse::new("Stopwatch started".to_string(), stopwatch)))
        }
        Err(e) => {
            error!("Failed to start stopwatch: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /stop - Stop the stopwatch if it is running
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.stop() {
        Ok(stopwatch) => {
            info!("Stop endpoint called");
            let message = if stopwatch.ended_at().is_some() {
                "Stopwatch stopped"
            } else {
                "Stopwatch was not running"
            };
            Ok(Json(ApiResponse::new(message.to_string(), stopwatch)))
        }
        Err(e) => {
            error!("Failed to stop stopwatch: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Put the stopwatch back on hold
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset() {
        Ok(stopwatch) => {
            info!("Reset endpoint called");
            Ok(Json(ApiResponse::new("Stopwatch reset".to_string(), stopwatch)))
        }
        Err(e) => {
            error!("Failed to reset stopwatch: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the stopwatch and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let stopwatch = match state.current() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get stopwatch: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        stopwatch: StopwatchReport::from(stopwatch),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
