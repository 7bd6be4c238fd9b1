use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::json;

use crate::{
    PipelineError, PipelineConfig, Schedule, TaskRecord,
    pipeline,
    render,
};

/// One dashboard session: the pipeline config it was started with and the
/// most recent reconciled table. Reloading swaps the whole table at once so
/// a viewer never sees a half-processed schedule.
pub struct Dashboard {
    config: PipelineConfig,
    schedule: Schedule,
}

impl Dashboard {
    pub fn new(config: PipelineConfig, schedule: Schedule) -> Self {
        Self { config, schedule }
    }
}

#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<RwLock<Dashboard>>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
        }
    }

    fn dashboard(&self) -> Arc<RwLock<Dashboard>> {
        self.dashboard.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    Invalid(String),
    Internal(String),
}

impl From<PipelineError> for ApiError {
    fn from(value: PipelineError) -> Self {
        match value {
            PipelineError::DataFrame(err) => ApiError::Internal(err.to_string()),
            other => ApiError::Invalid(other.to_string()),
        }
    }
}

impl From<polars::prelude::PolarsError> for ApiError {
    fn from(value: polars::prelude::PolarsError) -> Self {
        ApiError::Internal(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_schedule",
                    message,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            ApiError::Internal(message) => {
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReloadSummary {
    pub rows: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/health", get(health))
        .route("/tasks", get(list_tasks))
        .route("/reload", post(reload))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, dashboard: Dashboard) -> std::io::Result<()> {
    let state = AppState::new(dashboard);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let dashboard = state.dashboard();
    let page = {
        let guard = dashboard.read();
        let tasks = guard.schedule.tasks()?;
        render::render_page(&tasks, &guard.config.chart)
    };
    Ok(Html(page))
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskRecord>>, ApiError> {
    let dashboard = state.dashboard();
    let tasks = {
        let guard = dashboard.read();
        guard.schedule.tasks()?
    };
    Ok(Json(tasks))
}

async fn reload(State(state): State<AppState>) -> Result<Json<ReloadSummary>, ApiError> {
    let dashboard = state.dashboard();
    let config = {
        let guard = dashboard.read();
        guard.config.clone()
    };
    // Reconcile outside the lock; swap in only a fully built table.
    let schedule = pipeline::run(&config)?;
    let rows = schedule.height();
    {
        let mut guard = dashboard.write();
        guard.schedule = schedule;
    }
    Ok(Json(ReloadSummary { rows }))
}
