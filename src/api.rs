//! HTTP surface: request parsing, routing and error responses.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::{GridError, ParamError};
use crate::io::export::trajectory_csv_string;
use crate::math::ode::{Method, UnknownMethod};
use crate::simulation::{predict, simulate, Prediction, SimulationParams};

/// Request fields, in the order they are checked for presence.
pub const REQUIRED_PARAMS: [&str; 6] = [
    "P0_initial",
    "t_start",
    "t_end",
    "delta_t",
    "r_growth",
    "K_carrying_capacity",
];

#[derive(Debug, Clone)]
pub struct AppState {
    pub max_grid_points: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/predict_population", post(predict_population))
        .route("/predict_population/export/:method", post(export_population))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),

    #[error("simulation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("export failed: {0:#}")]
    Export(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Param(_) | ApiError::Grid(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownMethod(_) => StatusCode::NOT_FOUND,
            ApiError::Join(_) | ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Accept JSON numbers and strings that hold a number; reject everything else.
fn coerce_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Turn a request object into simulation parameters.
///
/// Every field is checked for presence before any value is converted, so a
/// request with both a missing and a malformed field reports the missing one.
pub fn parse_params(body: &Map<String, Value>) -> Result<SimulationParams, ParamError> {
    if let Some(missing) = REQUIRED_PARAMS.iter().find(|name| !body.contains_key(**name)) {
        return Err(ParamError::MissingParameter(*missing));
    }

    let num = |field: &'static str| -> Result<f64, ParamError> {
        body.get(field)
            .and_then(coerce_number)
            .ok_or(ParamError::InvalidType { field })
    };

    Ok(SimulationParams {
        p0: num("P0_initial")?,
        t_start: num("t_start")?,
        t_end: num("t_end")?,
        dt: num("delta_t")?,
        r: num("r_growth")?,
        k: num("K_carrying_capacity")?,
    })
}

fn params_from_body(body: Result<Json<Value>, JsonRejection>) -> Result<SimulationParams, ParamError> {
    let Json(value) = body.map_err(|e| ParamError::MalformedBody(e.body_text()))?;
    match value {
        Value::Object(map) => parse_params(&map),
        _ => Err(ParamError::MalformedBody("expected a JSON object".to_string())),
    }
}

async fn healthz() -> impl IntoResponse {
    Json(json!({"ok": true}))
}

async fn predict_population(
    State(st): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Prediction>, ApiError> {
    let params = params_from_body(body)?;
    let max_points = st.max_grid_points;

    // Integration is CPU-bound; keep it off the async workers.
    let prediction = tokio::task::spawn_blocking(move || predict(&params, max_points)).await??;

    tracing::info!(
        points = prediction.euler_method.len(),
        dt = params.dt,
        "prediction complete"
    );
    Ok(Json(prediction))
}

async fn export_population(
    State(st): State<AppState>,
    Path(method): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let method: Method = method.parse()?;
    let params = params_from_body(body)?;
    let max_points = st.max_grid_points;

    let csv = tokio::task::spawn_blocking(move || -> Result<String, ApiError> {
        let traj = simulate(&params, method, max_points)?;
        trajectory_csv_string(&traj).map_err(ApiError::Export)
    })
    .await??;

    tracing::info!(%method, bytes = csv.len(), "export complete");
    let disposition = format!("attachment; filename=\"population_data_{}.csv\"", method.key());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}
