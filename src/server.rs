use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use log::{error, info};
use serde::Serialize;

use crate::calendar;
use crate::config::ServerConfig;
use crate::data::{
    CalendarRequest, CalendarRow, ConflictReport, Room, SchedulingInput, SchedulingOutput,
    SlotConfig, default_rooms,
};
use crate::solver;

async fn solve_handler(
    Json(input): Json<SchedulingInput>,
) -> Result<Json<SchedulingOutput>, (StatusCode, String)> {
    match solver::solve(&input) {
        Ok(output) => Ok(Json(output)),
        Err(e) => Err((StatusCode::BAD_REQUEST, e.to_string())),
    }
}

async fn conflicts_handler(
    Json(input): Json<SchedulingInput>,
) -> Result<Json<ConflictReport>, (StatusCode, String)> {
    solver::conflicts(&input)
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

async fn calendar_handler(
    Json(request): Json<CalendarRequest>,
) -> Result<Json<Vec<CalendarRow>>, (StatusCode, String)> {
    calendar::calendar(&request)
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

#[derive(Debug, Serialize)]
struct Defaults {
    slots: SlotConfig,
    rooms: Vec<Room>,
}

async fn defaults_handler() -> Json<Defaults> {
    Json(Defaults {
        slots: SlotConfig::default(),
        rooms: default_rooms(),
    })
}

pub fn router() -> Router {
    Router::new()
        .route("/v1/schedule/solve", post(solve_handler))
        .route("/v1/schedule/conflicts", post(conflicts_handler))
        .route("/v1/schedule/calendar", post(calendar_handler))
        .route("/v1/schedule/defaults", get(defaults_handler))
}

pub async fn run_server(config: &ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, router()).await.inspect_err(|e| {
        error!("Server stopped: {e}");
    })
}
