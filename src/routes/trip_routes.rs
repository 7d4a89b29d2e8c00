use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::trip_controller::TripController;
use crate::dto::api_response::ApiResponse;
use crate::dto::trip_dto::TripRequest;
use crate::models::trip::{Trip, TripView};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/:id", put(update_trip).delete(delete_trip))
}

async fn list_trips(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TripView>>>, AppError> {
    let controller = TripController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_trip(
    State(state): State<AppState>,
    request: Result<Json<TripRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Trip>>), AppError> {
    let Json(request) = request?;
    let controller = TripController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_trip(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let Path(id) = id?;
    let Json(request) = request?;
    let controller = TripController::new(state.store.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_trip(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Path(id) = id?;
    let controller = TripController::new(state.store.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
