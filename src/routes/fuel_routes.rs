use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::fuel_controller::FuelController;
use crate::dto::api_response::ApiResponse;
use crate::dto::fuel_dto::FuelRecordRequest;
use crate::models::fuel::{FuelRecord, FuelRecordView};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fuel_records).post(create_fuel_record))
        .route("/:id", put(update_fuel_record).delete(delete_fuel_record))
}

async fn list_fuel_records(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FuelRecordView>>>, AppError> {
    let controller = FuelController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_fuel_record(
    State(state): State<AppState>,
    request: Result<Json<FuelRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<FuelRecord>>), AppError> {
    let Json(request) = request?;
    let controller = FuelController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_fuel_record(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<FuelRecordRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<FuelRecord>>, AppError> {
    let Path(id) = id?;
    let Json(request) = request?;
    let controller = FuelController::new(state.store.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_fuel_record(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Path(id) = id?;
    let controller = FuelController::new(state.store.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
