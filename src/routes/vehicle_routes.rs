use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", put(update_vehicle).delete(delete_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Vehicle>>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    request: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Vehicle>>), AppError> {
    let Json(request) = request?;
    let controller = VehicleController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<UpdateVehicleRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let Path(id) = id?;
    let Json(request) = request?;
    let controller = VehicleController::new(state.store.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Path(id) = id?;
    let controller = VehicleController::new(state.store.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
