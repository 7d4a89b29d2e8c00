use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::api_response::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverRequest};
use crate::models::driver::Driver;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/:id", put(update_driver).delete(delete_driver))
}

async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Driver>>>, AppError> {
    let controller = DriverController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_driver(
    State(state): State<AppState>,
    request: Result<Json<CreateDriverRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Driver>>), AppError> {
    let Json(request) = request?;
    let controller = DriverController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_driver(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<UpdateDriverRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Driver>>, AppError> {
    let Path(id) = id?;
    let Json(request) = request?;
    let controller = DriverController::new(state.store.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_driver(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Path(id) = id?;
    let controller = DriverController::new(state.store.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
