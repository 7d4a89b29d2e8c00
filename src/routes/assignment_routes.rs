use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::assignment_controller::AssignmentController;
use crate::dto::api_response::ApiResponse;
use crate::dto::assignment_dto::CreateAssignmentRequest;
use crate::models::assignment::{Assignment, AssignmentView};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_active_assignments).post(create_assignment))
        .route("/:id/end", put(end_assignment))
}

async fn list_active_assignments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AssignmentView>>>, AppError> {
    let controller = AssignmentController::new(state.store.clone());
    let response = controller.list_active().await?;
    Ok(Json(response))
}

async fn create_assignment(
    State(state): State<AppState>,
    request: Result<Json<CreateAssignmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Assignment>>), AppError> {
    let Json(request) = request?;
    let controller = AssignmentController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn end_assignment(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<Assignment>>, AppError> {
    let Path(id) = id?;
    let controller = AssignmentController::new(state.store.clone());
    let response = controller.end(id).await?;
    Ok(Json(response))
}
