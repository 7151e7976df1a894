use axum::Json;
use axum::extract::State;
use rolegate_domain::{PermissionId, RoleId};

use crate::dto::{AssignmentMatrixResponse, SetAssignmentRequest, SetAssignmentResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn assignment_matrix_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<AssignmentMatrixResponse>> {
    let matrix = state.rbac_admin_service.assignment_matrix().await?;

    Ok(Json(AssignmentMatrixResponse::from(matrix)))
}

pub async fn set_assignment_handler(
    State(state): State<AppState>,
    Json(payload): Json<SetAssignmentRequest>,
) -> ApiResult<Json<SetAssignmentResponse>> {
    let changed = state
        .rbac_admin_service
        .set_assignment(
            payload.role_id.parse::<RoleId>()?,
            payload.permission_id.parse::<PermissionId>()?,
            payload.assigned,
        )
        .await?;

    Ok(Json(SetAssignmentResponse { changed }))
}
