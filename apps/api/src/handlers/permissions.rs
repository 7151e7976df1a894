use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rolegate_application::PermissionInput;
use rolegate_core::EntityName;
use rolegate_domain::PermissionId;

use crate::dto::{PermissionResponse, RoleResponse, SavePermissionRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_permissions_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PermissionResponse>>> {
    let permissions = state
        .rbac_admin_service
        .list_permissions()
        .await?
        .into_iter()
        .map(PermissionResponse::from)
        .collect();

    Ok(Json(permissions))
}

pub async fn create_permission_handler(
    State(state): State<AppState>,
    Json(payload): Json<SavePermissionRequest>,
) -> ApiResult<(StatusCode, Json<PermissionResponse>)> {
    let permission = state
        .rbac_admin_service
        .create_permission(permission_input(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(PermissionResponse::from(permission))))
}

pub async fn update_permission_handler(
    State(state): State<AppState>,
    Path(permission_id): Path<String>,
    Json(payload): Json<SavePermissionRequest>,
) -> ApiResult<Json<PermissionResponse>> {
    let permission = state
        .rbac_admin_service
        .update_permission(
            permission_id.parse::<PermissionId>()?,
            permission_input(payload)?,
        )
        .await?;

    Ok(Json(PermissionResponse::from(permission)))
}

pub async fn delete_permission_handler(
    State(state): State<AppState>,
    Path(permission_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .rbac_admin_service
        .delete_permission(permission_id.parse::<PermissionId>()?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn permission_roles_handler(
    State(state): State<AppState>,
    Path(permission_id): Path<String>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .rbac_admin_service
        .roles_for_permission(permission_id.parse::<PermissionId>()?)
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

fn permission_input(payload: SavePermissionRequest) -> ApiResult<PermissionInput> {
    Ok(PermissionInput {
        name: EntityName::new(payload.name)?,
        description: payload.description,
    })
}
