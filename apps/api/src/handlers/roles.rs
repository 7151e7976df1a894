use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rolegate_application::RoleInput;
use rolegate_core::EntityName;
use rolegate_domain::RoleId;

use crate::dto::{PermissionResponse, RoleResponse, RoleSummaryResponse, SaveRoleRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoleSummaryResponse>>> {
    let roles = state
        .rbac_admin_service
        .list_role_summaries()
        .await?
        .into_iter()
        .map(RoleSummaryResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state
        .rbac_admin_service
        .create_role(RoleInput {
            name: EntityName::new(payload.name)?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
    Json(payload): Json<SaveRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state
        .rbac_admin_service
        .update_role(
            role_id.parse::<RoleId>()?,
            RoleInput {
                name: EntityName::new(payload.name)?,
            },
        )
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .rbac_admin_service
        .delete_role(role_id.parse::<RoleId>()?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn role_permissions_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<Json<Vec<PermissionResponse>>> {
    let permissions = state
        .rbac_admin_service
        .permissions_for_role(role_id.parse::<RoleId>()?)
        .await?
        .into_iter()
        .map(PermissionResponse::from)
        .collect();

    Ok(Json(permissions))
}
