use axum::Json;
use axum::extract::State;

use crate::dto::RbacStatsResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn rbac_stats_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<RbacStatsResponse>> {
    let overview = state.rbac_admin_service.overview().await?;

    Ok(Json(RbacStatsResponse::from(overview)))
}
