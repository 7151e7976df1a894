use axum::Router;
use axum::routing::{get, post, put};
use rolegate_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url)?;

    let command_routes = Router::new()
        .route("/api/commands", post(handlers::commands::execute_command_handler))
        .route(
            "/api/commands/interpret",
            post(handlers::commands::interpret_command_handler),
        )
        .route(
            "/api/commands/suggestions",
            get(handlers::commands::command_suggestions_handler),
        );

    let rbac_routes = Router::new()
        .route(
            "/api/permissions",
            get(handlers::permissions::list_permissions_handler)
                .post(handlers::permissions::create_permission_handler),
        )
        .route(
            "/api/permissions/{permission_id}",
            put(handlers::permissions::update_permission_handler)
                .delete(handlers::permissions::delete_permission_handler),
        )
        .route(
            "/api/permissions/{permission_id}/roles",
            get(handlers::permissions::permission_roles_handler),
        )
        .route(
            "/api/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route(
            "/api/roles/{role_id}",
            put(handlers::roles::update_role_handler)
                .delete(handlers::roles::delete_role_handler),
        )
        .route(
            "/api/roles/{role_id}/permissions",
            get(handlers::roles::role_permissions_handler),
        )
        .route("/api/stats", get(handlers::stats::rbac_stats_handler))
        .route(
            "/api/assignments",
            get(handlers::assignments::assignment_matrix_handler)
                .put(handlers::assignments::set_assignment_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(command_routes)
        .merge(rbac_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
