use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rolegate_application::CommandError;
use rolegate_core::AppError;
use serde::Serialize;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    kind: Option<String>,
    message: String,
}

/// HTTP API error wrapper around application and command errors.
#[derive(Debug)]
pub enum ApiError {
    App(AppError),
    Command(CommandError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::App(error) | Self::Command(CommandError::Store(error)) => app_status(error),
            Self::Command(CommandError::NotUnderstood) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Command(
                CommandError::RoleNotFound { .. } | CommandError::PermissionNotFound { .. },
            ) => StatusCode::NOT_FOUND,
            Self::Command(CommandError::DuplicateName { .. }) => StatusCode::CONFLICT,
        }
    }

    fn payload(&self) -> ErrorResponse {
        match self {
            Self::App(error) => ErrorResponse {
                kind: None,
                message: error.to_string(),
            },
            Self::Command(error) => ErrorResponse {
                kind: Some(error.kind().to_owned()),
                message: error.to_string(),
            },
        }
    }
}

fn app_status(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Conflict(_) => StatusCode::CONFLICT,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self::App(value)
    }
}

impl From<CommandError> for ApiError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.payload())).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use rolegate_application::CommandError;
    use rolegate_core::AppError;

    use super::ApiError;

    fn status_of(error: impl Into<ApiError>) -> StatusCode {
        error.into().into_response().status()
    }

    #[test]
    fn command_errors_map_to_http_statuses() {
        assert_eq!(
            status_of(CommandError::NotUnderstood),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(CommandError::RoleNotFound {
                name: "Ghost".to_owned()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CommandError::DuplicateName {
                entity: "role",
                name: "Ops".to_owned()
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(CommandError::Store(AppError::Internal("boom".to_owned()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn app_errors_map_to_http_statuses() {
        assert_eq!(
            status_of(AppError::Validation("bad".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Conflict("taken".to_owned())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn command_payload_carries_kind() {
        let payload = ApiError::from(CommandError::PermissionNotFound {
            name: "Phantom".to_owned(),
        })
        .payload();

        assert_eq!(payload.kind.as_deref(), Some("permission_not_found"));
        assert_eq!(payload.message, "permission \"Phantom\" not found");
    }
}
