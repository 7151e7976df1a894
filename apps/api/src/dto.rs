use serde::Serialize;
use ts_rs::TS;

mod commands;
mod rbac;

pub use commands::{CommandRequest, CommandResponse, InterpretedCommandResponse};
pub use rbac::{
    AssignmentMatrixResponse, PermissionResponse, RbacStatsResponse, RoleResponse,
    RoleSummaryResponse, SavePermissionRequest, SaveRoleRequest, SetAssignmentRequest,
    SetAssignmentResponse,
};

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
}

#[cfg(test)]
mod tests {
    use super::{
        AssignmentMatrixResponse, CommandRequest, CommandResponse, HealthResponse,
        InterpretedCommandResponse, PermissionResponse, RbacStatsResponse, RoleResponse,
        RoleSummaryResponse, SavePermissionRequest, SaveRoleRequest, SetAssignmentRequest,
        SetAssignmentResponse,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        CommandRequest::export(&config)?;
        CommandResponse::export(&config)?;
        InterpretedCommandResponse::export(&config)?;
        SavePermissionRequest::export(&config)?;
        SaveRoleRequest::export(&config)?;
        SetAssignmentRequest::export(&config)?;
        SetAssignmentResponse::export(&config)?;
        PermissionResponse::export(&config)?;
        RoleResponse::export(&config)?;
        RoleSummaryResponse::export(&config)?;
        RbacStatsResponse::export(&config)?;
        super::rbac::AssignmentResponse::export(&config)?;
        AssignmentMatrixResponse::export(&config)?;
        ErrorResponse::export(&config)?;
        HealthResponse::export(&config)?;

        Ok(())
    }
}
