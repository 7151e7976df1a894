use rolegate_application::{AssignmentMatrix, RbacOverview, RoleSummary};
use rolegate_domain::{Permission, Role, RolePermission};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for permission creation and edits.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/save-permission-request.ts"
)]
pub struct SavePermissionRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Incoming payload for role creation and renames.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/save-role-request.ts"
)]
pub struct SaveRoleRequest {
    pub name: String,
}

/// Incoming payload for one matrix cell.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/set-assignment-request.ts"
)]
pub struct SetAssignmentRequest {
    pub role_id: String,
    pub permission_id: String,
    pub assigned: bool,
}

/// Whether a matrix toggle changed anything.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/set-assignment-response.ts"
)]
pub struct SetAssignmentResponse {
    pub changed: bool,
}

/// API representation of a permission.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-response.ts"
)]
pub struct PermissionResponse {
    pub permission_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<Permission> for PermissionResponse {
    fn from(permission: Permission) -> Self {
        Self {
            permission_id: permission.id().to_string(),
            name: permission.name().as_str().to_owned(),
            description: permission.description().map(ToOwned::to_owned),
            created_at: permission.created_at().to_rfc3339(),
        }
    }
}

/// API representation of a role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub role_id: String,
    pub name: String,
    pub created_at: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            role_id: role.id().to_string(),
            name: role.name().as_str().to_owned(),
            created_at: role.created_at().to_rfc3339(),
        }
    }
}

/// Roles list entry with its permission count.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-summary-response.ts"
)]
pub struct RoleSummaryResponse {
    pub role_id: String,
    pub name: String,
    pub created_at: String,
    pub permission_count: usize,
}

impl From<RoleSummary> for RoleSummaryResponse {
    fn from(summary: RoleSummary) -> Self {
        let RoleResponse {
            role_id,
            name,
            created_at,
        } = RoleResponse::from(summary.role);

        Self {
            role_id,
            name,
            created_at,
            permission_count: summary.permission_count,
        }
    }
}

/// Dashboard totals.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/rbac-stats-response.ts"
)]
pub struct RbacStatsResponse {
    pub role_count: usize,
    pub permission_count: usize,
    pub assignment_count: usize,
}

impl From<RbacOverview> for RbacStatsResponse {
    fn from(overview: RbacOverview) -> Self {
        Self {
            role_count: overview.role_count,
            permission_count: overview.permission_count,
            assignment_count: overview.assignment_count,
        }
    }
}

/// API representation of one granted pair.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assignment-response.ts"
)]
pub struct AssignmentResponse {
    pub role_id: String,
    pub permission_id: String,
}

impl From<RolePermission> for AssignmentResponse {
    fn from(assignment: RolePermission) -> Self {
        Self {
            role_id: assignment.role_id.to_string(),
            permission_id: assignment.permission_id.to_string(),
        }
    }
}

/// Roles, permissions and granted pairs for the matrix screen.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assignment-matrix-response.ts"
)]
pub struct AssignmentMatrixResponse {
    pub roles: Vec<RoleResponse>,
    pub permissions: Vec<PermissionResponse>,
    pub assignments: Vec<AssignmentResponse>,
}

impl From<AssignmentMatrix> for AssignmentMatrixResponse {
    fn from(matrix: AssignmentMatrix) -> Self {
        Self {
            roles: matrix.roles.into_iter().map(RoleResponse::from).collect(),
            permissions: matrix
                .permissions
                .into_iter()
                .map(PermissionResponse::from)
                .collect(),
            assignments: matrix
                .assignments
                .into_iter()
                .map(AssignmentResponse::from)
                .collect(),
        }
    }
}
