use async_trait::async_trait;

use rolegate_core::AppResult;
use rolegate_domain::{Permission, PermissionId, Role, RoleId, RolePermission};

use super::projections::{PermissionInput, RoleInput};

/// Persistence port for permissions, roles and their assignments.
///
/// Adapters classify failures so callers can react to them:
/// - `AppError::Conflict` when a name is already taken (compared
///   case-insensitively) or when an assignment pair already exists;
/// - `AppError::NotFound` when an id does not exist, when an assignment pair
///   to delete is absent, or when an assignment references a missing entity;
/// - `AppError::Internal` for everything else.
#[async_trait]
pub trait RbacRepository: Send + Sync {
    /// Lists permissions ordered by name.
    async fn list_permissions(&self) -> AppResult<Vec<Permission>>;

    /// Creates a permission.
    async fn create_permission(&self, input: PermissionInput) -> AppResult<Permission>;

    /// Replaces name and description of a permission.
    async fn update_permission(
        &self,
        permission_id: PermissionId,
        input: PermissionInput,
    ) -> AppResult<Permission>;

    /// Deletes a permission and every assignment that references it.
    async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<()>;

    /// Lists roles ordered by name.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Creates a role.
    async fn create_role(&self, input: RoleInput) -> AppResult<Role>;

    /// Renames a role.
    async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role>;

    /// Deletes a role and every assignment that references it.
    async fn delete_role(&self, role_id: RoleId) -> AppResult<()>;

    /// Inserts a role-permission pair.
    async fn insert_assignment(&self, assignment: RolePermission) -> AppResult<()>;

    /// Deletes a role-permission pair.
    async fn delete_assignment(&self, assignment: RolePermission) -> AppResult<()>;

    /// Lists every role-permission pair.
    async fn list_assignments(&self) -> AppResult<Vec<RolePermission>>;
}
