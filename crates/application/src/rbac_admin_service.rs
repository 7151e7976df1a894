use std::collections::BTreeSet;
use std::sync::Arc;

use rolegate_core::{AppError, AppResult};
use rolegate_domain::{Permission, PermissionId, Role, RoleId, RolePermission};
use tracing::info;

use crate::command_service::{grant, revoke};
use crate::rbac_ports::{
    AssignmentMatrix, PermissionInput, RbacOverview, RbacRepository, RoleInput, RoleSummary,
};

/// Application service behind the permission, role and matrix screens.
#[derive(Clone)]
pub struct RbacAdminService {
    repository: Arc<dyn RbacRepository>,
}

impl RbacAdminService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(repository: Arc<dyn RbacRepository>) -> Self {
        Self { repository }
    }

    /// Lists permissions ordered by name.
    pub async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        self.repository.list_permissions().await
    }

    /// Creates a permission.
    pub async fn create_permission(&self, input: PermissionInput) -> AppResult<Permission> {
        let permission = self.repository.create_permission(input).await?;
        info!(permission_id = %permission.id(), name = %permission.name(), "permission created");
        Ok(permission)
    }

    /// Edits a permission.
    pub async fn update_permission(
        &self,
        permission_id: PermissionId,
        input: PermissionInput,
    ) -> AppResult<Permission> {
        let permission = self
            .repository
            .update_permission(permission_id, input)
            .await?;
        info!(permission_id = %permission_id, name = %permission.name(), "permission updated");
        Ok(permission)
    }

    /// Deletes a permission and its grants.
    pub async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<()> {
        self.repository.delete_permission(permission_id).await?;
        info!(permission_id = %permission_id, "permission deleted");
        Ok(())
    }

    /// Lists roles ordered by name.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.repository.list_roles().await
    }

    /// Lists roles ordered by name, each with its permission count.
    pub async fn list_role_summaries(&self) -> AppResult<Vec<RoleSummary>> {
        Ok(self.assignment_matrix().await?.role_summaries())
    }

    /// Returns role, permission and assignment totals for the dashboard.
    pub async fn overview(&self) -> AppResult<RbacOverview> {
        Ok(self.assignment_matrix().await?.overview())
    }

    /// Creates a role.
    pub async fn create_role(&self, input: RoleInput) -> AppResult<Role> {
        let role = self.repository.create_role(input).await?;
        info!(role_id = %role.id(), name = %role.name(), "role created");
        Ok(role)
    }

    /// Renames a role.
    pub async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role> {
        let role = self.repository.update_role(role_id, input).await?;
        info!(role_id = %role_id, name = %role.name(), "role updated");
        Ok(role)
    }

    /// Deletes a role and its grants.
    pub async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        self.repository.delete_role(role_id).await?;
        info!(role_id = %role_id, "role deleted");
        Ok(())
    }

    /// Returns the role × permission grid.
    pub async fn assignment_matrix(&self) -> AppResult<AssignmentMatrix> {
        let roles = self.repository.list_roles().await?;
        let permissions = self.repository.list_permissions().await?;
        let assignments: BTreeSet<RolePermission> = self
            .repository
            .list_assignments()
            .await?
            .into_iter()
            .collect();

        Ok(AssignmentMatrix {
            roles,
            permissions,
            assignments,
        })
    }

    /// Sets one matrix cell. Returns false when the cell already had the
    /// requested state.
    pub async fn set_assignment(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
        assigned: bool,
    ) -> AppResult<bool> {
        let assignment = RolePermission::new(role_id, permission_id);
        let changed = if assigned {
            grant(self.repository.as_ref(), assignment).await?
        } else {
            revoke(self.repository.as_ref(), assignment).await?
        };

        info!(
            role_id = %role_id,
            permission_id = %permission_id,
            assigned,
            changed,
            "assignment updated"
        );
        Ok(changed)
    }

    /// Returns the permissions granted to a role.
    pub async fn permissions_for_role(&self, role_id: RoleId) -> AppResult<Vec<Permission>> {
        let matrix = self.assignment_matrix().await?;
        if !matrix.roles.iter().any(|role| role.id() == role_id) {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }

        Ok(matrix
            .permissions_for_role(role_id)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Returns the roles holding a permission.
    pub async fn roles_for_permission(&self, permission_id: PermissionId) -> AppResult<Vec<Role>> {
        let matrix = self.assignment_matrix().await?;
        if !matrix
            .permissions
            .iter()
            .any(|permission| permission.id() == permission_id)
        {
            return Err(AppError::NotFound(format!(
                "permission '{permission_id}' was not found"
            )));
        }

        Ok(matrix
            .roles_for_permission(permission_id)
            .into_iter()
            .cloned()
            .collect())
    }
}
