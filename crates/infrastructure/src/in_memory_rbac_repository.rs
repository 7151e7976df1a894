use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use rolegate_application::{PermissionInput, RbacRepository, RoleInput};
use rolegate_core::{AppError, AppResult, EntityName};
use rolegate_domain::{Permission, PermissionId, Role, RoleId, RolePermission};

#[derive(Debug, Default)]
struct RbacState {
    permissions: HashMap<PermissionId, Permission>,
    roles: HashMap<RoleId, Role>,
    assignments: BTreeSet<RolePermission>,
}

impl RbacState {
    fn permission_name_taken(&self, name: &EntityName, except: Option<PermissionId>) -> bool {
        self.permissions.values().any(|permission| {
            Some(permission.id()) != except && permission.name().matches(name.as_str())
        })
    }

    fn role_name_taken(&self, name: &EntityName, except: Option<RoleId>) -> bool {
        self.roles
            .values()
            .any(|role| Some(role.id()) != except && role.name().matches(name.as_str()))
    }
}

/// In-memory RBAC repository used when no database is configured.
///
/// All state sits behind one lock so cascading deletes are atomic.
#[derive(Debug, Default)]
pub struct InMemoryRbacRepository {
    state: RwLock<RbacState>,
}

impl InMemoryRbacRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RbacRepository for InMemoryRbacRepository {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        let state = self.state.read().await;
        let mut permissions: Vec<Permission> = state.permissions.values().cloned().collect();
        permissions.sort_by(|left, right| by_name(left.name(), right.name()));
        Ok(permissions)
    }

    async fn create_permission(&self, input: PermissionInput) -> AppResult<Permission> {
        let mut state = self.state.write().await;
        if state.permission_name_taken(&input.name, None) {
            return Err(AppError::Conflict(format!(
                "permission '{}' already exists",
                input.name
            )));
        }

        let permission =
            Permission::new(PermissionId::new(), input.name, input.description, Utc::now());
        state
            .permissions
            .insert(permission.id(), permission.clone());
        Ok(permission)
    }

    async fn update_permission(
        &self,
        permission_id: PermissionId,
        input: PermissionInput,
    ) -> AppResult<Permission> {
        let mut state = self.state.write().await;
        let Some(created_at) = state
            .permissions
            .get(&permission_id)
            .map(Permission::created_at)
        else {
            return Err(AppError::NotFound(format!(
                "permission '{permission_id}' was not found"
            )));
        };

        if state.permission_name_taken(&input.name, Some(permission_id)) {
            return Err(AppError::Conflict(format!(
                "permission '{}' already exists",
                input.name
            )));
        }

        let permission = Permission::new(permission_id, input.name, input.description, created_at);
        state
            .permissions
            .insert(permission_id, permission.clone());
        Ok(permission)
    }

    async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<()> {
        let mut state = self.state.write().await;
        if state.permissions.remove(&permission_id).is_none() {
            return Err(AppError::NotFound(format!(
                "permission '{permission_id}' was not found"
            )));
        }

        state
            .assignments
            .retain(|assignment| assignment.permission_id != permission_id);
        Ok(())
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let state = self.state.read().await;
        let mut roles: Vec<Role> = state.roles.values().cloned().collect();
        roles.sort_by(|left, right| by_name(left.name(), right.name()));
        Ok(roles)
    }

    async fn create_role(&self, input: RoleInput) -> AppResult<Role> {
        let mut state = self.state.write().await;
        if state.role_name_taken(&input.name, None) {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                input.name
            )));
        }

        let role = Role::new(RoleId::new(), input.name, Utc::now());
        state.roles.insert(role.id(), role.clone());
        Ok(role)
    }

    async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role> {
        let mut state = self.state.write().await;
        let Some(created_at) = state.roles.get(&role_id).map(Role::created_at) else {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        };

        if state.role_name_taken(&input.name, Some(role_id)) {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                input.name
            )));
        }

        let role = Role::new(role_id, input.name, created_at);
        state.roles.insert(role_id, role.clone());
        Ok(role)
    }

    async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        let mut state = self.state.write().await;
        if state.roles.remove(&role_id).is_none() {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }

        state
            .assignments
            .retain(|assignment| assignment.role_id != role_id);
        Ok(())
    }

    async fn insert_assignment(&self, assignment: RolePermission) -> AppResult<()> {
        let mut state = self.state.write().await;
        if !state.roles.contains_key(&assignment.role_id) {
            return Err(AppError::NotFound(format!(
                "role '{}' was not found",
                assignment.role_id
            )));
        }
        if !state.permissions.contains_key(&assignment.permission_id) {
            return Err(AppError::NotFound(format!(
                "permission '{}' was not found",
                assignment.permission_id
            )));
        }

        if !state.assignments.insert(assignment) {
            return Err(AppError::Conflict(format!(
                "permission '{}' is already assigned to role '{}'",
                assignment.permission_id, assignment.role_id
            )));
        }

        Ok(())
    }

    async fn delete_assignment(&self, assignment: RolePermission) -> AppResult<()> {
        let mut state = self.state.write().await;
        if !state.assignments.remove(&assignment) {
            return Err(AppError::NotFound(format!(
                "permission '{}' is not assigned to role '{}'",
                assignment.permission_id, assignment.role_id
            )));
        }

        Ok(())
    }

    async fn list_assignments(&self) -> AppResult<Vec<RolePermission>> {
        let state = self.state.read().await;
        Ok(state.assignments.iter().copied().collect())
    }
}

fn by_name(left: &EntityName, right: &EntityName) -> std::cmp::Ordering {
    left.lookup_key()
        .cmp(&right.lookup_key())
        .then_with(|| left.as_str().cmp(right.as_str()))
}
