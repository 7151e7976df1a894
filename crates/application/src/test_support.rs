//! In-memory fake of the persistence port shared by service tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use rolegate_core::{AppError, AppResult, EntityName};
use rolegate_domain::{Permission, PermissionId, Role, RoleId, RolePermission};

use crate::rbac_ports::{PermissionInput, RbacRepository, RoleInput};

#[derive(Default)]
pub(crate) struct FakeState {
    pub(crate) permissions: Vec<Permission>,
    pub(crate) roles: Vec<Role>,
    pub(crate) assignments: Vec<RolePermission>,
}

#[derive(Default)]
pub(crate) struct FakeRbacRepository {
    pub(crate) state: Mutex<FakeState>,
    pub(crate) mutation_calls: Mutex<usize>,
    pub(crate) read_calls: Mutex<usize>,
    pub(crate) insert_assignment_error: Mutex<Option<AppError>>,
    pub(crate) create_conflicts: bool,
}

impl FakeRbacRepository {
    async fn record_mutation(&self) {
        *self.mutation_calls.lock().await += 1;
    }

    async fn record_read(&self) {
        *self.read_calls.lock().await += 1;
    }
}

#[async_trait]
impl RbacRepository for FakeRbacRepository {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        self.record_read().await;
        Ok(self.state.lock().await.permissions.clone())
    }

    async fn create_permission(&self, input: PermissionInput) -> AppResult<Permission> {
        self.record_mutation().await;
        let mut state = self.state.lock().await;
        let taken = state
            .permissions
            .iter()
            .any(|permission| permission.name().matches(input.name.as_str()));
        if taken || self.create_conflicts {
            return Err(AppError::Conflict(format!(
                "permission '{}' already exists",
                input.name
            )));
        }

        let permission =
            Permission::new(PermissionId::new(), input.name, input.description, Utc::now());
        state.permissions.push(permission.clone());
        Ok(permission)
    }

    async fn update_permission(
        &self,
        permission_id: PermissionId,
        input: PermissionInput,
    ) -> AppResult<Permission> {
        self.record_mutation().await;
        let mut state = self.state.lock().await;
        let Some(position) = state
            .permissions
            .iter()
            .position(|permission| permission.id() == permission_id)
        else {
            return Err(AppError::NotFound(format!(
                "permission '{permission_id}' was not found"
            )));
        };

        let updated = Permission::new(
            permission_id,
            input.name,
            input.description,
            state.permissions[position].created_at(),
        );
        state.permissions[position] = updated.clone();
        Ok(updated)
    }

    async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<()> {
        self.record_mutation().await;
        let mut state = self.state.lock().await;
        let before = state.permissions.len();
        state
            .permissions
            .retain(|permission| permission.id() != permission_id);
        if state.permissions.len() == before {
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
        self.record_read().await;
        Ok(self.state.lock().await.roles.clone())
    }

    async fn create_role(&self, input: RoleInput) -> AppResult<Role> {
        self.record_mutation().await;
        let mut state = self.state.lock().await;
        if state
            .roles
            .iter()
            .any(|role| role.name().matches(input.name.as_str()))
        {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                input.name
            )));
        }

        let role = Role::new(RoleId::new(), input.name, Utc::now());
        state.roles.push(role.clone());
        Ok(role)
    }

    async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role> {
        self.record_mutation().await;
        let mut state = self.state.lock().await;
        let Some(position) = state.roles.iter().position(|role| role.id() == role_id) else {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        };

        let updated = Role::new(role_id, input.name, state.roles[position].created_at());
        state.roles[position] = updated.clone();
        Ok(updated)
    }

    async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        self.record_mutation().await;
        let mut state = self.state.lock().await;
        let before = state.roles.len();
        state.roles.retain(|role| role.id() != role_id);
        if state.roles.len() == before {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }
        state
            .assignments
            .retain(|assignment| assignment.role_id != role_id);
        Ok(())
    }

    async fn insert_assignment(&self, assignment: RolePermission) -> AppResult<()> {
        self.record_mutation().await;
        if let Some(error) = self.insert_assignment_error.lock().await.take() {
            return Err(error);
        }

        let mut state = self.state.lock().await;
        if state.assignments.contains(&assignment) {
            return Err(AppError::Conflict(
                "role permission pair already exists".to_owned(),
            ));
        }
        state.assignments.push(assignment);
        Ok(())
    }

    async fn delete_assignment(&self, assignment: RolePermission) -> AppResult<()> {
        self.record_mutation().await;
        let mut state = self.state.lock().await;
        let before = state.assignments.len();
        state.assignments.retain(|stored| stored != &assignment);
        if state.assignments.len() == before {
            return Err(AppError::NotFound(
                "role permission pair was not found".to_owned(),
            ));
        }
        Ok(())
    }

    async fn list_assignments(&self) -> AppResult<Vec<RolePermission>> {
        self.record_read().await;
        Ok(self.state.lock().await.assignments.clone())
    }
}

pub(crate) fn name(value: &str) -> EntityName {
    EntityName::new(value).unwrap_or_else(|_| unreachable!())
}

pub(crate) async fn seeded_repository(
    role_names: &[&str],
    permission_names: &[&str],
) -> Arc<FakeRbacRepository> {
    let repository = Arc::new(FakeRbacRepository::default());
    {
        let mut state = repository.state.lock().await;
        for role_name in role_names {
            state
                .roles
                .push(Role::new(RoleId::new(), name(role_name), Utc::now()));
        }
        for permission_name in permission_names {
            state.permissions.push(Permission::new(
                PermissionId::new(),
                name(permission_name),
                None,
                Utc::now(),
            ));
        }
    }
    repository
}
