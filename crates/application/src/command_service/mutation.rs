use rolegate_core::{AppError, AppResult, EntityName};
use rolegate_domain::{IntentAction, Permission, PermissionId, Role, RoleId, RolePermission};

use crate::rbac_ports::{PermissionInput, RbacRepository, RbacSnapshot, RoleInput};

use super::outcome::{CommandError, CommandOutcome, CommandSuccess};
use super::resolution::ResolvedIntent;

/// Inserts a pair, treating an existing pair as success.
///
/// Returns whether the store changed. Only `Conflict` is absorbed.
pub(crate) async fn grant(
    repository: &dyn RbacRepository,
    assignment: RolePermission,
) -> AppResult<bool> {
    match repository.insert_assignment(assignment).await {
        Ok(()) => Ok(true),
        Err(AppError::Conflict(_)) => Ok(false),
        Err(error) => Err(error),
    }
}

/// Deletes a pair, treating an absent pair as success.
///
/// Returns whether the store changed. Only `NotFound` is absorbed.
pub(crate) async fn revoke(
    repository: &dyn RbacRepository,
    assignment: RolePermission,
) -> AppResult<bool> {
    match repository.delete_assignment(assignment).await {
        Ok(()) => Ok(true),
        Err(AppError::NotFound(_)) => Ok(false),
        Err(error) => Err(error),
    }
}

/// Applies resolved intents through the persistence port.
///
/// Every operation issues a single store call and classifies its result.
pub struct AssignmentMutator<'a> {
    repository: &'a dyn RbacRepository,
}

impl<'a> AssignmentMutator<'a> {
    /// Creates a mutator over a repository.
    #[must_use]
    pub fn new(repository: &'a dyn RbacRepository) -> Self {
        Self { repository }
    }

    /// Creates a permission unless the name is taken.
    pub async fn create_permission(
        &self,
        name: EntityName,
        description: Option<String>,
        snapshot: &RbacSnapshot,
    ) -> Result<Permission, CommandError> {
        if snapshot.find_permission(name.as_str()).is_some() {
            return Err(duplicate("permission", &name));
        }

        let requested = name.clone();
        self.repository
            .create_permission(PermissionInput { name, description })
            .await
            .map_err(|error| classify_create(error, "permission", &requested))
    }

    /// Creates a role unless the name is taken.
    pub async fn create_role(
        &self,
        name: EntityName,
        snapshot: &RbacSnapshot,
    ) -> Result<Role, CommandError> {
        if snapshot.find_role(name.as_str()).is_some() {
            return Err(duplicate("role", &name));
        }

        let requested = name.clone();
        self.repository
            .create_role(RoleInput { name })
            .await
            .map_err(|error| classify_create(error, "role", &requested))
    }

    /// Grants a permission to a role. Returns false when it was already granted.
    pub async fn assign(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
    ) -> Result<bool, CommandError> {
        Ok(grant(self.repository, RolePermission::new(role_id, permission_id)).await?)
    }

    /// Revokes a permission from a role. Returns false when it was not granted.
    pub async fn unassign(
        &self,
        role_id: RoleId,
        permission_id: PermissionId,
    ) -> Result<bool, CommandError> {
        Ok(revoke(self.repository, RolePermission::new(role_id, permission_id)).await?)
    }

    /// Deletes a permission together with its grants.
    pub async fn delete_permission(&self, permission: &Permission) -> Result<(), CommandError> {
        self.repository
            .delete_permission(permission.id())
            .await
            .map_err(|error| match error {
                AppError::NotFound(_) => CommandError::PermissionNotFound {
                    name: permission.name().as_str().to_owned(),
                },
                other => CommandError::Store(other),
            })
    }

    /// Deletes a role together with its grants.
    pub async fn delete_role(&self, role: &Role) -> Result<(), CommandError> {
        self.repository
            .delete_role(role.id())
            .await
            .map_err(|error| match error {
                AppError::NotFound(_) => CommandError::RoleNotFound {
                    name: role.name().as_str().to_owned(),
                },
                other => CommandError::Store(other),
            })
    }

    /// Applies one resolved intent and reports what happened.
    pub async fn apply(&self, intent: ResolvedIntent, snapshot: &RbacSnapshot) -> CommandOutcome {
        let action = intent.action();

        match intent {
            ResolvedIntent::CreatePermission { name, description } => {
                let permission = self
                    .create_permission(name, Some(description), snapshot)
                    .await?;
                Ok(CommandSuccess {
                    action,
                    role_name: None,
                    permission_name: Some(permission.name().as_str().to_owned()),
                    changed: true,
                })
            }
            ResolvedIntent::CreateRole { name } => {
                let role = self.create_role(name, snapshot).await?;
                Ok(CommandSuccess {
                    action,
                    role_name: Some(role.name().as_str().to_owned()),
                    permission_name: None,
                    changed: true,
                })
            }
            ResolvedIntent::AssignPermission { role, permission } => {
                let changed = self.assign(role.id(), permission.id()).await?;
                Ok(pair_success(action, &role, &permission, changed))
            }
            ResolvedIntent::RemovePermission { role, permission } => {
                let changed = self.unassign(role.id(), permission.id()).await?;
                Ok(pair_success(action, &role, &permission, changed))
            }
            ResolvedIntent::DeletePermission { permission } => {
                self.delete_permission(&permission).await?;
                Ok(CommandSuccess {
                    action,
                    role_name: None,
                    permission_name: Some(permission.name().as_str().to_owned()),
                    changed: true,
                })
            }
            ResolvedIntent::DeleteRole { role } => {
                self.delete_role(&role).await?;
                Ok(CommandSuccess {
                    action,
                    role_name: Some(role.name().as_str().to_owned()),
                    permission_name: None,
                    changed: true,
                })
            }
        }
    }
}

fn pair_success(
    action: IntentAction,
    role: &Role,
    permission: &Permission,
    changed: bool,
) -> CommandSuccess {
    CommandSuccess {
        action,
        role_name: Some(role.name().as_str().to_owned()),
        permission_name: Some(permission.name().as_str().to_owned()),
        changed,
    }
}

fn duplicate(entity: &'static str, name: &EntityName) -> CommandError {
    CommandError::DuplicateName {
        entity,
        name: name.as_str().to_owned(),
    }
}

fn classify_create(error: AppError, entity: &'static str, name: &EntityName) -> CommandError {
    match error {
        AppError::Conflict(_) => duplicate(entity, name),
        other => CommandError::Store(other),
    }
}
