use rolegate_core::EntityName;
use rolegate_domain::{Intent, IntentAction, Permission, Role};

use crate::rbac_ports::RbacSnapshot;

use super::outcome::CommandError;

/// Intent whose name references were mapped to stored entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIntent {
    /// Create a permission; nothing to resolve.
    CreatePermission {
        /// Requested name.
        name: EntityName,
        /// Requested description.
        description: String,
    },
    /// Create a role; nothing to resolve.
    CreateRole {
        /// Requested name.
        name: EntityName,
    },
    /// Grant an existing permission to an existing role.
    AssignPermission {
        /// Resolved role.
        role: Role,
        /// Resolved permission.
        permission: Permission,
    },
    /// Revoke an existing permission from an existing role.
    RemovePermission {
        /// Resolved role.
        role: Role,
        /// Resolved permission.
        permission: Permission,
    },
    /// Delete an existing permission.
    DeletePermission {
        /// Resolved permission.
        permission: Permission,
    },
    /// Delete an existing role.
    DeleteRole {
        /// Resolved role.
        role: Role,
    },
}

impl ResolvedIntent {
    /// Returns the action of the originating intent.
    #[must_use]
    pub fn action(&self) -> IntentAction {
        match self {
            Self::CreatePermission { .. } => IntentAction::CreatePermission,
            Self::CreateRole { .. } => IntentAction::CreateRole,
            Self::AssignPermission { .. } => IntentAction::AssignPermission,
            Self::RemovePermission { .. } => IntentAction::RemovePermission,
            Self::DeletePermission { .. } => IntentAction::DeletePermission,
            Self::DeleteRole { .. } => IntentAction::DeleteRole,
        }
    }
}

/// Maps the names of an intent to entities of the snapshot.
///
/// Lookups ignore case. When both names are unknown the role is reported.
pub fn resolve(intent: Intent, snapshot: &RbacSnapshot) -> Result<ResolvedIntent, CommandError> {
    match intent {
        Intent::CreatePermission {
            permission_name,
            description,
        } => Ok(ResolvedIntent::CreatePermission {
            name: permission_name,
            description,
        }),
        Intent::CreateRole { role_name } => Ok(ResolvedIntent::CreateRole { name: role_name }),
        Intent::AssignPermission {
            role_name,
            permission_name,
        } => Ok(ResolvedIntent::AssignPermission {
            role: resolve_role(&role_name, snapshot)?,
            permission: resolve_permission(&permission_name, snapshot)?,
        }),
        Intent::RemovePermission {
            role_name,
            permission_name,
        } => Ok(ResolvedIntent::RemovePermission {
            role: resolve_role(&role_name, snapshot)?,
            permission: resolve_permission(&permission_name, snapshot)?,
        }),
        Intent::DeletePermission { permission_name } => Ok(ResolvedIntent::DeletePermission {
            permission: resolve_permission(&permission_name, snapshot)?,
        }),
        Intent::DeleteRole { role_name } => Ok(ResolvedIntent::DeleteRole {
            role: resolve_role(&role_name, snapshot)?,
        }),
    }
}

fn resolve_role(name: &EntityName, snapshot: &RbacSnapshot) -> Result<Role, CommandError> {
    snapshot
        .find_role(name.as_str())
        .cloned()
        .ok_or_else(|| CommandError::RoleNotFound {
            name: name.as_str().to_owned(),
        })
}

fn resolve_permission(
    name: &EntityName,
    snapshot: &RbacSnapshot,
) -> Result<Permission, CommandError> {
    snapshot
        .find_permission(name.as_str())
        .cloned()
        .ok_or_else(|| CommandError::PermissionNotFound {
            name: name.as_str().to_owned(),
        })
}
