use rolegate_core::EntityName;
use serde::{Deserialize, Serialize};

/// Mutation requested by a free-text command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentAction {
    /// Create a new permission.
    CreatePermission,
    /// Create a new role.
    CreateRole,
    /// Grant a permission to a role.
    AssignPermission,
    /// Revoke a permission from a role.
    RemovePermission,
    /// Delete a permission and its grants.
    DeletePermission,
    /// Delete a role and its grants.
    DeleteRole,
}

impl IntentAction {
    /// Returns a stable transport value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatePermission => "create_permission",
            Self::CreateRole => "create_role",
            Self::AssignPermission => "assign_permission",
            Self::RemovePermission => "remove_permission",
            Self::DeletePermission => "delete_permission",
            Self::DeleteRole => "delete_role",
        }
    }

    /// Returns a human-readable label, e.g. `assign permission`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreatePermission => "create permission",
            Self::CreateRole => "create role",
            Self::AssignPermission => "assign permission",
            Self::RemovePermission => "remove permission",
            Self::DeletePermission => "delete permission",
            Self::DeleteRole => "delete role",
        }
    }
}

/// Typed representation of a parsed command.
///
/// Names are kept exactly as they were quoted in the command. Matching them
/// against stored entities is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    /// Create a permission with a generated description.
    CreatePermission {
        /// Name of the permission to create.
        permission_name: EntityName,
        /// Description stored with the permission.
        description: String,
    },
    /// Create a role.
    CreateRole {
        /// Name of the role to create.
        role_name: EntityName,
    },
    /// Grant a permission to a role.
    AssignPermission {
        /// Role receiving the grant.
        role_name: EntityName,
        /// Permission being granted.
        permission_name: EntityName,
    },
    /// Revoke a permission from a role.
    RemovePermission {
        /// Role losing the grant.
        role_name: EntityName,
        /// Permission being revoked.
        permission_name: EntityName,
    },
    /// Delete a permission.
    DeletePermission {
        /// Permission to delete.
        permission_name: EntityName,
    },
    /// Delete a role.
    DeleteRole {
        /// Role to delete.
        role_name: EntityName,
    },
}

impl Intent {
    /// Builds a create-permission intent with the default description.
    #[must_use]
    pub fn create_permission(permission_name: EntityName) -> Self {
        let description = format!("Permission to {permission_name}");
        Self::CreatePermission {
            permission_name,
            description,
        }
    }

    /// Returns the requested action.
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

    /// Returns the referenced role name, if any.
    #[must_use]
    pub fn role_name(&self) -> Option<&EntityName> {
        match self {
            Self::CreateRole { role_name }
            | Self::AssignPermission { role_name, .. }
            | Self::RemovePermission { role_name, .. }
            | Self::DeleteRole { role_name } => Some(role_name),
            Self::CreatePermission { .. } | Self::DeletePermission { .. } => None,
        }
    }

    /// Returns the referenced permission name, if any.
    #[must_use]
    pub fn permission_name(&self) -> Option<&EntityName> {
        match self {
            Self::CreatePermission {
                permission_name, ..
            }
            | Self::AssignPermission {
                permission_name, ..
            }
            | Self::RemovePermission {
                permission_name, ..
            }
            | Self::DeletePermission { permission_name } => Some(permission_name),
            Self::CreateRole { .. } | Self::DeleteRole { .. } => None,
        }
    }

    /// Returns the description carried by create-permission intents.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::CreatePermission { description, .. } => Some(description.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rolegate_core::EntityName;

    use super::{Intent, IntentAction};

    #[test]
    fn create_permission_generates_description() {
        let name = EntityName::new("Manage Settings").unwrap_or_else(|_| unreachable!());
        let intent = Intent::create_permission(name);

        assert_eq!(intent.action(), IntentAction::CreatePermission);
        assert_eq!(intent.description(), Some("Permission to Manage Settings"));
        assert!(intent.role_name().is_none());
    }

    #[test]
    fn intent_serializes_with_action_tag() {
        let intent = Intent::DeleteRole {
            role_name: EntityName::new("Support").unwrap_or_else(|_| unreachable!()),
        };

        let value = serde_json::to_value(&intent).unwrap_or_default();
        assert_eq!(value["action"], "delete_role");
        assert_eq!(value["role_name"], "Support");
    }
}
