use rolegate_core::AppError;
use rolegate_domain::IntentAction;
use thiserror::Error;

/// Result of executing one free-text command.
pub type CommandOutcome = Result<CommandSuccess, CommandError>;

/// Successful command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSuccess {
    /// Action that was applied.
    pub action: IntentAction,
    /// Role touched by the command, as stored.
    pub role_name: Option<String>,
    /// Permission touched by the command, as stored.
    pub permission_name: Option<String>,
    /// False when the command was an idempotent no-op.
    pub changed: bool,
}

impl CommandSuccess {
    /// Returns an operator-facing summary of the result.
    #[must_use]
    pub fn message(&self) -> String {
        let role = self.role_name.as_deref().unwrap_or_default();
        let permission = self.permission_name.as_deref().unwrap_or_default();

        match (self.action, self.changed) {
            (IntentAction::CreatePermission, _) => {
                format!("Permission \"{permission}\" created successfully")
            }
            (IntentAction::CreateRole, _) => format!("Role \"{role}\" created successfully"),
            (IntentAction::AssignPermission, true) => {
                format!("Assigned permission \"{permission}\" to role \"{role}\"")
            }
            (IntentAction::AssignPermission, false) => {
                format!("Permission \"{permission}\" is already assigned to role \"{role}\"")
            }
            (IntentAction::RemovePermission, true) => {
                format!("Removed permission \"{permission}\" from role \"{role}\"")
            }
            (IntentAction::RemovePermission, false) => {
                format!("Permission \"{permission}\" was not assigned to role \"{role}\"")
            }
            (IntentAction::DeletePermission, _) => format!("Permission \"{permission}\" deleted"),
            (IntentAction::DeleteRole, _) => format!("Role \"{role}\" deleted"),
        }
    }
}

/// Classified command failure. Every variant ends the command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No grammar rule matched the command.
    #[error("could not understand the command, please try a different phrasing")]
    NotUnderstood,

    /// The command referenced a role that does not exist.
    #[error("role \"{name}\" not found")]
    RoleNotFound {
        /// Name as typed by the operator.
        name: String,
    },

    /// The command referenced a permission that does not exist.
    #[error("permission \"{name}\" not found")]
    PermissionNotFound {
        /// Name as typed by the operator.
        name: String,
    },

    /// A create command collided with an existing name.
    #[error("{entity} \"{name}\" already exists")]
    DuplicateName {
        /// Either `role` or `permission`.
        entity: &'static str,
        /// Name as typed by the operator.
        name: String,
    },

    /// Any other failure reported by the persistence port.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl CommandError {
    /// Returns a stable snake_case code for callers.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotUnderstood => "not_understood",
            Self::RoleNotFound { .. } => "role_not_found",
            Self::PermissionNotFound { .. } => "permission_not_found",
            Self::DuplicateName { .. } => "duplicate_name",
            Self::Store(_) => "store_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use rolegate_core::AppError;
    use rolegate_domain::IntentAction;

    use super::{CommandError, CommandSuccess};

    #[test]
    fn idempotent_assign_message_mentions_existing_grant() {
        let success = CommandSuccess {
            action: IntentAction::AssignPermission,
            role_name: Some("Editor".to_owned()),
            permission_name: Some("publish".to_owned()),
            changed: false,
        };

        assert_eq!(
            success.message(),
            "Permission \"publish\" is already assigned to role \"Editor\""
        );
    }

    #[test]
    fn error_kinds_are_stable() {
        let duplicate = CommandError::DuplicateName {
            entity: "role",
            name: "Ops".to_owned(),
        };
        assert_eq!(duplicate.kind(), "duplicate_name");
        assert_eq!(duplicate.to_string(), "role \"Ops\" already exists");

        let store = CommandError::from(AppError::Internal("connection reset".to_owned()));
        assert_eq!(store.kind(), "store_error");
    }
}
