use std::collections::BTreeSet;

use rolegate_core::EntityName;
use rolegate_domain::{Permission, PermissionId, Role, RoleId, RolePermission};

/// Input payload for creating or editing a permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionInput {
    /// Unique permission name.
    pub name: EntityName,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// Input payload for creating or renaming a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInput {
    /// Unique role name.
    pub name: EntityName,
}

/// Point-in-time read of roles and permissions used for name resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RbacSnapshot {
    /// Roles ordered by name.
    pub roles: Vec<Role>,
    /// Permissions ordered by name.
    pub permissions: Vec<Permission>,
}

impl RbacSnapshot {
    /// Finds a role by name, ignoring case.
    #[must_use]
    pub fn find_role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.name().matches(name))
    }

    /// Finds a permission by name, ignoring case.
    #[must_use]
    pub fn find_permission(&self, name: &str) -> Option<&Permission> {
        self.permissions
            .iter()
            .find(|permission| permission.name().matches(name))
    }
}

/// Dashboard totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RbacOverview {
    /// Number of roles.
    pub role_count: usize,
    /// Number of permissions.
    pub permission_count: usize,
    /// Number of granted role-permission pairs.
    pub assignment_count: usize,
}

/// Role list entry with the number of permissions it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSummary {
    /// Listed role.
    pub role: Role,
    /// Permissions granted to the role.
    pub permission_count: usize,
}

/// Roles × permissions grid with the current grants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentMatrix {
    /// Matrix columns.
    pub roles: Vec<Role>,
    /// Matrix rows.
    pub permissions: Vec<Permission>,
    /// Granted pairs.
    pub assignments: BTreeSet<RolePermission>,
}

impl AssignmentMatrix {
    /// Returns true when the permission is granted to the role.
    #[must_use]
    pub fn is_assigned(&self, role_id: RoleId, permission_id: PermissionId) -> bool {
        self.assignments
            .contains(&RolePermission::new(role_id, permission_id))
    }

    /// Returns the permissions granted to a role, in row order.
    #[must_use]
    pub fn permissions_for_role(&self, role_id: RoleId) -> Vec<&Permission> {
        self.permissions
            .iter()
            .filter(|permission| self.is_assigned(role_id, permission.id()))
            .collect()
    }

    /// Returns the dashboard totals for this grid.
    #[must_use]
    pub fn overview(&self) -> RbacOverview {
        RbacOverview {
            role_count: self.roles.len(),
            permission_count: self.permissions.len(),
            assignment_count: self.assignments.len(),
        }
    }

    /// Returns every role with its permission count, in column order.
    #[must_use]
    pub fn role_summaries(&self) -> Vec<RoleSummary> {
        self.roles
            .iter()
            .map(|role| RoleSummary {
                role: role.clone(),
                permission_count: self
                    .assignments
                    .iter()
                    .filter(|assignment| assignment.role_id == role.id())
                    .count(),
            })
            .collect()
    }

    /// Returns the roles holding a permission, in column order.
    #[must_use]
    pub fn roles_for_permission(&self, permission_id: PermissionId) -> Vec<&Role> {
        self.roles
            .iter()
            .filter(|role| self.is_assigned(role.id(), permission_id))
            .collect()
    }
}
