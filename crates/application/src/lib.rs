//! Application services and ports.

#![forbid(unsafe_code)]

mod command_service;
mod rbac_admin_service;
mod rbac_ports;

#[cfg(test)]
mod test_support;

pub use command_service::{
    AssignmentMutator, CommandError, CommandOutcome, CommandService, CommandSuccess,
    ResolvedIntent, resolve,
};
pub use rbac_admin_service::RbacAdminService;
pub use rbac_ports::{
    AssignmentMatrix, PermissionInput, RbacOverview, RbacRepository, RbacSnapshot, RoleInput,
    RoleSummary,
};
