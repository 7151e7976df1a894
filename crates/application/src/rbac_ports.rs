mod projections;
mod repository;

pub use projections::{
    AssignmentMatrix, PermissionInput, RbacOverview, RbacSnapshot, RoleInput, RoleSummary,
};
pub use repository::RbacRepository;
