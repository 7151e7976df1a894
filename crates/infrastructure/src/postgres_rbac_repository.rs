use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use rolegate_application::{PermissionInput, RbacRepository, RoleInput};
use rolegate_core::{AppError, AppResult, EntityName};
use rolegate_domain::{Permission, PermissionId, Role, RoleId, RolePermission};

mod assignments;
mod permissions;
mod roles;


const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL-backed repository for roles, permissions and their grants.
#[derive(Clone)]
pub struct PostgresRbacRepository {
    pool: PgPool,
}

impl PostgresRbacRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PermissionRow {
    id: uuid::Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PermissionRow> for Permission {
    type Error = AppError;

    fn try_from(row: PermissionRow) -> Result<Self, Self::Error> {
        Ok(Permission::new(
            PermissionId::from_uuid(row.id),
            stored_name(row.name)?,
            row.description,
            row.created_at,
        ))
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: uuid::Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<RoleRow> for Role {
    type Error = AppError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        Ok(Role::new(
            RoleId::from_uuid(row.id),
            stored_name(row.name)?,
            row.created_at,
        ))
    }
}

#[derive(Debug, FromRow)]
struct AssignmentRow {
    role_id: uuid::Uuid,
    permission_id: uuid::Uuid,
}

#[async_trait]
impl RbacRepository for PostgresRbacRepository {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        self.list_permissions_impl().await
    }

    async fn create_permission(&self, input: PermissionInput) -> AppResult<Permission> {
        self.create_permission_impl(input).await
    }

    async fn update_permission(
        &self,
        permission_id: PermissionId,
        input: PermissionInput,
    ) -> AppResult<Permission> {
        self.update_permission_impl(permission_id, input).await
    }

    async fn delete_permission(&self, permission_id: PermissionId) -> AppResult<()> {
        self.delete_permission_impl(permission_id).await
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.list_roles_impl().await
    }

    async fn create_role(&self, input: RoleInput) -> AppResult<Role> {
        self.create_role_impl(input).await
    }

    async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role> {
        self.update_role_impl(role_id, input).await
    }

    async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        self.delete_role_impl(role_id).await
    }

    async fn insert_assignment(&self, assignment: RolePermission) -> AppResult<()> {
        self.insert_assignment_impl(assignment).await
    }

    async fn delete_assignment(&self, assignment: RolePermission) -> AppResult<()> {
        self.delete_assignment_impl(assignment).await
    }

    async fn list_assignments(&self) -> AppResult<Vec<RolePermission>> {
        self.list_assignments_impl().await
    }
}

fn stored_name(value: String) -> AppResult<EntityName> {
    EntityName::new(value.as_str())
        .map_err(|error| AppError::Internal(format!("invalid stored name '{value}': {error}")))
}

fn database_error_code(error: &sqlx::Error) -> Option<String> {
    match error {
        sqlx::Error::Database(database_error) => {
            database_error.code().map(|code| code.into_owned())
        }
        _ => None,
    }
}

fn map_name_conflict(
    error: sqlx::Error,
    entity: &str,
    name: &EntityName,
    action: &str,
) -> AppError {
    if database_error_code(&error).as_deref() == Some(UNIQUE_VIOLATION) {
        return AppError::Conflict(format!("{entity} '{name}' already exists"));
    }

    AppError::Internal(format!("failed to {action} {entity} '{name}': {error}"))
}
