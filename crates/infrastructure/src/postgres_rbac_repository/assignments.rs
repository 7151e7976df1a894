use super::*;

impl PostgresRbacRepository {
    pub(super) async fn insert_assignment_impl(&self, assignment: RolePermission) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO role_permissions (role_id, permission_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(assignment.role_id.as_uuid())
        .bind(assignment.permission_id.as_uuid())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(error) => match database_error_code(&error).as_deref() {
                Some(UNIQUE_VIOLATION) => Err(AppError::Conflict(format!(
                    "permission '{}' is already assigned to role '{}'",
                    assignment.permission_id, assignment.role_id
                ))),
                Some(FOREIGN_KEY_VIOLATION) => Err(AppError::NotFound(format!(
                    "role '{}' or permission '{}' was not found",
                    assignment.role_id, assignment.permission_id
                ))),
                _ => Err(AppError::Internal(format!(
                    "failed to assign permission '{}' to role '{}': {error}",
                    assignment.permission_id, assignment.role_id
                ))),
            },
        }
    }

    pub(super) async fn delete_assignment_impl(&self, assignment: RolePermission) -> AppResult<()> {
        let rows_affected = sqlx::query(
            r#"
            DELETE FROM role_permissions
            WHERE role_id = $1 AND permission_id = $2
            "#,
        )
        .bind(assignment.role_id.as_uuid())
        .bind(assignment.permission_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to remove permission '{}' from role '{}': {error}",
                assignment.permission_id, assignment.role_id
            ))
        })?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "permission '{}' is not assigned to role '{}'",
                assignment.permission_id, assignment.role_id
            )));
        }

        Ok(())
    }

    pub(super) async fn list_assignments_impl(&self) -> AppResult<Vec<RolePermission>> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT role_id, permission_id
            FROM role_permissions
            ORDER BY role_id, permission_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list assignments: {error}")))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                RolePermission::new(
                    RoleId::from_uuid(row.role_id),
                    PermissionId::from_uuid(row.permission_id),
                )
            })
            .collect())
    }
}
