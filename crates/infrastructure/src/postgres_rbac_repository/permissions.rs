use super::*;

impl PostgresRbacRepository {
    pub(super) async fn list_permissions_impl(&self) -> AppResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, PermissionRow>(
            r#"
            SELECT id, name, description, created_at
            FROM permissions
            ORDER BY name_key, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list permissions: {error}")))?;

        rows.into_iter().map(Permission::try_from).collect()
    }

    pub(super) async fn create_permission_impl(
        &self,
        input: PermissionInput,
    ) -> AppResult<Permission> {
        let permission = Permission::new(
            PermissionId::new(),
            input.name,
            input.description,
            Utc::now(),
        );

        let row = sqlx::query_as::<_, PermissionRow>(
            r#"
            INSERT INTO permissions (id, name, name_key, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(permission.id().as_uuid())
        .bind(permission.name().as_str())
        .bind(permission.name().lookup_key())
        .bind(permission.description())
        .bind(permission.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| map_name_conflict(error, "permission", permission.name(), "create"))?;

        Permission::try_from(row)
    }

    pub(super) async fn update_permission_impl(
        &self,
        permission_id: PermissionId,
        input: PermissionInput,
    ) -> AppResult<Permission> {
        let description = rolegate_domain::normalize_description(input.description);

        let row = sqlx::query_as::<_, PermissionRow>(
            r#"
            UPDATE permissions
            SET name = $2, name_key = $3, description = $4
            WHERE id = $1
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(permission_id.as_uuid())
        .bind(input.name.as_str())
        .bind(input.name.lookup_key())
        .bind(description.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| map_name_conflict(error, "permission", &input.name, "update"))?
        .ok_or_else(|| {
            AppError::NotFound(format!("permission '{permission_id}' was not found"))
        })?;

        Permission::try_from(row)
    }

    pub(super) async fn delete_permission_impl(&self, permission_id: PermissionId) -> AppResult<()> {
        let rows_affected = sqlx::query(
            r#"
            DELETE FROM permissions
            WHERE id = $1
            "#,
        )
        .bind(permission_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to delete permission '{permission_id}': {error}"
            ))
        })?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "permission '{permission_id}' was not found"
            )));
        }

        Ok(())
    }
}
