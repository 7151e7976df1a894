use super::*;

impl PostgresRbacRepository {
    pub(super) async fn list_roles_impl(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, created_at
            FROM roles
            ORDER BY name_key, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list roles: {error}")))?;

        rows.into_iter().map(Role::try_from).collect()
    }

    pub(super) async fn create_role_impl(&self, input: RoleInput) -> AppResult<Role> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            INSERT INTO roles (id, name, name_key, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, created_at
            "#,
        )
        .bind(RoleId::new().as_uuid())
        .bind(input.name.as_str())
        .bind(input.name.lookup_key())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| map_name_conflict(error, "role", &input.name, "create"))?;

        Role::try_from(row)
    }

    pub(super) async fn update_role_impl(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            UPDATE roles
            SET name = $2, name_key = $3
            WHERE id = $1
            RETURNING id, name, created_at
            "#,
        )
        .bind(role_id.as_uuid())
        .bind(input.name.as_str())
        .bind(input.name.lookup_key())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| map_name_conflict(error, "role", &input.name, "update"))?
        .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' was not found")))?;

        Role::try_from(row)
    }

    pub(super) async fn delete_role_impl(&self, role_id: RoleId) -> AppResult<()> {
        let rows_affected = sqlx::query(
            r#"
            DELETE FROM roles
            WHERE id = $1
            "#,
        )
        .bind(role_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to delete role '{role_id}': {error}"))
        })?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }

        Ok(())
    }
}
