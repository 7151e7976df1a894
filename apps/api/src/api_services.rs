use std::sync::Arc;

use rolegate_application::RbacRepository;
use rolegate_core::AppError;
use rolegate_infrastructure::{InMemoryRbacRepository, PostgresRbacRepository};
use tracing::warn;

use crate::api_config::ApiConfig;
use crate::state::{AppState, StorageBackend};

mod database;

/// Builds the shared state, or `None` when only migrations were requested.
pub async fn build_app_state(config: &ApiConfig) -> Result<Option<AppState>, AppError> {
    let (repository, storage): (Arc<dyn RbacRepository>, StorageBackend) =
        match config.database_url.as_deref() {
            Some(database_url) => {
                let pool =
                    database::connect_and_migrate(database_url, config.database_max_connections)
                        .await?;
                if config.migrate_only {
                    return Ok(None);
                }
                (
                    Arc::new(PostgresRbacRepository::new(pool)),
                    StorageBackend::Postgres,
                )
            }
            None => {
                warn!("DATABASE_URL is not set, roles and permissions are kept in memory");
                (
                    Arc::new(InMemoryRbacRepository::new()),
                    StorageBackend::InMemory,
                )
            }
        };

    Ok(Some(AppState::new(repository, storage)))
}
