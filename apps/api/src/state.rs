use std::sync::Arc;

use rolegate_application::{CommandService, RbacAdminService, RbacRepository};
use rolegate_domain::CommandGrammar;

/// Backing store selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    InMemory,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::InMemory => "in_memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub command_service: CommandService,
    pub rbac_admin_service: RbacAdminService,
    pub storage: StorageBackend,
}

impl AppState {
    pub fn new(repository: Arc<dyn RbacRepository>, storage: StorageBackend) -> Self {
        Self {
            command_service: CommandService::new(CommandGrammar::standard(), repository.clone()),
            rbac_admin_service: RbacAdminService::new(repository),
            storage,
        }
    }
}
