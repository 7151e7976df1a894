//! Free-text command orchestration.
//!
//! A command flows through four steps: the grammar turns text into an
//! [`Intent`], a snapshot of roles and permissions is read, the intent's names
//! are resolved against that snapshot, and the [`AssignmentMutator`] applies
//! the result through the [`RbacRepository`] port. Snapshot and mutation are
//! not transactional; a concurrent change surfaces as an ordinary not-found or
//! store error.

mod mutation;
mod outcome;
mod resolution;

use std::sync::Arc;

use rolegate_domain::{CommandGrammar, Intent};
use tracing::{debug, error, info, warn};

use crate::rbac_ports::{RbacRepository, RbacSnapshot};

pub(crate) use mutation::{grant, revoke};
pub use mutation::AssignmentMutator;
pub use outcome::{CommandError, CommandOutcome, CommandSuccess};
pub use resolution::{ResolvedIntent, resolve};

/// Application service executing free-text administration commands.
#[derive(Clone)]
pub struct CommandService {
    grammar: Arc<CommandGrammar>,
    repository: Arc<dyn RbacRepository>,
}

impl CommandService {
    /// Creates a new service from a grammar table and a repository.
    #[must_use]
    pub fn new(grammar: CommandGrammar, repository: Arc<dyn RbacRepository>) -> Self {
        Self {
            grammar: Arc::new(grammar),
            repository,
        }
    }

    /// Parses a command without touching the store.
    #[must_use]
    pub fn interpret(&self, text: &str) -> Option<Intent> {
        self.grammar.parse(text)
    }

    /// Reads the current roles and permissions.
    pub async fn snapshot(&self) -> Result<RbacSnapshot, CommandError> {
        let roles = self.repository.list_roles().await?;
        let permissions = self.repository.list_permissions().await?;

        Ok(RbacSnapshot { roles, permissions })
    }

    /// Executes one command from parse to mutation. Nothing is retried.
    pub async fn execute(&self, text: &str) -> CommandOutcome {
        let outcome = self.run(text).await;

        match &outcome {
            Ok(success) => info!(
                action = success.action.as_str(),
                role = success.role_name.as_deref().unwrap_or_default(),
                permission = success.permission_name.as_deref().unwrap_or_default(),
                changed = success.changed,
                "command applied"
            ),
            Err(CommandError::Store(store_error)) => {
                error!(error = %store_error, "command failed in store");
            }
            Err(command_error) => {
                warn!(kind = command_error.kind(), error = %command_error, "command rejected");
            }
        }

        outcome
    }

    async fn run(&self, text: &str) -> CommandOutcome {
        let Some((rule, intent)) = self.grammar.parse_with_rule(text) else {
            return Err(CommandError::NotUnderstood);
        };
        debug!(rule = rule.name(), action = intent.action().as_str(), "command parsed");

        let snapshot = self.snapshot().await?;
        let resolved = resolve(intent, &snapshot)?;

        AssignmentMutator::new(self.repository.as_ref())
            .apply(resolved, &snapshot)
            .await
    }
}

#[cfg(test)]
mod tests;
