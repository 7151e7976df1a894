//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod command_grammar;
mod intent;
mod rbac;

pub use command_grammar::{
    Clause, CommandGrammar, CommandMatch, GrammarRule, IntentBuilder, RulePattern,
    command_suggestions,
};
pub use intent::{Intent, IntentAction};
pub use rbac::{Permission, PermissionId, Role, RoleId, RolePermission, normalize_description};
