//! Rule-based grammar for free-text administration commands.
//!
//! A command is split into bare words and quoted spans. Rules match on
//! keywords (bare words only, case-insensitive) and on *clauses*: a clause
//! keyword such as `role` bound to the first quoted span after it. Clause
//! order in the sentence does not matter, so `remove permission "B" from
//! role "A"` and `remove role "A" permission "B"` yield the same intent.
//!
//! Rules are evaluated in table order and the first matching rule decides the
//! result.

mod scan;

use rolegate_core::EntityName;

use crate::Intent;

use self::scan::ScannedCommand;

/// Named slot filled by a quoted span following its keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    /// Introduced by the word `role`.
    Role,
    /// Introduced by the word `permission`.
    Permission,
}

impl Clause {
    const ALL: [Self; 2] = [Self::Role, Self::Permission];

    /// Returns the keyword that introduces this clause.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Permission => "permission",
        }
    }
}

/// Clauses captured from a command that matched a rule pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandMatch<'a> {
    role: Option<&'a str>,
    permission: Option<&'a str>,
}

impl CommandMatch<'_> {
    /// Returns the raw span bound to a clause.
    #[must_use]
    pub fn clause(&self, clause: Clause) -> Option<&str> {
        match clause {
            Clause::Role => self.role,
            Clause::Permission => self.permission,
        }
    }

    /// Returns the role clause as a validated name.
    #[must_use]
    pub fn role_name(&self) -> Option<EntityName> {
        self.role.and_then(|value| EntityName::new(value).ok())
    }

    /// Returns the permission clause as a validated name.
    #[must_use]
    pub fn permission_name(&self) -> Option<EntityName> {
        self.permission.and_then(|value| EntityName::new(value).ok())
    }
}

/// Keyword and clause requirements of one grammar rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulePattern {
    keywords: Vec<&'static [&'static str]>,
    required: Vec<Clause>,
    forbidden: Vec<Clause>,
}

impl RulePattern {
    /// Creates a pattern that matches every command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least one of `alternatives` to appear as a bare word.
    #[must_use]
    pub fn keyword(mut self, alternatives: &'static [&'static str]) -> Self {
        self.keywords.push(alternatives);
        self
    }

    /// Requires the clause to be bound to a quoted span.
    #[must_use]
    pub fn requires(mut self, clause: Clause) -> Self {
        self.required.push(clause);
        self
    }

    /// Rejects commands where the clause is bound.
    #[must_use]
    pub fn forbids(mut self, clause: Clause) -> Self {
        self.forbidden.push(clause);
        self
    }

    fn matches(&self, command: &ScannedCommand<'_>) -> bool {
        self.keywords.iter().all(|alternatives| {
            alternatives
                .iter()
                .any(|keyword| command.has_keyword(keyword))
        }) && self
            .required
            .iter()
            .all(|clause| command.clause(*clause).is_some())
            && self
                .forbidden
                .iter()
                .all(|clause| command.clause(*clause).is_none())
    }
}

/// Builds an intent from the clauses of a matched command.
pub type IntentBuilder = fn(&CommandMatch<'_>) -> Option<Intent>;

/// One entry of the grammar table.
#[derive(Debug, Clone)]
pub struct GrammarRule {
    name: &'static str,
    pattern: RulePattern,
    build: IntentBuilder,
}

impl GrammarRule {
    /// Creates a rule from a pattern and an intent constructor.
    #[must_use]
    pub fn new(name: &'static str, pattern: RulePattern, build: IntentBuilder) -> Self {
        Self {
            name,
            pattern,
            build,
        }
    }

    /// Returns the stable rule name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the rule pattern.
    #[must_use]
    pub fn pattern(&self) -> &RulePattern {
        &self.pattern
    }
}

/// Ordered grammar table.
#[derive(Debug, Clone)]
pub struct CommandGrammar {
    rules: Vec<GrammarRule>,
}

impl CommandGrammar {
    /// Creates a grammar from an ordered rule table.
    #[must_use]
    pub fn new(rules: Vec<GrammarRule>) -> Self {
        Self { rules }
    }

    /// Returns the grammar understood by the administration console.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            GrammarRule::new(
                "create_permission",
                RulePattern::new()
                    .keyword(&["create"])
                    .requires(Clause::Permission),
                |command| command.permission_name().map(Intent::create_permission),
            ),
            GrammarRule::new(
                "create_role",
                RulePattern::new()
                    .keyword(&["create"])
                    .requires(Clause::Role),
                |command| {
                    command
                        .role_name()
                        .map(|role_name| Intent::CreateRole { role_name })
                },
            ),
            GrammarRule::new(
                "assign_permission",
                RulePattern::new()
                    .keyword(&["give", "assign"])
                    .requires(Clause::Role)
                    .requires(Clause::Permission),
                |command| {
                    Some(Intent::AssignPermission {
                        role_name: command.role_name()?,
                        permission_name: command.permission_name()?,
                    })
                },
            ),
            GrammarRule::new(
                "remove_permission",
                RulePattern::new()
                    .keyword(&["remove"])
                    .requires(Clause::Role)
                    .requires(Clause::Permission),
                |command| {
                    Some(Intent::RemovePermission {
                        role_name: command.role_name()?,
                        permission_name: command.permission_name()?,
                    })
                },
            ),
            GrammarRule::new(
                "delete_permission",
                RulePattern::new()
                    .keyword(&["delete"])
                    .requires(Clause::Permission)
                    .forbids(Clause::Role),
                |command| {
                    command
                        .permission_name()
                        .map(|permission_name| Intent::DeletePermission { permission_name })
                },
            ),
            GrammarRule::new(
                "delete_role",
                RulePattern::new()
                    .keyword(&["delete"])
                    .requires(Clause::Role)
                    .forbids(Clause::Permission),
                |command| {
                    command
                        .role_name()
                        .map(|role_name| Intent::DeleteRole { role_name })
                },
            ),
        ])
    }

    /// Returns the rule table in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[GrammarRule] {
        self.rules.as_slice()
    }

    /// Parses a command into an intent, or `None` when no rule matches.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<Intent> {
        self.parse_with_rule(text).map(|(_, intent)| intent)
    }

    /// Parses a command and also returns the rule that produced the intent.
    ///
    /// The first rule whose pattern matches decides the outcome: when its
    /// builder rejects the captured names, later rules are not consulted.
    #[must_use]
    pub fn parse_with_rule(&self, text: &str) -> Option<(&GrammarRule, Intent)> {
        let scanned = ScannedCommand::scan(text);
        let rule = self
            .rules
            .iter()
            .find(|rule| rule.pattern.matches(&scanned))?;

        let command = CommandMatch {
            role: scanned.clause(Clause::Role),
            permission: scanned.clause(Clause::Permission),
        };

        (rule.build)(&command).map(|intent| (rule, intent))
    }
}

impl Default for CommandGrammar {
    fn default() -> Self {
        Self::standard()
    }
}

/// Example commands offered to operators.
#[must_use]
pub fn command_suggestions() -> &'static [&'static str] {
    &[
        "Create a new permission called \"manage settings\"",
        "Create a new role called \"Moderator\"",
        "Give the role \"Content Editor\" the permission to \"edit articles\"",
        "Remove the permission \"delete users\" from role \"Support Agent\"",
        "Create a permission called \"view reports\"",
        "Delete the role \"Moderator\"",
    ]
}

#[cfg(test)]
mod tests;
