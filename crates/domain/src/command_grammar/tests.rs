use proptest::prelude::*;
use rolegate_core::EntityName;

use crate::{Intent, IntentAction};

use super::{Clause, CommandGrammar, GrammarRule, RulePattern, command_suggestions};

fn name(value: &str) -> EntityName {
    EntityName::new(value).unwrap_or_else(|_| unreachable!())
}

fn parse(text: &str) -> Option<Intent> {
    CommandGrammar::standard().parse(text)
}

#[test]
fn create_permission_captures_name_and_description() {
    let intent = parse("Create a new permission called \"manage settings\"");

    assert_eq!(
        intent,
        Some(Intent::CreatePermission {
            permission_name: name("manage settings"),
            description: "Permission to manage settings".to_owned(),
        })
    );
}

#[test]
fn create_role_preserves_typed_casing() {
    let intent = parse("CREATE A ROLE CALLED 'Content Editor'");

    assert_eq!(
        intent,
        Some(Intent::CreateRole {
            role_name: name("Content Editor"),
        })
    );
}

#[test]
fn assign_accepts_give_and_assign() {
    let expected = Some(Intent::AssignPermission {
        role_name: name("Content Editor"),
        permission_name: name("edit articles"),
    });

    assert_eq!(
        parse("Give the role \"Content Editor\" the permission to \"edit articles\""),
        expected
    );
    assert_eq!(
        parse("assign permission \"edit articles\" to role \"Content Editor\""),
        expected
    );
}

#[test]
fn remove_clause_order_does_not_matter() {
    let forward = parse("remove role \"A\" permission \"B\"");
    let reversed = parse("remove permission \"B\" role \"A\"");

    assert!(forward.is_some());
    assert_eq!(forward, reversed);
    assert_eq!(
        forward.map(|intent| intent.action()),
        Some(IntentAction::RemovePermission)
    );
}

#[test]
fn assign_requires_both_clauses() {
    assert_eq!(parse("give the role \"Editor\" more power"), None);
    assert_eq!(parse("assign permission \"publish\""), None);
}

#[test]
fn unrelated_text_is_not_understood() {
    assert_eq!(parse("what time is it"), None);
    assert_eq!(parse(""), None);
    assert_eq!(parse("create something nice"), None);
}

#[test]
fn keywords_inside_quotes_do_not_trigger_rules() {
    assert_eq!(
        parse("Remove the permission \"delete users\" from role \"Support Agent\""),
        Some(Intent::RemovePermission {
            role_name: name("Support Agent"),
            permission_name: name("delete users"),
        })
    );
    assert_eq!(
        parse("create role \"permission auditors\""),
        Some(Intent::CreateRole {
            role_name: name("permission auditors"),
        })
    );
}

#[test]
fn create_permission_wins_over_create_role() {
    let intent = parse("create role \"Admin\" and permission \"audit\"");

    assert_eq!(
        intent.map(|intent| intent.action()),
        Some(IntentAction::CreatePermission)
    );
}

#[test]
fn delete_rules_target_a_single_entity() {
    assert_eq!(
        parse("delete the permission \"view reports\""),
        Some(Intent::DeletePermission {
            permission_name: name("view reports"),
        })
    );
    assert_eq!(
        parse("please delete role 'Moderator'"),
        Some(Intent::DeleteRole {
            role_name: name("Moderator"),
        })
    );
    assert_eq!(parse("delete permission \"x\" from role \"y\""), None);
}

#[test]
fn empty_quoted_name_is_not_understood() {
    assert_eq!(parse("create permission \"\""), None);
    assert_eq!(parse("create role '   '"), None);
}

#[test]
fn long_quoted_names_are_understood() {
    let long = "x".repeat(121);
    let intent = parse(&format!("create permission \"{long}\""));

    assert_eq!(
        intent.as_ref().and_then(Intent::permission_name),
        Some(&name(&long))
    );
}

#[test]
fn double_quote_directly_after_keyword_is_understood() {
    assert_eq!(
        parse("create role\"Admin\""),
        Some(Intent::CreateRole {
            role_name: name("Admin"),
        })
    );
}

#[test]
fn every_suggestion_parses() {
    let grammar = CommandGrammar::standard();

    for suggestion in command_suggestions() {
        assert!(
            grammar.parse(suggestion).is_some(),
            "suggestion not understood: {suggestion}"
        );
    }
}

#[test]
fn parse_with_rule_reports_rule_name() {
    let grammar = CommandGrammar::standard();
    let parsed = grammar.parse_with_rule("create role \"Ops\"");

    assert_eq!(parsed.map(|(rule, _)| rule.name()), Some("create_role"));
}

#[test]
fn custom_grammar_table_is_used() {
    let grammar = CommandGrammar::new(vec![GrammarRule::new(
        "grant",
        RulePattern::new()
            .keyword(&["grant"])
            .requires(Clause::Role)
            .requires(Clause::Permission),
        |command| {
            Some(Intent::AssignPermission {
                role_name: command.role_name()?,
                permission_name: command.permission_name()?,
            })
        },
    )]);

    assert_eq!(grammar.rules().len(), 1);
    assert!(grammar.parse("grant role \"ops\" permission \"deploy\"").is_some());
    assert_eq!(grammar.parse("create role \"ops\""), None);
}

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 _-]{0,18}[A-Za-z0-9]"
}

fn arb_quote() -> impl Strategy<Value = char> {
    prop_oneof![Just('"'), Just('\'')]
}

proptest! {
    #[test]
    fn prop_create_templates_round_trip(value in arb_name(), quote in arb_quote()) {
        let grammar = CommandGrammar::standard();

        let permission = grammar.parse(&format!("Create a permission called {quote}{value}{quote}"));
        prop_assert_eq!(
            permission.as_ref().map(Intent::action),
            Some(IntentAction::CreatePermission)
        );
        prop_assert_eq!(
            permission.as_ref().and_then(Intent::permission_name).map(EntityName::as_str),
            Some(value.as_str())
        );

        let role = grammar.parse(&format!("create a new role named {quote}{value}{quote}"));
        prop_assert_eq!(role.as_ref().map(Intent::action), Some(IntentAction::CreateRole));
        prop_assert_eq!(
            role.as_ref().and_then(Intent::role_name).map(EntityName::as_str),
            Some(value.as_str())
        );
    }

    #[test]
    fn prop_pair_templates_round_trip(
        role_value in arb_name(),
        permission_value in arb_name(),
        reversed in any::<bool>(),
    ) {
        let grammar = CommandGrammar::standard();
        let clauses = if reversed {
            format!("permission \"{permission_value}\" to role \"{role_value}\"")
        } else {
            format!("role \"{role_value}\" the permission \"{permission_value}\"")
        };

        for (verb, action) in [
            ("give", IntentAction::AssignPermission),
            ("assign", IntentAction::AssignPermission),
            ("remove", IntentAction::RemovePermission),
        ] {
            let intent = grammar.parse(&format!("{verb} {clauses}"));
            prop_assert_eq!(intent.as_ref().map(Intent::action), Some(action));
            prop_assert_eq!(
                intent.as_ref().and_then(Intent::role_name).map(EntityName::as_str),
                Some(role_value.as_str())
            );
            prop_assert_eq!(
                intent.as_ref().and_then(Intent::permission_name).map(EntityName::as_str),
                Some(permission_value.as_str())
            );
        }
    }

    #[test]
    fn prop_delete_templates_round_trip(value in arb_name()) {
        let grammar = CommandGrammar::standard();

        let permission = grammar.parse(&format!("delete permission \"{value}\""));
        prop_assert_eq!(
            permission.as_ref().map(Intent::action),
            Some(IntentAction::DeletePermission)
        );
        prop_assert_eq!(
            permission.as_ref().and_then(Intent::permission_name).map(EntityName::as_str),
            Some(value.as_str())
        );

        let role = grammar.parse(&format!("delete role \"{value}\""));
        prop_assert_eq!(role.as_ref().map(Intent::action), Some(IntentAction::DeleteRole));
        prop_assert_eq!(
            role.as_ref().and_then(Intent::role_name).map(EntityName::as_str),
            Some(value.as_str())
        );
    }
}
