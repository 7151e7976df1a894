use std::sync::Arc;

use rolegate_core::AppError;
use rolegate_domain::{CommandGrammar, IntentAction};

use crate::rbac_ports::RbacRepository;
use crate::test_support::{FakeRbacRepository, seeded_repository};

use super::{CommandError, CommandService};

fn service(repository: Arc<FakeRbacRepository>) -> CommandService {
    CommandService::new(CommandGrammar::standard(), repository)
}

#[tokio::test]
async fn create_permission_adds_permission_to_listing() {
    let repository = seeded_repository(&[], &[]).await;
    let service = service(repository.clone());

    let outcome = service
        .execute("Create a new permission called \"manage settings\"")
        .await;

    let Ok(success) = outcome else {
        panic!("expected command to succeed");
    };
    assert_eq!(success.action, IntentAction::CreatePermission);
    assert_eq!(success.permission_name.as_deref(), Some("manage settings"));

    let permissions = repository.list_permissions().await.unwrap_or_default();
    assert_eq!(permissions.len(), 1);
    assert_eq!(permissions[0].name().as_str(), "manage settings");
    assert_eq!(
        permissions[0].description(),
        Some("Permission to manage settings")
    );
}

#[tokio::test]
async fn repeated_create_reports_duplicate_name() {
    let repository = seeded_repository(&[], &[]).await;
    let service = service(repository);

    let first = service.execute("create permission \"view reports\"").await;
    let second = service.execute("create permission \"View Reports\"").await;

    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(CommandError::DuplicateName { entity: "permission", ref name }) if name == "View Reports"
    ));
}

#[tokio::test]
async fn store_conflict_on_create_is_reported_as_duplicate() {
    let repository = Arc::new(FakeRbacRepository {
        create_conflicts: true,
        ..FakeRbacRepository::default()
    });
    let service = service(repository);

    let outcome = service.execute("create permission \"audit\"").await;

    assert!(matches!(outcome, Err(CommandError::DuplicateName { .. })));
}

#[tokio::test]
async fn create_role_keeps_typed_casing() {
    let repository = seeded_repository(&[], &[]).await;
    let service = service(repository.clone());

    let outcome = service.execute("create a role called 'Support Agent'").await;

    assert_eq!(
        outcome.ok().and_then(|success| success.role_name),
        Some("Support Agent".to_owned())
    );
    assert_eq!(repository.list_roles().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn repeated_assign_is_idempotent() {
    let repository = seeded_repository(&["A"], &["B"]).await;
    let service = service(repository.clone());

    let first = service.execute("assign role \"A\" permission \"B\"").await;
    let second = service.execute("assign role \"a\" permission \"b\"").await;

    assert_eq!(first.map(|success| success.changed).ok(), Some(true));
    assert_eq!(second.map(|success| success.changed).ok(), Some(false));
    assert_eq!(
        repository.list_assignments().await.unwrap_or_default().len(),
        1
    );
}

#[tokio::test]
async fn unknown_role_is_rejected_without_mutation() {
    let repository = seeded_repository(&["A"], &["B"]).await;
    let service = service(repository.clone());

    let outcome = service
        .execute("assign role \"Ghost\" permission \"B\"")
        .await;

    assert!(matches!(
        outcome,
        Err(CommandError::RoleNotFound { ref name }) if name == "Ghost"
    ));
    assert_eq!(*repository.mutation_calls.lock().await, 0);
}

#[tokio::test]
async fn unknown_permission_is_rejected_without_mutation() {
    let repository = seeded_repository(&["A"], &["B"]).await;
    let service = service(repository.clone());

    let outcome = service
        .execute("give role \"A\" the permission \"Phantom\"")
        .await;

    assert!(matches!(
        outcome,
        Err(CommandError::PermissionNotFound { ref name }) if name == "Phantom"
    ));
    assert_eq!(*repository.mutation_calls.lock().await, 0);
}

#[tokio::test]
async fn unrecognized_text_is_not_understood_and_reads_nothing() {
    let repository = seeded_repository(&[], &[]).await;
    let service = service(repository.clone());

    let outcome = service.execute("what time is it").await;

    assert!(matches!(outcome, Err(CommandError::NotUnderstood)));
    assert_eq!(*repository.read_calls.lock().await, 0);
}

#[tokio::test]
async fn remove_with_reversed_clauses_revokes_grant() {
    let repository = seeded_repository(&["A"], &["B"]).await;
    let service = service(repository.clone());

    let assigned = service.execute("assign role \"A\" permission \"B\"").await;
    assert!(assigned.is_ok());

    let removed = service.execute("remove permission \"B\" role \"A\"").await;
    assert_eq!(removed.map(|success| success.changed).ok(), Some(true));
    assert!(
        repository
            .list_assignments()
            .await
            .unwrap_or_default()
            .is_empty()
    );

    let removed_again = service.execute("remove role \"A\" permission \"B\"").await;
    assert_eq!(removed_again.map(|success| success.changed).ok(), Some(false));
}

#[tokio::test]
async fn unrelated_store_error_on_assign_is_not_downgraded() {
    let repository = seeded_repository(&["A"], &["B"]).await;
    *repository.insert_assignment_error.lock().await =
        Some(AppError::Internal("connection reset".to_owned()));
    let service = service(repository);

    let outcome = service.execute("assign role \"A\" permission \"B\"").await;

    assert!(matches!(
        outcome,
        Err(CommandError::Store(AppError::Internal(_)))
    ));
}

#[tokio::test]
async fn referential_error_on_assign_surfaces_as_store_error() {
    let repository = seeded_repository(&["A"], &["B"]).await;
    *repository.insert_assignment_error.lock().await =
        Some(AppError::NotFound("role no longer exists".to_owned()));
    let service = service(repository);

    let outcome = service.execute("assign role \"A\" permission \"B\"").await;

    assert!(matches!(
        outcome,
        Err(CommandError::Store(AppError::NotFound(_)))
    ));
}

#[tokio::test]
async fn delete_permission_cascades_assignments() {
    let repository = seeded_repository(&["A"], &["B", "C"]).await;
    let service = service(repository.clone());

    assert!(
        service
            .execute("assign role \"A\" permission \"B\"")
            .await
            .is_ok()
    );
    assert!(
        service
            .execute("assign role \"A\" permission \"C\"")
            .await
            .is_ok()
    );

    let outcome = service.execute("delete the permission \"b\"").await;

    assert_eq!(
        outcome.ok().and_then(|success| success.permission_name),
        Some("B".to_owned())
    );
    let assignments = repository.list_assignments().await.unwrap_or_default();
    assert_eq!(assignments.len(), 1);
    let permissions = repository.list_permissions().await.unwrap_or_default();
    assert_eq!(permissions.len(), 1);
    assert_eq!(permissions[0].name().as_str(), "C");
}

#[tokio::test]
async fn delete_role_removes_role() {
    let repository = seeded_repository(&["Moderator"], &[]).await;
    let service = service(repository.clone());

    let outcome = service.execute("delete role \"moderator\"").await;

    assert!(outcome.is_ok());
    assert!(repository.list_roles().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn interpret_does_not_touch_the_store() {
    let repository = seeded_repository(&[], &[]).await;
    let service = service(repository.clone());

    let intent = service.interpret("create role \"Ops\"");

    assert_eq!(intent.map(|intent| intent.action()), Some(IntentAction::CreateRole));
    assert_eq!(*repository.read_calls.lock().await, 0);
}
