//! End-to-end user lifecycle on an in-memory SQLite database.

mod common;

use chrono::Utc;

use ambillion_api::domain::{NewDocument, Role, UserStatus};
use ambillion_api::errors::AppError;
use ambillion_api::infra::{DocumentRepository, UnitOfWork};
use ambillion_api::services::{StatusChange, UserService};

use common::{form, setup_database, user_manager};

#[tokio::test]
async fn test_register_approve_login() {
    let db = setup_database().await;
    let (service, _) = user_manager(&db);

    let registered = service
        .register_manufacturer(form("A", "B", "a@b.com", "pw123"))
        .await
        .unwrap();

    assert_eq!(registered.role, Role::Manufacturer);
    assert_eq!(registered.status, UserStatus::Pending);
    assert_ne!(registered.password.as_str(), "pw123");

    let approved = match service.approve_manufacturer(registered.id).await.unwrap() {
        StatusChange::Updated(user) => user,
        StatusChange::NotFound => panic!("registered user vanished"),
    };
    assert_eq!(approved.status, UserStatus::Approved);
    assert_eq!(approved.registered_date, registered.registered_date);

    let logged_in = service.login_user("a@b.com", "pw123").await.unwrap();
    assert_eq!(logged_in.map(|u| u.id), Some(registered.id));

    assert!(service.login_user("a@b.com", "wrong").await.unwrap().is_none());
    assert!(service.login_user("z@b.com", "pw123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_registration_keeps_first_record() {
    let db = setup_database().await;
    let (service, _) = user_manager(&db);

    let first = service
        .register_manufacturer(form("A", "B", "a@b.com", "pw123"))
        .await
        .unwrap();

    let result = service
        .register_manufacturer(form("Eve", "X", "a@b.com", "other"))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let users = service.get_all_users().await.unwrap();
    assert_eq!(users, vec![first]);
    assert!(service.login_user("a@b.com", "pw123").await.unwrap().is_some());
}

#[tokio::test]
async fn test_approve_missing_id_leaves_store_unchanged() {
    let db = setup_database().await;
    let (service, _) = user_manager(&db);

    let user = service
        .register_manufacturer(form("A", "B", "a@b.com", "pw123"))
        .await
        .unwrap();

    assert_eq!(
        service.approve_manufacturer(user.id + 100).await.unwrap(),
        StatusChange::NotFound
    );
    assert_eq!(
        service.reject_manufacturer(user.id + 100).await.unwrap(),
        StatusChange::NotFound
    );
    assert_eq!(service.get_all_users().await.unwrap(), vec![user]);
}

#[tokio::test]
async fn test_rejected_user_cannot_be_approved() {
    let db = setup_database().await;
    let (service, _) = user_manager(&db);

    let user = service
        .register_manufacturer(form("A", "B", "a@b.com", "pw123"))
        .await
        .unwrap();

    let rejected = service.reject_manufacturer(user.id).await.unwrap();
    assert!(matches!(rejected, StatusChange::Updated(ref u) if u.status == UserStatus::Rejected));

    let result = service.approve_manufacturer(user.id).await;
    assert!(matches!(
        result,
        Err(AppError::InvalidTransition {
            from: UserStatus::Rejected,
            to: UserStatus::Approved
        })
    ));

    let current = service.get_user_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(current.status, UserStatus::Rejected);
}

#[tokio::test]
async fn test_add_agent_is_approved_with_country() {
    let db = setup_database().await;
    let (service, _) = user_manager(&db);

    let agent = service
        .add_agent(
            form("Li", "Wei", "li@wei.cn", "pw123"),
            Role::DestinationAgent,
            "Germany".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(agent.role, Role::DestinationAgent);
    assert_eq!(agent.status, UserStatus::Approved);
    assert_eq!(agent.country.as_deref(), Some("Germany"));

    let result = service
        .add_agent(
            form("Al", "Bo", "al@bo.com", "pw123"),
            Role::Manufacturer,
            "Germany".to_string(),
        )
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(service.get_all_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_agent_rejects_overlong_country() {
    let db = setup_database().await;
    let (service, _) = user_manager(&db);

    let result = service
        .add_agent(
            form("Li", "Wei", "li@wei.cn", "pw123"),
            Role::OriginAgent,
            "X".repeat(51),
        )
        .await;

    match result {
        Err(AppError::InvalidFields(fields)) => {
            assert_eq!(fields.get("country").map(String::as_str), Some("Country is too long"));
        }
        other => panic!("expected InvalidFields, got {:?}", other),
    }
    assert!(service.get_all_users().await.unwrap().is_empty());

    let agent = service
        .add_agent(
            form("Li", "Wei", "li@wei.cn", "pw123"),
            Role::OriginAgent,
            "X".repeat(50),
        )
        .await
        .unwrap();
    assert_eq!(agent.country.map(|c| c.len()), Some(50));
}

#[tokio::test]
async fn test_update_keeps_registration_and_status() {
    let db = setup_database().await;
    let (service, _) = user_manager(&db);

    let user = service
        .register_manufacturer(form("A", "B", "a@b.com", "pw123"))
        .await
        .unwrap();

    let mut changes = form("Ann", "B", "ann@b.com", "new-secret");
    changes.company = Some("Acme".to_string());
    let updated = service.update_user(user.id, changes).await.unwrap().unwrap();

    assert_eq!(updated.first_name, "Ann");
    assert_eq!(updated.company.as_deref(), Some("Acme"));
    assert_eq!(updated.role, Role::Manufacturer);
    assert_eq!(updated.status, UserStatus::Pending);
    assert_eq!(updated.registered_date, user.registered_date);
    assert!(updated.audit_timestamp >= user.audit_timestamp);

    assert!(service.login_user("a@b.com", "pw123").await.unwrap().is_none());
    assert!(service.login_user("ann@b.com", "new-secret").await.unwrap().is_some());

    assert!(service
        .update_user(user.id + 1, form("X", "Y", "x@y.com", "pw"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_detaches_documents() {
    let db = setup_database().await;
    let (service, uow) = user_manager(&db);

    let user = service
        .register_manufacturer(form("A", "B", "a@b.com", "pw123"))
        .await
        .unwrap();

    let document = uow
        .documents()
        .insert(NewDocument {
            name: "certificate.pdf".to_string(),
            content_path: None,
            doc_type: "CERTIFICATE".to_string(),
            file_type: "pdf".to_string(),
            description: Some("Origin certificate".to_string()),
            audit_user_id: Some(user.id),
            audit_timestamp: Utc::now(),
        })
        .await
        .unwrap();
    assert_eq!(document.audit_user_id, Some(user.id));

    assert!(service.delete_user(user.id).await.unwrap());
    assert!(service.get_user_by_id(user.id).await.unwrap().is_none());
    assert!(uow.documents().find_by_user(user.id).await.unwrap().is_empty());

    assert!(!service.delete_user(user.id).await.unwrap());
}
