use chrono::{TimeZone, Utc};

use crate::{
    MemoryDocumentStore, Service,
    domain::{
        common::UserId,
        user_status::{
            entities::{InsertUserStatusInput, UpdateUserStatusInput, UserStatusId},
            ports::UserStatusService,
        },
    },
};

fn service() -> Service<MemoryDocumentStore> {
    Service::new(MemoryDocumentStore::new())
}

fn status_input(user: &str) -> InsertUserStatusInput {
    InsertUserStatusInput {
        user_id: UserId::from(user),
        username: "Alex".to_string(),
        description: "Out hiking this week".to_string(),
        image_url: None,
        created_at: None,
    }
}

#[tokio::test]
async fn test_create_user_status_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let status = service
        .create_user_status(status_input("user-1"))
        .await
        .expect("create_user_status returned an error");

    assert!(!status.id.0.is_empty(), "Expected a store-assigned id");
    assert!(status.image_url.is_none(), "Expected no image");

    let fetched = service
        .get_user_status(&status.id)
        .await?
        .expect("created status should be readable");
    assert_eq!(fetched, status, "Expected get_user_status to round-trip");

    Ok(())
}

#[tokio::test]
async fn test_list_user_statuses_by_owner() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();

    let mut input = status_input("user-a");
    input.created_at = Some(t1);
    service.create_user_status(input).await?;

    let mut input = status_input("user-a");
    input.created_at = Some(t2);
    service.create_user_status(input).await?;

    service.create_user_status(status_input("user-b")).await?;

    let owner = UserId::from("user-a");
    let statuses = service.list_user_statuses(Some(&owner)).await?;

    assert_eq!(statuses.len(), 2, "Expected only user-a's statuses");
    assert_eq!(statuses[0].created_at, t2, "Expected newest-first ordering");

    Ok(())
}

#[tokio::test]
async fn test_update_user_status_merges_fields() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let created = service.create_user_status(status_input("user-1")).await?;

    let updated = service
        .update_user_status(UpdateUserStatusInput {
            id: created.id.clone(),
            username: None,
            description: Some("Back from the trail".to_string()),
            image_url: Some("https://example.com/summit.png".to_string()),
        })
        .await
        .expect("update_user_status returned an error");

    assert_eq!(updated.username, created.username, "Expected unchanged name");
    assert_eq!(updated.description, "Back from the trail");
    assert_eq!(
        updated.image_url.as_deref(),
        Some("https://example.com/summit.png")
    );
    assert_eq!(updated.id, created.id, "Expected unchanged id");
    assert_eq!(
        updated.created_at, created.created_at,
        "Expected unchanged creation timestamp"
    );

    Ok(())
}

#[tokio::test]
async fn test_user_status_not_found_paths() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let missing = UserStatusId::from("nonexistent".to_string());

    assert!(
        service.get_user_status(&missing).await?.is_none(),
        "Expected absence to read as None"
    );

    let error = service
        .update_user_status(UpdateUserStatusInput {
            id: missing.clone(),
            username: None,
            description: None,
            image_url: None,
        })
        .await
        .expect_err("update_user_status should have returned an error");
    assert!(error.to_string().contains("not found"));

    let error = service
        .delete_user_status(&missing)
        .await
        .expect_err("delete_user_status should have returned an error");
    assert!(error.to_string().contains("not found"));

    Ok(())
}
