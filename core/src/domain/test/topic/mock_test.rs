use chrono::{TimeZone, Utc};

use crate::{
    MemoryDocumentStore, Service,
    domain::{
        common::UserId,
        topic::{
            entities::{InsertTopicInput, SLOT_COUNT, TopicId, TopicSlot, UpdateTopicInput},
            ports::TopicService,
        },
    },
};

fn service() -> Service<MemoryDocumentStore> {
    Service::new(MemoryDocumentStore::new())
}

fn slot(name: &str) -> TopicSlot {
    TopicSlot {
        name: name.to_string(),
        description: format!("about {name}"),
    }
}

#[tokio::test]
async fn test_create_topic_pads_slots_and_defaults_progress()
-> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let topic = service
        .create_topic(InsertTopicInput {
            user_id: UserId::from("user-1"),
            progress: None,
            slots: vec![slot("ownership"), slot("borrowing")],
            created_at: None,
        })
        .await
        .expect("create_topic returned an error");

    assert!(!topic.id.0.is_empty(), "Expected a store-assigned id");
    assert_eq!(topic.progress, 0, "Expected progress to default to 0");
    assert_eq!(topic.slots.len(), SLOT_COUNT, "Expected exactly five slots");
    assert_eq!(topic.slots[0].name, "ownership");
    assert_eq!(topic.slots[2], TopicSlot::default(), "Expected empty padding");

    let fetched = service
        .get_topic(&topic.id)
        .await?
        .expect("created topic should be readable");
    assert_eq!(fetched, topic, "Expected get_topic to round-trip");

    Ok(())
}

#[tokio::test]
async fn test_create_topic_keeps_out_of_range_progress()
-> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let topic = service
        .create_topic(InsertTopicInput {
            user_id: UserId::from("user-1"),
            progress: Some(250),
            slots: Vec::new(),
            created_at: None,
        })
        .await?;

    // progress is stored as supplied, never clamped
    assert_eq!(topic.progress, 250);
    let fetched = service.get_topic(&topic.id).await?.expect("topic should exist");
    assert_eq!(fetched.progress, 250);

    Ok(())
}

#[tokio::test]
async fn test_list_topics_by_owner_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let t1 = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 4, 2, 0, 0, 0).unwrap();

    service
        .create_topic(InsertTopicInput {
            user_id: UserId::from("user-a"),
            progress: Some(10),
            slots: Vec::new(),
            created_at: Some(t1),
        })
        .await?;
    service
        .create_topic(InsertTopicInput {
            user_id: UserId::from("user-a"),
            progress: Some(20),
            slots: Vec::new(),
            created_at: Some(t2),
        })
        .await?;
    service
        .create_topic(InsertTopicInput {
            user_id: UserId::from("user-b"),
            progress: Some(30),
            slots: Vec::new(),
            created_at: Some(t2),
        })
        .await?;

    let owner = UserId::from("user-a");
    let topics = service.list_topics(Some(&owner)).await?;

    assert_eq!(topics.len(), 2, "Expected only user-a's topics");
    assert_eq!(topics[0].progress, 20, "Expected newest-first ordering");
    assert_eq!(topics[1].progress, 10, "Expected newest-first ordering");

    Ok(())
}

#[tokio::test]
async fn test_update_topic_replaces_slots_and_progress()
-> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let created = service
        .create_topic(InsertTopicInput {
            user_id: UserId::from("user-1"),
            progress: Some(10),
            slots: vec![slot("ownership")],
            created_at: None,
        })
        .await?;

    let updated = service
        .update_topic(UpdateTopicInput {
            id: created.id.clone(),
            progress: Some(60),
            slots: Some(vec![slot("lifetimes"), slot("traits")]),
        })
        .await
        .expect("update_topic returned an error");

    assert_eq!(updated.progress, 60, "Expected updated progress");
    assert_eq!(updated.slots.len(), SLOT_COUNT, "Expected five slots");
    assert_eq!(updated.slots[0].name, "lifetimes");
    assert_eq!(updated.id, created.id, "Expected unchanged id");
    assert_eq!(updated.user_id, created.user_id, "Expected unchanged owner");
    assert_eq!(
        updated.created_at, created.created_at,
        "Expected unchanged creation timestamp"
    );

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_topic_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let missing = TopicId::from("nonexistent".to_string());

    let error = service
        .update_topic(UpdateTopicInput {
            id: missing.clone(),
            progress: Some(1),
            slots: None,
        })
        .await
        .expect_err("update_topic should have returned an error");
    assert!(error.to_string().contains("not found"));

    let error = service
        .delete_topic(&missing)
        .await
        .expect_err("delete_topic should have returned an error");
    assert!(error.to_string().contains("not found"));

    Ok(())
}
