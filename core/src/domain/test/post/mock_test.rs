use chrono::{TimeZone, Utc};

use crate::{
    MemoryDocumentStore, Service,
    domain::{
        common::{CoreError, UserId},
        post::{
            entities::{InsertPostInput, PostId, UpdatePostInput},
            ports::PostService,
        },
    },
};

fn service() -> Service<MemoryDocumentStore> {
    Service::new(MemoryDocumentStore::new())
}

fn post_input(user: &str) -> InsertPostInput {
    InsertPostInput {
        user_id: UserId::from(user),
        username: "Jordan".to_string(),
        description: "First day at the climbing gym".to_string(),
        user_image: Some("https://example.com/jordan.png".to_string()),
        created_at: None,
        likes: None,
    }
}

// == Create Post Tests ==

#[tokio::test]
async fn test_create_post_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let post = service
        .create_post(post_input("user-1"))
        .await
        .expect("create_post returned an error");

    assert!(!post.id.0.is_empty(), "Expected a store-assigned id");
    assert_eq!(post.user_id, UserId::from("user-1"), "Expected correct author");
    assert_eq!(post.username, "Jordan", "Expected correct username");
    assert!(post.likes.is_empty(), "Expected likes to default to empty");

    // a subsequent read returns an entity equal to the created one
    let fetched = service
        .get_post(&post.id)
        .await?
        .expect("created post should be readable");
    assert_eq!(fetched, post, "Expected get_post to round-trip the post");

    Ok(())
}

#[tokio::test]
async fn test_create_post_missing_username() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let mut input = post_input("user-1");
    input.username = "   ".to_string();

    let error = service
        .create_post(input)
        .await
        .expect_err("create_post should have returned an error");

    assert!(
        matches!(error, CoreError::MissingField { field: "username" }),
        "Expected missing username error, got {error}"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_post_missing_description() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let mut input = post_input("user-1");
    input.description = String::new();

    let error = service
        .create_post(input)
        .await
        .expect_err("create_post should have returned an error");

    assert!(
        matches!(error, CoreError::MissingField { field: "description" }),
        "Expected missing description error, got {error}"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_post_keeps_supplied_timestamp() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let at = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
    let mut input = post_input("user-1");
    input.created_at = Some(at);

    let post = service.create_post(input).await?;
    assert_eq!(post.created_at, at, "Expected the supplied timestamp");

    Ok(())
}

// == Get Post Tests ==

#[tokio::test]
async fn test_get_post_not_found_is_none() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let missing = service.get_post(&PostId::from("nonexistent".to_string())).await?;
    assert!(missing.is_none(), "Expected absence to read as None");

    Ok(())
}

// == List Posts Tests ==

#[tokio::test]
async fn test_list_posts_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let t3 = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();

    for at in [t1, t2, t3] {
        let mut input = post_input("user-1");
        input.created_at = Some(at);
        service.create_post(input).await?;
    }

    let posts = service.list_posts(None).await?;
    let stamps: Vec<_> = posts.iter().map(|post| post.created_at).collect();
    assert_eq!(stamps, vec![t3, t2, t1], "Expected newest-first ordering");

    Ok(())
}

#[tokio::test]
async fn test_list_posts_filtered_by_author() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let mut input = post_input("user-a");
    input.created_at = Some(t1);
    service.create_post(input).await?;

    let mut input = post_input("user-a");
    input.created_at = Some(t2);
    service.create_post(input).await?;

    service.create_post(post_input("user-b")).await?;

    let author = UserId::from("user-a");
    let posts = service.list_posts(Some(&author)).await?;

    assert_eq!(posts.len(), 2, "Expected only user-a's posts");
    assert!(
        posts.iter().all(|post| post.user_id == author),
        "Expected every post to belong to user-a"
    );
    assert_eq!(
        posts[0].created_at, t2,
        "Expected the filtered list newest-first"
    );

    Ok(())
}

// == Update Post Tests ==

#[tokio::test]
async fn test_update_post_merges_mutable_fields() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let created = service.create_post(post_input("user-1")).await?;

    let updated = service
        .update_post(UpdatePostInput {
            id: created.id.clone(),
            description: Some("Second session went better".to_string()),
            user_image: None,
        })
        .await
        .expect("update_post returned an error");

    assert_eq!(
        updated.description, "Second session went better",
        "Expected updated description"
    );
    assert_eq!(
        updated.user_image, created.user_image,
        "Expected unchanged image"
    );
    assert_eq!(updated.id, created.id, "Expected unchanged id");
    assert_eq!(
        updated.created_at, created.created_at,
        "Expected unchanged creation timestamp"
    );
    assert_eq!(updated.user_id, created.user_id, "Expected unchanged author");

    Ok(())
}

#[tokio::test]
async fn test_update_post_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let error = service
        .update_post(UpdatePostInput {
            id: PostId::from("nonexistent".to_string()),
            description: Some("anything".to_string()),
            user_image: None,
        })
        .await
        .expect_err("update_post should have returned an error");

    assert!(
        error.to_string().contains("not found"),
        "Expected post not found error"
    );

    Ok(())
}

// == Delete Post Tests ==

#[tokio::test]
async fn test_delete_post_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let created = service.create_post(post_input("user-1")).await?;

    service
        .delete_post(&created.id)
        .await
        .expect("delete_post returned an error");

    let missing = service.get_post(&created.id).await?;
    assert!(missing.is_none(), "Expected post to be deleted");

    Ok(())
}

#[tokio::test]
async fn test_delete_post_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let error = service
        .delete_post(&PostId::from("nonexistent".to_string()))
        .await
        .expect_err("delete_post should have returned an error");

    assert!(
        error.to_string().contains("not found"),
        "Expected post not found error"
    );

    Ok(())
}

// == Toggle Like Tests ==

#[tokio::test]
async fn test_toggle_like_symmetry() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let created = service.create_post(post_input("user-1")).await?;
    let liker = UserId::from("user-2");

    let liked = service.toggle_like(&created.id, &liker).await?;
    assert_eq!(liked.likes, vec![liker.clone()], "Expected the like recorded");

    let unliked = service.toggle_like(&created.id, &liker).await?;
    assert!(
        unliked.likes.is_empty(),
        "Expected the second toggle to remove the like"
    );

    // the store agrees with the returned entity
    let fetched = service
        .get_post(&created.id)
        .await?
        .expect("post should still exist");
    assert!(fetched.likes.is_empty(), "Expected the stored like set empty");

    Ok(())
}

#[tokio::test]
async fn test_toggle_like_is_per_user() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let created = service.create_post(post_input("user-1")).await?;
    let first = UserId::from("user-2");
    let second = UserId::from("user-3");

    service.toggle_like(&created.id, &first).await?;
    let post = service.toggle_like(&created.id, &second).await?;
    assert_eq!(
        post.likes,
        vec![first.clone(), second.clone()],
        "Expected both likes recorded"
    );

    let post = service.toggle_like(&created.id, &first).await?;
    assert_eq!(
        post.likes,
        vec![second],
        "Expected only the first user's like removed"
    );

    Ok(())
}

#[tokio::test]
async fn test_toggle_like_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let error = service
        .toggle_like(&PostId::from("nonexistent".to_string()), &UserId::from("user-2"))
        .await
        .expect_err("toggle_like should have returned an error");

    assert!(
        error.to_string().contains("not found"),
        "Expected post not found error"
    );

    Ok(())
}
