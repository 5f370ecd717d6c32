use super::*;

/// Tests upserting a Discord identity that has never logged in before.
///
/// Verifies that a fresh user row is created with the reader role and no
/// ban flag.
///
/// Expected: Ok with a new reader user
#[tokio::test]
async fn first_login_creates_a_reader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert_discord(UpsertUserParam {
            discord_id: "123456789".to_string(),
            discord_username: "newcomer".to_string(),
            discord_email: "newcomer@example.com".to_string(),
            discord_avatar: Some("abc123".to_string()),
        })
        .await?;

    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.role, Role::Reader);
    assert!(!user.banned);
    assert!(user.display_name.is_none());
    assert!(user.biography.is_empty());

    Ok(())
}

/// Tests upserting a Discord identity that already has an account.
///
/// Verifies that the Discord profile columns are refreshed while the
/// locally owned fields (display name, role, ban flag) are untouched.
///
/// Expected: Ok with the same row updated in place
#[tokio::test]
async fn returning_login_refreshes_discord_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .discord_id("42")
        .display_name("Veteran")
        .role(Role::Moderator)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert_discord(UpsertUserParam {
            discord_id: "42".to_string(),
            discord_username: "renamed_on_discord".to_string(),
            discord_email: "new@example.com".to_string(),
            discord_avatar: None,
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.discord_username, "renamed_on_discord");
    assert_eq!(user.discord_email, "new@example.com");
    assert_eq!(user.discord_avatar, None);
    assert_eq!(user.display_name.as_deref(), Some("Veteran"));
    assert_eq!(user.role, Role::Moderator);

    let total = entity::prelude::User::find().count(db).await?;
    assert_eq!(total, 1);

    Ok(())
}
