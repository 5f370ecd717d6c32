use super::*;

/// Tests updating only the display name.
///
/// Verifies that unset fields are left alone.
///
/// Expected: Ok(Some) with the new name and the old biography
#[tokio::test]
async fn updates_only_the_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .display_name("Before")
        .biography("Keeps reading the news.")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParam {
                display_name: Some("After".to_string()),
                biography: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.display_name.as_deref(), Some("After"));
    assert_eq!(updated.biography, "Keeps reading the news.");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_user_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_profile(
            9999,
            UpdateProfileParam {
                display_name: Some("Ghost".to_string()),
                biography: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
