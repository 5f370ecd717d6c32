use super::*;

/// Tests banning a user.
///
/// Verifies that the ban flag and the role column are set together so the
/// stored role never disagrees with the flag.
///
/// Expected: Ok(Some) with banned = true and role = Banned
#[tokio::test]
async fn ban_sets_flag_and_role_together() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, Role::Moderator).await?;

    let repo = UserRepository::new(db);
    let banned = repo.ban(user.id).await?.unwrap();

    assert!(banned.banned);
    assert_eq!(banned.role, Role::Banned);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.banned);
    assert_eq!(stored.role, Role::Banned);

    Ok(())
}

/// Tests banning a user that does not exist.
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

    let result = UserRepository::new(db).ban(9999).await?;

    assert!(result.is_none());

    Ok(())
}
