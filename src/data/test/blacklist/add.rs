use super::*;

/// Tests blacklisting a new user.
///
/// Expected: Ok(BlacklistEntry) and the user is now blacklisted
#[tokio::test]
async fn adds_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);
    let entry = repo.add(1337, Some("spam".to_string())).await?;

    assert_eq!(entry.user_id, 1337);
    assert_eq!(entry.reason.as_deref(), Some("spam"));
    assert!(repo.is_blacklisted(1337).await?);

    Ok(())
}

/// Tests blacklisting a user twice.
///
/// Verifies the reason is replaced while the original creation time is kept.
///
/// Expected: Ok(BlacklistEntry) with the new reason, single row
#[tokio::test]
async fn updates_reason_for_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_blacklisted_user(db, "1337", Some("spam")).await?;

    let repo = BlacklistRepository::new(db);
    let entry = repo.add(1337, Some("abuse".to_string())).await?;

    assert_eq!(entry.reason.as_deref(), Some("abuse"));
    assert_eq!(entry.created_at, original.created_at);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
