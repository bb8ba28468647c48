use super::*;

/// Tests detecting a blacklisted user.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_blacklisted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_user(db, "1337", Some("spam")).await?;

    let repo = BlacklistRepository::new(db);

    assert!(repo.is_blacklisted(1337).await?);

    Ok(())
}

/// Tests a user who was never blacklisted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_user(db, "1337", None).await?;

    let repo = BlacklistRepository::new(db);

    assert!(!repo.is_blacklisted(42).await?);

    Ok(())
}
