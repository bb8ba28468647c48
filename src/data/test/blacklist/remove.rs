use super::*;

/// Tests removing a blacklisted user.
///
/// Expected: Ok(true) and the user is no longer blacklisted
#[tokio::test]
async fn removes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_user(db, "1337", None).await?;

    let repo = BlacklistRepository::new(db);

    assert!(repo.remove(1337).await?);
    assert!(!repo.is_blacklisted(1337).await?);

    Ok(())
}

/// Tests removing a user who is not blacklisted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_not_blacklisted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);

    assert!(!repo.remove(1337).await?);

    Ok(())
}
