use super::*;

/// Tests removing a listed user and then removing them again.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn removes_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_user(db, "1337", None).await?;

    let service = BlacklistService::new(db);

    assert!(service.remove(1337).await?);
    assert!(!service.remove(1337).await?);
    assert!(!service.is_blacklisted(1337).await?);

    Ok(())
}
