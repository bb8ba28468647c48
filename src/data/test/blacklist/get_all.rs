use super::*;

/// Tests listing every blacklist entry.
///
/// Expected: Ok(Vec) containing each blacklisted user
#[tokio::test]
async fn returns_all_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_user(db, "1", None).await?;
    factory::create_blacklisted_user(db, "2", Some("spam")).await?;

    let repo = BlacklistRepository::new(db);
    let mut ids: Vec<u64> = repo.get_all().await?.iter().map(|e| e.user_id).collect();
    ids.sort();

    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Tests listing an empty blacklist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BlacklistedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
