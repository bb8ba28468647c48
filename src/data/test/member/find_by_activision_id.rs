use super::*;

/// Tests finding a member by Activision handle.
///
/// Expected: Ok(Some(member))
#[tokio::test]
async fn finds_member_by_activision_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .id("42")
        .activision_id("Ghost#123")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo.find_by_activision_id("Ghost#123").await?;

    assert_eq!(member.map(|m| m.id), Some(42));

    Ok(())
}

/// Tests that Activision handles are matched exactly.
///
/// Expected: Ok(None) for a handle differing only in case
#[tokio::test]
async fn matches_exactly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .activision_id("Ghost#123")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(repo.find_by_activision_id("ghost#123").await?.is_none());

    Ok(())
}
