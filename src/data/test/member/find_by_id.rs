use super::*;

/// Tests finding a member by Discord ID.
///
/// Expected: Ok(Some(member))
#[tokio::test]
async fn finds_existing_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .id("42")
        .activision_id("Ghost#123")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo.find_by_id(42).await?;

    assert!(member.is_some());
    let member = member.unwrap();
    assert_eq!(member.id.to_string(), created.id);
    assert_eq!(member.activision_id, "Ghost#123");

    Ok(())
}

/// Tests looking up an ID nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::create_member(db).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.find_by_id(999_999_999).await?.is_none());

    Ok(())
}
