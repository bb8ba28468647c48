use super::*;

/// Tests finding a member by Twitter handle.
///
/// Expected: Ok(Some(member))
#[tokio::test]
async fn finds_member_by_twitter_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .id("42")
        .twitter_name("ghost")
        .build()
        .await?;
    factory::member::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let member = repo.find_by_twitter_name("ghost").await?;

    assert_eq!(member.map(|m| m.id), Some(42));

    Ok(())
}

/// Tests looking up a Twitter handle nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_twitter_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::create_member(db).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.find_by_twitter_name("nobody").await?.is_none());

    Ok(())
}
