use super::*;

/// Tests registering a member with a valid passkey.
///
/// Verifies that only the digest of the passkey is stored and that `joined_on`
/// is set to the time of registration.
///
/// Expected: Ok(Member)
#[tokio::test]
async fn registers_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now();
    let service = MemberService::new(db);
    let member = service
        .register(RegisterMemberParam {
            guild_id: Some(777),
            twitter_name: Some("@ghost".to_string()),
            ..register_param(42, "Ghost#123", Some("1234"))
        })
        .await?;

    assert_eq!(member.id, 42);
    assert_eq!(member.guild_id, Some(777));
    assert_eq!(member.activision_id, "Ghost#123");
    assert_eq!(member.twitter_name.as_deref(), Some("ghost"));
    assert_eq!(member.passkey_hash, passkey::hash("1234"));
    assert_ne!(member.passkey_hash, "1234");
    assert!(member.joined_on >= before - chrono::Duration::seconds(1));

    Ok(())
}

/// Tests that a wrong-length passkey is replaced by the default before hashing.
///
/// Expected: "0000" passes the check, the supplied "5" does not
#[tokio::test]
async fn substitutes_default_for_short_passkey() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let member = service
        .register(register_param(42, "Ghost#123", Some("5")))
        .await?;

    assert!(member.check_passkey("0000"));
    assert!(!member.check_passkey("5"));

    Ok(())
}

/// Tests registering without a passkey.
///
/// An omitted passkey is treated the same as a malformed one.
///
/// Expected: "0000" passes the check
#[tokio::test]
async fn applies_default_when_passkey_omitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let member = service.register(register_param(42, "Ghost#123", None)).await?;

    assert!(member.check_passkey(passkey::DEFAULT_PASSKEY));

    Ok(())
}

/// Tests registering a second member with a taken Activision handle.
///
/// Expected: Err(UniquenessViolation) on `activision_id`, first member untouched
#[tokio::test]
async fn rejects_duplicate_activision_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    service
        .register(register_param(42, "Ghost#123", Some("1234")))
        .await?;

    let result = service
        .register(register_param(43, "Ghost#123", Some("9999")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistryErr(RegistryError::UniquenessViolation {
            entity: "member",
            field: "activision_id",
            ..
        }))
    ));
    assert!(service.check_passkey(42, "1234").await?);
    assert!(matches!(
        service.get_member(43).await,
        Err(AppError::RegistryErr(RegistryError::UnknownMember(43)))
    ));

    Ok(())
}

/// Tests registering the same Discord user twice.
///
/// Expected: Err(UniquenessViolation) on `id`
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db).id("42").build().await?;

    let service = MemberService::new(db);
    let result = service
        .register(register_param(42, "Fresh#1", Some("1234")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistryErr(RegistryError::UniquenessViolation { field: "id", .. }))
    ));

    Ok(())
}

/// Tests registering with a Twitter handle another member already uses.
///
/// Expected: Err(UniquenessViolation) on `twitter_name`
#[tokio::test]
async fn rejects_duplicate_twitter_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .twitter_name("ghost")
        .build()
        .await?;

    let service = MemberService::new(db);
    let result = service
        .register(RegisterMemberParam {
            twitter_name: Some("ghost".to_string()),
            ..register_param(42, "Ghost#123", Some("1234"))
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistryErr(RegistryError::UniquenessViolation {
            field: "twitter_name",
            ..
        }))
    ));

    Ok(())
}

/// Tests validation of the Activision handle.
///
/// Expected: Err(ValidationErr) for blank or overlong handles
#[tokio::test]
async fn rejects_invalid_activision_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);

    let blank = service.register(register_param(42, "  ", None)).await;
    assert!(matches!(
        blank,
        Err(AppError::ValidationErr(ValidationError::MissingField("activision_id")))
    ));

    let long = "x".repeat(200);
    let overlong = service.register(register_param(42, &long, None)).await;
    assert!(matches!(
        overlong,
        Err(AppError::ValidationErr(ValidationError::TooLong {
            field: "activision_id",
            ..
        }))
    ));

    Ok(())
}
