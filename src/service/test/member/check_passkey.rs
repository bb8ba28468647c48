use super::*;

/// Tests that the passkey given at registration passes the check.
///
/// Expected: Ok(true) for each registered passkey
#[tokio::test]
async fn accepts_registered_passkey() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    for (id, key) in [(1, "0000"), (2, "1234"), (3, "9876"), (4, "0420")] {
        service
            .register(register_param(id, &format!("Player#{}", id), Some(key)))
            .await?;

        assert!(service.check_passkey(id, key).await?);
    }

    Ok(())
}

/// Tests that a different 4-digit passkey fails the check.
///
/// Expected: Ok(false)
#[tokio::test]
async fn rejects_other_passkey() -> Result<(), AppError> {
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

    for candidate in ["1235", "4321", "0000", "9999"] {
        assert!(!service.check_passkey(42, candidate).await?);
    }

    Ok(())
}

/// Tests that checking never changes the stored digest.
///
/// Expected: digest identical before and after failed and successful checks
#[tokio::test]
async fn does_not_mutate_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let before = service
        .register(register_param(42, "Ghost#123", Some("1234")))
        .await?;

    service.check_passkey(42, "9999").await?;
    service.check_passkey(42, "1234").await?;

    assert_eq!(service.get_member(42).await?, before);

    Ok(())
}

/// Tests checking a passkey for a member nobody registered.
///
/// Expected: Err(UnknownMember)
#[tokio::test]
async fn fails_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let result = service.check_passkey(42, "1234").await;

    assert!(matches!(
        result,
        Err(AppError::RegistryErr(RegistryError::UnknownMember(42)))
    ));

    Ok(())
}
