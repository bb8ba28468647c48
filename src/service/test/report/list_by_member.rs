use super::*;

/// Tests listing a member's reports through the ledger.
///
/// Expected: Ok(Vec) newest first
#[tokio::test]
async fn lists_reports_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).id("42").build().await?;
    let now = Utc::now();
    factory::report::ReportFactory::new(db, &member.id)
        .id("10")
        .timestamp(now - Duration::days(2))
        .build()
        .await?;
    factory::report::ReportFactory::new(db, &member.id)
        .id("11")
        .timestamp(now)
        .build()
        .await?;

    let service = ReportService::new(db);
    let reports = service.list_by_member(42, 5).await?;

    let ids: Vec<u64> = reports.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![11, 10]);

    Ok(())
}

/// Tests that a zero limit still returns the newest report.
///
/// Expected: Ok(Vec) with one report
#[tokio::test]
async fn clamps_zero_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).id("42").build().await?;
    factory::report::create_report(db, &member.id).await?;
    factory::report::create_report(db, &member.id).await?;

    let service = ReportService::new(db);

    assert_eq!(service.list_by_member(42, 0).await?.len(), 1);

    Ok(())
}

/// Tests listing reports for someone who is not registered.
///
/// Expected: Err(UnknownMember)
#[tokio::test]
async fn fails_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReportService::new(db);
    let result = service.list_by_member(42, 5).await;

    assert!(matches!(
        result,
        Err(AppError::RegistryErr(RegistryError::UnknownMember(42)))
    ));

    Ok(())
}
