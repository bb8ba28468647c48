use super::*;

/// Tests finding a report by ID.
///
/// Expected: Ok(Some(report))
#[tokio::test]
async fn finds_existing_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).id("42").build().await?;
    factory::report::ReportFactory::new(db, &member.id)
        .id("999")
        .suspect_activision_id("Cheater#9")
        .build()
        .await?;

    let repo = ReportRepository::new(db);
    let report = repo.find_by_id(999).await?.unwrap();

    assert_eq!(report.member_id, 42);
    assert_eq!(report.suspect_activision_id.as_deref(), Some("Cheater#9"));
    assert!(report.proof_links.is_empty());

    Ok(())
}

/// Tests looking up a report ID that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_report_with_member(db).await?;

    let repo = ReportRepository::new(db);

    assert!(repo.find_by_id(123_456_789_000).await?.is_none());

    Ok(())
}
