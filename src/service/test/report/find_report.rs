use super::*;

/// Tests reading back a report stored by a factory.
///
/// Expected: Ok(Some(report))
#[tokio::test]
async fn finds_stored_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, report) = factory::helpers::create_report_with_member(db).await?;

    let service = ReportService::new(db);
    let found = service
        .find_report(report.id.parse().unwrap())
        .await?
        .unwrap();

    assert_eq!(found.member_id.to_string(), member.id);

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

    let service = ReportService::new(db);

    assert!(service.find_report(999).await?.is_none());

    Ok(())
}
