use super::*;

/// Tests listing a member's reports newest first.
///
/// Expected: Ok(Vec) ordered by descending timestamp
#[tokio::test]
async fn returns_reports_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).id("42").build().await?;
    let now = Utc::now();
    for (id, age) in [("1", 3), ("2", 1), ("3", 2)] {
        factory::report::ReportFactory::new(db, &member.id)
            .id(id)
            .timestamp(now - Duration::hours(age))
            .build()
            .await?;
    }

    let repo = ReportRepository::new(db);
    let reports = repo.get_by_member(42, 10).await?;

    let ids: Vec<u64> = reports.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    Ok(())
}

/// Tests that the limit caps the number of reports returned.
///
/// Expected: Ok(Vec) with `limit` entries
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).id("42").build().await?;
    for _ in 0..5 {
        factory::report::create_report(db, &member.id).await?;
    }

    let repo = ReportRepository::new(db);

    assert_eq!(repo.get_by_member(42, 3).await?.len(), 3);

    Ok(())
}

/// Tests that only the requested member's reports are returned.
///
/// Expected: Ok(Vec) excluding other members' reports
#[tokio::test]
async fn excludes_other_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db).id("42").build().await?;
    let other = factory::member::create_member(db).await?;
    factory::report::create_report(db, &member.id).await?;
    factory::report::create_report(db, &other.id).await?;

    let repo = ReportRepository::new(db);
    let reports = repo.get_by_member(42, 10).await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].member_id, 42);

    Ok(())
}

/// Tests listing for a member with no reports.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_member_without_reports() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db).id("42").build().await?;

    let repo = ReportRepository::new(db);

    assert!(repo.get_by_member(42, 10).await?.is_empty());

    Ok(())
}
