use super::*;

/// Tests appending a report for an existing member.
///
/// Verifies that every field round-trips through the database and that proof
/// links keep their slot order.
///
/// Expected: Ok(Report)
#[tokio::test]
async fn creates_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db).id("42").build().await?;

    let repo = ReportRepository::new(db);
    let report = repo
        .create(CreateReportParam {
            guild_id: Some(777),
            location: Location::RankedMode,
            suspect_platform: Platform::Xbox,
            reporter_message: Some("aimbot".to_string()),
            proof_link_1: Some("https://clips.example/1".to_string()),
            proof_link_3: Some("https://clips.example/3".to_string()),
            authorized: true,
            ..create_param(999, 42)
        })
        .await?;

    assert_eq!(report.id, 999);
    assert_eq!(report.member_id, 42);
    assert_eq!(report.guild_id, Some(777));
    assert_eq!(report.timezone, Timezone::Cst);
    assert_eq!(report.location, Location::RankedMode);
    assert_eq!(report.suspect_platform, Platform::Xbox);
    assert_eq!(report.suspect_activision_id.as_deref(), Some("Cheater#9"));
    assert_eq!(report.reporter_message.as_deref(), Some("aimbot"));
    assert_eq!(
        report.proof_links,
        vec!["https://clips.example/1", "https://clips.example/3"]
    );
    assert!(report.authorized);

    Ok(())
}

/// Tests appending a report whose ID is already in the ledger.
///
/// Expected: Err(UniquenessViolation) on report `id`, and the first report unchanged
#[tokio::test]
async fn rejects_duplicate_report_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db).id("42").build().await?;

    let repo = ReportRepository::new(db);
    repo.create(create_param(999, 42)).await?;

    let result = repo
        .create(CreateReportParam {
            authorized: true,
            ..create_param(999, 42)
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistryErr(RegistryError::UniquenessViolation {
            entity: "report",
            field: "id",
            ..
        }))
    ));
    let stored = repo.find_by_id(999).await?.unwrap();
    assert!(!stored.authorized);

    Ok(())
}
