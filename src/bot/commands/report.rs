//! Report submission and listing commands.

use entity::sea_orm_active_enums::{Location, Platform, Timezone};
use poise::CreateReply;

use crate::{
    bot::{
        check::not_blacklisted,
        embed::{report_embed, report_list_embed},
        Context,
    },
    error::AppError,
    model::report::{choice_values, SubmitReportParam},
    service::report::ReportService,
};

/// Number of reports shown by the `reports` command.
const LISTED_REPORTS: u64 = 10;

/// Report a suspected cheater.
#[allow(clippy::too_many_arguments)]
#[poise::command(
    slash_command,
    prefix_command,
    category = "Reports",
    check = "not_blacklisted"
)]
pub async fn report(
    ctx: Context<'_>,
    #[description = "Your registered passkey"] passkey: String,
    #[description = "Activision ID of the suspect"] suspect_activision_id: String,
    #[description = "Timezone the match was played in"]
    #[autocomplete = "autocomplete_timezone"]
    timezone: Option<String>,
    #[description = "Game mode the match was played in"]
    #[autocomplete = "autocomplete_location"]
    location: Option<String>,
    #[description = "Platform the suspect plays on"]
    #[autocomplete = "autocomplete_platform"]
    platform: Option<String>,
    #[description = "What happened"] message: Option<String>,
    #[description = "Link to a clip or screenshot"] proof_link: Option<String>,
    #[description = "Second proof link"] proof_link_2: Option<String>,
    #[description = "Third proof link"] proof_link_3: Option<String>,
    #[description = "GameBattles ID of the suspect"] gamebattles_id: Option<String>,
    #[description = "CMG ID of the suspect"] cmg_id: Option<String>,
) -> Result<(), AppError> {
    let report = ReportService::new(&ctx.data().db)
        .submit_report(SubmitReportParam {
            report_id: ctx.id(),
            member_id: ctx.author().id.get(),
            guild_id: ctx.guild_id().map(|id| id.get()),
            passkey,
            timezone,
            location,
            suspect_activision_id,
            suspect_platform: platform,
            reporter_message: message,
            proof_link_1: proof_link,
            proof_link_2,
            proof_link_3,
            suspect_gamebattles_id: gamebattles_id,
            suspect_cmg_id: cmg_id,
        })
        .await?;

    ctx.send(
        CreateReply::default()
            .embed(report_embed(&report)?)
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

/// List the reports you have submitted most recently.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Reports",
    check = "not_blacklisted"
)]
pub async fn reports(ctx: Context<'_>) -> Result<(), AppError> {
    let reports = ReportService::new(&ctx.data().db)
        .list_by_member(ctx.author().id.get(), LISTED_REPORTS)
        .await?;

    ctx.send(
        CreateReply::default()
            .embed(report_list_embed(&reports))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

async fn autocomplete_timezone(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    matching(choice_values::<Timezone>(), partial)
}

async fn autocomplete_location(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    matching(choice_values::<Location>(), partial)
}

async fn autocomplete_platform(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    matching(choice_values::<Platform>(), partial)
}

fn matching(values: Vec<String>, partial: &str) -> Vec<String> {
    let partial = partial.trim().to_lowercase();

    values
        .into_iter()
        .filter(|value| value.to_lowercase().starts_with(&partial))
        .collect()
}
