use poise::CreateReply;

use crate::{
    bot::{check::not_blacklisted, embed::member_embed, Context},
    error::AppError,
    model::member::RegisterMemberParam,
    service::member::MemberService,
};

/// Register as a bounty hunter to start submitting reports.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Registry",
    check = "not_blacklisted"
)]
pub async fn register(
    ctx: Context<'_>,
    #[description = "Your Activision ID, e.g. Name#1234567"] activision_id: String,
    #[description = "Four character passkey used to authorize your reports"] passkey: Option<
        String,
    >,
    #[description = "Your Twitter handle"] twitter_name: Option<String>,
) -> Result<(), AppError> {
    let member = MemberService::new(&ctx.data().db)
        .register(RegisterMemberParam {
            id: ctx.author().id.get(),
            guild_id: ctx.guild_id().map(|id| id.get()),
            activision_id,
            twitter_name,
            passkey,
        })
        .await?;

    ctx.send(
        CreateReply::default()
            .embed(member_embed(&member))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}
