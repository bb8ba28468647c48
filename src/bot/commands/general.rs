//! General purpose commands: help, bot and server information, links.

use std::collections::BTreeMap;

use poise::CreateReply;
use serenity::all::CreateMessage;

use crate::{
    bot::{
        check::not_blacklisted,
        embed::{error_embed, info_embed, link_embed, server_info_embed, COLOR_INFO},
        Context, Data,
    },
    error::AppError,
};

/// List all commands the bot has loaded.
#[poise::command(slash_command, prefix_command, category = "General", check = "not_blacklisted")]
pub async fn help(ctx: Context<'_>) -> Result<(), AppError> {
    let sections = help_sections(&ctx.framework().options().commands, &ctx.data().prefix);

    let mut embed = info_embed("Help", "List of available commands:");
    for (category, text) in sections {
        embed = embed.field(category, format!("```{}```", text), false);
    }

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Get some useful information about the bot.
#[poise::command(slash_command, prefix_command, category = "General", check = "not_blacklisted")]
pub async fn botinfo(ctx: Context<'_>) -> Result<(), AppError> {
    let data = ctx.data();
    let mut owners: Vec<String> = data.owners.iter().map(|id| format!("<@{}>", id)).collect();
    owners.sort();

    let embed = serenity::all::CreateEmbed::new()
        .author(serenity::all::CreateEmbedAuthor::new("Bot Information"))
        .description("A bounty hunter bot for reporting cheaters.")
        .color(COLOR_INFO)
        .field("Owner:", owners.join(", "), true)
        .field("Version:", env!("CARGO_PKG_VERSION"), true)
        .field("Built with:", "Rust, poise and serenity", true)
        .field(
            "Prefix:",
            format!(
                "/ (Slash Commands) or {} for normal commands.",
                data.prefix
            ),
            false,
        )
        .footer(serenity::all::CreateEmbedFooter::new(format!(
            "Requested by {}",
            ctx.author().name
        )));

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Get some useful information about the server.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    category = "General",
    check = "not_blacklisted"
)]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), AppError> {
    // The cache guard must be dropped before awaiting.
    let embed = ctx.guild().map(|guild| server_info_embed(&guild));

    let embed = embed.unwrap_or_else(|| error_embed("Server information is not available yet."));
    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Check if the bot is alive.
#[poise::command(slash_command, prefix_command, category = "General", check = "not_blacklisted")]
pub async fn ping(ctx: Context<'_>) -> Result<(), AppError> {
    let latency = ctx.ping().await;

    let embed = info_embed(
        "Pong!",
        format!("The bot latency is {}ms", latency.as_millis()),
    );
    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Get the invite link of the bot to be able to invite it.
#[poise::command(slash_command, prefix_command, category = "General", check = "not_blacklisted")]
pub async fn invite(ctx: Context<'_>) -> Result<(), AppError> {
    let data = ctx.data();
    let embed = link_embed(format!(
        "Invite me by clicking [here]({}).",
        invite_url(data.application_id, data.permissions)
    ));

    send_private(ctx, embed).await
}

/// Get the invite link of the support server.
#[poise::command(slash_command, prefix_command, category = "General", check = "not_blacklisted")]
pub async fn server(ctx: Context<'_>) -> Result<(), AppError> {
    let Some(url) = ctx.data().support_guild_url.clone() else {
        ctx.send(CreateReply::default().embed(error_embed("No support server is configured.")))
            .await?;
        return Ok(());
    };

    let embed = link_embed(format!(
        "Join the support server for the bot by clicking [here]({}).",
        url
    ));

    send_private(ctx, embed).await
}

/// DMs the embed to the author, falling back to the channel when DMs are closed.
async fn send_private(ctx: Context<'_>, embed: serenity::all::CreateEmbed) -> Result<(), AppError> {
    let dm = ctx
        .author()
        .direct_message(ctx.serenity_context(), CreateMessage::new().embed(embed.clone()))
        .await;

    match dm {
        Ok(_) => {
            ctx.say("I sent you a private message!").await?;
        }
        Err(e) => {
            tracing::debug!(user_id = ctx.author().id.get(), "Could not DM user: {}", e);
            ctx.send(CreateReply::default().embed(embed)).await?;
        }
    }

    Ok(())
}

/// OAuth2 link that adds the bot to a server with the configured permissions.
pub fn invite_url(application_id: u64, permissions: u64) -> String {
    format!(
        "https://discordapp.com/oauth2/authorize?&client_id={}&scope=bot+applications.commands&permissions={}",
        application_id, permissions
    )
}

/// Groups visible commands by category as `(category, "prefixname - description" lines)`.
///
/// Only the first line of each description is shown. Categories are sorted by name.
pub fn help_sections(
    commands: &[poise::Command<Data, AppError>],
    prefix: &str,
) -> Vec<(String, String)> {
    let mut sections: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for command in commands.iter().filter(|c| !c.hide_in_help) {
        let category = command
            .category
            .clone()
            .unwrap_or_else(|| "Other".to_string());
        let description = command
            .description
            .as_deref()
            .and_then(|d| d.lines().next())
            .unwrap_or_default();

        sections
            .entry(category)
            .or_default()
            .push(format!("{}{} - {}", prefix, command.name, description));
    }

    sections
        .into_iter()
        .map(|(category, lines)| (category, lines.join("\n")))
        .collect()
}
