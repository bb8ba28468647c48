//! Commands restricted to the configured owners.

use poise::CreateReply;
use serenity::all::User;

use crate::{
    bot::{
        check::{is_owner, not_blacklisted},
        embed::{error_embed, info_embed, truncate_description},
        Context,
    },
    error::AppError,
    model::blacklist::BlacklistEntry,
    service::blacklist::BlacklistService,
};

/// Manage the users who may not use the bot.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Owner",
    subcommands("add", "remove", "list"),
    subcommand_required,
    check = "is_owner",
    check = "not_blacklisted"
)]
pub async fn blacklist(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Add a user to the blacklist.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Owner",
    check = "is_owner",
    check = "not_blacklisted"
)]
pub async fn add(
    ctx: Context<'_>,
    #[description = "User to blacklist"] user: User,
    #[description = "Why the user is blacklisted"]
    #[rest]
    reason: Option<String>,
) -> Result<(), AppError> {
    let (_, newly_added) = BlacklistService::new(&ctx.data().db)
        .add(user.id.get(), reason)
        .await?;

    let embed = if newly_added {
        info_embed(
            "User Blacklisted",
            format!("**{}** has been successfully added to the blacklist", user.name),
        )
    } else {
        info_embed(
            "User Blacklisted",
            format!("**{}** is already in the blacklist, the reason was updated", user.name),
        )
    };

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Remove a user from the blacklist.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Owner",
    check = "is_owner",
    check = "not_blacklisted"
)]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "User to remove from the blacklist"] user: User,
) -> Result<(), AppError> {
    let removed = BlacklistService::new(&ctx.data().db)
        .remove(user.id.get())
        .await?;

    let embed = if removed {
        info_embed(
            "User Removed",
            format!("**{}** has been successfully removed from the blacklist", user.name),
        )
    } else {
        error_embed(format!("**{}** is not in the blacklist.", user.name))
    };

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Show every blacklisted user.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Owner",
    check = "is_owner",
    check = "not_blacklisted"
)]
pub async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    let entries = BlacklistService::new(&ctx.data().db).get_all().await?;

    ctx.send(CreateReply::default().embed(info_embed(
        "Blacklisted Users",
        blacklist_description(&entries),
    )))
    .await?;

    Ok(())
}

fn blacklist_description(entries: &[BlacklistEntry]) -> String {
    if entries.is_empty() {
        return "There are currently no blacklisted users.".to_string();
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| match &entry.reason {
            Some(reason) => format!(
                "<@{}> - {} (since <t:{}:d>)",
                entry.user_id,
                reason,
                entry.created_at.timestamp()
            ),
            None => format!("<@{}> (since <t:{}:d>)", entry.user_id, entry.created_at.timestamp()),
        })
        .collect();

    truncate_description(lines.join("\n"))
}
