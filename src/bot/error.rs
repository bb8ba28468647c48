//! Framework error hook.
//!
//! Every failure surfaced by poise ends here and is answered with an embed. Errors never
//! propagate out of the framework, so one failing command cannot take the bot down.

use std::time::Duration;

use poise::{CreateReply, FrameworkError};
use serenity::all::{CreateEmbed, Permissions};

use crate::{
    bot::{
        embed::{error_embed, titled_error_embed},
        Context, Data,
    },
    error::AppError,
};

/// Handles an error raised while dispatching or running a command.
pub async fn on_error(error: FrameworkError<'_, Data, AppError>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            reply(ctx, error.into_embed()).await;
        }
        FrameworkError::CommandCheckFailed { error, ctx, .. } => {
            let embed = match error {
                Some(error) => error.into_embed(),
                None => error_embed("You are not allowed to use this command."),
            };
            reply(ctx, embed).await;
        }
        FrameworkError::CooldownHit {
            remaining_cooldown,
            ctx,
            ..
        } => {
            reply(ctx, error_embed(cooldown_message(remaining_cooldown))).await;
        }
        FrameworkError::MissingUserPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            let description = match missing_permissions {
                Some(permissions) => format!(
                    "You are missing the permission(s) `{}` to execute this command.",
                    permission_names(permissions)
                ),
                None => "You are missing the permissions to execute this command.".to_string(),
            };
            reply(ctx, error_embed(description)).await;
        }
        FrameworkError::MissingBotPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            reply(
                ctx,
                error_embed(format!(
                    "I am missing the permission(s) `{}` to execute this command.",
                    permission_names(missing_permissions)
                )),
            )
            .await;
        }
        FrameworkError::ArgumentParse { error, input, ctx, .. } => {
            let description = match input {
                Some(input) => format!("Could not parse `{}`: {}", input, error),
                None => capitalize(&error.to_string()),
            };
            reply(ctx, titled_error_embed("Error!", description)).await;
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling framework error: {}", e);
            }
        }
    }
}

async fn reply(ctx: Context<'_>, embed: CreateEmbed) {
    if let Err(e) = ctx.send(CreateReply::default().embed(embed)).await {
        tracing::error!(
            command = %ctx.command().qualified_name,
            "Failed to send error reply: {}",
            e
        );
    }
}

/// Formats the "slow down" notice for a cooldown, e.g. `1 hours 5 minutes 3 seconds`.
///
/// Zero components are omitted; anything under half a second reads as one second.
pub fn cooldown_message(remaining: Duration) -> String {
    let total = (remaining.as_secs_f64().round() as u64).max(1);
    let hours = (total / 3600) % 24;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;

    let parts: Vec<String> = [(hours, "hours"), (minutes, "minutes"), (seconds, "seconds")]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{} {}", value, unit))
        .collect();

    format!(
        "**Please slow down** - You can use this command again in {}",
        parts.join(" ")
    )
}

fn permission_names(permissions: Permissions) -> String {
    permissions.get_permission_names().join(", ")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
