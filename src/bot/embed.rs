//! Embed builders shared by the bot commands and error replies.
//!
//! Builders are pure functions of their inputs so the exact embed a command sends can
//! be checked in tests without a gateway connection.

use sea_orm::ActiveEnum;
use serenity::all::{CreateEmbed, CreateEmbedFooter, Guild, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::{member::Member, report::Report},
};

/// Colour of informational embeds.
pub const COLOR_INFO: u32 = 0x9C84EF;

/// Colour of error embeds.
pub const COLOR_ERROR: u32 = 0xE02B2B;

/// Colour of invite and support link embeds.
pub const COLOR_INVITE: u32 = 0xD75BF4;

/// Number of role names listed by `serverinfo` before the rest are summarized.
pub const MAX_LISTED_ROLES: usize = 50;

/// Discord's limit on the length of an embed field value.
const FIELD_VALUE_MAX_LENGTH: usize = 1024;

/// Discord's limit on the length of an embed description.
pub const DESCRIPTION_MAX_LENGTH: usize = 4096;

pub fn error_embed(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .description(description)
        .color(COLOR_ERROR)
}

pub fn titled_error_embed(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    error_embed(description).title(title)
}

pub fn info_embed(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_INFO)
}

pub fn link_embed(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .description(description)
        .color(COLOR_INVITE)
}

/// Joins role names for the `serverinfo` role field.
///
/// At most `MAX_LISTED_ROLES` names are listed. When there are more, a
/// `>>>> Displaying[50/N] Roles` marker with the total count is appended.
pub fn role_summary(role_names: &[&str]) -> String {
    let total = role_names.len();
    let mut listed: Vec<String> = role_names
        .iter()
        .take(MAX_LISTED_ROLES)
        .map(|name| name.to_string())
        .collect();

    if total > MAX_LISTED_ROLES {
        listed.push(format!(">>>> Displaying[{}/{}] Roles", MAX_LISTED_ROLES, total));
    }

    truncate(listed.join(", "), FIELD_VALUE_MAX_LENGTH)
}

/// Builds the `serverinfo` embed for a guild.
///
/// Roles are listed in hierarchy order, lowest first, so `@everyone` leads.
pub fn server_info_embed(guild: &Guild) -> CreateEmbed {
    let mut roles: Vec<_> = guild.roles.values().collect();
    roles.sort_by_key(|role| (role.position, role.id));
    let role_names: Vec<&str> = roles.iter().map(|role| role.name.as_str()).collect();

    let mut embed = CreateEmbed::new()
        .title("**Server Name:**")
        .description(&guild.name)
        .color(COLOR_INFO)
        .field("Server ID", guild.id.to_string(), true)
        .field("Member Count", guild.member_count.to_string(), true)
        .field("Text/Voice Channels", guild.channels.len().to_string(), true)
        .field(
            format!("Roles ({})", role_names.len()),
            role_summary(&role_names),
            false,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Created at: {}",
            guild.id.created_at()
        )));

    if let Some(icon_url) = guild.icon_url() {
        embed = embed.thumbnail(icon_url);
    }

    embed
}

/// Builds the confirmation embed for a newly registered member.
pub fn member_embed(member: &Member) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Registered")
        .description(format!(
            "<@{}> is now registered as a bounty hunter. Keep your passkey secret, \
             it is needed to submit authorized reports.",
            member.id
        ))
        .color(COLOR_INFO)
        .field("Activision ID", &member.activision_id, true);

    if let Some(twitter_name) = &member.twitter_name {
        embed = embed.field("Twitter", format!("@{}", twitter_name), true);
    }

    embed
}

/// Builds the embed describing a stored report.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Report embed timestamped with the submission time
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - Timestamp out of Discord's range
pub fn report_embed(report: &Report) -> Result<CreateEmbed, AppError> {
    let timestamp = Timestamp::from_unix_timestamp(report.timestamp.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: report.timestamp.timestamp(),
            reason: e.to_string(),
        }
    })?;

    let mut embed = CreateEmbed::new()
        .title(format!("Report #{}", report.id))
        .color(if report.authorized {
            COLOR_INFO
        } else {
            COLOR_ERROR
        })
        .field(
            "Suspect",
            report.suspect_activision_id.as_deref().unwrap_or("Unknown"),
            true,
        )
        .field("Platform", report.suspect_platform.to_value(), true)
        .field("Location", report.location.to_value(), true)
        .field("Timezone", report.timezone.to_value(), true)
        .field("Reporter", format!("<@{}>", report.member_id), true)
        .field(
            "Authorized",
            if report.authorized { "Yes" } else { "No" },
            true,
        );

    if let Some(id) = &report.suspect_gamebattles_id {
        embed = embed.field("GameBattles ID", id, true);
    }
    if let Some(id) = &report.suspect_cmg_id {
        embed = embed.field("CMG ID", id, true);
    }
    if let Some(message) = &report.reporter_message {
        embed = embed.field("Message", message, false);
    }
    if !report.proof_links.is_empty() {
        embed = embed.field("Proof", report.proof_links.join("\n"), false);
    }

    if !report.authorized {
        embed = embed.footer(CreateEmbedFooter::new(
            "Passkey did not match, the report was recorded as unauthorized.",
        ));
    }

    Ok(embed.timestamp(timestamp))
}

/// Builds the `reports` listing, one line per report, newest first.
pub fn report_list_embed(reports: &[Report]) -> CreateEmbed {
    let description = if reports.is_empty() {
        "You have not submitted any reports yet.".to_string()
    } else {
        reports
            .iter()
            .map(|report| {
                format!(
                    "`#{}` {} on {} ({}) <t:{}:R>{}",
                    report.id,
                    report.suspect_activision_id.as_deref().unwrap_or("Unknown"),
                    report.suspect_platform.to_value(),
                    report.location.to_value(),
                    report.timestamp.timestamp(),
                    if report.authorized { "" } else { " - unauthorized" },
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    info_embed("Your Reports", truncate_description(description))
}

/// Cuts a description down to Discord's limit, marking the cut with an ellipsis.
pub fn truncate_description(value: String) -> String {
    truncate(value, DESCRIPTION_MAX_LENGTH)
}

fn truncate(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        return value;
    }

    let mut truncated: String = value.chars().take(max - 1).collect();
    truncated.push('…');
    truncated
}
