//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are built by deserializing JSON shaped like a Discord gateway `GUILD_CREATE`
//! payload, so the resulting struct is exactly what the cache would hand to a command.

use serenity::all::Guild;

/// Creates a test Serenity Guild with the given roles.
///
/// Roles are created in order with positions `0..roles.len()` and ids
/// `guild_id + 1 + index`. The guild reports a member count of 100 and no channels.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `roles` - Role names to include in the guild
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild::create_test_guild;
///
/// let guild = create_test_guild(123456789, "Bounty Hunters", &["@everyone", "Moderator"]);
/// assert_eq!(guild.roles.len(), 2);
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, roles: &[&str]) -> Guild {
    let roles: Vec<serde_json::Value> = roles
        .iter()
        .enumerate()
        .map(|(index, role_name)| role_json(guild_id + 1 + index as u64, role_name, index as i16))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}

/// Raw Discord API JSON for a role with no permissions or styling.
fn role_json(role_id: u64, name: &str, position: i16) -> serde_json::Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    })
}
