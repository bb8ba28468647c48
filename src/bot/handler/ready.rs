//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. It logs connection details and starts the presence
//! rotation on the first connection.

use serenity::all::{Context, Ready};

use crate::scheduler::status;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context handed to the status scheduler
/// - `ready` - Ready event data containing bot user information
/// - `start_status` - Whether this is the first ready event of the process
pub async fn handle_ready(ctx: Context, ready: Ready, start_status: bool) {
    tracing::info!("Logged in as {}", ready.user.name);
    tracing::info!("Serenity version: {}", serenity::constants::USER_AGENT);
    tracing::info!(
        "Running on: {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    tracing::info!("Connected to {} guilds", ready.guilds.len());

    if start_status {
        if let Err(e) = status::start_scheduler(ctx).await {
            tracing::error!("Failed to start status scheduler: {}", e);
        }
    }
}
