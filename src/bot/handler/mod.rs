use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;

pub mod ready;

/// Discord bot event handler
///
/// Commands are dispatched by the poise framework; this handler covers the
/// gateway lifecycle.
#[derive(Default)]
pub struct Handler {
    /// Set once the status scheduler has been started, so reconnects don't start another.
    status_started: AtomicBool,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        let start_status = !self.status_started.swap(true, Ordering::SeqCst);

        ready::handle_ready(ctx, ready, start_status).await;
    }
}
