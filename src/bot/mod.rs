//! Discord integration built on poise and serenity.
//!
//! Commands are poise hybrid commands, invocable as slash commands or with the
//! configured prefix. Gateway events the framework does not cover are handled by the
//! serenity `EventHandler` in `handler`.

pub mod check;
pub mod commands;
pub mod embed;
pub mod error;
pub mod handler;
pub mod start;

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::error::AppError;

/// State shared with every command invocation.
pub struct Data {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub owners: HashSet<u64>,
    pub prefix: String,
    pub application_id: u64,
    pub permissions: u64,
    pub support_guild_url: Option<String>,
    pub bitcoin_price_url: String,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;
