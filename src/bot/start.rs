use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{commands, error::on_error, handler::Handler, Context, Data},
    config::Config,
    error::AppError,
};

/// Starts the Discord bot in a blocking manner
///
/// Builds the poise framework around the command list, registers slash commands globally
/// when configured to, and connects to the gateway. Returns once the client shuts down.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection shared with every command
/// - `http_client` - HTTP client for third-party APIs
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(
    config: Config,
    db: DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<(), AppError> {
    // MESSAGE_CONTENT is privileged and must be enabled in the Developer Portal for
    // prefix commands to see message text.
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let sync_commands_globally = config.sync_commands_globally;
    let data = Data {
        db,
        http_client,
        owners: config.owners,
        prefix: config.prefix.clone(),
        application_id: config.application_id,
        permissions: config.permissions,
        support_guild_url: config.support_guild_url,
        bitcoin_price_url: config.bitcoin_price_url,
    };

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix),
                mention_as_prefix: true,
                ignore_bots: true,
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            post_command: |ctx| Box::pin(log_command(ctx)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                if sync_commands_globally {
                    poise::builtins::register_globally(ctx, &framework.options().commands)
                        .await?;
                    tracing::info!("Synchronized slash commands globally");
                }

                Ok(data)
            })
        })
        .build();

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .framework(framework)
        .event_handler(Handler::new())
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

async fn log_command(ctx: Context<'_>) {
    let command = ctx.command().qualified_name.clone();
    let author = ctx.author();

    match ctx.guild_id() {
        Some(guild_id) => {
            let guild_name = ctx
                .guild()
                .map(|guild| guild.name.clone())
                .unwrap_or_default();

            tracing::info!(
                "Executed {} command in {} (ID: {}) by {} (ID: {})",
                command,
                guild_name,
                guild_id,
                author.name,
                author.id
            );
        }
        None => {
            tracing::info!(
                "Executed {} command by {} (ID: {}) in DMs",
                command,
                author.name,
                author.id
            );
        }
    }
}
