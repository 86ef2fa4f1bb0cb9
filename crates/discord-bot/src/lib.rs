use eyre::Result;
use serenity::{prelude::GatewayIntents, Client};
use sqlx::PgPool;
use tracing::info;

pub mod commands;
pub mod config;
pub mod handlers;
pub mod resolver;

/// Start the Discord bot with the provided configuration and database connection.
///
/// Runs until the bot disconnects or an error occurs. Message-content
/// intents are required because the scrim wizard collects field values
/// from chat messages.
pub async fn start_bot(config: config::BotConfig, db_pool: PgPool) -> Result<()> {
    info!("Starting Discord bot");

    let handler = handlers::Handler::new(config.clone(), db_pool);

    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .await?;

    info!("Connecting to Discord...");
    client.start().await?;

    Ok(())
}
