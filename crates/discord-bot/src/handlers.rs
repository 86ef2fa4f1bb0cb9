use serenity::{
    async_trait,
    model::{
        application::interaction::Interaction,
        channel::Message,
        gateway::Ready,
        id::{ChannelId, GuildId, UserId},
    },
    prelude::*,
};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{oneshot, RwLock};
use tracing::{error, info};

use scrimhub_core::wizard::ScrimDraft;

pub mod scrims;

use crate::config::BotConfig;

/// One in-progress wizard session: the working draft plus the id of the
/// record being edited, if any. Each session is owned by the user who
/// opened it.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub draft: ScrimDraft,
    pub editing: Option<i64>,
}

type SessionKey = (GuildId, UserId);
type PromptKey = (ChannelId, UserId);

/// Main Discord handler that processes all events.
///
/// Maintains the active wizard sessions and the pending chat-input
/// prompts alongside the bot configuration and database connection.
pub struct Handler {
    config: BotConfig,
    db_pool: PgPool,
    sessions: Arc<RwLock<HashMap<SessionKey, WizardSession>>>,
    pending_prompts: Arc<RwLock<HashMap<PromptKey, oneshot::Sender<Message>>>>,
}

impl Handler {
    /// Create a new handler
    pub fn new(config: BotConfig, db_pool: PgPool) -> Self {
        Self {
            config,
            db_pool,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            pending_prompts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

/// Shared state handed to the individual interaction handlers.
#[derive(Clone)]
pub struct HandlerContext {
    pub ctx: Context,
    pub config: BotConfig,
    pub db_pool: PgPool,
    pub sessions: Arc<RwLock<HashMap<SessionKey, WizardSession>>>,
    pub pending_prompts: Arc<RwLock<HashMap<PromptKey, oneshot::Sender<Message>>>>,
}

impl Handler {
    fn handler_context(&self, ctx: Context) -> HandlerContext {
        HandlerContext {
            ctx,
            config: self.config.clone(),
            db_pool: self.db_pool.clone(),
            sessions: self.sessions.clone(),
            pending_prompts: self.pending_prompts.clone(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Handle ready events (when bot connects to Discord)
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        // For dev testing, register for a specific guild to avoid the
        // global command cache delay.
        if let Some(test_guild_id) = self.config.test_guild_id {
            let guild_id = GuildId(test_guild_id);

            match guild_id
                .set_application_commands(&ctx.http, |commands| {
                    crate::commands::register_commands(commands)
                })
                .await
            {
                Ok(cmds) => {
                    info!(
                        "Guild commands registered for {}! Total commands: {}",
                        test_guild_id,
                        cmds.len()
                    );
                }
                Err(why) => {
                    error!("Error registering guild commands: {:?}", why);
                }
            }
        }

        // Also register commands globally (visible in all servers, but
        // with cache delay)
        match serenity::model::application::command::Command::set_global_application_commands(
            &ctx.http,
            |commands| crate::commands::register_commands(commands),
        )
        .await
        {
            Ok(cmds) => {
                info!("Global commands registered! Total commands: {}", cmds.len());
                for cmd in cmds {
                    info!("Command registered: /{} - {}", cmd.name, cmd.description);
                }
            }
            Err(why) => {
                error!("Error registering global commands: {:?}", why);
            }
        }
    }

    /// Handle interactions (slash commands, buttons, select menus)
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                info!("Received command: {}", command.data.name);

                let handler_ctx = self.handler_context(ctx);

                let result = match command.data.name.as_str() {
                    "smanager" => scrims::handle_smanager_command(handler_ctx, &command).await,
                    "setprefix" => scrims::handle_setprefix_command(handler_ctx, &command).await,
                    _ => {
                        error!("Unknown command: {}", command.data.name);
                        Ok(())
                    }
                };

                if let Err(why) = result {
                    error!("Error handling command {}: {:?}", command.data.name, why);
                }
            }
            Interaction::MessageComponent(mut component) => {
                let handler_ctx = self.handler_context(ctx);

                if let Err(why) =
                    scrims::handle_component_interaction(handler_ctx, &mut component).await
                {
                    error!(
                        "Error handling component {}: {:?}",
                        component.data.custom_id, why
                    );
                }
            }
            _ => {}
        }
    }

    /// Route chat messages into whichever wizard prompt is waiting for
    /// input from this user in this channel.
    async fn message(&self, _ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let key = (msg.channel_id, msg.author.id);
        let sender = { self.pending_prompts.write().await.remove(&key) };

        if let Some(sender) = sender {
            // Receiver may have timed out in the meantime; nothing to do.
            let _ = sender.send(msg);
        }
    }
}
