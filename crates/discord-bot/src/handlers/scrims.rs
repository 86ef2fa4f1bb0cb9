use std::time::Duration;

use eyre::Result;
use serenity::{
    builder::{CreateComponents, CreateEmbed},
    model::{
        application::component::ButtonStyle,
        application::interaction::{
            application_command::ApplicationCommandInteraction,
            message_component::MessageComponentInteraction, InteractionResponseType,
        },
        id::{GuildId, UserId},
    },
    utils::Color,
};
use tokio::sync::oneshot;
use tokio::time::timeout;

use scrimhub_core::{
    days::Day,
    errors::ScrimError,
    models::{guild::validate_prefix, scrim::Scrim},
    time,
    wizard::{EntityRef, FieldKey, ScrimDraft, SystemClock},
};
use scrimhub_db::repositories::{guild as guild_repo, scrim as scrim_repo};

use crate::handlers::{HandlerContext, WizardSession};
use crate::resolver::SerenityResolver;

/// How long a single chat-input prompt waits before giving up. A timeout
/// aborts only that prompt; the wizard and its draft stay as they were.
const PROMPT_TIMEOUT: Duration = Duration::from_secs(60);

/// Select menus carry at most this many options.
const MAX_SELECT_OPTIONS: usize = 25;

/// Handle the /smanager command: open the scrims dashboard.
pub async fn handle_smanager_command(
    ctx: HandlerContext,
    command: &ApplicationCommandInteraction,
) -> Result<()> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| eyre::eyre!("smanager used outside a guild"))?;

    let scrims = list_scrims(&ctx, guild_id).await?;

    command
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|m| {
                    m.embed(|e| dashboard_embed(e, &scrims))
                        .components(|c| dashboard_components(c, !scrims.is_empty()))
                })
        })
        .await?;

    Ok(())
}

/// Handle the /setprefix command: persist a custom guild prefix.
pub async fn handle_setprefix_command(
    ctx: HandlerContext,
    command: &ApplicationCommandInteraction,
) -> Result<()> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| eyre::eyre!("setprefix used outside a guild"))?;

    let raw = get_option_string(command, "prefix")?;
    let prefix = match validate_prefix(&raw) {
        Ok(prefix) => prefix,
        Err(e) => {
            command
                .create_interaction_response(&ctx.ctx.http, |r| {
                    r.kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|m| m.content(e.to_string()).ephemeral(true))
                })
                .await?;
            return Ok(());
        }
    };

    guild_repo::set_guild_prefix(&ctx.db_pool, guild_id.0 as i64, prefix).await?;

    command
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|m| {
                    m.embed(|e| {
                        e.title("✅ Prefix Updated")
                            .description(format!(
                                "My prefix in this server has been changed to `{}`.",
                                prefix
                            ))
                            .color(Color::DARK_GREEN)
                    })
                })
        })
        .await?;

    Ok(())
}

/// Route button and select-menu interactions for the scrims dashboard.
pub async fn handle_component_interaction(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let custom_id = component.data.custom_id.clone();

    match custom_id.as_str() {
        "scrim_create" => start_wizard(ctx, component).await,
        "scrim_edit" => show_scrim_selector(ctx, component, "scrim_edit_select").await,
        "scrim_delete" => show_scrim_selector(ctx, component, "scrim_delete_select").await,
        "scrim_edit_select" => open_editor(ctx, component).await,
        "scrim_delete_select" => confirm_delete(ctx, component).await,
        "scrim_delete_no" => cancel_delete(ctx, component).await,
        "wiz_save" => save_wizard(ctx, component).await,
        "wiz_cancel" => cancel_wizard(ctx, component).await,
        "wiz_days" => show_day_selector(ctx, component).await,
        "day_save" => close_day_selector(ctx, component).await,
        other => {
            if let Some(rest) = other.strip_prefix("scrim_delete_yes_") {
                let id: i64 = rest.parse()?;
                return delete_scrim(ctx, component, id).await;
            }
            if let Some(rest) = other.strip_prefix("day_toggle_") {
                let index: usize = rest.parse()?;
                return toggle_day(ctx, component, index).await;
            }
            if let Some(key) = field_for_custom_id(other) {
                return prompt_field(ctx, component, key).await;
            }

            Ok(())
        }
    }
}

// --- Wizard flow ---

async fn start_wizard(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let key = session_key(component)?;
    let session = WizardSession {
        draft: ScrimDraft::default(),
        editing: None,
    };

    ctx.sessions.write().await.insert(key, session.clone());

    show_wizard(&ctx, component, &session).await
}

/// Prompt for one field in chat, wait for the answer with a deadline, and
/// feed it through the draft's validator.
async fn prompt_field(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
    key: FieldKey,
) -> Result<()> {
    let session_key = session_key(component)?;
    let (guild_id, user_id) = session_key;

    // Acknowledge the button so the chat round-trip can take its time.
    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::DeferredUpdateMessage)
        })
        .await?;

    let prompt = component
        .channel_id
        .send_message(&ctx.ctx.http, |m| {
            m.embed(|e| {
                e.description(format!(
                    "Please send the new value for **{}** in the chat.",
                    key.label()
                ))
                .color(Color::DARK_GREEN)
            })
        })
        .await?;

    let (tx, rx) = oneshot::channel();
    let prompt_key = (component.channel_id, user_id);
    ctx.pending_prompts.write().await.insert(prompt_key, tx);

    let input = match timeout(PROMPT_TIMEOUT, rx).await {
        Ok(Ok(message)) => message,
        _ => {
            // Timed out: abort this prompt only, the draft is unchanged.
            ctx.pending_prompts.write().await.remove(&prompt_key);
            prompt.delete(&ctx.ctx.http).await.ok();
            send_error_followup(&ctx, component, &ScrimError::TimedOut.to_string()).await?;
            return Ok(());
        }
    };

    prompt.delete(&ctx.ctx.http).await.ok();
    input.delete(&ctx.ctx.http).await.ok();

    let Some(mut session) = ctx.sessions.read().await.get(&session_key).cloned() else {
        return Ok(());
    };

    let resolver = SerenityResolver::new(ctx.ctx.http.as_ref(), guild_id);
    match session
        .draft
        .set_field(key, &input.content, &resolver, &SystemClock)
        .await
    {
        Ok(()) => {
            ctx.sessions
                .write()
                .await
                .insert(session_key, session.clone());

            component
                .message
                .edit(&ctx.ctx.http, |m| {
                    m.embed(|e| wizard_embed(e, &session))
                        .components(|c| wizard_components(c, &session))
                })
                .await?;
        }
        Err(e) => {
            send_error_followup(&ctx, component, &format!("Error: {}", e)).await?;
        }
    }

    Ok(())
}

async fn save_wizard(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let key = session_key(component)?;
    let (guild_id, user_id) = key;

    let Some(session) = ctx.sessions.read().await.get(&key).cloned() else {
        return respond_ephemeral(&ctx, component, "This wizard session has expired.").await;
    };

    // The open-time token is re-resolved against save-time "now" inside
    // the draft, so relative entries count from this moment.
    match session.editing {
        Some(id) => match session.draft.save_update(&SystemClock) {
            Ok(update) => {
                scrim_repo::update_scrim(&ctx.db_pool, id, &update).await?;
            }
            Err(e) => return respond_ephemeral(&ctx, component, &format!("Error: {}", e)).await,
        },
        None => match session
            .draft
            .save(guild_id.0 as i64, user_id.0 as i64, &SystemClock)
        {
            Ok(new) => {
                scrim_repo::create_scrim(&ctx.db_pool, &new).await?;
            }
            Err(e) => return respond_ephemeral(&ctx, component, &format!("Error: {}", e)).await,
        },
    }

    ctx.sessions.write().await.remove(&key);

    show_dashboard(&ctx, component, guild_id).await?;

    component
        .create_followup_message(&ctx.ctx.http, |m| {
            m.content("✅ Scrim saved successfully!").ephemeral(true)
        })
        .await?;

    Ok(())
}

async fn cancel_wizard(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let key = session_key(component)?;
    let (guild_id, _) = key;

    // Discard the draft; nothing is persisted.
    ctx.sessions.write().await.remove(&key);

    show_dashboard(&ctx, component, guild_id).await
}

// --- Day selector ---

async fn show_day_selector(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let key = session_key(component)?;
    let Some(session) = ctx.sessions.read().await.get(&key).cloned() else {
        return respond_ephemeral(&ctx, component, "This wizard session has expired.").await;
    };

    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| {
                    m.embed(|e| day_embed(e, &session.draft))
                        .components(day_components)
                })
        })
        .await?;

    Ok(())
}

async fn toggle_day(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
    index: usize,
) -> Result<()> {
    let key = session_key(component)?;
    let Some(day) = Day::ALL.get(index).copied() else {
        return Ok(());
    };

    let draft = {
        let mut sessions = ctx.sessions.write().await;
        let Some(session) = sessions.get_mut(&key) else {
            return Ok(());
        };
        session.draft.toggle_day(day);
        session.draft.clone()
    };

    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| {
                    m.embed(|e| day_embed(e, &draft)).components(day_components)
                })
        })
        .await?;

    Ok(())
}

async fn close_day_selector(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let key = session_key(component)?;
    let Some(session) = ctx.sessions.read().await.get(&key).cloned() else {
        return respond_ephemeral(&ctx, component, "This wizard session has expired.").await;
    };

    show_wizard(&ctx, component, &session).await
}

// --- Edit and delete flows ---

async fn show_scrim_selector(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
    select_id: &str,
) -> Result<()> {
    let guild_id = component
        .guild_id
        .ok_or_else(|| eyre::eyre!("component used outside a guild"))?;

    let scrims = list_scrims(&ctx, guild_id).await?;
    if scrims.is_empty() {
        return respond_ephemeral(&ctx, component, "There are no scrims in this server yet.").await;
    }

    let action = if select_id == "scrim_edit_select" {
        "edit"
    } else {
        "delete"
    };

    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| {
                    m.embed(|e| {
                        e.description(format!(
                            "Please select a scrim to {} from the dropdown below.",
                            action
                        ))
                        .color(Color::DARK_GREEN)
                    })
                    .components(|c| {
                        c.create_action_row(|row| {
                            row.create_select_menu(|menu| {
                                menu.custom_id(select_id)
                                    .placeholder(format!("Select a scrim to {}...", action))
                                    .options(|opts| {
                                        for scrim in scrims.iter().take(MAX_SELECT_OPTIONS) {
                                            opts.create_option(|o| {
                                                o.label(format!(
                                                    "ID: {} | {}",
                                                    scrim.id, scrim.title
                                                ))
                                                .value(scrim.id.to_string())
                                            });
                                        }
                                        opts
                                    })
                            })
                        })
                    })
                })
        })
        .await?;

    Ok(())
}

async fn open_editor(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let key = session_key(component)?;
    let Some(scrim) = selected_scrim(&ctx, component).await? else {
        return respond_ephemeral(&ctx, component, "That scrim no longer exists.").await;
    };

    let session = WizardSession {
        draft: ScrimDraft::from_record(&scrim),
        editing: Some(scrim.id),
    };

    ctx.sessions.write().await.insert(key, session.clone());

    show_wizard(&ctx, component, &session).await
}

async fn confirm_delete(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let Some(scrim) = selected_scrim(&ctx, component).await? else {
        return respond_ephemeral(&ctx, component, "That scrim no longer exists.").await;
    };

    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| {
                    m.embed(|e| {
                        e.title("⚠️ Are you sure?")
                            .description(format!(
                                "This will permanently delete the scrim **{}**.\nThis action cannot be undone.",
                                scrim.title
                            ))
                            .color(Color::RED)
                    })
                    .components(|c| {
                        c.create_action_row(|row| {
                            row.create_button(|b| {
                                b.custom_id(format!("scrim_delete_yes_{}", scrim.id))
                                    .label("Yes")
                                    .style(ButtonStyle::Danger)
                            })
                            .create_button(|b| {
                                b.custom_id("scrim_delete_no")
                                    .label("No")
                                    .style(ButtonStyle::Secondary)
                            })
                        })
                    })
                })
        })
        .await?;

    Ok(())
}

async fn delete_scrim(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
    id: i64,
) -> Result<()> {
    let guild_id = component
        .guild_id
        .ok_or_else(|| eyre::eyre!("component used outside a guild"))?;

    scrim_repo::delete_scrim(&ctx.db_pool, id).await?;

    show_dashboard(&ctx, component, guild_id).await?;

    component
        .create_followup_message(&ctx.ctx.http, |m| {
            m.content("Scrim has been deleted.").ephemeral(true)
        })
        .await?;

    Ok(())
}

async fn cancel_delete(
    ctx: HandlerContext,
    component: &mut MessageComponentInteraction,
) -> Result<()> {
    let guild_id = component
        .guild_id
        .ok_or_else(|| eyre::eyre!("component used outside a guild"))?;

    show_dashboard(&ctx, component, guild_id).await?;

    component
        .create_followup_message(&ctx.ctx.http, |m| {
            m.content("Deletion cancelled.").ephemeral(true)
        })
        .await?;

    Ok(())
}

// --- Rendering helpers ---

async fn show_dashboard(
    ctx: &HandlerContext,
    component: &mut MessageComponentInteraction,
    guild_id: GuildId,
) -> Result<()> {
    let scrims = list_scrims(ctx, guild_id).await?;

    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| {
                    m.embed(|e| dashboard_embed(e, &scrims))
                        .components(|c| dashboard_components(c, !scrims.is_empty()))
                })
        })
        .await?;

    Ok(())
}

async fn show_wizard(
    ctx: &HandlerContext,
    component: &mut MessageComponentInteraction,
    session: &WizardSession,
) -> Result<()> {
    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| {
                    m.embed(|e| wizard_embed(e, session))
                        .components(|c| wizard_components(c, session))
                })
        })
        .await?;

    Ok(())
}

fn dashboard_embed<'a>(e: &'a mut CreateEmbed, scrims: &[Scrim]) -> &'a mut CreateEmbed {
    let description = if scrims.is_empty() {
        "Click `Create Scrim` button for new scrim.".to_string()
    } else {
        let lines: Vec<String> = scrims
            .iter()
            .enumerate()
            .map(|(i, s)| {
                format!(
                    "{:02}. ✅ : <#{}> - {} IST",
                    i + 1,
                    s.reg_channel_id,
                    time::format_open_time(s.scrim_time)
                )
            })
            .collect();
        format!(
            "{}\n\nClick the `Create Scrim` button to start a new scrim.",
            lines.join("\n")
        )
    };

    e.title("Scrims Manager")
        .description(description)
        .color(Color::DARK_GREEN)
        .footer(|f| f.text(format!("Total Scrims in this server: {}", scrims.len())))
}

fn dashboard_components(c: &mut CreateComponents, has_scrims: bool) -> &mut CreateComponents {
    c.create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id("scrim_create")
                .label("Create Scrim")
                .style(ButtonStyle::Success)
        })
        .create_button(|b| {
            b.custom_id("scrim_edit")
                .label("Edit Settings")
                .style(ButtonStyle::Primary)
                .disabled(!has_scrims)
        })
        .create_button(|b| {
            b.custom_id("scrim_delete")
                .label("Delete Scrim")
                .style(ButtonStyle::Danger)
                .disabled(!has_scrims)
        })
    })
}

fn wizard_embed<'a>(e: &'a mut CreateEmbed, session: &WizardSession) -> &'a mut CreateEmbed {
    let draft = &session.draft;
    let title = if session.editing.is_some() {
        "Scrims Editor - Edit Settings"
    } else {
        "Enter details & Press Save"
    };

    e.title(title)
        .description("Press a field button, then send the new value in chat.")
        .color(Color::DARK_GREEN)
        .field("🇦 Reg. Channel:", format_entity(&draft.reg_channel), true)
        .field(
            "🇧 Slotlist Channel:",
            format_entity(&draft.slotlist_channel),
            true,
        )
        .field("🇨 Success Role:", format_entity(&draft.success_role), true)
        .field(
            "🇩 Req. Mentions:",
            format!("`{}`", draft.required_mentions),
            true,
        )
        .field("🇪 Total Slots:", format!("`{}`", draft.total_slots), true)
        .field(
            "🇫 Open Time:",
            match &draft.open_time {
                Some(t) => format!("`{}`", t.token),
                None => "`Not-Set`".to_string(),
            },
            true,
        )
        .field("🇬 Scrim Days:", format!("```{}```", draft.days), false)
        .field(
            "🇭 Reactions:",
            format!("{}, {}", draft.reactions.0, draft.reactions.1),
            false,
        )
        .footer(|f| f.text("Registration channel, success role and open time are required."))
}

fn wizard_components<'a>(
    c: &'a mut CreateComponents,
    session: &WizardSession,
) -> &'a mut CreateComponents {
    let save_label = if session.editing.is_some() {
        "Save Changes"
    } else {
        "Save Scrim"
    };

    c.create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id("wiz_field_reg_channel")
                .label("A")
                .style(ButtonStyle::Secondary)
        })
        .create_button(|b| {
            b.custom_id("wiz_field_slotlist_channel")
                .label("B")
                .style(ButtonStyle::Secondary)
        })
        .create_button(|b| {
            b.custom_id("wiz_field_success_role")
                .label("C")
                .style(ButtonStyle::Secondary)
        })
        .create_button(|b| {
            b.custom_id("wiz_field_mentions")
                .label("D")
                .style(ButtonStyle::Secondary)
        })
        .create_button(|b| {
            b.custom_id("wiz_field_slots")
                .label("E")
                .style(ButtonStyle::Secondary)
        })
    })
    .create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id("wiz_field_open_time")
                .label("F")
                .style(ButtonStyle::Secondary)
        })
        .create_button(|b| {
            b.custom_id("wiz_days")
                .label("G")
                .style(ButtonStyle::Secondary)
        })
        .create_button(|b| {
            b.custom_id("wiz_field_reactions")
                .label("H")
                .style(ButtonStyle::Secondary)
        })
    })
    .create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id("wiz_cancel")
                .label("Cancel")
                .style(ButtonStyle::Danger)
        })
        .create_button(|b| {
            b.custom_id("wiz_save")
                .label(save_label)
                .style(ButtonStyle::Success)
                .disabled(!session.draft.is_ready_to_save())
        })
    })
}

fn day_embed<'a>(e: &'a mut CreateEmbed, draft: &ScrimDraft) -> &'a mut CreateEmbed {
    let lines: Vec<String> = Day::ALL
        .iter()
        .map(|day| {
            let marker = if draft.days.is_active(*day) {
                "✅"
            } else {
                "❌"
            };
            format!("{} {}", marker, day.name())
        })
        .collect();

    e.title("Select Scrim Days")
        .description(lines.join("\n"))
        .color(Color::DARK_GREEN)
}

fn day_components(c: &mut CreateComponents) -> &mut CreateComponents {
    c.create_action_row(|row| {
        for (i, day) in Day::ALL.iter().enumerate().take(4) {
            row.create_button(|b| {
                b.custom_id(format!("day_toggle_{}", i))
                    .label(day.abbrev())
                    .style(ButtonStyle::Secondary)
            });
        }
        row
    })
    .create_action_row(|row| {
        for (i, day) in Day::ALL.iter().enumerate().skip(4) {
            row.create_button(|b| {
                b.custom_id(format!("day_toggle_{}", i))
                    .label(day.abbrev())
                    .style(ButtonStyle::Secondary)
            });
        }
        row
    })
    .create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id("day_save")
                .label("Save")
                .style(ButtonStyle::Success)
        })
    })
}

fn format_entity(value: &Option<EntityRef>) -> String {
    match value {
        Some(entity) => entity.mention(),
        None => "`Not-Set`".to_string(),
    }
}

// --- Small helpers ---

async fn list_scrims(ctx: &HandlerContext, guild_id: GuildId) -> Result<Vec<Scrim>> {
    let rows = scrim_repo::list_scrims_by_guild(&ctx.db_pool, guild_id.0 as i64).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Load the scrim picked in a select menu, if it still exists.
async fn selected_scrim(
    ctx: &HandlerContext,
    component: &MessageComponentInteraction,
) -> Result<Option<Scrim>> {
    let value = component
        .data
        .values
        .first()
        .ok_or_else(|| eyre::eyre!("select menu interaction without a value"))?;
    let id: i64 = value.parse()?;

    Ok(scrim_repo::get_scrim_by_id(&ctx.db_pool, id)
        .await?
        .map(Into::into))
}

fn session_key(component: &MessageComponentInteraction) -> Result<(GuildId, UserId)> {
    let guild_id = component
        .guild_id
        .ok_or_else(|| eyre::eyre!("component used outside a guild"))?;

    Ok((guild_id, component.user.id))
}

async fn respond_ephemeral(
    ctx: &HandlerContext,
    component: &MessageComponentInteraction,
    text: &str,
) -> Result<()> {
    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|m| m.content(text).ephemeral(true))
        })
        .await?;

    Ok(())
}

async fn send_error_followup(
    ctx: &HandlerContext,
    component: &MessageComponentInteraction,
    text: &str,
) -> Result<()> {
    component
        .create_followup_message(&ctx.ctx.http, |m| m.content(text).ephemeral(true))
        .await?;

    Ok(())
}

/// Extract a string option from a command
fn get_option_string(command: &ApplicationCommandInteraction, name: &str) -> Result<String> {
    command
        .data
        .options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| eyre::eyre!("Missing {} parameter", name))
}

fn field_for_custom_id(id: &str) -> Option<FieldKey> {
    match id {
        "wiz_field_reg_channel" => Some(FieldKey::RegChannel),
        "wiz_field_slotlist_channel" => Some(FieldKey::SlotlistChannel),
        "wiz_field_success_role" => Some(FieldKey::SuccessRole),
        "wiz_field_mentions" => Some(FieldKey::RequiredMentions),
        "wiz_field_slots" => Some(FieldKey::TotalSlots),
        "wiz_field_open_time" => Some(FieldKey::OpenTime),
        "wiz_field_reactions" => Some(FieldKey::Reactions),
        _ => None,
    }
}
