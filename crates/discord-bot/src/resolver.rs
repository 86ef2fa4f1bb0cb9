use async_trait::async_trait;
use serenity::http::{Http, HttpError};
use serenity::model::{channel::Channel, channel::ChannelType, id::GuildId, id::RoleId};

use scrimhub_core::wizard::{EntityKind, EntityRef, EntityResolver, ResolveError};

/// Confirms channel/role references against the Discord API.
///
/// Channels must be text channels of the guild the wizard runs in; roles
/// must exist in that guild.
pub struct SerenityResolver<'a> {
    http: &'a Http,
    guild_id: GuildId,
}

impl<'a> SerenityResolver<'a> {
    pub fn new(http: &'a Http, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl EntityResolver for SerenityResolver<'_> {
    async fn resolve(&self, kind: EntityKind, id: u64) -> Result<EntityRef, ResolveError> {
        match kind {
            EntityKind::Channel => match self.http.get_channel(id).await {
                Ok(Channel::Guild(channel))
                    if channel.kind == ChannelType::Text && channel.guild_id == self.guild_id =>
                {
                    Ok(EntityRef { kind, id })
                }
                Ok(_) => Err(ResolveError::WrongKind),
                Err(serenity::Error::Http(err)) if is_forbidden(&err) => {
                    Err(ResolveError::Forbidden)
                }
                Err(_) => Err(ResolveError::NotFound),
            },
            EntityKind::Role => {
                let roles = self
                    .guild_id
                    .roles(self.http)
                    .await
                    .map_err(|_| ResolveError::NotFound)?;

                if roles.contains_key(&RoleId(id)) {
                    Ok(EntityRef { kind, id })
                } else {
                    Err(ResolveError::NotFound)
                }
            }
        }
    }
}

fn is_forbidden(err: &HttpError) -> bool {
    matches!(
        err,
        HttpError::UnsuccessfulRequest(resp) if resp.status_code.as_u16() == 403
    )
}
