use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{
    Cache, ChannelId, Context, CreateActionRow, CreateMessage, EditMessage, GuildId, Http,
    MessageId, Role, RoleId, UserId,
};
use serenity::async_trait;

use crate::{bot::component::role_button_row, error::AppError, model::role::RoleButton};

const ROLE_ADD_REASON: &str = "Self-assigned via role button";
const ROLE_REMOVE_REASON: &str = "Self-removed via role button";

/// Access to the Discord state and REST calls the bot relies on.
///
/// Services take this as a dependency instead of reaching for serenity's
/// context directly, which keeps them testable against a fake.
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Looks up a role's name in the cache.
    fn role_name(&self, guild_id: GuildId, role_id: RoleId) -> Option<String>;

    /// Every role of a guild, from the cache when available.
    async fn guild_roles(&self, guild_id: GuildId) -> Result<HashMap<RoleId, Role>, AppError>;

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    /// Sends a plain text message, returning the new message's id.
    async fn create_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<MessageId, AppError>;

    async fn edit_message_content(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError>;

    /// Replaces every component row on a message with the given button rows.
    ///
    /// An empty slice removes all components.
    async fn edit_message_buttons(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        rows: &[Vec<RoleButton>],
    ) -> Result<(), AppError>;
}

/// Gateway backed by serenity's HTTP client and cache.
#[derive(Clone)]
pub struct SerenityDiscord {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityDiscord {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }
}

#[async_trait]
impl DiscordGateway for SerenityDiscord {
    fn role_name(&self, guild_id: GuildId, role_id: RoleId) -> Option<String> {
        let guild = self.cache.guild(guild_id)?;
        let name = guild.roles.get(&role_id).map(|role| role.name.clone());
        name
    }

    async fn guild_roles(&self, guild_id: GuildId) -> Result<HashMap<RoleId, Role>, AppError> {
        let cached = self.cache.guild(guild_id).map(|guild| guild.roles.clone());
        if let Some(roles) = cached {
            return Ok(roles);
        }

        tracing::debug!("Guild {} not cached, fetching roles from Discord", guild_id);

        let roles = self.http.get_guild_roles(guild_id).await?;

        Ok(roles.into_iter().map(|role| (role.id, role)).collect())
    }

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(ROLE_ADD_REASON))
            .await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, Some(ROLE_REMOVE_REASON))
            .await?;

        Ok(())
    }

    async fn create_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<MessageId, AppError> {
        let message = channel_id
            .send_message(self.http.as_ref(), CreateMessage::new().content(content))
            .await?;

        Ok(message.id)
    }

    async fn edit_message_content(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        channel_id
            .edit_message(self.http.as_ref(), message_id, EditMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn edit_message_buttons(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        rows: &[Vec<RoleButton>],
    ) -> Result<(), AppError> {
        let components: Vec<CreateActionRow> = rows
            .iter()
            .map(|row| role_button_row(row))
            .collect();

        channel_id
            .edit_message(
                self.http.as_ref(),
                message_id,
                EditMessage::new().components(components),
            )
            .await?;

        Ok(())
    }
}
