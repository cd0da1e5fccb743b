//! In-memory [`DiscordGateway`] used by service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serenity::all::{ChannelId, GuildId, MessageId, Role, RoleId, UserId};
use serenity::async_trait;
use test_utils::serenity::create_test_role;

use crate::{data::discord::DiscordGateway, error::AppError, model::role::RoleButton};

/// A REST call the fake received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AddRole(UserId, RoleId),
    RemoveRole(UserId, RoleId),
    CreateMessage(ChannelId, String),
    EditContent(ChannelId, MessageId, String),
    EditButtons(ChannelId, MessageId, Vec<Vec<RoleButton>>),
}

#[derive(Default)]
pub struct FakeDiscord {
    roles: HashMap<RoleId, Role>,
    /// When set, every REST call fails with this reason
    failure: Option<String>,
    next_message_id: u64,
    calls: Mutex<Vec<Call>>,
}

impl FakeDiscord {
    pub fn new() -> Self {
        Self {
            next_message_id: 1000,
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role_id: u64, name: &str) -> Self {
        self.roles
            .insert(RoleId::new(role_id), create_test_role(role_id, name, None));
        self
    }

    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), AppError> {
        if let Some(reason) = &self.failure {
            return Err(AppError::BadRequest(reason.clone()));
        }

        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

#[async_trait]
impl DiscordGateway for FakeDiscord {
    fn role_name(&self, _guild_id: GuildId, role_id: RoleId) -> Option<String> {
        self.roles.get(&role_id).map(|role| role.name.clone())
    }

    async fn guild_roles(&self, _guild_id: GuildId) -> Result<HashMap<RoleId, Role>, AppError> {
        Ok(self.roles.clone())
    }

    async fn add_member_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.record(Call::AddRole(user_id, role_id))
    }

    async fn remove_member_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.record(Call::RemoveRole(user_id, role_id))
    }

    async fn create_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<MessageId, AppError> {
        self.record(Call::CreateMessage(channel_id, content.to_string()))?;
        Ok(MessageId::new(self.next_message_id))
    }

    async fn edit_message_content(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        self.record(Call::EditContent(
            channel_id,
            message_id,
            content.to_string(),
        ))
    }

    async fn edit_message_buttons(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        rows: &[Vec<RoleButton>],
    ) -> Result<(), AppError> {
        self.record(Call::EditButtons(channel_id, message_id, rows.to_vec()))
    }
}
