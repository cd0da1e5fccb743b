use serenity::all::{ChannelId, GuildId, MessageId};

use crate::{data::discord::DiscordGateway, error::AppError, util::link::message_link};

/// Longest message body accepted by the send and edit modals.
pub const MAX_MESSAGE_LENGTH: u16 = 2048;

pub struct MessageService<'a, G: DiscordGateway> {
    gateway: &'a G,
}

impl<'a, G: DiscordGateway> MessageService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Posts a new message that can later receive role buttons.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation containing a link to the new message
    /// - `Err(AppError)` - Discord rejected the message
    pub async fn send(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<String, AppError> {
        let message_id = self.gateway.create_message(channel_id, content).await?;

        Ok(format!(
            "Message created! {} Right click the message and invoke the Edit Roles command!",
            message_link(guild_id, channel_id, message_id)
        ))
    }

    /// Replaces the text of a message previously sent by the bot.
    pub async fn edit(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<String, AppError> {
        self.gateway
            .edit_message_content(channel_id, message_id, content)
            .await?;

        Ok("Successfully edited the message!".to_string())
    }
}
