use serenity::all::{ChannelId, GuildId, MessageId};

/// Builds a jump link to a message in a guild channel.
pub fn message_link(guild_id: GuildId, channel_id: ChannelId, message_id: MessageId) -> String {
    format!("https://discord.com/channels/{guild_id}/{channel_id}/{message_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_guild_message_link() {
        let link = message_link(GuildId::new(1), ChannelId::new(2), MessageId::new(3));
        assert_eq!(link, "https://discord.com/channels/1/2/3");
    }
}
