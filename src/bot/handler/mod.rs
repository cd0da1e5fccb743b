use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

pub mod command;
pub mod component;
pub mod interaction;
pub mod modal;
pub mod ready;
pub mod respond;

/// Discord bot event handler
pub struct Handler {
    /// Guild the commands are registered in, `None` registers them globally
    pub command_guild_id: Option<GuildId>,
}

impl Handler {
    pub fn new(command_guild_id: Option<GuildId>) -> Self {
        Self { command_guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.command_guild_id).await;
    }

    /// Called for every command, component and modal interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(ctx, interaction).await;
    }
}
