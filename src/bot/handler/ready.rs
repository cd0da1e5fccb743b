//! Ready event handler for bot initialization.
//!
//! Fired once the bot has connected to the gateway. Registers the application
//! commands, either for a single development guild or globally.

use serenity::all::{Command, Context, CreateCommand, GuildId, Ready};

use crate::bot::command::BotCommand;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register the commands
/// - `ready` - Ready event data containing bot user information
/// - `command_guild_id` - Guild to register commands in, `None` for global registration
pub async fn handle_ready(ctx: Context, ready: Ready, command_guild_id: Option<GuildId>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands: Vec<CreateCommand> = BotCommand::ALL
        .into_iter()
        .map(BotCommand::register)
        .collect();

    let result = match command_guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
        None => Command::set_global_commands(&ctx.http, commands).await,
    };

    match result {
        Ok(registered) => match command_guild_id {
            Some(guild_id) => tracing::info!(
                "Registered {} commands in guild {}",
                registered.len(),
                guild_id
            ),
            None => tracing::info!("Registered {} global commands", registered.len()),
        },
        Err(e) => tracing::error!("Failed to register commands: {:?}", e),
    }
}
