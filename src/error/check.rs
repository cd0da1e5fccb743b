use serenity::all::Permissions;
use thiserror::Error;

/// Failures raised by command guards before a command runs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    /// Invoker lacks the required guild permission and is not the guild owner.
    #[error(
        "You need the {} permission or server ownership to use this command.",
        permission_names(.0)
    )]
    MissingPermission(Permissions),

    /// Target message of a context command was not sent by the bot.
    ///
    /// Carries the fixed instructional message shown to the invoker.
    #[error("{0}")]
    NotBotAuthored(&'static str),

    /// Command was invoked outside of a guild.
    #[error("This command can only be used in a server.")]
    NotInGuild,
}

fn permission_names(permissions: &Permissions) -> String {
    permissions.get_permission_names().join(", ")
}
