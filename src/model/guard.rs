use serenity::all::{Permissions, UserId};

/// Facts about a command invocation that guards are evaluated against.
///
/// Built from the incoming interaction and the cache so that guards themselves
/// stay free of Discord I/O.
#[derive(Debug, Clone)]
pub struct GuardContext {
    pub invoker_id: UserId,
    /// Invoker's guild-wide permissions from their roles, ignoring channel
    /// overwrites. `None` outside a guild
    pub invoker_permissions: Option<Permissions>,
    /// Owner of the guild the command ran in, `None` if unknown or outside a guild
    pub guild_owner_id: Option<UserId>,
    pub bot_id: UserId,
    /// Author of the target message for message context commands
    pub target_author_id: Option<UserId>,
}

/// A single precondition a command declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Invoker holds `permission` or owns the guild.
    PermissionOrOwner(Permissions),
    /// Target message was sent by the bot; the message is shown otherwise.
    BotAuthored(&'static str),
}
