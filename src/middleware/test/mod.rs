use serenity::all::{Permissions, UserId};

use crate::{
    error::{check::CheckError, AppError},
    middleware::guard::CommandGuard,
    model::guard::{GuardContext, Requirement},
};

mod guard;

const BOT_ID: u64 = 900;
const OWNER_ID: u64 = 100;
const MEMBER_ID: u64 = 200;

const EDIT_ONLY_BOT_MESSAGES: &str = "Can only edit messages sent by the bot.";

/// Guard context for a member invoking a command in a guild.
fn guild_context(invoker: u64, permissions: Permissions, target_author: Option<u64>) -> GuardContext {
    GuardContext {
        invoker_id: UserId::new(invoker),
        invoker_permissions: Some(permissions),
        guild_owner_id: Some(UserId::new(OWNER_ID)),
        bot_id: UserId::new(BOT_ID),
        target_author_id: target_author.map(UserId::new),
    }
}
