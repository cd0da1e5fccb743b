use std::collections::HashMap;

use serenity::all::{GuildId, Permissions, Role, RoleId};

use crate::{
    error::{check::CheckError, AppError},
    model::guard::{GuardContext, Requirement},
};

pub struct CommandGuard<'a> {
    context: &'a GuardContext,
}

impl<'a> CommandGuard<'a> {
    pub fn new(context: &'a GuardContext) -> Self {
        Self { context }
    }

    /// Checks each requirement in order, stopping at the first that fails.
    pub fn require(&self, requirements: &[Requirement]) -> Result<(), AppError> {
        for requirement in requirements {
            match requirement {
                Requirement::PermissionOrOwner(permission) => {
                    let Some(permissions) = self.context.invoker_permissions else {
                        return Err(CheckError::NotInGuild.into());
                    };

                    let is_owner = self.context.guild_owner_id == Some(self.context.invoker_id);
                    if !is_owner && !permissions.contains(*permission) {
                        return Err(CheckError::MissingPermission(*permission).into());
                    }
                }
                Requirement::BotAuthored(message) => {
                    if self.context.target_author_id != Some(self.context.bot_id) {
                        return Err(CheckError::NotBotAuthored(*message).into());
                    }
                }
            }
        }

        Ok(())
    }
}

/// Guild-wide permissions granted by a member's roles.
///
/// Combines `@everyone` (the role sharing the guild's id) with every role the
/// member holds. Channel overwrites are not applied. Administrator grants
/// everything.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `member_roles` - Roles the member holds
/// - `guild_roles` - Every role of the guild
pub fn guild_permissions(
    guild_id: GuildId,
    member_roles: &[RoleId],
    guild_roles: &HashMap<RoleId, Role>,
) -> Permissions {
    let everyone = RoleId::new(guild_id.get());

    let permissions = std::iter::once(&everyone)
        .chain(member_roles)
        .filter_map(|role_id| guild_roles.get(role_id))
        .fold(Permissions::empty(), |acc, role| acc | role.permissions);

    if permissions.contains(Permissions::ADMINISTRATOR) {
        return Permissions::all();
    }

    permissions
}
