use std::collections::HashSet;

use serenity::all::{
    ActionRow, ActionRowComponent, ButtonKind, ChannelId, GuildId, MessageId, Role, RoleId,
};

use crate::{
    data::discord::DiscordGateway,
    error::AppError,
    model::{
        custom_id::{CustomId, Mode},
        role::RoleButton,
    },
};

/// Discord allows at most five buttons in a single action row.
pub const MAX_BUTTONS_PER_ROW: usize = 5;

/// Upper bound of the role select, five full rows of buttons.
pub const MAX_SELECTABLE_ROLES: u8 = 25;

pub struct ButtonSetService<'a, G: DiscordGateway> {
    gateway: &'a G,
}

impl<'a, G: DiscordGateway> ButtonSetService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Overwrites the message's components with one button per selected role.
    ///
    /// Role ids that no longer resolve to a guild role are skipped. The message
    /// is left untouched when none of them resolve.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the roles belong to
    /// - `channel_id` - Channel containing the target message
    /// - `message_id` - Message that receives the buttons
    /// - `mode` - Mode encoded into every button's custom id
    /// - `role_ids` - Selected roles in the order the select menu returned them
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of rows written
    /// - `Err(AppError)` - No selected role resolved, role lookup failed or
    ///   Discord rejected the edit
    pub async fn apply(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        message_id: MessageId,
        mode: Mode,
        role_ids: &[RoleId],
    ) -> Result<usize, AppError> {
        let guild_roles = self.gateway.guild_roles(guild_id).await?;

        let roles: Vec<Role> = role_ids
            .iter()
            .filter_map(|role_id| {
                let role = guild_roles.get(role_id).cloned();
                if role.is_none() {
                    tracing::warn!("Selected role {} not found in guild {}", role_id, guild_id);
                }
                role
            })
            .collect();

        if roles.is_empty() {
            return Err(AppError::BadRequest(
                "None of the selected roles exist in this server.".to_string(),
            ));
        }

        let rows = layout_rows(mode, &roles);

        self.gateway
            .edit_message_buttons(channel_id, message_id, &rows)
            .await?;

        Ok(rows.len())
    }

    /// Removes every component from the message.
    pub async fn clear(&self, channel_id: ChannelId, message_id: MessageId) -> Result<(), AppError> {
        self.gateway
            .edit_message_buttons(channel_id, message_id, &[])
            .await
    }
}

/// Lays roles out into rows of buttons.
///
/// Roles are reversed from the order given, then chunked into rows of
/// [`MAX_BUTTONS_PER_ROW`].
pub fn layout_rows(mode: Mode, roles: &[Role]) -> Vec<Vec<RoleButton>> {
    let buttons: Vec<RoleButton> = roles
        .iter()
        .rev()
        .map(|role| RoleButton::from_role(role, mode))
        .collect();

    buttons
        .chunks(MAX_BUTTONS_PER_ROW)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Collects the role ids behind every role button on a message.
///
/// Components whose custom id is not a role toggle are skipped.
pub fn roles_on_message(rows: &[ActionRow]) -> HashSet<RoleId> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::Button(button) => match &button.data {
                ButtonKind::NonLink { custom_id, .. } => Some(custom_id.as_str()),
                _ => None,
            },
            _ => None,
        })
        .filter_map(|custom_id| match custom_id.parse::<CustomId>() {
            Ok(CustomId::ToggleRole { role_id, .. }) => Some(role_id),
            _ => None,
        })
        .collect()
}
