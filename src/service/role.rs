use serenity::all::{Mentionable, RoleId};

use crate::{
    data::discord::DiscordGateway,
    error::{
        role::{RoleError, RoleToggleError},
        AppError,
    },
    model::role::{RoleAction, ToggleRoleParams},
};

pub struct RoleToggleService<'a, G: DiscordGateway> {
    gateway: &'a G,
}

impl<'a, G: DiscordGateway> RoleToggleService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Adds the role if the member lacks it, removes it otherwise.
    ///
    /// In unique mode an add is refused while the member holds any other role
    /// from the same button set. Exactly one role mutation is attempted per call,
    /// and none when the unique check fails.
    ///
    /// # Returns
    /// - `Ok(RoleAction)` - The mutation that was applied
    /// - `Err(RoleToggleError)` - Conflicting roles or Discord rejected the mutation
    pub async fn toggle(&self, params: &ToggleRoleParams) -> Result<RoleAction, RoleToggleError> {
        if params.member_roles.contains(&params.role_id) {
            self.gateway
                .remove_member_role(params.guild_id, params.user_id, params.role_id)
                .await
                .map_err(|e| platform_error(RoleAction::Remove, e))?;

            return Ok(RoleAction::Remove);
        }

        if params.mode.is_unique() {
            let conflicting: Vec<String> = params
                .member_roles
                .iter()
                .filter(|role_id| params.button_roles.contains(*role_id))
                .map(|role_id| self.display_name(params, *role_id))
                .collect();

            if !conflicting.is_empty() {
                return Err(RoleToggleError {
                    action: RoleAction::Add,
                    reason: RoleError::Conflicting(conflicting),
                });
            }
        }

        self.gateway
            .add_member_role(params.guild_id, params.user_id, params.role_id)
            .await
            .map_err(|e| platform_error(RoleAction::Add, e))?;

        Ok(RoleAction::Add)
    }

    /// Toggles the role and renders the reply shown to the member.
    pub async fn toggle_and_describe(&self, params: &ToggleRoleParams) -> String {
        match self.toggle(params).await {
            Ok(action) => {
                let role = match self.gateway.role_name(params.guild_id, params.role_id) {
                    Some(name) => format!("@{name}"),
                    None => params.role_id.mention().to_string(),
                };
                format!("Successfully {} {}", action.past_tense(), role)
            }
            Err(e) => e.to_string(),
        }
    }

    fn display_name(&self, params: &ToggleRoleParams, role_id: RoleId) -> String {
        self.gateway
            .role_name(params.guild_id, role_id)
            .unwrap_or_else(|| role_id.mention().to_string())
    }
}

fn platform_error(action: RoleAction, e: AppError) -> RoleToggleError {
    RoleToggleError {
        action,
        reason: RoleError::Platform(Box::new(e)),
    }
}
