use std::collections::HashSet;
use std::fmt;

use serenity::all::{GuildId, Role, RoleId, UserId};

use crate::model::custom_id::{CustomId, Mode};

/// Direction of a role toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleAction {
    Add,
    Remove,
}

impl RoleAction {
    /// Past tense used in confirmation messages.
    pub fn past_tense(self) -> &'static str {
        match self {
            RoleAction::Add => "added",
            RoleAction::Remove => "removed",
        }
    }
}

impl fmt::Display for RoleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleAction::Add => write!(f, "add"),
            RoleAction::Remove => write!(f, "remove"),
        }
    }
}

/// A single role button on a button set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleButton {
    pub role_id: RoleId,
    pub mode: Mode,
    pub label: String,
    /// Unicode emoji shown on the button, taken from the role's icon emoji
    pub emoji: Option<String>,
}

impl RoleButton {
    pub fn from_role(role: &Role, mode: Mode) -> Self {
        Self {
            role_id: role.id,
            mode,
            label: role.name.clone(),
            emoji: role.unicode_emoji.clone().filter(|e| !e.is_empty()),
        }
    }

    pub fn custom_id(&self) -> CustomId {
        CustomId::ToggleRole {
            mode: self.mode,
            role_id: self.role_id,
        }
    }
}

/// Parameters for toggling a role on the member who clicked a role button.
#[derive(Debug, Clone)]
pub struct ToggleRoleParams {
    pub guild_id: GuildId,
    pub user_id: UserId,
    /// Roles the member currently holds
    pub member_roles: Vec<RoleId>,
    pub role_id: RoleId,
    pub mode: Mode,
    /// Every role with a button on the clicked message
    pub button_roles: HashSet<RoleId>,
}
