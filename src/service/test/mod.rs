use std::collections::HashSet;

use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};

use crate::{
    data::fake::{Call, FakeDiscord},
    model::{custom_id::Mode, role::ToggleRoleParams},
};


const GUILD_ID: u64 = 10;
const CHANNEL_ID: u64 = 20;
const USER_ID: u64 = 30;

const RED: u64 = 111;
const BLUE: u64 = 222;
const GREEN: u64 = 333;

/// Fake gateway that knows the names of the test roles.
fn colour_gateway() -> FakeDiscord {
    FakeDiscord::new()
        .with_role(RED, "Red")
        .with_role(BLUE, "Blue")
        .with_role(GREEN, "Green")
}

fn toggle_params(mode: Mode, role_id: u64, member_roles: &[u64], button_roles: &[u64]) -> ToggleRoleParams {
    ToggleRoleParams {
        guild_id: GuildId::new(GUILD_ID),
        user_id: UserId::new(USER_ID),
        member_roles: member_roles.iter().copied().map(RoleId::new).collect(),
        role_id: RoleId::new(role_id),
        mode,
        button_roles: button_roles
            .iter()
            .copied()
            .map(RoleId::new)
            .collect::<HashSet<_>>(),
    }
}
