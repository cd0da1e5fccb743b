//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, zero permissions, no color).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `unicode_emoji` - Optional unicode emoji set as the role icon
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Red", Some("🔴"));
/// assert_eq!(role.name, "Red");
/// assert_eq!(role.unicode_emoji.as_deref(), Some("🔴"));
/// ```
pub fn create_test_role(role_id: u64, name: &str, unicode_emoji: Option<&str>) -> Role {
    build_role(role_id, name, unicode_emoji, 0)
}

/// Creates a test Serenity Role granting the given permission bits.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake), use the guild ID for `@everyone`
/// - `name` - Role name
/// - `permissions` - Raw permission bitfield, e.g. `Permissions::MANAGE_ROLES.bits()`
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role_with_permissions(role_id: u64, name: &str, permissions: u64) -> Role {
    build_role(role_id, name, None, permissions)
}

fn build_role(role_id: u64, name: &str, unicode_emoji: Option<&str>, permissions: u64) -> Role {
    // `colors` is required by newer 0.12 releases and ignored by older ones
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": "100000000000000000",
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": unicode_emoji,
        "position": 1,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

#[cfg(test)]
mod tests {
    use serenity::all::{Permissions, RoleId};

    use super::*;

    #[test]
    fn builds_role_with_emoji() {
        let role = create_test_role(111, "Red", Some("🔴"));

        assert_eq!(role.id, RoleId::new(111));
        assert_eq!(role.name, "Red");
        assert_eq!(role.unicode_emoji.as_deref(), Some("🔴"));
        assert_eq!(role.permissions, Permissions::empty());
    }

    #[test]
    fn builds_role_with_permissions() {
        let role =
            create_test_role_with_permissions(222, "Mods", Permissions::MANAGE_ROLES.bits());

        assert_eq!(role.permissions, Permissions::MANAGE_ROLES);
        assert_eq!(role.unicode_emoji, None);
    }
}
