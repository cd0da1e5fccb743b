use super::*;

/// Tests a member holding the required permission passes.
///
/// Expected: Ok(())
#[test]
fn grants_member_with_permission() {
    let context = guild_context(MEMBER_ID, Permissions::MANAGE_ROLES, None);
    let guard = CommandGuard::new(&context);

    let result = guard.require(&[Requirement::PermissionOrOwner(Permissions::MANAGE_ROLES)]);

    assert!(result.is_ok());
}

/// Tests the guild owner passes without holding the permission.
///
/// Expected: Ok(())
#[test]
fn grants_guild_owner_without_permission() {
    let context = guild_context(OWNER_ID, Permissions::empty(), None);
    let guard = CommandGuard::new(&context);

    let result = guard.require(&[Requirement::PermissionOrOwner(Permissions::MANAGE_MESSAGES)]);

    assert!(result.is_ok());
}

/// Tests a member lacking the permission is denied.
///
/// Expected: Err(CheckError::MissingPermission)
#[test]
fn denies_member_without_permission() {
    let context = guild_context(MEMBER_ID, Permissions::SEND_MESSAGES, None);
    let guard = CommandGuard::new(&context);

    let result = guard.require(&[Requirement::PermissionOrOwner(Permissions::MANAGE_ROLES)]);

    assert!(matches!(
        result,
        Err(AppError::CheckErr(CheckError::MissingPermission(p))) if p == Permissions::MANAGE_ROLES
    ));
}

/// Tests the permission failure message names the permission.
///
/// Expected: message mentions "Manage Roles"
#[test]
fn missing_permission_message_names_permission() {
    let err = CheckError::MissingPermission(Permissions::MANAGE_ROLES);

    assert_eq!(
        err.to_string(),
        "You need the Manage Roles permission or server ownership to use this command."
    );
}

/// Tests commands outside of a guild are rejected.
///
/// Expected: Err(CheckError::NotInGuild)
#[test]
fn denies_invocation_outside_guild() {
    let context = GuardContext {
        invoker_permissions: None,
        guild_owner_id: None,
        ..guild_context(MEMBER_ID, Permissions::empty(), None)
    };
    let guard = CommandGuard::new(&context);

    let result = guard.require(&[Requirement::PermissionOrOwner(Permissions::MANAGE_ROLES)]);

    assert!(matches!(
        result,
        Err(AppError::CheckErr(CheckError::NotInGuild))
    ));
}

/// Tests a message authored by the bot passes the ownership check.
///
/// Expected: Ok(())
#[test]
fn grants_bot_authored_target() {
    let context = guild_context(MEMBER_ID, Permissions::MANAGE_MESSAGES, Some(BOT_ID));
    let guard = CommandGuard::new(&context);

    let result = guard.require(&[
        Requirement::PermissionOrOwner(Permissions::MANAGE_MESSAGES),
        Requirement::BotAuthored(EDIT_ONLY_BOT_MESSAGES),
    ]);

    assert!(result.is_ok());
}

/// Tests a message authored by someone else fails with the fixed message.
///
/// Expected: Err(CheckError::NotBotAuthored) displaying the instructional text
#[test]
fn denies_target_not_authored_by_bot() {
    let context = guild_context(MEMBER_ID, Permissions::MANAGE_MESSAGES, Some(MEMBER_ID));
    let guard = CommandGuard::new(&context);

    let err = guard
        .require(&[
            Requirement::PermissionOrOwner(Permissions::MANAGE_MESSAGES),
            Requirement::BotAuthored(EDIT_ONLY_BOT_MESSAGES),
        ])
        .unwrap_err();

    assert_eq!(err.to_string(), EDIT_ONLY_BOT_MESSAGES);
}

/// Tests requirements are evaluated in order and stop at the first failure.
///
/// Both requirements fail here; the permission failure comes first.
///
/// Expected: Err(CheckError::MissingPermission)
#[test]
fn stops_at_first_failed_requirement() {
    let context = guild_context(MEMBER_ID, Permissions::empty(), Some(MEMBER_ID));
    let guard = CommandGuard::new(&context);

    let result = guard.require(&[
        Requirement::PermissionOrOwner(Permissions::MANAGE_MESSAGES),
        Requirement::BotAuthored(EDIT_ONLY_BOT_MESSAGES),
    ]);

    assert!(matches!(
        result,
        Err(AppError::CheckErr(CheckError::MissingPermission(_)))
    ));
}
