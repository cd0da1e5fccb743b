//! Application commands the bot registers and the guards attached to each.

use serenity::all::{CommandType, CreateCommand, Permissions};

use crate::model::guard::Requirement;

const ROLES_OR_OWNER: Requirement = Requirement::PermissionOrOwner(Permissions::MANAGE_ROLES);
const MESSAGES_OR_OWNER: Requirement =
    Requirement::PermissionOrOwner(Permissions::MANAGE_MESSAGES);

const SEND_REQUIREMENTS: &[Requirement] = &[ROLES_OR_OWNER];
const EDIT_ROLES_REQUIREMENTS: &[Requirement] = &[
    ROLES_OR_OWNER,
    Requirement::BotAuthored(
        "Can only add buttons to a message sent by the bot. Please create a new message using the /send command.",
    ),
];
const REMOVE_BUTTONS_REQUIREMENTS: &[Requirement] = &[
    ROLES_OR_OWNER,
    Requirement::BotAuthored("Can only remove buttons from a message sent by the bot."),
];
const EDIT_MESSAGE_REQUIREMENTS: &[Requirement] = &[
    MESSAGES_OR_OWNER,
    Requirement::BotAuthored("Can only edit messages sent by the bot."),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCommand {
    /// `/send` - open a modal to post a new message
    Send,
    /// Message command - choose the roles shown as buttons
    EditRoles,
    /// Message command - strip every button from a message
    RemoveButtons,
    /// Message command - open a modal to edit the message text
    EditMessage,
}

impl BotCommand {
    pub const ALL: [BotCommand; 4] = [
        BotCommand::Send,
        BotCommand::EditRoles,
        BotCommand::RemoveButtons,
        BotCommand::EditMessage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BotCommand::Send => "send",
            BotCommand::EditRoles => "Edit Roles",
            BotCommand::RemoveButtons => "Remove Buttons",
            BotCommand::EditMessage => "Edit Message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Guards evaluated, in order, before the command runs.
    pub fn requirements(self) -> &'static [Requirement] {
        match self {
            BotCommand::Send => SEND_REQUIREMENTS,
            BotCommand::EditRoles => EDIT_ROLES_REQUIREMENTS,
            BotCommand::RemoveButtons => REMOVE_BUTTONS_REQUIREMENTS,
            BotCommand::EditMessage => EDIT_MESSAGE_REQUIREMENTS,
        }
    }

    pub fn register(self) -> CreateCommand {
        match self {
            BotCommand::Send => CreateCommand::new(self.name())
                .description("Send a new message which will contain the buttons"),
            _ => CreateCommand::new(self.name()).kind(CommandType::Message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_command_by_name() {
        for command in BotCommand::ALL {
            assert_eq!(BotCommand::from_name(command.name()), Some(command));
        }
        assert_eq!(BotCommand::from_name("ping"), None);
    }

    #[test]
    fn edit_message_requires_manage_messages() {
        assert_eq!(
            BotCommand::EditMessage.requirements()[0],
            Requirement::PermissionOrOwner(Permissions::MANAGE_MESSAGES)
        );
    }

    #[test]
    fn message_commands_require_bot_authored_target() {
        for command in [
            BotCommand::EditRoles,
            BotCommand::RemoveButtons,
            BotCommand::EditMessage,
        ] {
            assert!(command
                .requirements()
                .iter()
                .any(|r| matches!(r, Requirement::BotAuthored(_))));
        }
        assert!(!BotCommand::Send
            .requirements()
            .iter()
            .any(|r| matches!(r, Requirement::BotAuthored(_))));
    }
}
