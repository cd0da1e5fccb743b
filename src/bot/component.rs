//! Builders for the modals, select menus and buttons the bot sends.

use serenity::all::{
    ActionRow, ActionRowComponent, ButtonStyle, CreateActionRow, CreateButton, CreateInputText,
    CreateModal, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, InputTextStyle,
    MessageId, ReactionType,
};

use crate::{
    model::{
        custom_id::{CustomId, Mode},
        role::RoleButton,
    },
    service::{button::MAX_SELECTABLE_ROLES, message::MAX_MESSAGE_LENGTH},
};

/// Custom id of the text input inside the send and edit modals.
pub const MESSAGE_INPUT_ID: &str = "message";

pub fn role_button_row(buttons: &[RoleButton]) -> CreateActionRow {
    CreateActionRow::Buttons(buttons.iter().map(role_button).collect())
}

fn role_button(role_button: &RoleButton) -> CreateButton {
    let button = CreateButton::new(role_button.custom_id().to_string())
        .style(ButtonStyle::Primary)
        .label(&role_button.label);

    match &role_button.emoji {
        Some(emoji) => button.emoji(ReactionType::Unicode(emoji.clone())),
        None => button,
    }
}

/// Modal with a single required paragraph input for a message body.
pub fn message_modal(custom_id: CustomId, title: &str, label: &str) -> CreateModal {
    let input = CreateInputText::new(InputTextStyle::Paragraph, label, MESSAGE_INPUT_ID)
        .required(true)
        .max_length(MAX_MESSAGE_LENGTH);

    CreateModal::new(custom_id.to_string(), title)
        .components(vec![CreateActionRow::InputText(input)])
}

/// Mode picker shown by `Edit Roles`.
pub fn mode_select_row(message_id: MessageId) -> CreateActionRow {
    let options = vec![
        CreateSelectMenuOption::new("Normal", Mode::Normal.to_string())
            .description("Users get to pick multiple roles"),
        CreateSelectMenuOption::new("Unique", Mode::Unique.to_string())
            .description("Users can only pick 1 role at a time"),
    ];

    CreateActionRow::SelectMenu(CreateSelectMenu::new(
        CustomId::SelectMode { message_id }.to_string(),
        CreateSelectMenuKind::String { options },
    ))
}

/// Role picker whose submission rebuilds the buttons on `message_id`.
pub fn role_select_row(mode: Mode, message_id: MessageId) -> CreateActionRow {
    let menu = CreateSelectMenu::new(
        CustomId::UpdateButtons { mode, message_id }.to_string(),
        CreateSelectMenuKind::Role {
            default_roles: None,
        },
    )
    .placeholder("Select the roles")
    .min_values(1)
    .max_values(MAX_SELECTABLE_ROLES);

    CreateActionRow::SelectMenu(menu)
}

/// Value of the first non-empty text input in a modal submission.
pub fn first_text_input(rows: &[ActionRow]) -> Option<&str> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) => input.value.as_deref(),
            _ => None,
        })
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use serenity::all::RoleId;

    use super::*;
    use test_utils::serenity::{create_test_button_row, create_test_text_input_row};

    /// First component of a serialized action row, as Discord receives it.
    fn first_component(row: &CreateActionRow) -> Value {
        let json = serde_json::to_value(row).unwrap();
        json["components"][0].clone()
    }

    fn red_button(mode: Mode, emoji: Option<&str>) -> RoleButton {
        RoleButton {
            role_id: RoleId::new(111),
            mode,
            label: "Red".to_string(),
            emoji: emoji.map(str::to_string),
        }
    }

    #[test]
    fn role_buttons_are_primary_and_carry_toggle_id() {
        let row = role_button_row(&[red_button(Mode::Unique, Some("🔴"))]);

        let button = first_component(&row);

        assert_eq!(button["type"], 2);
        assert_eq!(button["style"], 1);
        assert_eq!(button["label"], "Red");
        assert_eq!(button["custom_id"], "r2-111");
        assert_eq!(button["emoji"]["name"], "🔴");
    }

    #[test]
    fn role_button_without_emoji_has_none() {
        let row = role_button_row(&[red_button(Mode::Normal, None)]);

        let button = first_component(&row);

        assert_eq!(button["custom_id"], "r1-111");
        assert!(button.get("emoji").map_or(true, Value::is_null));
    }

    #[test]
    fn role_button_row_keeps_every_button() {
        let buttons: Vec<RoleButton> = (0..5).map(|_| red_button(Mode::Normal, None)).collect();

        let json = serde_json::to_value(role_button_row(&buttons)).unwrap();

        assert_eq!(json["components"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn mode_select_offers_normal_and_unique() {
        let menu = first_component(&mode_select_row(MessageId::new(42)));

        assert_eq!(menu["type"], 3);
        assert_eq!(menu["custom_id"], "mode-42");
        assert_eq!(menu["options"][0]["label"], "Normal");
        assert_eq!(menu["options"][0]["value"], "1");
        assert_eq!(
            menu["options"][0]["description"],
            "Users get to pick multiple roles"
        );
        assert_eq!(menu["options"][1]["label"], "Unique");
        assert_eq!(menu["options"][1]["value"], "2");
        assert_eq!(
            menu["options"][1]["description"],
            "Users can only pick 1 role at a time"
        );
    }

    #[test]
    fn role_select_encodes_mode_and_target() {
        let menu = first_component(&role_select_row(Mode::Unique, MessageId::new(42)));

        assert_eq!(menu["type"], 6);
        assert_eq!(menu["custom_id"], "u2-42");
        assert_eq!(menu["placeholder"], "Select the roles");
        assert_eq!(menu["min_values"], 1);
        assert_eq!(menu["max_values"], 25);
    }

    #[test]
    fn reads_modal_text_input() {
        let rows = vec![create_test_text_input_row(MESSAGE_INPUT_ID, Some("Pick your colour"))];

        assert_eq!(first_text_input(&rows), Some("Pick your colour"));
    }

    #[test]
    fn blank_text_input_is_missing() {
        let rows = vec![create_test_text_input_row(MESSAGE_INPUT_ID, Some("   "))];

        assert_eq!(first_text_input(&rows), None);
    }

    #[test]
    fn rows_without_text_input_yield_nothing() {
        let rows = vec![create_test_button_row(&[("r1-1", "Red")])];

        assert_eq!(first_text_input(&rows), None);
    }
}
