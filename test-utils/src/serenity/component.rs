//! Test factories for message components.
//!
//! Builds `ActionRow` values as they appear on a received `Message`, which is
//! where the bot recovers the role set of a button message from.

use serenity::all::ActionRow;

/// Creates an action row of primary buttons.
///
/// # Arguments
/// - `buttons` - `(custom_id, label)` pairs, one per button
///
/// # Panics
/// - If the JSON cannot be deserialized into an ActionRow
///
/// # Examples
///
/// ```rust,ignore
/// let row = create_test_button_row(&[("r1-111", "Red"), ("r1-222", "Blue")]);
/// assert_eq!(row.components.len(), 2);
/// ```
pub fn create_test_button_row(buttons: &[(&str, &str)]) -> ActionRow {
    let components: Vec<serde_json::Value> = buttons
        .iter()
        .map(|(custom_id, label)| {
            serde_json::json!({
                "type": 2,
                "style": 1,
                "custom_id": custom_id,
                "label": label,
                "disabled": false,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "type": 1,
        "components": components,
    }))
    .expect("Failed to create test button row - invalid JSON structure")
}

/// Creates an action row holding a single string select menu.
///
/// Useful for checking that non-button components are ignored.
pub fn create_test_select_row(custom_id: &str) -> ActionRow {
    serde_json::from_value(serde_json::json!({
        "type": 1,
        "components": [{
            "type": 3,
            "custom_id": custom_id,
            "options": [{
                "label": "Normal",
                "value": "1",
                "default": false,
            }],
        }],
    }))
    .expect("Failed to create test select row - invalid JSON structure")
}

/// Creates an action row holding a text input as received in a modal submission.
///
/// # Arguments
/// - `custom_id` - Custom id of the input
/// - `value` - Text the user entered, `None` if left empty
pub fn create_test_text_input_row(custom_id: &str, value: Option<&str>) -> ActionRow {
    serde_json::from_value(serde_json::json!({
        "type": 1,
        "components": [{
            "type": 4,
            "custom_id": custom_id,
            "value": value,
        }],
    }))
    .expect("Failed to create test text input row - invalid JSON structure")
}
