//! Entry point for every interaction the gateway delivers.
//!
//! Commands are dispatched by name, modals and components by their parsed
//! [`CustomId`]. Ids this bot did not emit are dropped with a debug log.

use serenity::all::{Context, Interaction};

use crate::{
    bot::handler::{command, component, modal},
    model::custom_id::CustomId,
};

/// Where a custom id arrived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionSource {
    Modal,
    Component,
}

pub async fn handle_interaction(ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => command::handle_command(&ctx, &command).await,
        Interaction::Component(component) => {
            component::handle_component(&ctx, &component).await
        }
        Interaction::Modal(modal) => modal::handle_modal(&ctx, &modal).await,
        _ => {}
    }
}

/// Parses a custom id and checks it belongs to the source it arrived from.
///
/// # Returns
/// - `Some(CustomId)` - The id to dispatch on
/// - `None` - Unknown, malformed, or sent from the wrong kind of interaction
pub fn route(source: InteractionSource, raw: &str) -> Option<CustomId> {
    let custom_id = match raw.parse::<CustomId>() {
        Ok(custom_id) => custom_id,
        Err(e) => {
            tracing::debug!("Ignoring {:?} interaction: {}", source, e);
            return None;
        }
    };

    let expects_modal = source == InteractionSource::Modal;
    if custom_id.is_modal() != expects_modal {
        tracing::debug!(
            "Ignoring custom id '{}' received from a {:?} interaction",
            raw,
            source
        );
        return None;
    }

    Some(custom_id)
}
