//! Modal submission handlers for the send and edit message flows.

use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, ModalInteraction,
};

use crate::{
    bot::{
        component::first_text_input,
        handler::{
            interaction::{route, InteractionSource},
            respond::report_error,
        },
    },
    data::discord::SerenityDiscord,
    error::{check::CheckError, AppError},
    model::custom_id::CustomId,
    service::message::MessageService,
};

pub async fn handle_modal(ctx: &Context, modal: &ModalInteraction) {
    let Some(custom_id) = route(InteractionSource::Modal, &modal.data.custom_id) else {
        return;
    };

    if let Err(e) = submit(ctx, modal, custom_id).await {
        report_error(ctx, modal, &modal.data.custom_id, e).await;
    }
}

async fn submit(
    ctx: &Context,
    modal: &ModalInteraction,
    custom_id: CustomId,
) -> Result<(), AppError> {
    let Some(content) = first_text_input(&modal.data.components) else {
        return Err(AppError::BadRequest(
            "The message can't be empty.".to_string(),
        ));
    };

    let guild_id = match (custom_id, modal.guild_id) {
        (CustomId::SendMessage, None) => return Err(CheckError::NotInGuild.into()),
        (_, guild_id) => guild_id,
    };

    modal
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true)),
        )
        .await?;

    let gateway = SerenityDiscord::from_context(ctx);
    let service = MessageService::new(&gateway);

    let reply = match (custom_id, guild_id) {
        (CustomId::SendMessage, Some(guild_id)) => {
            match service.send(guild_id, modal.channel_id, content).await {
                Ok(reply) => {
                    tracing::info!(
                        "Sent role message in channel {} of guild {}",
                        modal.channel_id,
                        guild_id
                    );
                    reply
                }
                Err(e) => {
                    tracing::error!("Failed to send message in {}: {}", modal.channel_id, e);
                    format!("Failed to send the message: {}", e)
                }
            }
        }
        (CustomId::EditMessage { message_id }, _) => {
            match service.edit(modal.channel_id, message_id, content).await {
                Ok(reply) => {
                    tracing::info!(
                        "Edited message {} in channel {}",
                        message_id,
                        modal.channel_id
                    );
                    reply
                }
                Err(e) => {
                    tracing::error!("Failed to edit message {}: {}", message_id, e);
                    format!("Failed to edit the message: {}", e)
                }
            }
        }
        _ => return Ok(()),
    };

    modal
        .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
        .await?;

    Ok(())
}
