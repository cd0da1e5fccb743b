//! Select menu and button handlers.

use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, MessageId, RoleId,
};

use crate::{
    bot::{
        component::role_select_row,
        handler::{
            interaction::{route, InteractionSource},
            respond::report_error,
        },
    },
    data::discord::SerenityDiscord,
    error::{check::CheckError, AppError},
    model::{
        custom_id::{CustomId, Mode},
        role::ToggleRoleParams,
    },
    service::{
        button::{roles_on_message, ButtonSetService},
        role::RoleToggleService,
    },
};

pub async fn handle_component(ctx: &Context, component: &ComponentInteraction) {
    let Some(custom_id) = route(InteractionSource::Component, &component.data.custom_id) else {
        return;
    };

    let result = match custom_id {
        CustomId::SelectMode { message_id } => select_mode(ctx, component, message_id).await,
        CustomId::UpdateButtons { mode, message_id } => {
            update_buttons(ctx, component, mode, message_id).await
        }
        CustomId::ToggleRole { mode, role_id } => {
            toggle_role(ctx, component, mode, role_id).await
        }
        CustomId::SendMessage | CustomId::EditMessage { .. } => Ok(()),
    };

    if let Err(e) = result {
        report_error(ctx, component, &component.data.custom_id, e).await;
    }
}

/// Replaces the mode picker with the role picker for the chosen mode.
async fn select_mode(
    ctx: &Context,
    component: &ComponentInteraction,
    message_id: MessageId,
) -> Result<(), AppError> {
    let value = match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first(),
        _ => None,
    };
    let Some(value) = value else {
        return Err(AppError::BadRequest("No mode was selected.".to_string()));
    };
    let mode: Mode = value.parse()?;

    let response = CreateInteractionResponseMessage::new()
        .content("Select the roles")
        .components(vec![role_select_row(mode, message_id)]);
    component
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(response))
        .await?;

    Ok(())
}

/// Rebuilds the role buttons on the target message from the selected roles.
async fn update_buttons(
    ctx: &Context,
    component: &ComponentInteraction,
    mode: Mode,
    message_id: MessageId,
) -> Result<(), AppError> {
    let Some(guild_id) = component.guild_id else {
        return Err(CheckError::NotInGuild.into());
    };

    let role_ids: Vec<RoleId> = match &component.data.kind {
        ComponentInteractionDataKind::RoleSelect { values } => values.clone(),
        _ => Vec::new(),
    };

    component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    let gateway = SerenityDiscord::from_context(ctx);
    let content = match ButtonSetService::new(&gateway)
        .apply(guild_id, component.channel_id, message_id, mode, &role_ids)
        .await
    {
        Ok(rows) => {
            tracing::info!(
                "Updated {} {} mode button row(s) on message {} in guild {}",
                rows,
                mode,
                message_id,
                guild_id
            );
            "Successfully updated the roles!".to_string()
        }
        Err(e) => {
            tracing::error!("Failed to update buttons on message {}: {}", message_id, e);
            format!("Failed to update the roles: {}", e)
        }
    };

    component
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .content(content)
                .components(Vec::new()),
        )
        .await?;

    Ok(())
}

/// Adds or removes the clicked role on the member who clicked it.
async fn toggle_role(
    ctx: &Context,
    component: &ComponentInteraction,
    mode: Mode,
    role_id: RoleId,
) -> Result<(), AppError> {
    let (Some(guild_id), Some(member)) = (component.guild_id, component.member.as_ref()) else {
        return Err(CheckError::NotInGuild.into());
    };

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true)),
        )
        .await?;

    let params = ToggleRoleParams {
        guild_id,
        user_id: component.user.id,
        member_roles: member.roles.clone(),
        role_id,
        mode,
        button_roles: roles_on_message(&component.message.components),
    };

    let gateway = SerenityDiscord::from_context(ctx);
    let content = RoleToggleService::new(&gateway)
        .toggle_and_describe(&params)
        .await;

    component
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}
