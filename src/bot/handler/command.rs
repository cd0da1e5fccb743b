//! Slash and message context command handlers.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    MessageId, ResolvedTarget,
};

use crate::{
    bot::{
        command::BotCommand,
        component::{message_modal, mode_select_row},
        handler::respond::{reply, report_error},
    },
    data::discord::{DiscordGateway, SerenityDiscord},
    error::AppError,
    middleware::guard::{guild_permissions, CommandGuard},
    model::{custom_id::CustomId, guard::GuardContext},
    service::button::ButtonSetService,
};

pub async fn handle_command(ctx: &Context, command: &CommandInteraction) {
    let Some(bot_command) = BotCommand::from_name(&command.data.name) else {
        tracing::debug!("Ignoring unknown command '{}'", command.data.name);
        return;
    };

    tracing::debug!(
        "Command '{}' invoked by {} in {:?}",
        bot_command.name(),
        command.user.id,
        command.guild_id
    );

    let result = match guard_context(ctx, command).await {
        Ok(context) => match CommandGuard::new(&context).require(bot_command.requirements()) {
            Ok(()) => run(ctx, command, bot_command).await,
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        report_error(ctx, command, bot_command.name(), e).await;
    }
}

async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    bot_command: BotCommand,
) -> Result<(), AppError> {
    match bot_command {
        BotCommand::Send => {
            let modal = message_modal(CustomId::SendMessage, "Type the message here", "Message");
            command
                .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
                .await?;
        }
        BotCommand::EditRoles => {
            let message_id = target_message_id(command)?;
            let response = CreateInteractionResponseMessage::new()
                .content("Pick the mode")
                .components(vec![mode_select_row(message_id)])
                .ephemeral(true);
            command
                .create_response(&ctx.http, CreateInteractionResponse::Message(response))
                .await?;
        }
        BotCommand::RemoveButtons => {
            let message_id = target_message_id(command)?;
            let gateway = SerenityDiscord::from_context(ctx);
            ButtonSetService::new(&gateway)
                .clear(command.channel_id, message_id)
                .await?;

            tracing::info!(
                "Removed buttons from message {} in channel {}",
                message_id,
                command.channel_id
            );
            reply(ctx, command, bot_command.name(), "Removed the buttons!").await;
        }
        BotCommand::EditMessage => {
            let message_id = target_message_id(command)?;
            let modal = message_modal(
                CustomId::EditMessage { message_id },
                "Type the new message here",
                "New message",
            );
            command
                .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
                .await?;
        }
    }

    Ok(())
}

/// Collects what the guards need from the interaction and the cache.
///
/// The interaction's own `member.permissions` already has channel overwrites
/// applied, so guild-wide permissions are recomputed from the member's roles.
async fn guard_context(
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<GuardContext, AppError> {
    let guild_owner_id = command
        .guild_id
        .and_then(|guild_id| ctx.cache.guild(guild_id).map(|guild| guild.owner_id));

    let target_author_id = match command.data.target() {
        Some(ResolvedTarget::Message(message)) => Some(message.author.id),
        _ => None,
    };

    let bot_id = ctx.cache.current_user().id;

    let invoker_permissions = match (command.guild_id, command.member.as_ref()) {
        (Some(guild_id), Some(member)) => {
            let guild_roles = SerenityDiscord::from_context(ctx)
                .guild_roles(guild_id)
                .await?;
            Some(guild_permissions(guild_id, &member.roles, &guild_roles))
        }
        _ => None,
    };

    Ok(GuardContext {
        invoker_id: command.user.id,
        invoker_permissions,
        guild_owner_id,
        bot_id,
        target_author_id,
    })
}

fn target_message_id(command: &CommandInteraction) -> Result<MessageId, AppError> {
    match command.data.target() {
        Some(ResolvedTarget::Message(message)) => Ok(message.id),
        _ => Err(AppError::BadRequest(
            "This command must be used on a message.".to_string(),
        )),
    }
}
