//! Ephemeral replies and error reporting shared by the interaction handlers.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, ModalInteraction,
};
use serenity::async_trait;

use crate::error::AppError;

/// Interactions that can receive a reply only the invoker sees.
#[async_trait]
pub trait EphemeralReply {
    /// Replies as the initial response, or as a follow-up once the interaction
    /// has already been acknowledged.
    async fn reply_ephemeral(&self, ctx: &Context, content: String) -> Result<(), AppError>;
}

macro_rules! impl_ephemeral_reply {
    ($($interaction:ty),+ $(,)?) => {
        $(
            #[async_trait]
            impl EphemeralReply for $interaction {
                async fn reply_ephemeral(
                    &self,
                    ctx: &Context,
                    content: String,
                ) -> Result<(), AppError> {
                    let response = CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .content(content.clone())
                            .ephemeral(true),
                    );

                    if self.create_response(&ctx.http, response).await.is_ok() {
                        return Ok(());
                    }

                    self.create_followup(
                        &ctx.http,
                        CreateInteractionResponseFollowup::new()
                            .content(content)
                            .ephemeral(true),
                    )
                    .await?;

                    Ok(())
                }
            }
        )+
    };
}

impl_ephemeral_reply!(CommandInteraction, ComponentInteraction, ModalInteraction);

/// Logs a failed handler and tells the invoker what went wrong.
///
/// Guard failures are expected and logged at debug level, everything else at
/// error level.
pub async fn report_error<I>(ctx: &Context, interaction: &I, tag: &str, err: AppError)
where
    I: EphemeralReply + Sync,
{
    match &err {
        AppError::CheckErr(check) => tracing::debug!("{} rejected by guard: {}", tag, check),
        other => tracing::error!("{} failed: {}", tag, other),
    }

    if let Err(e) = interaction.reply_ephemeral(ctx, err.to_string()).await {
        tracing::error!("Failed to report {} error to user: {}", tag, e);
    }
}

/// Sends an ephemeral reply, logging instead of propagating a failure.
pub async fn reply<I>(ctx: &Context, interaction: &I, tag: &str, content: impl Into<String>)
where
    I: EphemeralReply + Sync,
{
    if let Err(e) = interaction.reply_ephemeral(ctx, content.into()).await {
        tracing::error!("Failed to send {} reply: {}", tag, e);
    }
}
