//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services and handlers. It wraps
//! the domain-specific errors below so that `?` can be used throughout, and its
//! `Display` output is what gets reported back to the invoking user in an
//! ephemeral message.

pub mod check;
pub mod config;
pub mod internal;
pub mod role;

use thiserror::Error;

use crate::error::{
    check::CheckError, config::ConfigError, internal::InternalError, role::RoleToggleError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A command guard rejected the invocation.
    ///
    /// Reported ephemerally to the invoker before any REST call is made.
    #[error(transparent)]
    CheckErr(#[from] CheckError),

    /// Adding or removing a role from a member failed.
    #[error(transparent)]
    RoleErr(#[from] RoleToggleError),

    /// Internal issues such as malformed custom ids.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Interaction payload was missing something the handler needs.
    ///
    /// # Fields
    /// - Message describing what was missing
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
