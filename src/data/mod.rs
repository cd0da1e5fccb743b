//! Data access layer.
//!
//! Discord itself is the only store this bot has: button sets live on the
//! messages they are attached to and role assignments live on members. This
//! layer wraps the serenity cache and REST client behind [`discord::DiscordGateway`].

pub mod discord;

#[cfg(test)]
pub mod fake;
