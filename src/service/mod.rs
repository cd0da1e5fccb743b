//! Business logic behind each interaction.
//!
//! Services are generic over [`DiscordGateway`](crate::data::discord::DiscordGateway)
//! and return the text the handler sends back, keeping serenity's interaction
//! types out of this layer.

pub mod button;
pub mod message;
pub mod role;

#[cfg(test)]
mod test;
