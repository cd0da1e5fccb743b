//! Domain models shared between the bot handlers and the service layer.

pub mod custom_id;
pub mod guard;
pub mod role;
