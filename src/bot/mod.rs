//! Discord bot integration for self-assignable role buttons.
//!
//! The bot posts messages through a `/send` modal, attaches a grid of role
//! buttons to them through the `Edit Roles` message command, and toggles the
//! matching role on whoever clicks a button. Messages are only ever edited if
//! the bot authored them.
//!
//! No state is stored between interactions. The role set of a button message
//! is recovered from the custom ids of its own buttons whenever a unique mode
//! button is clicked.
//!
//! # Gateway Intents
//!
//! The bot only requires `GUILDS`, which provides the guild and role cache used
//! for owner checks and role names. Member data arrives with each interaction.

pub mod command;
pub mod component;
pub mod handler;
pub mod start;
