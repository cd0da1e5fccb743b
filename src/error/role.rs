use thiserror::Error;

use crate::{error::AppError, model::role::RoleAction};

/// A role toggle that could not be applied to the member.
///
/// Displays as the message sent back to the member, e.g.
/// `Failed to add the role: you have a conflicting role! (Red)`.
#[derive(Error, Debug)]
#[error("Failed to {action} the role: {reason}")]
pub struct RoleToggleError {
    /// What the toggle was attempting when it failed
    pub action: RoleAction,
    /// Why it failed
    #[source]
    pub reason: RoleError,
}

#[derive(Error, Debug)]
pub enum RoleError {
    /// Unique mode: the member already holds other roles from the same button set.
    ///
    /// # Fields
    /// - Display names of every conflicting role the member holds
    #[error("you have {} ({})", conflict_phrase(.0.len()), .0.join(", "))]
    Conflicting(Vec<String>),

    /// Discord rejected the role mutation (missing permissions, hierarchy, ...).
    #[error(transparent)]
    Platform(Box<AppError>),
}

fn conflict_phrase(count: usize) -> &'static str {
    if count == 1 {
        "a conflicting role!"
    } else {
        "conflicting roles!"
    }
}
