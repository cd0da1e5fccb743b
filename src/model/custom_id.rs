//! Custom id encoding for the bot's UI components.
//!
//! Discord echoes a component's custom id back verbatim when it is used, so the
//! bot stores everything it needs to finish an action inside that string. The
//! raw id is parsed exactly once into a [`CustomId`] and handlers match on the
//! variant instead of slicing strings.
//!
//! | Variant          | Wire form              |
//! |------------------|------------------------|
//! | `SendMessage`    | `msg`                  |
//! | `EditMessage`    | `edit-<message id>`    |
//! | `UpdateButtons`  | `u<mode>-<message id>` |
//! | `ToggleRole`     | `r<mode>-<role id>`    |
//! | `SelectMode`     | `mode-<message id>`    |

use std::fmt;
use std::str::FromStr;

use serenity::all::{MessageId, RoleId};

use crate::error::{internal::InternalError, AppError};

const SEND_MESSAGE: &str = "msg";
const EDIT_MESSAGE_PREFIX: &str = "edit-";
const SELECT_MODE_PREFIX: &str = "mode-";
const UPDATE_BUTTONS_TAG: char = 'u';
const TOGGLE_ROLE_TAG: char = 'r';
const MODE_SEPARATOR: char = '-';

/// How a button set treats members holding several of its roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Members may hold any number of the set's roles.
    Normal,
    /// Members may hold at most one role from the set at a time.
    Unique,
}

impl Mode {
    pub fn digit(self) -> char {
        match self {
            Mode::Normal => '1',
            Mode::Unique => '2',
        }
    }

    pub fn is_unique(self) -> bool {
        matches!(self, Mode::Unique)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

impl FromStr for Mode {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Mode::Normal),
            "2" => Ok(Mode::Unique),
            other => Err(InternalError::InvalidMode(other.to_string())),
        }
    }
}

/// Parsed form of every custom id the bot emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomId {
    /// Submission of the `/send` modal.
    SendMessage,
    /// Submission of the `Edit Message` modal for the given message.
    EditMessage { message_id: MessageId },
    /// Role select choosing which roles get buttons on the given message.
    UpdateButtons { mode: Mode, message_id: MessageId },
    /// A role button on a button set.
    ToggleRole { mode: Mode, role_id: RoleId },
    /// Mode picker shown by `Edit Roles` for the given message.
    SelectMode { message_id: MessageId },
}

impl CustomId {
    /// Whether this id belongs on a modal rather than a message component.
    pub fn is_modal(&self) -> bool {
        matches!(self, CustomId::SendMessage | CustomId::EditMessage { .. })
    }
}

impl fmt::Display for CustomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomId::SendMessage => write!(f, "{SEND_MESSAGE}"),
            CustomId::EditMessage { message_id } => {
                write!(f, "{EDIT_MESSAGE_PREFIX}{message_id}")
            }
            CustomId::UpdateButtons { mode, message_id } => {
                write!(f, "{UPDATE_BUTTONS_TAG}{mode}{MODE_SEPARATOR}{message_id}")
            }
            CustomId::ToggleRole { mode, role_id } => {
                write!(f, "{TOGGLE_ROLE_TAG}{mode}{MODE_SEPARATOR}{role_id}")
            }
            CustomId::SelectMode { message_id } => {
                write!(f, "{SELECT_MODE_PREFIX}{message_id}")
            }
        }
    }
}

impl FromStr for CustomId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == SEND_MESSAGE {
            return Ok(CustomId::SendMessage);
        }

        // `mode-` must be tried before the single letter tags
        if let Some(raw) = s.strip_prefix(SELECT_MODE_PREFIX) {
            return Ok(CustomId::SelectMode {
                message_id: MessageId::new(parse_snowflake(raw)?),
            });
        }

        if let Some(raw) = s.strip_prefix(EDIT_MESSAGE_PREFIX) {
            return Ok(CustomId::EditMessage {
                message_id: MessageId::new(parse_snowflake(raw)?),
            });
        }

        if let Some(raw) = s.strip_prefix(UPDATE_BUTTONS_TAG) {
            let (mode, id) = split_mode(s, raw)?;
            return Ok(CustomId::UpdateButtons {
                mode,
                message_id: MessageId::new(id),
            });
        }

        if let Some(raw) = s.strip_prefix(TOGGLE_ROLE_TAG) {
            let (mode, id) = split_mode(s, raw)?;
            return Ok(CustomId::ToggleRole {
                mode,
                role_id: RoleId::new(id),
            });
        }

        Err(InternalError::UnknownCustomId(s.to_string()).into())
    }
}

/// Splits `<mode>-<id>` into its parts.
fn split_mode(full: &str, raw: &str) -> Result<(Mode, u64), AppError> {
    let Some((mode, id)) = raw.split_once(MODE_SEPARATOR) else {
        return Err(InternalError::UnknownCustomId(full.to_string()).into());
    };

    Ok((mode.parse::<Mode>()?, parse_snowflake(id)?))
}

/// Parses a snowflake, rejecting zero since serenity ids must be non-zero.
fn parse_snowflake(raw: &str) -> Result<u64, AppError> {
    let id = raw
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId {
            value: raw.to_string(),
            source,
        })?;
    if id == 0 {
        return Err(InternalError::UnknownCustomId(raw.to_string()).into());
    }

    Ok(id)
}
