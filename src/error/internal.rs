use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected input from Discord or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Occurs when a custom id carries a known prefix but its trailing snowflake
    /// is not a valid number.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Custom id does not match any prefix this bot emits.
    ///
    /// Other bots or stale components can produce these; the router drops them.
    #[error("Unknown custom id '{0}'")]
    UnknownCustomId(String),

    /// Mode digit is not one of the known modes.
    #[error("Invalid mode '{0}'")]
    InvalidMode(String),
}
