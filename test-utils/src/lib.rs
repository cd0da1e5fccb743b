//! Role Buttons Test Utils
//!
//! Provides shared testing utilities for the role-buttons bot. Serenity's model
//! types have no public constructors for most fields, so the factories here
//! build them by deserializing JSON shaped like Discord's API payloads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_button_row, create_test_role};
//!
//! #[test]
//! fn builds_fixtures() {
//!     let role = create_test_role(111111111, "Red", None);
//!     let row = create_test_button_row(&[("r2-111111111", "Red")]);
//! }
//! ```

pub mod serenity;
