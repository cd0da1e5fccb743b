//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON,
//! simulating what Discord's API would return.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `role::create_test_role_with_permissions` - Create roles granting permissions
//! - `component::create_test_button_row` - Create action rows of buttons
//! - `component::create_test_select_row` - Create action rows holding a string select
//! - `component::create_test_text_input_row` - Create modal rows holding a text input

pub mod component;
pub mod role;

// Re-export commonly used functions for convenience
pub use component::{
    create_test_button_row, create_test_select_row, create_test_text_input_row,
};
pub use role::{create_test_role, create_test_role_with_permissions};
