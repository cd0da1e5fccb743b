//! Discord bot that hands out self-assignable roles through message buttons.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod service;
pub mod util;
