pub mod aliases;
pub mod commands;
pub mod config;
pub mod state;
