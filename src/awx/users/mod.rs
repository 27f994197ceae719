//! Users module - users and the tokens they own

mod api;
mod commands;

pub use commands::run_user_token_command;
