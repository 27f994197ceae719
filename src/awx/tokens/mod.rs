//! Tokens module - OAuth2 tokens

mod api;
mod commands;
mod models;

pub(crate) use commands::retain_active;
pub use commands::run_token_command;
pub use models::{
    AuthorizedToken, PersonalToken, Token, TokenSummaryApplication, TokenSummaryFields,
    TokenSummaryUser,
};
