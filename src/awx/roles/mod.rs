//! Roles module - roles and the teams, users and job templates holding them

mod api;
mod commands;
mod models;

pub use commands::{run_role_command, run_role_resource_command};
pub use models::{Role, RoleSummaryFields};
