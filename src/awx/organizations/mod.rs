//! Organizations module - organizations and their related collections

mod api;
mod commands;

pub use commands::{run_org_command, run_org_resource_command};
