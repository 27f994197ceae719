//! awxctl - Explore and link AWX resources
//!
//! A CLI tool and client library for the AWX / Ansible Automation
//! Platform REST API (`/api/v2`).
//!
//! # Features
//!
//! - Typed clients for organizations, roles, tokens, users and hosts
//! - Automatic pagination handling (every page, in server order)
//! - Associate/disassociate related resources
//! - Mandatory-field validation before any request is sent
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # List all organizations
//! awxctl get org --host awx.example.com
//!
//! # Teams of two organizations, fetched concurrently
//! awxctl get org-resource teams --org 1 --org 2 -o json
//!
//! # Make user 7 an admin of organization 1
//! awxctl associate organizations 1 admins 7
//! ```

pub mod awx;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use awx::{
    run_link_command, run_org_command, run_org_resource_command, run_role_command,
    run_role_resource_command, run_token_command, run_user_token_command, AwxClient,
    AwxResource, Payload, QueryParams,
};
pub use cli::{Cli, Command, GetResource, LinkArgs, OutputFormat};
pub use error::{AwxError, Result};
