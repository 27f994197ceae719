//! CLI argument parsing

mod common;
mod enums;
mod get;
mod link;

use clap::{Parser, Subcommand};

use crate::config::{defaults, env};

pub use common::{parse_key_val, to_query_params, OutputFormat};
pub use enums::{LinkCollection, OrgRelation, RoleRelation, TokenKind};
pub use get::{
    GetResource, OrgArgs, OrgResourceArgs, RoleArgs, RoleResourceArgs, TokenArgs, UserTokenArgs,
};
pub use link::LinkArgs;

/// Explore and link AWX resources
#[derive(Parser, Debug)]
#[command(name = "awxctl")]
#[command(version)]
#[command(about = "Explore AWX organizations, roles, tokens and their relations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// AWX host (bare host name or full URL)
    #[arg(short = 'H', long, env = env::HOST, global = true)]
    pub host: Option<String>,

    /// API token sent as a Bearer token
    #[arg(short = 't', long, env = env::TOKEN, global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode: no spinners, suitable for scripts
    #[arg(long, default_value_t = false, global = true)]
    pub batch: bool,

    /// Omit table/CSV headers and totals
    #[arg(long, default_value_t = false, global = true)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Associate an existing resource with a parent
    Associate(LinkArgs),

    /// Disassociate a resource from a parent
    Disassociate(LinkArgs),
}
