//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::{parse_key_val, OutputFormat};
use super::enums::{OrgRelation, RoleRelation, TokenKind};

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get organizations
    #[command(
        visible_alias = "orgs",
        visible_alias = "organization",
        visible_alias = "organizations"
    )]
    Org(OrgArgs),

    /// Get a related collection of one or more organizations
    #[command(visible_alias = "org-resources")]
    OrgResource(OrgResourceArgs),

    /// Get roles
    #[command(visible_alias = "roles")]
    Role(RoleArgs),

    /// Get a related collection of a role
    #[command(visible_alias = "role-resources")]
    RoleResource(RoleResourceArgs),

    /// Get OAuth2 tokens
    #[command(visible_alias = "tokens")]
    Token(TokenArgs),

    /// Get the tokens of a user
    #[command(visible_alias = "user-tokens")]
    UserToken(UserTokenArgs),
}

/// Arguments for 'get org' subcommand
#[derive(Parser, Debug)]
pub struct OrgArgs {
    /// Organization ID (if specified, shows only that organization)
    pub id: Option<i64>,

    /// Filter organizations by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Extra query parameter (KEY=VALUE, repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get org-resource' subcommand
#[derive(Parser, Debug)]
pub struct OrgResourceArgs {
    /// Related collection to list
    #[arg(value_enum)]
    pub relation: OrgRelation,

    /// Organization ID (repeatable or comma-separated; fetched concurrently)
    #[arg(long = "org", required = true, value_delimiter = ',')]
    pub org: Vec<i64>,

    /// Filter results by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Extra query parameter (KEY=VALUE, repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get role' subcommand
#[derive(Parser, Debug)]
pub struct RoleArgs {
    /// Role ID (if specified, shows only that role)
    pub id: Option<i64>,

    /// Filter roles by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Extra query parameter (KEY=VALUE, repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get role-resource' subcommand
#[derive(Parser, Debug)]
pub struct RoleResourceArgs {
    /// Related collection to list
    #[arg(value_enum)]
    pub relation: RoleRelation,

    /// Role ID
    #[arg(long)]
    pub role: i64,

    /// Filter results by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Extra query parameter (KEY=VALUE, repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get token' subcommand
#[derive(Parser, Debug)]
pub struct TokenArgs {
    /// Token ID (if specified, shows only that token)
    pub id: Option<i64>,

    /// Hide tokens that already expired
    #[arg(long, default_value_t = false)]
    pub active: bool,

    /// Extra query parameter (KEY=VALUE, repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get user-token' subcommand
#[derive(Parser, Debug)]
pub struct UserTokenArgs {
    /// Token ID (if specified, shows only that token)
    pub id: Option<i64>,

    /// Owner user ID
    #[arg(long)]
    pub user: i64,

    /// Which tokens of the user to read
    #[arg(short, long, value_enum, default_value_t = TokenKind::Regular)]
    pub kind: TokenKind,

    /// Hide tokens that already expired
    #[arg(long, default_value_t = false)]
    pub active: bool,

    /// Extra query parameter (KEY=VALUE, repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
