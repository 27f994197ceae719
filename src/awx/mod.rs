//! AWX API client module
//!
//! This module provides typed access to the AWX / Ansible Automation
//! Platform REST API. Every resource family adds methods to [`AwxClient`];
//! they all go through three shared helpers: cursor pagination
//! ([`AwxClient::fetch_all_pages`]), association links
//! ([`AwxClient::link_resource`]) and mandatory-field validation
//! ([`validate_params`]).

pub mod association;
mod client;
pub mod helpers;
pub mod hosts;
pub mod models;
pub mod organizations;
pub mod pagination;
pub mod roles;
pub mod tokens;
pub mod traits;
pub mod users;
pub mod validate;

use std::collections::BTreeMap;

pub use association::{run_link_command, AssociationRequest, LinkMode};
pub use client::AwxClient;
pub use helpers::{collect_parent_results, fetch_from_parents, log_completion};
pub use models::{Application, Credential, Host, Inventory, JobTemplate, Organization, Team, User};
pub use organizations::{run_org_command, run_org_resource_command};
pub use pagination::{merge_query, PaginatedResponse};
pub use roles::{run_role_command, run_role_resource_command, Role};
pub use tokens::{run_token_command, AuthorizedToken, PersonalToken, Token};
pub use traits::AwxResource;
pub use users::run_user_token_command;
pub use validate::{require_fields, validate_params};

/// JSON object sent as a request body
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Query parameters of a request (sorted by name)
pub type QueryParams = BTreeMap<String, String>;
