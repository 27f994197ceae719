//! Relation and collection enums for CLI commands

use clap::ValueEnum;

use crate::config::api::{self, related};

/// Related collections of an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrgRelation {
    Admins,
    Users,
    Teams,
    Applications,
    Credentials,
    Inventories,
    #[value(name = "job-templates")]
    JobTemplates,
    #[value(name = "object-roles")]
    ObjectRoles,
}

impl OrgRelation {
    /// Path segment of the relation in the API
    pub fn as_path(&self) -> &'static str {
        match self {
            OrgRelation::Admins => related::ADMINS,
            OrgRelation::Users => related::USERS,
            OrgRelation::Teams => related::TEAMS,
            OrgRelation::Applications => related::APPLICATIONS,
            OrgRelation::Credentials => related::CREDENTIALS,
            OrgRelation::Inventories => related::INVENTORIES,
            OrgRelation::JobTemplates => related::JOB_TEMPLATES,
            OrgRelation::ObjectRoles => related::OBJECT_ROLES,
        }
    }
}

impl std::fmt::Display for OrgRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

/// Related collections of a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleRelation {
    Teams,
    Users,
    #[value(name = "job-templates")]
    JobTemplates,
}

impl RoleRelation {
    pub fn as_path(&self) -> &'static str {
        match self {
            RoleRelation::Teams => related::TEAMS,
            RoleRelation::Users => related::USERS,
            RoleRelation::JobTemplates => related::JOB_TEMPLATES,
        }
    }
}

impl std::fmt::Display for RoleRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

/// Kinds of tokens a user owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum TokenKind {
    /// Regular OAuth2 tokens (default)
    #[default]
    Regular,
    /// Tokens authorized for applications
    Authorized,
    /// Personal access tokens
    Personal,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Regular => write!(f, "regular"),
            TokenKind::Authorized => write!(f, "authorized"),
            TokenKind::Personal => write!(f, "personal"),
        }
    }
}

/// Parent collections that accept associate/disassociate calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkCollection {
    #[value(alias = "org", alias = "orgs")]
    Organizations,
    #[value(alias = "role")]
    Roles,
    #[value(alias = "host")]
    Hosts,
}

impl LinkCollection {
    pub fn as_path(&self) -> &'static str {
        match self {
            LinkCollection::Organizations => api::ORGANIZATIONS,
            LinkCollection::Roles => api::ROLES,
            LinkCollection::Hosts => api::HOSTS,
        }
    }
}

impl std::fmt::Display for LinkCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}
