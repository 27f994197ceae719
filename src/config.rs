/// Configuration constants for the AWX API
pub mod api {
    /// Base path for AWX API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations collection
    pub const ORGANIZATIONS: &str = "organizations";

    /// Roles collection
    pub const ROLES: &str = "roles";

    /// Tokens collection
    pub const TOKENS: &str = "tokens";

    /// Users collection
    pub const USERS: &str = "users";

    /// Hosts collection
    pub const HOSTS: &str = "hosts";

    /// Related sub-resource names used under a parent resource
    pub mod related {
        pub const ADMINS: &str = "admins";
        pub const USERS: &str = "users";
        pub const TEAMS: &str = "teams";
        pub const APPLICATIONS: &str = "applications";
        pub const CREDENTIALS: &str = "credentials";
        pub const INVENTORIES: &str = "inventories";
        pub const JOB_TEMPLATES: &str = "job_templates";
        pub const OBJECT_ROLES: &str = "object_roles";
        pub const GROUPS: &str = "groups";
        pub const TOKENS: &str = "tokens";
        pub const AUTHORIZED_TOKENS: &str = "authorized_tokens";
        pub const PERSONAL_TOKENS: &str = "personal_tokens";
    }

    /// Build a collection endpoint, e.g. `/api/v2/roles/`
    pub fn collection_path(collection: &str) -> String {
        format!("{}/{}/", BASE_PATH, collection)
    }

    /// Build a single resource endpoint, e.g. `/api/v2/roles/7/`
    pub fn resource_path(collection: &str, id: i64) -> String {
        format!("{}/{}/{}/", BASE_PATH, collection, id)
    }

    /// Build a related sub-resource endpoint, e.g. `/api/v2/organizations/7/teams/`
    pub fn related_path(collection: &str, id: i64, related: &str) -> String {
        format!("{}/{}/{}/{}/", BASE_PATH, collection, id, related)
    }
}

/// Environment variables read by the CLI
pub mod env {
    /// AWX host (name or full URL)
    pub const HOST: &str = "AWX_HOST";

    /// Bearer token sent with every request
    pub const TOKEN: &str = "AWX_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
