//! AWX resource models shared across resource families

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::traits::AwxResource;

/// Organization data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Organization {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub max_hosts: Option<i64>,
    #[serde(default)]
    pub related: HashMap<String, String>,
}

/// User data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_system_auditor: bool,
}

/// Team data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organization: Option<i64>,
}

/// Credential data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Credential {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub credential_type: Option<i64>,
    #[serde(default)]
    pub organization: Option<i64>,
}

/// Inventory data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Inventory {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organization: Option<i64>,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub total_hosts: Option<i64>,
}

/// Job template data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct JobTemplate {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub inventory: Option<i64>,
    #[serde(default)]
    pub project: Option<i64>,
    #[serde(default)]
    pub playbook: String,
}

/// OAuth2 application data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub client_type: String,
    #[serde(default)]
    pub authorization_grant_type: String,
    #[serde(default)]
    pub organization: Option<i64>,
}

/// Host data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Host {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub inventory: Option<i64>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl AwxResource for Organization {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl AwxResource for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.username
    }

    fn description(&self) -> &str {
        &self.email
    }
}

impl AwxResource for Team {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl AwxResource for Credential {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl AwxResource for Inventory {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl AwxResource for JobTemplate {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl AwxResource for Application {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl AwxResource for Host {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
