//! Role data models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::awx::traits::AwxResource;

/// Role data from AWX API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Role {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub role_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub related: HashMap<String, String>,
    #[serde(default)]
    pub summary_fields: RoleSummaryFields,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Summary of the resource a role belongs to
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RoleSummaryFields {
    #[serde(default)]
    pub resource_name: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub resource_type_display_name: String,
    #[serde(default)]
    pub resource_id: Option<i64>,
}

impl Role {
    /// Name of the resource the role grants access to
    pub fn resource_name(&self) -> &str {
        &self.summary_fields.resource_name
    }

    /// Type of the resource the role grants access to
    pub fn resource_type(&self) -> &str {
        &self.summary_fields.resource_type
    }
}

impl AwxResource for Role {
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
