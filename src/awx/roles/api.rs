//! Role API operations

use serde::de::DeserializeOwned;

use crate::awx::models::{JobTemplate, Team, User};
use crate::awx::{AwxClient, Payload, QueryParams};
use crate::config::api::{self, related};
use crate::error::Result;

use super::models::Role;

impl AwxClient {
    /// List all roles (with pagination)
    pub async fn list_roles(&self, params: &QueryParams) -> Result<Vec<Role>> {
        self.list_collection(api::ROLES, params).await
    }

    /// Get a role by ID
    pub async fn get_role(&self, id: i64, params: &QueryParams) -> Result<Role> {
        self.get_resource(
            &api::resource_path(api::ROLES, id),
            params,
            &format!("role {}", id),
        )
        .await
    }

    /// Create a role
    ///
    /// Mandatory fields: `name`.
    pub async fn create_role(&self, data: &Payload, params: &QueryParams) -> Result<Role> {
        self.create_resource(
            &api::collection_path(api::ROLES),
            data,
            &["name"],
            params,
            "role",
        )
        .await
    }

    /// Update a role (PATCH)
    pub async fn update_role(&self, id: i64, data: &Payload) -> Result<Role> {
        self.update_resource(
            &api::resource_path(api::ROLES, id),
            data,
            &QueryParams::new(),
            &format!("role {}", id),
        )
        .await
    }

    /// Delete a role
    pub async fn delete_role(&self, id: i64) -> Result<()> {
        self.delete_resource(&api::resource_path(api::ROLES, id), &format!("role {}", id))
            .await
    }

    /// Create a resource under a role
    ///
    /// The role id is added to the payload as `role` unless the caller set it.
    async fn create_role_related<T>(
        &self,
        role_id: i64,
        relation: &str,
        data: &Payload,
        mandatory_fields: &[&str],
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut data = data.clone();
        data.entry("role")
            .or_insert_with(|| serde_json::json!(role_id));

        self.create_resource(
            &api::related_path(api::ROLES, role_id, relation),
            &data,
            mandatory_fields,
            &QueryParams::new(),
            &format!("{} for role {}", relation, role_id),
        )
        .await
    }

    // Teams

    /// List the teams holding a role
    pub async fn list_role_teams(&self, role_id: i64, params: &QueryParams) -> Result<Vec<Team>> {
        self.list_related(api::ROLES, role_id, related::TEAMS, params)
            .await
    }

    /// Create a team holding the role
    ///
    /// Mandatory fields: `name`.
    pub async fn create_role_team(&self, role_id: i64, data: &Payload) -> Result<Team> {
        self.create_role_related(role_id, related::TEAMS, data, &["name"])
            .await
    }

    /// Grant the role to a team
    pub async fn associate_role_team(&self, role_id: i64, team_id: i64) -> Result<()> {
        self.associate(api::ROLES, role_id, related::TEAMS, team_id)
            .await
    }

    /// Revoke the role from a team
    pub async fn disassociate_role_team(&self, role_id: i64, team_id: i64) -> Result<()> {
        self.disassociate(api::ROLES, role_id, related::TEAMS, team_id)
            .await
    }

    // Users

    /// List the users holding a role
    pub async fn list_role_users(&self, role_id: i64, params: &QueryParams) -> Result<Vec<User>> {
        self.list_related(api::ROLES, role_id, related::USERS, params)
            .await
    }

    /// Create a user holding the role
    ///
    /// Mandatory fields: `name`.
    pub async fn create_role_user(&self, role_id: i64, data: &Payload) -> Result<User> {
        self.create_role_related(role_id, related::USERS, data, &["name"])
            .await
    }

    /// Grant the role to a user
    pub async fn associate_role_user(&self, role_id: i64, user_id: i64) -> Result<()> {
        self.associate(api::ROLES, role_id, related::USERS, user_id)
            .await
    }

    /// Revoke the role from a user
    pub async fn disassociate_role_user(&self, role_id: i64, user_id: i64) -> Result<()> {
        self.disassociate(api::ROLES, role_id, related::USERS, user_id)
            .await
    }

    // Job templates

    /// List the job templates attached to a role
    pub async fn list_role_job_templates(
        &self,
        role_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<JobTemplate>> {
        self.list_related(api::ROLES, role_id, related::JOB_TEMPLATES, params)
            .await
    }

    /// Create a job template attached to the role
    ///
    /// Mandatory fields: `name`.
    pub async fn create_role_job_template(
        &self,
        role_id: i64,
        data: &Payload,
    ) -> Result<JobTemplate> {
        self.create_role_related(role_id, related::JOB_TEMPLATES, data, &["name"])
            .await
    }

    pub async fn associate_role_job_template(&self, role_id: i64, template_id: i64) -> Result<()> {
        self.associate(api::ROLES, role_id, related::JOB_TEMPLATES, template_id)
            .await
    }

    pub async fn disassociate_role_job_template(
        &self,
        role_id: i64,
        template_id: i64,
    ) -> Result<()> {
        self.disassociate(api::ROLES, role_id, related::JOB_TEMPLATES, template_id)
            .await
    }
}
