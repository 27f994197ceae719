//! Organization API operations
//!
//! Besides CRUD on organizations, every related collection of an
//! organization (admins, users, teams, ...) gets the same four calls:
//! list, create, associate and disassociate.

use log::debug;
use serde::de::DeserializeOwned;

use crate::awx::models::{
    Application, Credential, Inventory, JobTemplate, Organization, Team, User,
};
use crate::awx::roles::Role;
use crate::awx::{AwxClient, Payload, QueryParams};
use crate::config::api::{self, related};
use crate::error::Result;

impl AwxClient {
    /// List all organizations (with pagination)
    pub async fn list_organizations(&self, params: &QueryParams) -> Result<Vec<Organization>> {
        self.list_collection(api::ORGANIZATIONS, params).await
    }

    /// Get an organization by ID
    pub async fn get_organization(&self, id: i64) -> Result<Organization> {
        self.get_resource(
            &api::resource_path(api::ORGANIZATIONS, id),
            &QueryParams::new(),
            &format!("organization {}", id),
        )
        .await
    }

    /// Create an organization
    ///
    /// Mandatory fields: `name`.
    pub async fn create_organization(&self, data: &Payload) -> Result<Organization> {
        self.create_resource(
            &api::collection_path(api::ORGANIZATIONS),
            data,
            &["name"],
            &QueryParams::new(),
            "organization",
        )
        .await
    }

    /// Update an organization (PATCH)
    pub async fn update_organization(&self, id: i64, data: &Payload) -> Result<Organization> {
        self.update_resource(
            &api::resource_path(api::ORGANIZATIONS, id),
            data,
            &QueryParams::new(),
            &format!("organization {}", id),
        )
        .await
    }

    /// Delete an organization
    pub async fn delete_organization(&self, id: i64) -> Result<()> {
        self.delete_resource(
            &api::resource_path(api::ORGANIZATIONS, id),
            &format!("organization {}", id),
        )
        .await
    }

    async fn list_organization_related<T>(
        &self,
        org_id: i64,
        relation: &str,
        params: &QueryParams,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        debug!("Listing {} of organization {}", relation, org_id);
        self.list_related(api::ORGANIZATIONS, org_id, relation, params)
            .await
    }

    async fn create_organization_related<T>(
        &self,
        org_id: i64,
        relation: &str,
        data: &Payload,
        mandatory_fields: &[&str],
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.create_resource(
            &api::related_path(api::ORGANIZATIONS, org_id, relation),
            data,
            mandatory_fields,
            &QueryParams::new(),
            &format!("{} in organization {}", relation, org_id),
        )
        .await
    }

    // Admins

    /// List the admins of an organization
    pub async fn list_organization_admins(
        &self,
        org_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<User>> {
        self.list_organization_related(org_id, related::ADMINS, params)
            .await
    }

    /// Create a user as an admin of the organization
    ///
    /// Mandatory fields: `username`, `email`.
    pub async fn create_organization_admin(&self, org_id: i64, data: &Payload) -> Result<User> {
        self.create_organization_related(org_id, related::ADMINS, data, &["username", "email"])
            .await
    }

    /// Make an existing user an admin of the organization
    pub async fn associate_organization_admin(&self, org_id: i64, user_id: i64) -> Result<()> {
        self.associate(api::ORGANIZATIONS, org_id, related::ADMINS, user_id)
            .await
    }

    /// Remove a user's admin role from the organization
    pub async fn disassociate_organization_admin(&self, org_id: i64, user_id: i64) -> Result<()> {
        self.disassociate(api::ORGANIZATIONS, org_id, related::ADMINS, user_id)
            .await
    }

    /// Check whether a user is an admin of the organization
    pub async fn is_organization_admin(&self, org_id: i64, user_id: i64) -> Result<bool> {
        let admins = self
            .list_organization_admins(org_id, &QueryParams::new())
            .await?;
        Ok(admins.iter().any(|admin| admin.id == user_id))
    }

    // Users

    /// List the users of an organization
    pub async fn list_organization_users(
        &self,
        org_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<User>> {
        self.list_organization_related(org_id, related::USERS, params)
            .await
    }

    /// Create a user in the organization
    ///
    /// Mandatory fields: `username`, `email`.
    pub async fn create_organization_user(&self, org_id: i64, data: &Payload) -> Result<User> {
        self.create_organization_related(org_id, related::USERS, data, &["username", "email"])
            .await
    }

    /// Add an existing user to the organization
    pub async fn associate_organization_user(&self, org_id: i64, user_id: i64) -> Result<()> {
        self.associate(api::ORGANIZATIONS, org_id, related::USERS, user_id)
            .await
    }

    /// Remove a user from the organization
    pub async fn disassociate_organization_user(&self, org_id: i64, user_id: i64) -> Result<()> {
        self.disassociate(api::ORGANIZATIONS, org_id, related::USERS, user_id)
            .await
    }

    // Teams

    /// List the teams of an organization
    pub async fn list_organization_teams(
        &self,
        org_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<Team>> {
        self.list_organization_related(org_id, related::TEAMS, params)
            .await
    }

    /// Create a team in the organization
    ///
    /// Mandatory fields: `name`.
    pub async fn create_organization_team(&self, org_id: i64, data: &Payload) -> Result<Team> {
        self.create_organization_related(org_id, related::TEAMS, data, &["name"])
            .await
    }

    pub async fn associate_organization_team(&self, org_id: i64, team_id: i64) -> Result<()> {
        self.associate(api::ORGANIZATIONS, org_id, related::TEAMS, team_id)
            .await
    }

    pub async fn disassociate_organization_team(&self, org_id: i64, team_id: i64) -> Result<()> {
        self.disassociate(api::ORGANIZATIONS, org_id, related::TEAMS, team_id)
            .await
    }

    // Applications

    /// List the OAuth2 applications of an organization
    pub async fn list_organization_applications(
        &self,
        org_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<Application>> {
        self.list_organization_related(org_id, related::APPLICATIONS, params)
            .await
    }

    /// Create an OAuth2 application in the organization
    ///
    /// Mandatory fields: `name`, `client_type`, `authorization_grant_type`.
    pub async fn create_organization_application(
        &self,
        org_id: i64,
        data: &Payload,
    ) -> Result<Application> {
        self.create_organization_related(
            org_id,
            related::APPLICATIONS,
            data,
            &["name", "client_type", "authorization_grant_type"],
        )
        .await
    }

    pub async fn associate_organization_application(
        &self,
        org_id: i64,
        application_id: i64,
    ) -> Result<()> {
        self.associate(api::ORGANIZATIONS, org_id, related::APPLICATIONS, application_id)
            .await
    }

    pub async fn disassociate_organization_application(
        &self,
        org_id: i64,
        application_id: i64,
    ) -> Result<()> {
        self.disassociate(api::ORGANIZATIONS, org_id, related::APPLICATIONS, application_id)
            .await
    }

    // Credentials

    /// List the credentials of an organization
    pub async fn list_organization_credentials(
        &self,
        org_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<Credential>> {
        self.list_organization_related(org_id, related::CREDENTIALS, params)
            .await
    }

    /// Create a credential in the organization
    ///
    /// Mandatory fields: `name`, `credential_type`.
    pub async fn create_organization_credential(
        &self,
        org_id: i64,
        data: &Payload,
    ) -> Result<Credential> {
        self.create_organization_related(
            org_id,
            related::CREDENTIALS,
            data,
            &["name", "credential_type"],
        )
        .await
    }

    pub async fn associate_organization_credential(
        &self,
        org_id: i64,
        credential_id: i64,
    ) -> Result<()> {
        self.associate(api::ORGANIZATIONS, org_id, related::CREDENTIALS, credential_id)
            .await
    }

    pub async fn disassociate_organization_credential(
        &self,
        org_id: i64,
        credential_id: i64,
    ) -> Result<()> {
        self.disassociate(api::ORGANIZATIONS, org_id, related::CREDENTIALS, credential_id)
            .await
    }

    // Inventories

    /// List the inventories of an organization
    pub async fn list_organization_inventories(
        &self,
        org_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<Inventory>> {
        self.list_organization_related(org_id, related::INVENTORIES, params)
            .await
    }

    /// Create an inventory in the organization
    ///
    /// Mandatory fields: `name`.
    pub async fn create_organization_inventory(
        &self,
        org_id: i64,
        data: &Payload,
    ) -> Result<Inventory> {
        self.create_organization_related(org_id, related::INVENTORIES, data, &["name"])
            .await
    }

    pub async fn associate_organization_inventory(
        &self,
        org_id: i64,
        inventory_id: i64,
    ) -> Result<()> {
        self.associate(api::ORGANIZATIONS, org_id, related::INVENTORIES, inventory_id)
            .await
    }

    pub async fn disassociate_organization_inventory(
        &self,
        org_id: i64,
        inventory_id: i64,
    ) -> Result<()> {
        self.disassociate(api::ORGANIZATIONS, org_id, related::INVENTORIES, inventory_id)
            .await
    }

    // Job templates

    /// List the job templates of an organization
    pub async fn list_organization_job_templates(
        &self,
        org_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<JobTemplate>> {
        self.list_organization_related(org_id, related::JOB_TEMPLATES, params)
            .await
    }

    /// Create a job template in the organization
    ///
    /// Mandatory fields: `name`, `job_type`, `inventory`, `project`.
    pub async fn create_organization_job_template(
        &self,
        org_id: i64,
        data: &Payload,
    ) -> Result<JobTemplate> {
        self.create_organization_related(
            org_id,
            related::JOB_TEMPLATES,
            data,
            &["name", "job_type", "inventory", "project"],
        )
        .await
    }

    pub async fn associate_organization_job_template(
        &self,
        org_id: i64,
        template_id: i64,
    ) -> Result<()> {
        self.associate(api::ORGANIZATIONS, org_id, related::JOB_TEMPLATES, template_id)
            .await
    }

    pub async fn disassociate_organization_job_template(
        &self,
        org_id: i64,
        template_id: i64,
    ) -> Result<()> {
        self.disassociate(api::ORGANIZATIONS, org_id, related::JOB_TEMPLATES, template_id)
            .await
    }

    // Object roles

    /// List every object role of an organization
    pub async fn list_organization_object_roles(
        &self,
        org_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<Role>> {
        self.list_organization_related(org_id, related::OBJECT_ROLES, params)
            .await
    }

    /// Create an object role in the organization
    ///
    /// Mandatory fields: `name`.
    pub async fn create_organization_object_role(
        &self,
        org_id: i64,
        data: &Payload,
    ) -> Result<Role> {
        self.create_organization_related(org_id, related::OBJECT_ROLES, data, &["name"])
            .await
    }

    pub async fn associate_organization_object_role(
        &self,
        org_id: i64,
        role_id: i64,
    ) -> Result<()> {
        self.associate(api::ORGANIZATIONS, org_id, related::OBJECT_ROLES, role_id)
            .await
    }

    pub async fn disassociate_organization_object_role(
        &self,
        org_id: i64,
        role_id: i64,
    ) -> Result<()> {
        self.disassociate(api::ORGANIZATIONS, org_id, related::OBJECT_ROLES, role_id)
            .await
    }
}
