//! Host API operations

use crate::awx::association::LinkMode;
use crate::awx::models::Host;
use crate::awx::{AwxClient, Payload, QueryParams};
use crate::config::api::{self, related};
use crate::error::Result;

impl AwxClient {
    /// List all hosts (with pagination)
    pub async fn list_hosts(&self, params: &QueryParams) -> Result<Vec<Host>> {
        self.list_collection(api::HOSTS, params).await
    }

    /// Get a host by ID
    pub async fn get_host(&self, id: i64) -> Result<Host> {
        self.get_resource(
            &api::resource_path(api::HOSTS, id),
            &QueryParams::new(),
            &format!("host {}", id),
        )
        .await
    }

    /// Add a host to a group
    ///
    /// `data` must carry the group `id`. Returns the host when the server
    /// echoes it back, `None` on an empty (204) response.
    pub async fn associate_host_group(&self, host_id: i64, data: Payload) -> Result<Option<Host>> {
        self.link_payload(api::HOSTS, host_id, related::GROUPS, data, LinkMode::Associate)
            .await
    }

    /// Remove a host from a group
    ///
    /// `data` must carry the group `id`.
    pub async fn disassociate_host_group(
        &self,
        host_id: i64,
        data: Payload,
    ) -> Result<Option<Host>> {
        self.link_payload(api::HOSTS, host_id, related::GROUPS, data, LinkMode::Disassociate)
            .await
    }
}
