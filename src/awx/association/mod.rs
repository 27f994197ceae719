//! Associate/disassociate related resources with a parent
//!
//! AWX links an existing child resource to a parent by POSTing
//! `{"id": <child>, "associate": true}` to the parent's related endpoint
//! (`/api/v2/<collection>/<id>/<relation>/`) and unlinks it with
//! `{"id": <child>, "disassociate": true}`. The child itself is never
//! created or deleted by these calls.

mod commands;

use log::debug;
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::Result;

use super::validate::require_fields;
use super::{AwxClient, Payload};

pub use commands::run_link_command;

/// Whether a link call adds or removes the relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    Associate,
    Disassociate,
}

impl LinkMode {
    /// Payload flag carried by this mode
    pub fn flag(&self) -> &'static str {
        match self {
            LinkMode::Associate => "associate",
            LinkMode::Disassociate => "disassociate",
        }
    }

    /// The other mode
    pub fn opposite(&self) -> LinkMode {
        match self {
            LinkMode::Associate => LinkMode::Disassociate,
            LinkMode::Disassociate => LinkMode::Associate,
        }
    }

    /// Fields a payload must carry before it is sent
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            LinkMode::Associate => &["id"],
            LinkMode::Disassociate => &["id", "disassociate"],
        }
    }
}

impl std::fmt::Display for LinkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Body of an association call
///
/// Holding a single [`LinkMode`] makes a payload with both flags
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationRequest {
    pub id: i64,
    pub mode: LinkMode,
}

impl AssociationRequest {
    pub fn associate(id: i64) -> Self {
        Self {
            id,
            mode: LinkMode::Associate,
        }
    }

    pub fn disassociate(id: i64) -> Self {
        Self {
            id,
            mode: LinkMode::Disassociate,
        }
    }

    /// Convert to the JSON object sent on the wire
    pub fn into_payload(self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("id".to_string(), serde_json::json!(self.id));
        payload.insert(self.mode.flag().to_string(), serde_json::Value::Bool(true));
        payload
    }
}

impl AwxClient {
    /// Link or unlink using a caller-built payload
    ///
    /// The opposite flag is dropped from `data` and the mode flag is added,
    /// so only one of them is ever sent. Then the mandatory fields are checked
    /// and the payload is POSTed. A response body, when the server sends
    /// one, is decoded into `T`; an empty body yields `None`.
    pub async fn link_payload<T>(
        &self,
        collection: &str,
        parent_id: i64,
        relation: &str,
        mut data: Payload,
        mode: LinkMode,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        data.remove(mode.opposite().flag());
        data.insert(mode.flag().to_string(), serde_json::Value::Bool(true));
        require_fields(&data, mode.required_fields())?;

        let url = self.url_for(&api::related_path(collection, parent_id, relation))?;
        debug!("POST {} ({}) to: {}", relation, mode, url);

        let response = self.post(url).json(&data).send().await?;
        let context = format!("{} {} of {} {}", mode, relation, collection, parent_id);
        self.parse_optional_response(response, &context).await
    }

    /// Link or unlink `related_id` under `/<collection>/<parent_id>/<relation>/`
    pub async fn link_resource(
        &self,
        collection: &str,
        parent_id: i64,
        relation: &str,
        related_id: i64,
        mode: LinkMode,
    ) -> Result<()> {
        let request = AssociationRequest { id: related_id, mode };
        self.link_payload::<serde_json::Value>(
            collection,
            parent_id,
            relation,
            request.into_payload(),
            mode,
        )
        .await?;

        debug!(
            "{} {} {} with {} {}",
            mode, relation, related_id, collection, parent_id
        );
        Ok(())
    }

    /// Associate `related_id` with the parent
    pub async fn associate(
        &self,
        collection: &str,
        parent_id: i64,
        relation: &str,
        related_id: i64,
    ) -> Result<()> {
        self.link_resource(collection, parent_id, relation, related_id, LinkMode::Associate)
            .await
    }

    /// Disassociate `related_id` from the parent
    pub async fn disassociate(
        &self,
        collection: &str,
        parent_id: i64,
        relation: &str,
        related_id: i64,
    ) -> Result<()> {
        self.link_resource(
            collection,
            parent_id,
            relation,
            related_id,
            LinkMode::Disassociate,
        )
        .await
    }
}
