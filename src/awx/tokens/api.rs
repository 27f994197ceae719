//! Token API operations

use crate::awx::{AwxClient, Payload, QueryParams};
use crate::config::api;
use crate::error::Result;

use super::models::Token;

impl AwxClient {
    /// List all tokens (with pagination)
    pub async fn list_tokens(&self, params: &QueryParams) -> Result<Vec<Token>> {
        self.list_collection(api::TOKENS, params).await
    }

    /// Get a token by ID
    pub async fn get_token(&self, id: i64, params: &QueryParams) -> Result<Token> {
        self.get_resource(
            &api::resource_path(api::TOKENS, id),
            params,
            &format!("token {}", id),
        )
        .await
    }

    /// Update a token (PATCH)
    pub async fn update_token(
        &self,
        id: i64,
        data: &Payload,
        params: &QueryParams,
    ) -> Result<Token> {
        self.update_resource(
            &api::resource_path(api::TOKENS, id),
            data,
            params,
            &format!("token {}", id),
        )
        .await
    }

    /// Replace a token (PUT)
    pub async fn replace_token(
        &self,
        id: i64,
        data: &Payload,
        params: &QueryParams,
    ) -> Result<Token> {
        self.replace_resource(
            &api::resource_path(api::TOKENS, id),
            data,
            params,
            &format!("token {}", id),
        )
        .await
    }

    /// Delete a token
    pub async fn delete_token(&self, id: i64) -> Result<()> {
        self.delete_resource(
            &api::resource_path(api::TOKENS, id),
            &format!("token {}", id),
        )
        .await
    }
}
