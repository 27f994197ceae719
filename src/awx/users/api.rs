//! User API operations (users and their tokens)

use log::debug;

use crate::awx::models::User;
use crate::awx::tokens::{AuthorizedToken, PersonalToken, Token};
use crate::awx::{AwxClient, QueryParams};
use crate::config::api::{self, related};
use crate::error::Result;

impl AwxClient {
    /// List all users (with pagination)
    pub async fn list_users(&self, params: &QueryParams) -> Result<Vec<User>> {
        self.list_collection(api::USERS, params).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.get_resource(
            &api::resource_path(api::USERS, id),
            &QueryParams::new(),
            &format!("user {}", id),
        )
        .await
    }

    /// List the regular OAuth2 tokens of a user
    pub async fn list_user_tokens(&self, user_id: i64, params: &QueryParams) -> Result<Vec<Token>> {
        self.list_related(api::USERS, user_id, related::TOKENS, params)
            .await
    }

    /// Get one of a user's tokens
    ///
    /// User token URLs point at `/tokens/<id>/`, so this is a plain token lookup.
    pub async fn get_user_token(
        &self,
        user_id: i64,
        token_id: i64,
        params: &QueryParams,
    ) -> Result<Token> {
        debug!("Fetching token {} of user {}", token_id, user_id);
        self.get_token(token_id, params).await
    }

    /// List the tokens a user authorized for applications
    pub async fn list_user_authorized_tokens(
        &self,
        user_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<AuthorizedToken>> {
        self.list_related(api::USERS, user_id, related::AUTHORIZED_TOKENS, params)
            .await
    }

    /// Get one authorized token of a user
    pub async fn get_user_authorized_token(
        &self,
        user_id: i64,
        token_id: i64,
        params: &QueryParams,
    ) -> Result<AuthorizedToken> {
        let path = format!(
            "{}{}/",
            api::related_path(api::USERS, user_id, related::AUTHORIZED_TOKENS),
            token_id
        );
        self.get_resource(
            &path,
            params,
            &format!("authorized token {} of user {}", token_id, user_id),
        )
        .await
    }

    /// List the personal access tokens of a user
    pub async fn list_user_personal_tokens(
        &self,
        user_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<PersonalToken>> {
        self.list_related(api::USERS, user_id, related::PERSONAL_TOKENS, params)
            .await
    }

    /// Get one personal access token of a user
    pub async fn get_user_personal_token(
        &self,
        user_id: i64,
        token_id: i64,
        params: &QueryParams,
    ) -> Result<PersonalToken> {
        let path = format!(
            "{}{}/",
            api::related_path(api::USERS, user_id, related::PERSONAL_TOKENS),
            token_id
        );
        self.get_resource(
            &path,
            params,
            &format!("personal token {} of user {}", token_id, user_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token_json(id: i64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "summary_fields": {"user": {"id": 4, "username": "alice"}},
            "user": 4,
            "scope": "read"
        })
    }

    #[tokio::test]
    async fn test_get_user() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users/4/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 4,
                "username": "alice",
                "email": "alice@example.com"
            })))
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let user = client.get_user(4).await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_list_user_tokens() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users/4/tokens/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [token_json(1), token_json(2)]
            })))
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let tokens = client
            .list_user_tokens(4, &QueryParams::new())
            .await
            .unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_token_uses_token_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/tokens/2/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_json(2)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let token = client
            .get_user_token(4, 2, &QueryParams::new())
            .await
            .unwrap();
        assert_eq!(token.id, 2);
    }

    #[tokio::test]
    async fn test_list_user_authorized_tokens_walks_all_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users/4/authorized_tokens/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "next": null,
                "previous": "/api/v2/users/4/authorized_tokens/",
                "results": [token_json(8)]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users/4/authorized_tokens/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "next": "/api/v2/users/4/authorized_tokens/?page=2",
                "previous": null,
                "results": [token_json(7)]
            })))
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let tokens = client
            .list_user_authorized_tokens(4, &QueryParams::new())
            .await
            .unwrap();

        assert_eq!(tokens.iter().map(|t| t.id).collect::<Vec<_>>(), vec![7, 8]);
    }

    #[tokio::test]
    async fn test_get_user_authorized_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users/4/authorized_tokens/7/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_json(7)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let token = client
            .get_user_authorized_token(4, 7, &QueryParams::new())
            .await
            .unwrap();
        assert_eq!(token.id, 7);
    }

    #[tokio::test]
    async fn test_personal_tokens() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users/4/personal_tokens/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "next": "",
                "previous": null,
                "results": [token_json(11)]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users/4/personal_tokens/11/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_json(11)))
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let tokens = client
            .list_user_personal_tokens(4, &QueryParams::new())
            .await
            .unwrap();
        assert_eq!(tokens.len(), 1);

        let token = client
            .get_user_personal_token(4, 11, &QueryParams::new())
            .await
            .unwrap();
        assert_eq!(token.username(), "alice");
    }
}
