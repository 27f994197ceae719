//! Cursor-following pagination over AWX list endpoints

use log::debug;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::api;
use crate::error::Result;

use super::client::set_query;
use super::{AwxClient, QueryParams};

/// One page of an AWX list endpoint
///
/// `next` is `None` (JSON `null`) or `""` on the last page; both mean the
/// same thing.
#[derive(Deserialize, Debug, Clone)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Cursor of the following page, if any
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }
}

/// Merge cursor query parameters with the caller's
///
/// Only the first value of a repeated cursor key is kept; caller
/// parameters override cursor parameters of the same name.
pub fn merge_query(cursor: &Url, params: &QueryParams) -> QueryParams {
    let mut merged = QueryParams::new();
    for (name, value) in cursor.query_pairs() {
        merged
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    for (name, value) in params {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

impl AwxClient {
    /// Build the request URL for one page
    ///
    /// The cursor may be a path (`/api/v2/roles/?page=2`) or an absolute
    /// URL; only its path and query are kept, so every page is fetched
    /// from the configured base URL.
    fn page_url(&self, cursor: &str, params: &QueryParams) -> Result<Url> {
        let parsed = self.url_for(cursor)?;
        let merged = merge_query(&parsed, params);

        let mut url = self.base_url().clone();
        url.set_path(parsed.path());
        url.set_query(None);
        set_query(&mut url, &merged);
        Ok(url)
    }

    /// Fetch every page of a list endpoint, following `next` cursors
    ///
    /// Pages are requested one after another until the server returns a
    /// null or empty cursor. Any failure aborts the walk and discards what
    /// was accumulated so far.
    pub async fn fetch_all_pages<T>(&self, first_endpoint: &str, params: &QueryParams) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut results: Vec<T> = Vec::new();
        let mut next = first_endpoint.to_string();
        let mut page = 1u32;

        loop {
            let url = self.page_url(&next, params)?;
            debug!("Fetching page {} from: {}", page, url);

            let response = self.get(url).send().await?;
            let context = format!("list {} (page {})", first_endpoint, page);
            let body: PaginatedResponse<T> = self.parse_api_response(response, &context).await?;

            debug!(
                "Page {} returned {} items (count: {})",
                page,
                body.results.len(),
                body.count
            );

            let cursor = body.next_cursor().map(str::to_string);
            results.extend(body.results);

            match cursor {
                Some(cursor) => {
                    next = cursor;
                    page += 1;
                }
                None => break,
            }
        }

        debug!("Fetched {} total items from {}", results.len(), first_endpoint);
        Ok(results)
    }

    /// List every item of a top-level collection
    pub async fn list_collection<T>(&self, collection: &str, params: &QueryParams) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.fetch_all_pages(&api::collection_path(collection), params)
            .await
    }

    /// List every item of a related sub-resource (`/<collection>/<id>/<related>/`)
    pub async fn list_related<T>(
        &self,
        collection: &str,
        id: i64,
        related: &str,
        params: &QueryParams,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.fetch_all_pages(&api::related_path(collection, id, related), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AwxError;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct Item {
        id: i64,
    }

    fn page(ids: &[i64], next: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "count": 6,
            "next": next,
            "previous": null,
            "results": ids.iter().map(|id| serde_json::json!({"id": id})).collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_next_cursor_null_and_empty_are_terminal() {
        let null_page: PaginatedResponse<Item> =
            serde_json::from_value(page(&[1], serde_json::Value::Null)).unwrap();
        let empty_page: PaginatedResponse<Item> =
            serde_json::from_value(page(&[1], serde_json::json!(""))).unwrap();
        assert!(null_page.next_cursor().is_none());
        assert!(empty_page.next_cursor().is_none());
    }

    #[test]
    fn test_next_cursor_present() {
        let p: PaginatedResponse<Item> =
            serde_json::from_value(page(&[1], serde_json::json!("/api/v2/roles/?page=2"))).unwrap();
        assert_eq!(p.next_cursor(), Some("/api/v2/roles/?page=2"));
    }

    #[test]
    fn test_missing_fields_default() {
        let p: PaginatedResponse<Item> = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(p.count, 0);
        assert!(p.results.is_empty());
        assert!(p.next_cursor().is_none());
    }

    #[test]
    fn test_merge_query_caller_wins() {
        let cursor = Url::parse("https://awx.example.com/api/v2/roles/?page=2&page_size=25").unwrap();
        let params = QueryParams::from([("page".to_string(), "5".to_string())]);
        let merged = merge_query(&cursor, &params);
        assert_eq!(merged.get("page").map(String::as_str), Some("5"));
        assert_eq!(merged.get("page_size").map(String::as_str), Some("25"));
    }

    #[test]
    fn test_merge_query_keeps_first_repeated_value() {
        let cursor = Url::parse("https://awx.example.com/api/v2/roles/?name=a&name=b").unwrap();
        let merged = merge_query(&cursor, &QueryParams::new());
        assert_eq!(merged.get("name").map(String::as_str), Some("a"));
    }

    #[test]
    fn test_page_url_drops_foreign_host() {
        let client = AwxClient::new("awx.example.com", None).unwrap();
        let url = client
            .page_url("http://internal:8052/api/v2/roles/?page=3", &QueryParams::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://awx.example.com/api/v2/roles/?page=3");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_single_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&[1, 2], serde_json::Value::Null)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let items: Vec<Item> = client
            .fetch_all_pages("/api/v2/items/", &QueryParams::new())
            .await
            .unwrap();

        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_follows_cursor_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param_is_missing("page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page(&[1, 2], serde_json::json!("/api/v2/items/?page=2"))),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page(&[3, 4], serde_json::json!("/api/v2/items/?page=3"))),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&[5, 6], serde_json::json!(""))))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let items: Vec<Item> = client
            .fetch_all_pages("/api/v2/items/", &QueryParams::new())
            .await
            .unwrap();

        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_pages_keeps_duplicates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param_is_missing("page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page(&[1], serde_json::json!("/api/v2/items/?page=2"))),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&[1], serde_json::Value::Null)))
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let items: Vec<Item> = client
            .fetch_all_pages("/api/v2/items/", &QueryParams::new())
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_caller_params_override_cursor() {
        let mock_server = MockServer::start().await;

        // The first page carries the caller's page=5 and points at page=2.
        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param("page", "5"))
            .and(query_param("order_by", "name"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page(&[5], serde_json::json!("/api/v2/items/?page=2"))),
            )
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param("page", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&[50], serde_json::Value::Null)))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let params = QueryParams::from([
            ("page".to_string(), "5".to_string()),
            ("order_by".to_string(), "name".to_string()),
        ]);
        let items: Vec<Item> = client
            .fetch_all_pages("/api/v2/items/", &params)
            .await
            .unwrap();

        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![5, 50]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_error_on_second_page_returns_no_results() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param_is_missing("page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page(&[1, 2], serde_json::json!("/api/v2/items/?page=2"))),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&[5], serde_json::Value::Null)))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let result: Result<Vec<Item>> = client
            .fetch_all_pages("/api/v2/items/", &QueryParams::new())
            .await;

        match result.unwrap_err() {
            AwxError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("page 2"));
            }
            other => panic!("Expected AwxError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_decode_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/items/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let result: Result<Vec<Item>> = client
            .fetch_all_pages("/api/v2/items/", &QueryParams::new())
            .await;

        assert!(matches!(result, Err(AwxError::Json(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_pages_transport_failure() {
        // Nothing listens on the discard port.
        let client = AwxClient::test_client("http://127.0.0.1:9");
        let result: Result<Vec<Item>> = client
            .fetch_all_pages("/api/v2/items/", &QueryParams::new())
            .await;

        assert!(matches!(result, Err(AwxError::Http(_))));
    }

    #[tokio::test]
    async fn test_list_related_builds_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/7/teams/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&[42], serde_json::Value::Null)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AwxClient::test_client(&mock_server.uri());
        let items: Vec<Item> = client
            .list_related("organizations", 7, "teams", &QueryParams::new())
            .await
            .unwrap();

        assert_eq!(items[0].id, 42);
    }
}
