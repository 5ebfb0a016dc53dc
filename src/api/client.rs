//! Proxy API HTTP client.

use reqwest::{header, Client};

use crate::api::types::ApiReply;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::media::parser::{extract_media_records, extract_user_id};
use crate::media::MediaRecord;

/// Endpoint resolving a username to a user id.
const USER_ENDPOINT: &str = "user";

/// Endpoint listing a user's media posts.
const USER_MEDIA_ENDPOINT: &str = "user-media";

/// Client for the RapidAPI Twitter proxy.
pub struct TwitterApi {
    client: Client,
    config: ApiConfig,
}

impl TwitterApi {
    /// Create a new API client from the start-up credentials.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// The underlying HTTP client, shared with the media downloader.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Build the vendor header pair sent with every call.
    fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let key = header::HeaderValue::from_str(&self.config.api_key)
            .map_err(|e| Error::Config(format!("Invalid API key header value: {}", e)))?;
        let host = header::HeaderValue::from_str(&self.config.api_host)
            .map_err(|e| Error::Config(format!("Invalid API host header value: {}", e)))?;

        headers.insert("x-rapidapi-key", key);
        headers.insert("x-rapidapi-host", host);

        Ok(headers)
    }

    /// Make an authenticated GET request to `{base}/{endpoint}`.
    ///
    /// Never fails: transport errors, non-2xx statuses and undecodable
    /// bodies are reported through the returned [`ApiReply`].
    pub async fn request(&self, endpoint: &str, query: &[(&str, &str)]) -> ApiReply {
        let url = format!("{}/{}", self.config.base_url(), endpoint);

        let headers = match self.build_headers() {
            Ok(headers) => headers,
            Err(e) => {
                tracing::error!("Request failed: {}", e);
                return ApiReply::failed(ApiReply::NO_RESPONSE_STATUS, e.to_string());
            }
        };

        tracing::debug!("GET {} {:?}", url, query);

        let response = match self
            .client
            .get(&url)
            .query(query)
            .headers(headers)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Request failed: {}", e);
                let status = e
                    .status()
                    .map(|s| s.as_u16())
                    .unwrap_or(ApiReply::NO_RESPONSE_STATUS);
                return ApiReply::failed(status, e.to_string());
            }
        };

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = format!("HTTP {} for url ({}): {}", status, url, body.trim());
            tracing::error!("Request failed: {}", message);
            return ApiReply::failed(status.as_u16(), message);
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => ApiReply::ok(body, status.as_u16()),
            Err(e) => {
                tracing::error!("Request failed: {}", e);
                ApiReply::failed(status.as_u16(), format!("Invalid JSON body: {}", e))
            }
        }
    }

    /// Resolve a username to the platform's user id.
    pub async fn get_user_id(&self, username: &str) -> Result<String> {
        let reply = self
            .request(USER_ENDPOINT, &[("username", username)])
            .await;

        let body = Self::expect_ok(reply)?;
        extract_user_id(&body)
    }

    /// List up to `count` recent posts of a user as manifest records.
    pub async fn get_user_media(&self, user_id: &str, count: i64) -> Result<Vec<MediaRecord>> {
        let count = count.to_string();
        let reply = self
            .request(USER_MEDIA_ENDPOINT, &[("user", user_id), ("count", count.as_str())])
            .await;

        let body = Self::expect_ok(reply)?;
        let records = extract_media_records(&body)?;
        tracing::debug!("Extracted {} media records", records.len());

        Ok(records)
    }

    /// Accept only a 200 reply with a body.
    fn expect_ok(reply: ApiReply) -> Result<serde_json::Value> {
        if reply.status != 200 {
            return Err(Error::Api {
                status: reply.status,
                message: reply.error_text(),
            });
        }

        reply
            .body
            .ok_or_else(|| Error::UnexpectedFormat("response body".to_string()))
    }
}
