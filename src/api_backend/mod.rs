pub mod catalog_api;
pub mod menu_api;
pub mod order_api;
pub mod session_api;

use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::data_types::{ListEnvelope, RecordEnvelope};
use crate::errors::ApiError;

#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: Option<String>,
}

/// Decodes a list body in either accepted shape. Anything else
/// degrades to the empty collection so list views show "no results".
fn decode_list<T: DeserializeOwned>(path: &str, body: &[u8]) -> Vec<T> {
    match serde_json::from_slice::<ListEnvelope<T>>(body) {
        Ok(envelope) => envelope.into_items(),
        Err(e) => {
            log::warn!("GET {}: unexpected list shape ({}), treating as empty", path, e);
            Vec::new()
        }
    }
}

/// Thin request layer over the backend's HTTP/JSON API. Owns the reqwest
/// client, the base URL, and the bearer token handed out at login.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn set_token(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Non-2xx answers carry an error body whose `message` field is
    /// surfaced to the user; anything else falls back to the status text.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let fallback = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message.unwrap_or(fallback),
            Err(_) => fallback,
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// GET a collection. A malformed or unexpected payload degrades to
    /// the empty collection so list views render "no results" instead of
    /// crashing; transport and status failures still surface.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let now = Instant::now();
        let response = self.authed(self.http.get(self.url(path))).await.send().await?;
        let response = Self::check(response).await?;
        log::debug!("GET {}: {:.2?}", path, now.elapsed());

        let body = response.bytes().await?;
        Ok(decode_list(path, &body))
    }

    pub(crate) async fn get_record<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let now = Instant::now();
        let response = self.authed(self.http.get(self.url(path))).await.send().await?;
        let response = Self::check(response).await?;
        log::debug!("GET {}: {:.2?}", path, now.elapsed());

        Ok(response.json::<RecordEnvelope<T>>().await?.into_record())
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authed(self.http.post(self.url(path)))
            .await
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<RecordEnvelope<T>>().await?.into_record())
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authed(self.http.put(self.url(path)))
            .await
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<RecordEnvelope<T>>().await?.into_record())
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authed(self.http.patch(self.url(path)))
            .await
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<RecordEnvelope<T>>().await?.into_record())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authed(self.http.delete(self.url(path)))
            .await
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// POST that only cares about success, not the response body.
    pub(crate) async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .authed(self.http.post(self.url(path)))
            .await
            .json(body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
