//! # The REST client
//!
//! [`ApiClient`] is the only place HTTP happens. It mirrors the behaviour of
//! the web client's old `fetch` wrapper:
//!
//! - every path is resolved against `<base_url>/api`;
//! - when a token is set, `Authorization: Bearer <token>` is attached;
//! - JSON bodies are sent with `Content-Type: application/json`, multipart
//!   bodies let the transport pick the boundary;
//! - any non-2xx response becomes an [`ApiError`], with 401 mapped to
//!   [`ApiError::Unauthorized`] and the body's `message` field carried along.
//!
//! There is no retry and no timeout policy here; callers decide what a
//! failure means for their view.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{error_message, ApiError, ApiResult};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for a backend origin such as `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Builder method to attach (or drop) the bearer token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path, e.g. `/market/prices`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(self.request(Method::GET, path), path).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query), path)
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body), path)
            .await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body), path)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(self.request(Method::DELETE, path), path).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        self.send(self.request(Method::POST, path).multipart(form), path)
            .await
    }

    /// `GET /api/health`. Any HTTP answer, even an error status, counts as
    /// reachable; only a transport failure is an error.
    pub async fn ping(&self) -> ApiResult<u16> {
        let response = self.request(Method::GET, "/health").send().await?;
        Ok(response.status().as_u16())
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder, path: &str) -> ApiResult<T> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("request to {path} failed: {e}");
            ApiError::Network(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() == 401 {
            tracing::debug!("{path} answered 401");
            return Err(ApiError::Unauthorized(error_message(401, &body)));
        }
        if !status.is_success() {
            let message = error_message(status.as_u16(), &body);
            tracing::warn!("{path} answered {status}: {message}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Generic `{ "message": ... }` acknowledgement returned by mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_api_prefix() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.url("/market/prices"),
            "http://localhost:5000/api/market/prices"
        );
    }

    #[test]
    fn empty_token_is_dropped() {
        let client = ApiClient::new("http://x").with_token(Some(String::new()));
        assert!(client.token().is_none());

        let client = client.with_token(Some("abc".to_string()));
        assert_eq!(client.token(), Some("abc"));
    }
}
