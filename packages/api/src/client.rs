//! HTTP client shared by every endpoint wrapper.
//!
//! [`ApiClient`] is cheap to clone. The web client keeps one built from the
//! configured base URL in context and derives a copy per call site carrying the
//! session's current token, so every request made after login sends
//! `Authorization: Bearer <token>`.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Backend base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// HTTP client for the booking backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Arc<str>,
    token: Option<Arc<str>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            token: None,
        }
    }

    /// Attach (or drop) the bearer token sent with every request.
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(Arc::from);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_raw(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let value = self.send_raw(builder).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn send_raw(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), "API request failed: {}", err);
            return Err(err);
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        let value: Value = serde_json::from_str(&body)?;
        Ok(unwrap_envelope(value))
    }
}

/// Strip the backend's `{ "success": bool, "data": ... }` wrapper if present.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if map.get("success").is_some_and(Value::is_boolean) && map.contains_key("data") =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope() {
        let wrapped = json!({ "success": true, "data": { "slots": [] } });
        assert_eq!(unwrap_envelope(wrapped), json!({ "slots": [] }));

        // Plain payloads pass through untouched
        let plain = json!({ "user": { "id": "1" }, "token": "abc" });
        assert_eq!(unwrap_envelope(plain.clone()), plain);

        // A "data" field without the success flag is a real payload field
        let not_envelope = json!({ "data": 1, "other": 2 });
        assert_eq!(unwrap_envelope(not_envelope.clone()), not_envelope);
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:4000/api/");
        assert_eq!(client.base_url(), "http://localhost:4000/api");
        assert_eq!(client.url("/auth/login"), "http://localhost:4000/api/auth/login");
        assert_eq!(client.url("users/me"), "http://localhost:4000/api/users/me");
    }

    #[test]
    fn test_with_token() {
        let client = ApiClient::default().with_token(Some("abc"));
        assert_eq!(client.token(), Some("abc"));
        assert_eq!(client.with_token(None).token(), None);
    }
}
