//! The API client

use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::auth::TokenStore;

/// Backend origin every request path is resolved against
pub const API_ORIGIN: &str = "http://10.0.2.2:8080/api";

/// Typed HTTP client for the project management API
///
/// Cheap to clone (the underlying connection pool is shared). Requests are
/// independent futures: callers may run any number concurrently, and dropping
/// a future cancels its in-flight call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    origin: String,
    tokens: TokenStore,
}

impl ApiClient {
    /// Client against the fixed backend origin
    #[must_use]
    pub fn new(tokens: TokenStore) -> Self {
        Self::with_origin(API_ORIGIN, tokens)
    }

    /// Client against an explicit origin (tests)
    #[must_use]
    pub fn with_origin(origin: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            http: Client::new(),
            origin: origin.into(),
            tokens,
        }
    }

    /// GET `path`, deserializing the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_query(path, &[]).await
    }

    /// GET `path` with query parameters, deserializing the JSON response
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!("GET {path}");
        let req = self.http.get(self.url(path)).query(query);
        into_json(self.dispatch(req).await?).await
    }

    /// POST a JSON body to `path`, deserializing the JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!("POST {path}");
        let req = self.http.post(self.url(path)).json(body);
        into_json(self.dispatch(req).await?).await
    }

    /// PUT a JSON body to `path`, deserializing the JSON response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!("PUT {path}");
        let req = self.http.put(self.url(path)).json(body);
        into_json(self.dispatch(req).await?).await
    }

    /// PUT to `path` with query parameters and no body
    pub async fn put_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!("PUT {path}");
        let req = self.http.put(self.url(path)).query(query);
        into_json(self.dispatch(req).await?).await
    }

    /// DELETE `path`, deserializing the JSON response
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("DELETE {path}");
        let req = self.http.delete(self.url(path));
        into_json(self.dispatch(req).await?).await
    }

    /// DELETE `path`, discarding any response payload
    pub async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        debug!("DELETE {path}");
        let req = self.http.delete(self.url(path));
        self.dispatch(req).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    /// Attach credentials, send, and classify the response.
    ///
    /// Each logical request passes through here exactly once, so the 401
    /// token eviction below runs at most once per request; a later 401 on a
    /// re-issued request finds the slot already empty and clears nothing.
    async fn dispatch(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let req = match self.tokens.get().await? {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("session expired; clearing stored token");
            self.tokens.delete().await?;
            return Err(ApiError::Unauthorized);
        }

        let message = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn into_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json().await.map_err(|err| ApiError::Decode(err.to_string()))
}
