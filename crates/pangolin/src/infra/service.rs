//! Backend service boundary.
//!
//! Every file operation goes through one `/service` endpoint: a form-encoded
//! POST whose `action` parameter selects the behavior, answered with JSON.
//! Failures are reported uniformly as a truthy `error` field plus a
//! human-readable `message`; the `list` action answers with a bare array of
//! entry names instead of an object. Downloads use a separate `/download`
//! GET endpoint.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use serde::Deserialize;
use serde::de::Deserializer;
use thiserror::Error;
use url::Url;

use crate::domain::entry::Entry;
use crate::domain::path::JailPath;

/// Boxed async result used by [`ServiceClient`] trait methods.
pub type ServiceFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Failure modes of one backend call.
///
/// Every failure is terminal for that operation; the app surfaces the
/// message through the error channel and never retries.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ServiceError {
    /// The backend reported a failure with a user-facing message.
    #[error("{0}")]
    Backend(String),
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response arrived but could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Async boundary to the file-manager backend.
///
/// Production uses [`HttpServiceClient`], while tests inject
/// `MockServiceClient` to drive listings and actions without a server.
/// Calls are not cancellable; callers discard superseded results.
#[cfg_attr(test, mockall::automock)]
pub trait ServiceClient: Send + Sync {
    /// Lists the entries at `path` (directory names end in `/`).
    fn list(&self, path: JailPath) -> ServiceFuture<Result<Vec<Entry>, ServiceError>>;

    /// Moves `source` to `target`.
    fn move_entry(
        &self,
        source: JailPath,
        target: JailPath,
    ) -> ServiceFuture<Result<(), ServiceError>>;

    /// Recursively removes the entry at `path`.
    fn remove(&self, path: JailPath) -> ServiceFuture<Result<(), ServiceError>>;

    /// Creates a new directory at `path`.
    fn make_directory(&self, path: JailPath) -> ServiceFuture<Result<(), ServiceError>>;

    /// Renames the file at `path` after its TV episode metadata and returns
    /// the new path. The lookup and rename happen server-side.
    fn rename_episode(&self, path: JailPath) -> ServiceFuture<Result<JailPath, ServiceError>>;

    /// Streams the file at `path` into `destination`.
    fn download(
        &self,
        path: JailPath,
        destination: PathBuf,
    ) -> ServiceFuture<Result<PathBuf, ServiceError>>;
}

/// Status object the backend sends for non-list actions.
///
/// The `error` field is numeric (`-1`/`0`) in older servers and boolean in
/// newer ones; both decode.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default, deserialize_with = "deserialize_truthy")]
    error: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(match value {
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

impl StatusResponse {
    fn into_result(self) -> Result<StatusResponse, ServiceError> {
        if self.error {
            return Err(ServiceError::Backend(
                self.message.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(self)
    }
}

fn decode_entries(body: &str) -> Result<Vec<Entry>, ServiceError> {
    // The list action answers with a bare array on success and a status
    // object on failure.
    if let Ok(names) = serde_json::from_str::<Vec<String>>(body) {
        return Ok(names.into_iter().map(Entry::new).collect());
    }

    let status: StatusResponse =
        serde_json::from_str(body).map_err(|error| ServiceError::Decode(error.to_string()))?;
    status.into_result()?;

    Err(ServiceError::Decode(
        "list response is neither an entry array nor an error".to_string(),
    ))
}

fn decode_status(body: &str) -> Result<(), ServiceError> {
    let status: StatusResponse =
        serde_json::from_str(body).map_err(|error| ServiceError::Decode(error.to_string()))?;
    status.into_result()?;

    Ok(())
}

fn decode_renamed_path(body: &str) -> Result<JailPath, ServiceError> {
    let status: StatusResponse =
        serde_json::from_str(body).map_err(|error| ServiceError::Decode(error.to_string()))?;
    let status = status.into_result()?;

    let path = status
        .path
        .ok_or_else(|| ServiceError::Decode("tv_rename response is missing path".to_string()))?;

    JailPath::parse(&path).map_err(|error| ServiceError::Decode(error.to_string()))
}

/// [`ServiceClient`] backed by the real HTTP backend.
pub struct HttpServiceClient {
    http: reqwest::Client,
    service_url: Url,
    download_url: Url,
}

impl HttpServiceClient {
    /// Builds a client for the backend at `base` (scheme + host + port).
    ///
    /// # Errors
    /// Returns an error when `base` is not a valid absolute URL.
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base)?;

        Ok(Self {
            http: reqwest::Client::new(),
            service_url: base.join("service")?,
            download_url: base.join("download")?,
        })
    }

    async fn post_action(
        http: reqwest::Client,
        service_url: Url,
        form: Vec<(&'static str, String)>,
    ) -> Result<String, ServiceError> {
        let response = http
            .post(service_url)
            .form(&form)
            .send()
            .await
            .map_err(|error| ServiceError::Transport(error.to_string()))?;

        response
            .text()
            .await
            .map_err(|error| ServiceError::Transport(error.to_string()))
    }
}

impl ServiceClient for HttpServiceClient {
    fn list(&self, path: JailPath) -> ServiceFuture<Result<Vec<Entry>, ServiceError>> {
        let http = self.http.clone();
        let service_url = self.service_url.clone();

        Box::pin(async move {
            let form = vec![
                ("action", "list".to_string()),
                ("path", path.as_str().to_string()),
            ];
            let body = Self::post_action(http, service_url, form).await?;

            decode_entries(&body)
        })
    }

    fn move_entry(
        &self,
        source: JailPath,
        target: JailPath,
    ) -> ServiceFuture<Result<(), ServiceError>> {
        let http = self.http.clone();
        let service_url = self.service_url.clone();

        Box::pin(async move {
            let form = vec![
                ("action", "move".to_string()),
                ("source", source.as_str().to_string()),
                ("target", target.as_str().to_string()),
            ];
            let body = Self::post_action(http, service_url, form).await?;

            decode_status(&body)
        })
    }

    fn remove(&self, path: JailPath) -> ServiceFuture<Result<(), ServiceError>> {
        let http = self.http.clone();
        let service_url = self.service_url.clone();

        Box::pin(async move {
            let form = vec![
                ("action", "remove".to_string()),
                ("path", path.as_str().to_string()),
            ];
            let body = Self::post_action(http, service_url, form).await?;

            decode_status(&body)
        })
    }

    fn make_directory(&self, path: JailPath) -> ServiceFuture<Result<(), ServiceError>> {
        let http = self.http.clone();
        let service_url = self.service_url.clone();

        Box::pin(async move {
            let form = vec![
                ("action", "mkdir".to_string()),
                ("path", path.as_str().to_string()),
            ];
            let body = Self::post_action(http, service_url, form).await?;

            decode_status(&body)
        })
    }

    fn rename_episode(&self, path: JailPath) -> ServiceFuture<Result<JailPath, ServiceError>> {
        let http = self.http.clone();
        let service_url = self.service_url.clone();

        Box::pin(async move {
            let form = vec![
                ("action", "tv_rename".to_string()),
                ("path", path.as_str().to_string()),
            ];
            let body = Self::post_action(http, service_url, form).await?;

            decode_renamed_path(&body)
        })
    }

    fn download(
        &self,
        path: JailPath,
        destination: PathBuf,
    ) -> ServiceFuture<Result<PathBuf, ServiceError>> {
        let http = self.http.clone();
        let mut download_url = self.download_url.clone();

        Box::pin(async move {
            download_url
                .query_pairs_mut()
                .append_pair("path", path.as_str());

            let response = http
                .get(download_url)
                .send()
                .await
                .map_err(|error| ServiceError::Transport(error.to_string()))?;
            let response = response
                .error_for_status()
                .map_err(|error| ServiceError::Transport(error.to_string()))?;
            let bytes = response
                .bytes()
                .await
                .map_err(|error| ServiceError::Transport(error.to_string()))?;

            tokio::fs::write(&destination, &bytes)
                .await
                .map_err(|error| ServiceError::Transport(error.to_string()))?;

            Ok(destination)
        })
    }
}

/// Picks the local destination for downloading `name`.
///
/// Prefers the user's download directory and falls back to the current
/// working directory.
pub fn download_destination(name: &str) -> PathBuf {
    let directory = dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    directory.join(name)
}
