use std::collections::BTreeMap;
use std::str::FromStr;

use pagekit_bridge::config::{CredentialScope, HttpConfig};
use reqwest::{
    Method,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::{RequestConfig, RequestOptions};
use crate::HttpError;

/// A request after merging, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Absolute URL, resolved against the client's base URL.
    pub url: Url,
    pub config: RequestConfig,
    /// Whether the page credentials accompany this request.
    pub with_credentials: bool,
}

/// Asynchronous JSON request helper bound to the origin of the hosting page.
///
/// Each call merges the client defaults with the caller's
/// [`RequestOptions`], sends exactly one request and parses the response body
/// as JSON. There is no retry, timeout or cancellation. Failures are logged
/// and returned to the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    defaults: HttpConfig,
    page_credentials: BTreeMap<String, String>,
}

impl HttpClient {
    /// Creates a client for the page served from `base_url`.
    pub fn new(base_url: &str, defaults: HttpConfig) -> Result<Self, HttpError> {
        Ok(Self::with_client(
            reqwest::Client::new(),
            Url::parse(base_url)?,
            defaults,
        ))
    }

    /// Creates a client around an existing, possibly shared, connection pool.
    pub fn with_client(client: reqwest::Client, base_url: Url, defaults: HttpConfig) -> Self {
        Self {
            client,
            base_url,
            defaults,
            page_credentials: BTreeMap::new(),
        }
    }

    /// Sets the credentials of the page (typically `Cookie` or
    /// `Authorization`), attached according to each request's
    /// [`CredentialScope`].
    pub fn with_page_credentials<K, V>(mut self, credentials: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.page_credentials = credentials
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves the URL and merges the options without sending anything.
    pub fn prepare(&self, url: &str, options: RequestOptions) -> Result<PreparedRequest, HttpError> {
        let url = self.base_url.join(url)?;
        let config = RequestConfig::merge(&self.defaults, options);
        let with_credentials = match config.credentials {
            CredentialScope::Omit => false,
            CredentialScope::SameOrigin => url.origin() == self.base_url.origin(),
            CredentialScope::Include => true,
        };

        Ok(PreparedRequest {
            url,
            config,
            with_credentials,
        })
    }

    /// Sends a request and returns the parsed JSON body.
    ///
    /// HTTP error statuses are not treated as failures; their JSON body is
    /// returned like any other.
    pub async fn request(&self, url: &str, options: RequestOptions) -> Result<Value, HttpError> {
        let result = self.execute(url, options).await;
        if let Err(err) = &result {
            log::error!("API request to {url} failed: {err}");
        }
        result
    }

    pub async fn get(&self, url: &str) -> Result<Value, HttpError> {
        self.request(url, RequestOptions::new().method(Method::GET))
            .await
    }

    pub async fn post<T: Serialize + ?Sized>(&self, url: &str, data: &T) -> Result<Value, HttpError> {
        let options = self.json_options(Method::POST, url, data)?;
        self.request(url, options).await
    }

    pub async fn put<T: Serialize + ?Sized>(&self, url: &str, data: &T) -> Result<Value, HttpError> {
        let options = self.json_options(Method::PUT, url, data)?;
        self.request(url, options).await
    }

    pub async fn delete(&self, url: &str) -> Result<Value, HttpError> {
        self.request(url, RequestOptions::new().method(Method::DELETE))
            .await
    }

    fn json_options<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        data: &T,
    ) -> Result<RequestOptions, HttpError> {
        RequestOptions::new()
            .method(method)
            .json(data)
            .inspect_err(|err| log::error!("API request to {url} failed: {err}"))
    }

    async fn execute(&self, url: &str, options: RequestOptions) -> Result<Value, HttpError> {
        let prepared = self.prepare(url, options)?;
        log::debug!(
            "Sending {} {} (credentials: {})",
            prepared.config.method,
            prepared.url,
            prepared.with_credentials
        );

        let mut headers = build_header_map(&prepared.config.headers)?;
        if prepared.with_credentials {
            headers.extend(build_header_map(&self.page_credentials)?);
        }

        let mut builder = self
            .client
            .request(prepared.config.method, prepared.url)
            .headers(headers);
        if let Some(body) = prepared.config.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        log::debug!("Received {status} with {} bytes", text.len());

        serde_json::from_str(&text).map_err(HttpError::Parse)
    }
}

fn build_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, HttpError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_str(name).map_err(|err| HttpError::InvalidHeader {
            name: name.clone(),
            reason: err.to_string(),
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|err| HttpError::InvalidHeader {
            name: name.clone(),
            reason: err.to_string(),
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
