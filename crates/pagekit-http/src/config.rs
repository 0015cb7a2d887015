use std::collections::BTreeMap;

use pagekit_bridge::config::{CredentialScope, HttpConfig};
use reqwest::Method;
use serde::Serialize;

use crate::HttpError;

/// Caller-supplied overrides for a single request. Every `None` field keeps
/// the client default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Replaces the default header map as a whole when set.
    pub headers: Option<BTreeMap<String, String>>,
    pub method: Option<Method>,
    pub credentials: Option<CredentialScope>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header map of the request.
    ///
    /// The map is not merged with the client defaults: headers supplied here
    /// are the only headers sent, so a caller overriding headers must repeat
    /// `Content-Type` if the server expects it.
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = Some(
            headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        );
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn credentials(mut self, credentials: CredentialScope) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` to JSON and uses it as the body.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, HttpError> {
        let body = serde_json::to_string(value).map_err(HttpError::Serialize)?;
        Ok(self.body(body))
    }
}

/// The effective configuration of one request, after merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub headers: BTreeMap<String, String>,
    pub method: Method,
    pub credentials: CredentialScope,
    pub body: Option<String>,
}

impl RequestConfig {
    /// Shallow-merges `options` over `defaults`, field by field.
    pub fn merge(defaults: &HttpConfig, options: RequestOptions) -> Self {
        Self {
            headers: options
                .headers
                .unwrap_or_else(|| defaults.default_headers.clone()),
            method: options.method.unwrap_or(Method::GET),
            credentials: options.credentials.unwrap_or(defaults.credentials),
            body: options.body,
        }
    }
}
