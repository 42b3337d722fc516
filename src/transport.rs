use std::sync::Arc;

use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::settings::SETTINGS;
use crate::DrtvError;

/// A single outgoing call, as the host transport sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back: status code, the URL that was finally fetched, and the raw body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub code: u16,
    pub url: String,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Turn any non-2xx answer into [`DrtvError::HttpStatus`].
    pub fn error_for_status(self) -> Result<Self, DrtvError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(DrtvError::HttpStatus {
                status: self.code,
                url: self.url,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self, context: &str) -> Result<T, DrtvError> {
        serde_json::from_slice(&self.body).map_err(|e| DrtvError::parse(e, context, &self.body))
    }
}

/// The host's generic HTTP transport. Everything the adapter sends goes through here.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, DrtvError>>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, DrtvError>> {
        (**self).execute(request)
    }
}

/// Default transport backed by a pooled `reqwest` client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, DrtvError> {
        let client = Client::builder()
            .pool_idle_timeout(Some(SETTINGS.pool_idle_timeout))
            .timeout(SETTINGS.request_timeout)
            .connect_timeout(SETTINGS.connect_timeout)
            .user_agent(SETTINGS.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, DrtvError>> {
        async move {
            debug!(method = %request.method, url = %request.url, "Sending catalog request");

            let mut builder = self.client.request(request.method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let code = response.status().as_u16();
            let url = response.url().to_string();
            let body = response.bytes().await?;
            trace!(code, %url, len = body.len(), "Received catalog response");

            Ok(HttpResponse { code, url, body })
        }
        .boxed()
    }
}
