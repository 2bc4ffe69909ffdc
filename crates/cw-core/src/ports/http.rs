//! Network-call primitive port.
//!
//! The embedding page owns the real network stack; the runtime sees it only
//! through this trait. Decorators layered on top must be transparent: the
//! request and the response (value or error) pass through unchanged.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// A completed call. `url` is the resolved URL after any redirects, which is
/// what endpoint matching runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpCallError {
    #[error("network call failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait HttpCallPort: Send + Sync {
    async fn call(&self, request: HttpRequest) -> Result<HttpResponse, HttpCallError>;
}
