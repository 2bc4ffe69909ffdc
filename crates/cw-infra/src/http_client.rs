//! Reqwest adapter for the network-call port.

use async_trait::async_trait;

use cw_core::ports::{HttpCallError, HttpCallPort, HttpMethod, HttpRequest, HttpResponse};

pub struct ReqwestHttpCall {
    client: reqwest::Client,
}

impl ReqwestHttpCall {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestHttpCall {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpCallPort for ReqwestHttpCall {
    async fn call(&self, request: HttpRequest) -> Result<HttpResponse, HttpCallError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => {
                let builder = self.client.post(&request.url);
                match request.body {
                    Some(body) => builder.body(body),
                    None => builder,
                }
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| HttpCallError::Transport(e.to_string()))?;

        // Resolved URL after redirects, which endpoint matching relies on.
        let url = response.url().to_string();
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpCallError::Transport(e.to_string()))?
            .to_vec();

        Ok(HttpResponse { url, status, body })
    }
}
