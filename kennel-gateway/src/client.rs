use anyhow::{Context, anyhow};
use reqwest::header::HeaderMap;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{Level, Span, event, field, instrument};

/// JSON-over-HTTP client shared by the gateways
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

/// Error payloads carry a human readable `message` (PostgREST, Dog API)
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Client {
            client: reqwest::Client::new(),
        }
    }
}

impl Client {
    pub fn with_headers(headers: HeaderMap) -> anyhow::Result<Self> {
        Ok(Client {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .context("Failed to build HTTP client")?,
        })
    }

    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get<T>(&self, url: &str) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
    {
        self.send(self.client.get(url)).await
    }

    /// Send a prepared request and decode the JSON response body
    #[instrument(level = "debug", skip_all, fields(method = field::Empty, url = field::Empty))]
    pub async fn send<T>(&self, request: RequestBuilder) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(request).await?;
        let text = response.text().await?;
        event!(Level::TRACE, response = %text);

        serde_json::from_str::<T>(&text).context("Failed to parse response")
    }

    /// Send a prepared request and return only the response headers
    #[instrument(level = "debug", skip_all, fields(method = field::Empty, url = field::Empty))]
    pub async fn send_for_headers(&self, request: RequestBuilder) -> anyhow::Result<HeaderMap> {
        let response = self.execute(request).await?;
        Ok(response.headers().clone())
    }

    async fn execute(&self, request: RequestBuilder) -> anyhow::Result<Response> {
        let request = request.build()?;
        let span = Span::current();
        span.record("method", request.method().as_str());
        span.record("url", request.url().as_str());

        let response = self.client.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        event!(Level::DEBUG, %status, body = %body, "request failed");
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        Err(match message {
            Some(message) => anyhow!(message),
            None => anyhow!("Request failed with status: {}", status),
        })
    }
}
