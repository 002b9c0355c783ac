// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  models::{ApiFailure, Headlines},
  API_BASE_URL, CATEGORY, COUNTRY, PAGE_SIZE, SERVICE, SIGNUP_URL,
};
use async_trait::async_trait;
use base::{Error, REQUEST_TIMEOUT, USER_AGENT};
use tracing::{debug, error, instrument};
use url::Url;

#[async_trait]
pub trait NewsApi: Send + Sync {
  /// Fetches the top US politics headlines.
  ///
  /// An empty `api_key` fails with [`Error::MissingApiKey`] before any request is made.
  async fn fetch_headlines(&self, api_key: &str) -> Result<Headlines, Error>;
}

#[derive(Debug, Clone)]
pub struct NewsClient {
  client: reqwest::Client,
  base_url: String,
}

impl NewsClient {
  pub fn new() -> Result<Self, Error> {
    Self::with_base_url(API_BASE_URL)
  }

  pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
    let client = reqwest::Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| Error::http(SERVICE, e))?;

    Ok(Self {
      client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
    })
  }

  fn build_api_url(&self, api_key: &str) -> Result<Url, Error> {
    let page_size = PAGE_SIZE.to_string();
    Url::parse_with_params(
      &format!("{}/top-headlines", self.base_url),
      &[
        ("apiKey", api_key),
        ("country", COUNTRY),
        ("category", CATEGORY),
        ("pageSize", page_size.as_str()),
      ],
    )
    .map_err(|e| Error::api(SERVICE, format!("Failed to build API URL: {}", e)))
  }
}

/// Turns a failed response body into a readable reason.
fn failure_reason(status: reqwest::StatusCode, body: &str) -> String {
  match serde_json::from_str::<ApiFailure>(body) {
    Ok(ApiFailure {
      message: Some(message),
      code,
    }) => match code {
      Some(code) => format!("request failed: {} ({}: {})", status, code, message),
      None => format!("request failed: {} ({})", status, message),
    },
    _ => format!("request failed: {}", status),
  }
}

#[async_trait]
impl NewsApi for NewsClient {
  #[instrument(skip(self, api_key))]
  async fn fetch_headlines(&self, api_key: &str) -> Result<Headlines, Error> {
    if api_key.trim().is_empty() {
      return Err(Error::MissingApiKey {
        service: SERVICE,
        signup_url: SIGNUP_URL,
      });
    }

    let response = self
      .client
      .get(self.build_api_url(api_key)?)
      .send()
      .await
      .map_err(|e| Error::http(SERVICE, e))?;

    let status = response.status();
    if !status.is_success() {
      error!("News request failed with status: {}", status);
      let body = response.text().await.unwrap_or_default();
      return Err(Error::api(SERVICE, failure_reason(status, &body)));
    }

    let headlines: Headlines = response.json().await.map_err(|e| Error::http(SERVICE, e))?;
    debug!("Received {} articles", headlines.articles.len());
    Ok(headlines)
  }
}
