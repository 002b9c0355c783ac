// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  constants::*,
  models::{
    api::{CurrentConditions, Forecast},
    weather::WeatherSnapshot,
  },
};
use async_trait::async_trait;
use base::{Error, REQUEST_TIMEOUT, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use url::Url;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
  /// Fetches current conditions and the forecast for `location`.
  ///
  /// An empty `api_key` fails with [`Error::MissingApiKey`] before any request is made.
  async fn fetch_weather(&self, location: &str, api_key: &str) -> Result<WeatherSnapshot, Error>;
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
  client: reqwest::Client,
  base_url: String,
}

impl WeatherClient {
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

  fn build_api_url(&self, endpoint: &str, location: &str, api_key: &str) -> Result<Url, Error> {
    Url::parse_with_params(
      &format!("{}/{}", self.base_url, endpoint),
      &[("q", location), ("appid", api_key), ("units", UNITS)],
    )
    .map_err(|e| Error::api(SERVICE, format!("Failed to build API URL: {}", e)))
  }

  async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::http(SERVICE, e))?;

    let status = response.status();
    if !status.is_success() {
      warn!("Weather request failed with status: {}", status);
      return Err(Error::api(SERVICE, format!("request failed: {}", status)));
    }

    response.json().await.map_err(|e| Error::http(SERVICE, e))
  }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
  #[instrument(skip(self, api_key))]
  async fn fetch_weather(&self, location: &str, api_key: &str) -> Result<WeatherSnapshot, Error> {
    if api_key.trim().is_empty() {
      return Err(Error::MissingApiKey {
        service: SERVICE,
        signup_url: SIGNUP_URL,
      });
    }

    debug!("Fetching current conditions");
    let current: CurrentConditions = self
      .get_json(self.build_api_url("weather", location, api_key)?)
      .await?;

    debug!("Fetching forecast");
    let forecast: Forecast = self
      .get_json(self.build_api_url("forecast", location, api_key)?)
      .await?;

    info!("Fetched weather for {}", location);
    Ok(WeatherSnapshot::new(current, forecast))
  }
}
