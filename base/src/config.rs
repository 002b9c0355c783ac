// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::env;
use tracing::{instrument, warn};

pub const DEFAULT_LOCATION: &str = "New York";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Run configuration, read once at startup.
///
/// An empty string means "not configured"; nothing here is validated beyond
/// trimming, the fetchers and the mailer decide what a missing value means.
#[derive(Clone, Default)]
pub struct Settings {
  pub weather_api_key: String,
  pub news_api_key: String,
  pub email_sender: String,
  pub email_password: String,
  pub email_recipient: String,
  pub location: String,
  pub smtp_host: String,
  pub smtp_port: u16,
}

impl Settings {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  #[instrument(skip(lookup))]
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |key: &str| {
      lookup(key)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
    };
    let or_default = |value: String, default: &str| {
      if value.is_empty() {
        default.to_string()
      } else {
        value
      }
    };

    let smtp_port = match read("SMTP_PORT") {
      port if port.is_empty() => DEFAULT_SMTP_PORT,
      port => port.parse().unwrap_or_else(|_| {
        warn!("Invalid SMTP_PORT '{}', using {}", port, DEFAULT_SMTP_PORT);
        DEFAULT_SMTP_PORT
      }),
    };

    Self {
      weather_api_key: read("WEATHER_API_KEY"),
      news_api_key: read("NEWS_API_KEY"),
      email_sender: read("EMAIL_SENDER"),
      email_password: read("EMAIL_PASSWORD"),
      email_recipient: read("EMAIL_RECIPIENT"),
      location: or_default(read("LOCATION"), DEFAULT_LOCATION),
      smtp_host: or_default(read("SMTP_HOST"), DEFAULT_SMTP_HOST),
      smtp_port,
    }
  }
}

impl std::fmt::Debug for Settings {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mask = |value: &str| if value.is_empty() { "<unset>" } else { "<set>" };
    f.debug_struct("Settings")
      .field("weather_api_key", &mask(&self.weather_api_key))
      .field("news_api_key", &mask(&self.news_api_key))
      .field("email_sender", &self.email_sender)
      .field("email_password", &mask(&self.email_password))
      .field("email_recipient", &self.email_recipient)
      .field("location", &self.location)
      .field("smtp_host", &self.smtp_host)
      .field("smtp_port", &self.smtp_port)
      .finish()
  }
}
