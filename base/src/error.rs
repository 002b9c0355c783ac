// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("No {service} API key provided. Sign up at {signup_url}")]
  MissingApiKey {
    service: &'static str,
    signup_url: &'static str,
  },
  #[error("{service} API error: {reason}")]
  ApiError { service: &'static str, reason: String },
  #[error("Invalid email address: {0}")]
  InvalidAddress(String),
  #[error("Failed to build email: {0}")]
  MessageError(String),
  #[error("SMTP error: {0}")]
  SmtpError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("File not found: {}", .0.display())]
  PathNotFound(PathBuf),
  #[error("{0}")]
  Err(String),
}

impl Error {
  pub fn api(service: &'static str, reason: impl Into<String>) -> Self {
    Self::ApiError {
      service,
      reason: reason.into(),
    }
  }

  /// Wraps a transport failure. The URL is dropped since it carries the API key.
  pub fn http(service: &'static str, err: reqwest::Error) -> Self {
    let reason = if err.is_timeout() {
      "request timed out".to_string()
    } else if err.is_decode() {
      format!("invalid response body: {}", err.without_url())
    } else {
      err.without_url().to_string()
    };
    Self::api(service, reason)
  }
}
