// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use base::{
  config::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT},
  Settings,
};
use std::fmt;

/// Where mail is submitted. The session is always upgraded with STARTTLS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_SMTP_HOST.to_string(),
      port: DEFAULT_SMTP_PORT,
    }
  }
}

impl From<&Settings> for SmtpConfig {
  fn from(settings: &Settings) -> Self {
    Self {
      host: settings.smtp_host.clone(),
      port: settings.smtp_port,
    }
  }
}

/// Sender login and recipient. The sender address doubles as the SMTP username.
#[derive(Clone, Default)]
pub struct EmailAccount {
  pub sender: String,
  pub password: String,
  pub recipient: String,
}

impl EmailAccount {
  pub fn new(
    sender: impl Into<String>,
    password: impl Into<String>,
    recipient: impl Into<String>,
  ) -> Self {
    Self {
      sender: sender.into(),
      password: password.into(),
      recipient: recipient.into(),
    }
  }

  pub fn is_configured(&self) -> bool {
    [&self.sender, &self.password, &self.recipient]
      .iter()
      .all(|value| !value.trim().is_empty())
  }
}

impl From<&Settings> for EmailAccount {
  fn from(settings: &Settings) -> Self {
    Self::new(
      settings.email_sender.clone(),
      settings.email_password.clone(),
      settings.email_recipient.clone(),
    )
  }
}

impl fmt::Debug for EmailAccount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EmailAccount")
      .field("sender", &self.sender)
      .field("password", &"***")
      .field("recipient", &self.recipient)
      .finish()
  }
}
