// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::{EmailAccount, SmtpConfig},
  message::Email,
};
use async_trait::async_trait;
use base::Error;
use lettre::{
  transport::smtp::{authentication::Credentials, SmtpTransport},
  Transport,
};
use tracing::{debug, instrument};

#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn send(&self, account: &EmailAccount, email: &Email) -> Result<(), Error>;
}

/// Submits mail over a STARTTLS-upgraded SMTP session with login auth.
#[derive(Clone, Debug)]
pub struct SmtpRelay {
  config: SmtpConfig,
}

impl SmtpRelay {
  pub fn new(config: SmtpConfig) -> Self {
    Self { config }
  }

  fn connect(&self, account: &EmailAccount) -> Result<SmtpTransport, Error> {
    let credentials = Credentials::new(account.sender.clone(), account.password.clone());
    let transport = SmtpTransport::starttls_relay(&self.config.host)
      .map_err(|e| Error::SmtpError(e.to_string()))?
      .port(self.config.port)
      .credentials(credentials)
      .build();
    Ok(transport)
  }
}

#[async_trait]
impl MailTransport for SmtpRelay {
  #[instrument(skip_all, fields(host = %self.config.host, port = self.config.port))]
  async fn send(&self, account: &EmailAccount, email: &Email) -> Result<(), Error> {
    let message = email.to_message()?;
    let transport = self.connect(account)?;

    debug!("Submitting message");
    let response = tokio::task::spawn_blocking(move || transport.send(&message))
      .await
      .map_err(|e| Error::SmtpError(format!("SMTP task failed: {}", e)))?
      .map_err(|e| Error::SmtpError(e.to_string()))?;

    debug!("Server accepted message: {:?}", response.code());
    Ok(())
  }
}

