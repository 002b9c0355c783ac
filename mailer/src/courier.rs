// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::{EmailAccount, SmtpConfig},
  message::Email,
  transport::{MailTransport, SmtpRelay},
};
use base::Error;
use std::io::Write;
use tracing::{info, instrument, warn};

/// What happened to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
  Sent { recipient: String },
  NotConfigured,
  Failed { reason: String },
}

impl DeliveryStatus {
  pub fn is_sent(&self) -> bool {
    matches!(self, Self::Sent { .. })
  }
}

/// Sends the report by email, printing it to the console whenever it can't.
pub struct Courier {
  transport: Box<dyn MailTransport>,
}

impl Courier {
  pub fn new(transport: Box<dyn MailTransport>) -> Self {
    Self { transport }
  }

  pub fn smtp(config: SmtpConfig) -> Self {
    Self::new(Box::new(SmtpRelay::new(config)))
  }

  /// Delivers `body` to the account's recipient.
  ///
  /// Missing credentials or a failed send are not errors: the body is
  /// written to `out` instead. Only writing to `out` can fail.
  #[instrument(skip(self, out, body, account), fields(recipient = %account.recipient))]
  pub async fn deliver<W: Write>(
    &self,
    out: &mut W,
    subject: &str,
    body: &str,
    account: &EmailAccount,
  ) -> Result<DeliveryStatus, Error> {
    if !account.is_configured() {
      info!("Email credentials not configured, printing report");
      writeln!(
        out,
        "❌ Email credentials not configured. Printing summary instead:\n"
      )?;
      writeln!(out, "{}", body)?;
      return Ok(DeliveryStatus::NotConfigured);
    }

    match self.send(subject, body, account).await {
      Ok(()) => {
        info!("Report delivered");
        writeln!(out, "✅ Email sent successfully to {}", account.recipient)?;
        Ok(DeliveryStatus::Sent {
          recipient: account.recipient.clone(),
        })
      }
      Err(e) => {
        warn!("Email delivery failed: {}", e);
        writeln!(out, "❌ Failed to send email: {}", e)?;
        writeln!(out, "\nSummary that would have been sent:\n")?;
        writeln!(out, "{}", body)?;
        Ok(DeliveryStatus::Failed {
          reason: e.to_string(),
        })
      }
    }
  }

  async fn send(&self, subject: &str, body: &str, account: &EmailAccount) -> Result<(), Error> {
    let email = Email::builder()
      .from(&account.sender)
      .to(&account.recipient)
      .subject(subject)
      .body(body)
      .build()?;
    self.transport.send(account, &email).await
  }
}
