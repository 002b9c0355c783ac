// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use base::Error;
use lettre::message::{header::ContentType, Mailbox, Message, MultiPart, SinglePart};

/// A plain-text email with validated addresses.
#[derive(Debug, Clone)]
pub struct Email {
  pub(crate) from: Mailbox,
  pub(crate) to: Mailbox,
  pub(crate) subject: String,
  pub(crate) body: String,
}

impl Email {
  pub fn builder<'a>() -> EmailBuilder<'a> {
    EmailBuilder::default()
  }

  pub fn recipient(&self) -> &Mailbox {
    &self.to
  }

  pub fn subject(&self) -> &str {
    &self.subject
  }

  pub fn body(&self) -> &str {
    &self.body
  }

  /// Wraps the body in a `multipart/mixed` message with a single `text/plain` part.
  pub fn to_message(&self) -> Result<Message, Error> {
    Message::builder()
      .from(self.from.clone())
      .to(self.to.clone())
      .subject(self.subject.as_str())
      .multipart(
        MultiPart::mixed().singlepart(
          SinglePart::builder()
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone()),
        ),
      )
      .map_err(|e| Error::MessageError(e.to_string()))
  }
}

#[derive(Default)]
pub struct EmailBuilder<'a> {
  pub(crate) from: Option<&'a str>,
  pub(crate) to: Option<&'a str>,
  pub(crate) subject: Option<&'a str>,
  pub(crate) body: Option<&'a str>,
}

impl<'a> EmailBuilder<'a> {
  pub fn from(mut self, address: &'a str) -> Self {
    self.from = Some(address);
    self
  }

  pub fn to(mut self, address: &'a str) -> Self {
    self.to = Some(address);
    self
  }

  pub fn subject(mut self, subject: &'a str) -> Self {
    self.subject = Some(subject);
    self
  }

  pub fn body(mut self, body: &'a str) -> Self {
    self.body = Some(body);
    self
  }

  pub fn build(self) -> Result<Email, Error> {
    let from = parse_mailbox(self.from, "Sender")?;
    let to = parse_mailbox(self.to, "Recipient")?;

    Ok(Email {
      from,
      to,
      subject: self.subject.unwrap_or_default().to_string(),
      body: self
        .body
        .ok_or_else(|| Error::MessageError("Message body is required".into()))?
        .to_string(),
    })
  }
}

fn parse_mailbox(address: Option<&str>, role: &str) -> Result<Mailbox, Error> {
  let address = address
    .map(str::trim)
    .filter(|a| !a.is_empty())
    .ok_or_else(|| Error::InvalidAddress(format!("{} address is required", role)))?;

  address
    .parse()
    .map_err(|e| Error::InvalidAddress(format!("{}: {}", address, e)))
}
