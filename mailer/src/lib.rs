// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;
mod courier;
mod message;
mod transport;

pub use crate::{
  config::{EmailAccount, SmtpConfig},
  courier::{Courier, DeliveryStatus},
  message::{Email, EmailBuilder},
  transport::{MailTransport, SmtpRelay},
};
