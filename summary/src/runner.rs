// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::report::{Report, BANNER_WIDTH};
use base::{Error, Settings};
use chrono::NaiveDate;
use mailer::{Courier, DeliveryStatus, EmailAccount, SmtpConfig};
use news::{format_news, NewsApi, NewsClient};
use std::io::Write;
use tracing::{info, instrument, warn};
use weather::{format_weather, WeatherClient, WeatherProvider};

/// Result of one run. Never turned into an exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
  pub weather_ok: bool,
  pub news_ok: bool,
  pub delivery: DeliveryStatus,
}

pub struct SummaryRunner {
  settings: Settings,
  weather: Box<dyn WeatherProvider>,
  news: Box<dyn NewsApi>,
  courier: Courier,
}

impl SummaryRunner {
  #[instrument]
  pub fn new(settings: Settings) -> Result<Self, Error> {
    let courier = Courier::smtp(SmtpConfig::from(&settings));
    Ok(Self::with_parts(
      settings,
      Box::new(WeatherClient::new()?),
      Box::new(NewsClient::new()?),
      courier,
    ))
  }

  pub fn with_parts(
    settings: Settings,
    weather: Box<dyn WeatherProvider>,
    news: Box<dyn NewsApi>,
    courier: Courier,
  ) -> Self {
    Self {
      settings,
      weather,
      news,
      courier,
    }
  }

  /// Fetches, formats and delivers the report for `today`, writing progress to `out`.
  ///
  /// Fetch and delivery failures end up in the report or on `out`; the only
  /// error returned is a failed write to `out`.
  #[instrument(skip(self, out))]
  pub async fn run<W: Write>(&self, out: &mut W, today: NaiveDate) -> Result<RunOutcome, Error> {
    let settings = &self.settings;

    writeln!(out, "🌅 Starting Daily Morning Summary Generation...")?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out, "\n📍 Location: {}", settings.location)?;
    let recipient = if settings.email_recipient.is_empty() {
      "Not configured - will print to console"
    } else {
      settings.email_recipient.as_str()
    };
    writeln!(out, "📧 Recipient: {}\n", recipient)?;

    writeln!(out, "Fetching weather data...")?;
    let weather = self
      .weather
      .fetch_weather(&settings.location, &settings.weather_api_key)
      .await;
    if let Err(e) = &weather {
      warn!("Weather unavailable: {}", e);
    }

    writeln!(out, "Fetching political news...")?;
    let news = self.news.fetch_headlines(&settings.news_api_key).await;
    if let Err(e) = &news {
      warn!("News unavailable: {}", e);
    }

    let report = Report::new(today, format_weather(&weather), format_news(&news));

    writeln!(out, "\nSending email...")?;
    let delivery = self
      .courier
      .deliver(
        &mut *out,
        &report.subject(),
        &report.to_string(),
        &EmailAccount::from(settings),
      )
      .await?;

    writeln!(out, "\n✅ Morning summary process completed!")?;
    info!("Run finished: {:?}", delivery);

    Ok(RunOutcome {
      weather_ok: weather.is_ok(),
      news_ok: news.is_ok(),
      delivery,
    })
  }
}
