// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::NaiveDate;
use std::fmt;

pub const BANNER_WIDTH: usize = 50;
pub const DATE_FORMAT: &str = "%A, %B %d, %Y";

/// The day's report: a dated banner around the weather and news sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
  date: NaiveDate,
  weather: String,
  news: String,
}

impl Report {
  pub fn new(date: NaiveDate, weather: impl Into<String>, news: impl Into<String>) -> Self {
    Self {
      date,
      weather: weather.into(),
      news: news.into(),
    }
  }

  pub fn date_line(&self) -> String {
    self.date.format(DATE_FORMAT).to_string()
  }

  pub fn subject(&self) -> String {
    format!("Daily Morning Summary - {}", self.date_line())
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let banner = "=".repeat(BANNER_WIDTH);
    write!(
      f,
      "\n{banner}\nDAILY MORNING SUMMARY\n{date}\n{banner}\n\n\
       {weather}\n\n{news}\n\n\
       {banner}\nHave a great day!\n{banner}\n",
      banner = banner,
      date = self.date_line(),
      weather = self.weather,
      news = self.news,
    )
  }
}
