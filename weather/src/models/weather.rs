// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::{CurrentConditions, Forecast, ForecastEntry};
use serde::Deserialize;

/// Current conditions plus the short-range forecast for one location.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
  pub current: CurrentConditions,
  pub forecast: Forecast,
}

impl WeatherSnapshot {
  pub fn new(current: CurrentConditions, forecast: Forecast) -> Self {
    Self { current, forecast }
  }

  /// The next `count` forecast steps, or `None` when the payload had no list.
  pub fn upcoming(&self, count: usize) -> Option<&[ForecastEntry]> {
    self
      .forecast
      .list
      .as_deref()
      .map(|list| &list[..list.len().min(count)])
  }
}
