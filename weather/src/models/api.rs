// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! OpenWeatherMap payloads. Every field is optional because the report
//! degrades to placeholders instead of rejecting a partial response.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CurrentConditions {
  pub name: Option<String>,
  pub main: Option<Readings>,
  pub weather: Option<Vec<Condition>>,
  pub wind: Option<Wind>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Readings {
  pub temp: Option<f64>,
  pub feels_like: Option<f64>,
  pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Condition {
  pub main: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Wind {
  pub speed: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Forecast {
  pub list: Option<Vec<ForecastEntry>>,
}

/// One 3-hour forecast step.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ForecastEntry {
  pub dt: i64,
  pub main: Option<Readings>,
  pub weather: Option<Vec<Condition>>,
}

impl CurrentConditions {
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.main.is_none() && self.weather.is_none() && self.wind.is_none()
  }

  pub fn description(&self) -> Option<&str> {
    first_description(self.weather.as_deref())
  }

  pub fn wind_speed(&self) -> Option<f64> {
    self.wind.as_ref().and_then(|w| w.speed)
  }
}

impl ForecastEntry {
  pub fn temp(&self) -> Option<f64> {
    self.main.as_ref().and_then(|m| m.temp)
  }

  pub fn description(&self) -> Option<&str> {
    first_description(self.weather.as_deref())
  }
}

fn first_description(conditions: Option<&[Condition]>) -> Option<&str> {
  conditions?.first()?.description.as_deref()
}
