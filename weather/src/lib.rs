// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod advisory;
pub mod models;
pub mod service;
pub mod summary;

pub use advisory::RoadAdvisory;
pub use models::weather::WeatherSnapshot;
pub use service::{WeatherClient, WeatherProvider};
pub use summary::{format_weather, format_weather_in};

pub mod constants {
  pub(crate) const SERVICE: &str = "Weather";
  pub(crate) const SIGNUP_URL: &str = "https://openweathermap.org/api";
  pub(crate) const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
  pub(crate) const UNITS: &str = "imperial";
  pub(crate) const FORECAST_PREVIEW: usize = 3;
  pub(crate) const RULE_WIDTH: usize = 50;
  pub(crate) const TIME_FORMAT: &str = "%I:%M %p";
}
