// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::fmt;

/// Wind speed (mph) above which high-profile vehicles get a warning.
pub const HIGH_WIND_MPH: f64 = 25.0;

/// Driving advisory derived from the current conditions.
///
/// Precipitation outranks visibility, which outranks wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadAdvisory {
  Slippery,
  LowVisibility,
  HighWind,
  Normal,
}

impl RoadAdvisory {
  pub fn assess(description: &str, wind_speed: Option<f64>) -> Self {
    let description = description.to_lowercase();

    if mentions(&description, &["rain", "snow"]) {
      Self::Slippery
    } else if mentions(&description, &["fog", "mist"]) {
      Self::LowVisibility
    } else if wind_speed.is_some_and(|speed| speed > HIGH_WIND_MPH) {
      Self::HighWind
    } else {
      Self::Normal
    }
  }

  pub fn message(&self) -> &'static str {
    match self {
      Self::Slippery => "⚠️ Wet/slippery conditions expected. Drive carefully!",
      Self::LowVisibility => "⚠️ Reduced visibility. Use caution while driving!",
      Self::HighWind => "⚠️ High winds. Be careful with high-profile vehicles!",
      Self::Normal => "✅ Normal driving conditions expected.",
    }
  }
}

fn mentions(text: &str, words: &[&str]) -> bool {
  words.iter().any(|word| text.contains(word))
}

impl fmt::Display for RoadAdvisory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.message())
  }
}
