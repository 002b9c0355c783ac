// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{advisory::RoadAdvisory, constants::*, models::weather::WeatherSnapshot};
use base::Error;
use chrono::{Local, TimeZone};
use std::fmt::{Display, Write};

const NOT_AVAILABLE: &str = "N/A";

/// Renders the weather section with forecast times in local time.
pub fn format_weather(result: &Result<WeatherSnapshot, Error>) -> String {
  format_weather_in(result, &Local)
}

/// Renders the weather section with forecast times in `tz`.
pub fn format_weather_in<Tz>(result: &Result<WeatherSnapshot, Error>, tz: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  let snapshot = match result {
    Ok(snapshot) => snapshot,
    Err(err) => return format!("⚠️ Weather Update:\n{}\n\n", err),
  };
  if snapshot.current.is_empty() {
    return "⚠️ Weather Update:\nNo weather data available\n\n".to_string();
  }

  let current = &snapshot.current;
  let readings = current.main.clone().unwrap_or_default();
  let description = title_case(current.description().unwrap_or(NOT_AVAILABLE));
  let wind_speed = current.wind_speed();

  let mut summary = String::new();
  let _ = writeln!(summary, "🌤️ WEATHER REPORT");
  let _ = writeln!(summary, "{}\n", "=".repeat(RULE_WIDTH));

  let _ = writeln!(
    summary,
    "Location: {}",
    current.name.as_deref().unwrap_or("Unknown")
  );
  let _ = writeln!(
    summary,
    "Current Temperature: {}°F (feels like {}°F)",
    reading(readings.temp),
    reading(readings.feels_like)
  );
  let _ = writeln!(summary, "Conditions: {}", description);
  let _ = writeln!(summary, "Humidity: {}%", reading(readings.humidity));
  let _ = writeln!(summary, "Wind Speed: {} mph\n", reading(wind_speed));

  let _ = writeln!(summary, "🚗 ROAD CONDITIONS:");
  let _ = writeln!(summary, "{}", RoadAdvisory::assess(&description, wind_speed));
  summary.push('\n');

  if let Some(upcoming) = snapshot.upcoming(FORECAST_PREVIEW) {
    let _ = writeln!(summary, "📅 TODAY'S FORECAST:");
    for entry in upcoming {
      let time = tz
        .timestamp_opt(entry.dt, 0)
        .single()
        .map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
      let _ = writeln!(
        summary,
        "  {}: {}°F - {}",
        time,
        reading(entry.temp()),
        title_case(entry.description().unwrap_or(NOT_AVAILABLE))
      );
    }
  }

  summary.push('\n');
  summary
}

fn reading(value: Option<f64>) -> String {
  value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Capitalises the first letter of every word and lowercases the rest.
pub(crate) fn title_case(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut in_word = false;
  for c in text.chars() {
    if c.is_alphabetic() {
      if in_word {
        out.extend(c.to_lowercase());
      } else {
        out.extend(c.to_uppercase());
      }
      in_word = true;
    } else {
      out.push(c);
      in_word = false;
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;
  use serde_json::json;

  fn snapshot(current: serde_json::Value, forecast: serde_json::Value) -> WeatherSnapshot {
    serde_json::from_value(json!({ "current": current, "forecast": forecast })).unwrap()
  }

  fn clear_day() -> WeatherSnapshot {
    snapshot(
      json!({
        "name": "New York",
        "main": { "temp": 68.5, "feels_like": 67, "humidity": 55 },
        "weather": [{ "main": "Clear", "description": "clear sky" }],
        "wind": { "speed": 8.1 }
      }),
      json!({
        "list": [
          { "dt": 1_700_000_000, "main": { "temp": 70 }, "weather": [{ "description": "few clouds" }] },
          { "dt": 1_700_010_800, "main": { "temp": 72.3 }, "weather": [{ "description": "light rain" }] },
          { "dt": 1_700_021_600, "main": { "temp": 65 }, "weather": [{ "description": "overcast clouds" }] },
          { "dt": 1_700_032_400, "main": { "temp": 60 }, "weather": [{ "description": "snow" }] }
        ]
      }),
    )
  }

  #[test]
  fn renders_full_report() {
    let text = format_weather_in(&Ok(clear_day()), &Utc);
    let expected = "🌤️ WEATHER REPORT\n\
      ==================================================\n\n\
      Location: New York\n\
      Current Temperature: 68.5°F (feels like 67°F)\n\
      Conditions: Clear Sky\n\
      Humidity: 55%\n\
      Wind Speed: 8.1 mph\n\n\
      🚗 ROAD CONDITIONS:\n\
      ✅ Normal driving conditions expected.\n\n\
      📅 TODAY'S FORECAST:\n  \
      10:13 PM: 70°F - Few Clouds\n  \
      01:13 AM: 72.3°F - Light Rain\n  \
      04:13 AM: 65°F - Overcast Clouds\n\n";
    assert_eq!(text, expected);
  }

  #[test]
  fn forecast_is_limited_to_three_entries() {
    let text = format_weather_in(&Ok(clear_day()), &Utc);
    assert!(!text.contains("Snow"));
    assert_eq!(text.matches("°F - ").count(), 3);
  }

  #[test]
  fn advisory_follows_current_conditions() {
    let mut snap = clear_day();
    snap.current.weather = Some(vec![crate::models::api::Condition {
      main: None,
      description: Some("mist".into()),
    }]);
    snap.current.wind = Some(crate::models::api::Wind { speed: Some(40.0) });
    let text = format_weather_in(&Ok(snap), &Utc);
    assert!(text.contains("Conditions: Mist\n"));
    assert!(text.contains("Reduced visibility"));
    assert!(!text.contains("High winds"));
  }

  #[test]
  fn missing_fields_render_placeholders() {
    let snap = snapshot(json!({ "name": "Nowhere" }), json!({}));
    let text = format_weather_in(&Ok(snap), &Utc);
    assert!(text.contains("Location: Nowhere\n"));
    assert!(text.contains("Current Temperature: N/A°F (feels like N/A°F)"));
    assert!(text.contains("Conditions: N/A\n"));
    assert!(text.contains("Wind Speed: N/A mph"));
    assert!(text.contains("Normal driving conditions"));
    assert!(!text.contains("TODAY'S FORECAST"));
  }

  #[test]
  fn empty_current_payload() {
    let text = format_weather_in(&Ok(WeatherSnapshot::default()), &Utc);
    assert_eq!(text, "⚠️ Weather Update:\nNo weather data available\n\n");
  }

  #[test]
  fn error_block_carries_message() {
    let result = Err(Error::MissingApiKey {
      service: "Weather",
      signup_url: "https://openweathermap.org/api",
    });
    let text = format_weather_in(&result, &Utc);
    assert_eq!(
      text,
      "⚠️ Weather Update:\nNo Weather API key provided. Sign up at https://openweathermap.org/api\n\n"
    );
  }

  #[test]
  fn title_case_matches_word_boundaries() {
    assert_eq!(title_case("light intensity drizzle"), "Light Intensity Drizzle");
    assert_eq!(title_case("N/A"), "N/A");
    assert_eq!(title_case("THUNDERSTORM with rain"), "Thunderstorm With Rain");
  }
}
