// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use async_trait::async_trait;
use base::{Error, Settings};
use chrono::NaiveDate;
use mailer::{Courier, DeliveryStatus, Email, EmailAccount, MailTransport};
use news::NewsClient;
use std::sync::{Arc, Mutex};
use summary::{Report, SummaryRunner};
use weather::WeatherClient;
use wiremock::{
  matchers::{method, path},
  Mock, MockServer, ResponseTemplate,
};

#[derive(Clone, Default)]
struct Outbox {
  sent: Arc<Mutex<Vec<Email>>>,
  fail: bool,
}

#[async_trait]
impl MailTransport for Outbox {
  async fn send(&self, _account: &EmailAccount, email: &Email) -> Result<(), Error> {
    if self.fail {
      return Err(Error::SmtpError("connection refused".into()));
    }
    self.sent.lock().unwrap().push(email.clone());
    Ok(())
  }
}

fn today() -> NaiveDate {
  NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn configured() -> Settings {
  Settings {
    weather_api_key: "weather-key".into(),
    news_api_key: "news-key".into(),
    email_sender: "me@example.com".into(),
    email_password: "app-password".into(),
    email_recipient: "you@example.com".into(),
    location: "Chicago".into(),
    smtp_host: "smtp.example.com".into(),
    smtp_port: 587,
  }
}

fn unconfigured() -> Settings {
  Settings {
    location: "New York".into(),
    ..Default::default()
  }
}

async fn mock_apis(server: &MockServer) {
  Mock::given(method("GET"))
    .and(path("/weather"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "name": "Chicago",
      "main": { "temp": 28, "feels_like": 19, "humidity": 70 },
      "weather": [{ "main": "Snow", "description": "light snow" }],
      "wind": { "speed": 12 }
    })))
    .mount(server)
    .await;
  Mock::given(method("GET"))
    .and(path("/forecast"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "list": [{ "dt": 1_736_164_800, "main": { "temp": 30 }, "weather": [{ "description": "snow" }] }]
    })))
    .mount(server)
    .await;
  Mock::given(method("GET"))
    .and(path("/top-headlines"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "status": "ok",
      "totalResults": 1,
      "articles": [{
        "source": { "id": null, "name": "Wire" },
        "title": "Budget passes committee",
        "description": "The vote was 12-9.",
        "url": "https://news.example/budget"
      }]
    })))
    .mount(server)
    .await;
}

fn runner(settings: Settings, server: &MockServer, outbox: &Outbox) -> SummaryRunner {
  SummaryRunner::with_parts(
    settings,
    Box::new(WeatherClient::with_base_url(server.uri()).unwrap()),
    Box::new(NewsClient::with_base_url(server.uri()).unwrap()),
    Courier::new(Box::new(outbox.clone())),
  )
}

#[tokio::test]
async fn configured_run_emails_the_report() {
  let server = MockServer::start().await;
  mock_apis(&server).await;
  let outbox = Outbox::default();
  let mut out = Vec::new();

  let outcome = runner(configured(), &server, &outbox)
    .run(&mut out, today())
    .await
    .unwrap();

  assert!(outcome.weather_ok && outcome.news_ok);
  assert_eq!(
    outcome.delivery,
    DeliveryStatus::Sent {
      recipient: "you@example.com".into()
    }
  );

  let out = String::from_utf8(out).unwrap();
  assert!(out.contains("📍 Location: Chicago"));
  assert!(out.contains("📧 Recipient: you@example.com"));
  assert!(out.contains("✅ Email sent successfully to you@example.com"));
  assert!(!out.contains("DAILY MORNING SUMMARY"), "report leaked to console");
  assert!(out.ends_with("✅ Morning summary process completed!\n"));

  let sent = outbox.sent.lock().unwrap();
  assert_eq!(sent.len(), 1);
  assert_eq!(sent[0].subject(), "Daily Morning Summary - Monday, January 06, 2025");
  let body = sent[0].body();
  assert!(body.contains("Location: Chicago"));
  assert!(body.contains("Conditions: Light Snow"));
  assert!(body.contains("Wet/slippery"));
  assert!(body.contains("1. Budget passes committee"));
  assert!(body.contains("   Read more: https://news.example/budget"));
}

#[tokio::test]
async fn unconfigured_run_prints_everything() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&server)
    .await;
  let outbox = Outbox::default();
  let mut out = Vec::new();

  let outcome = runner(unconfigured(), &server, &outbox)
    .run(&mut out, today())
    .await
    .unwrap();

  assert!(!outcome.weather_ok && !outcome.news_ok);
  assert_eq!(outcome.delivery, DeliveryStatus::NotConfigured);
  assert!(outbox.sent.lock().unwrap().is_empty());

  let weather_block = "⚠️ Weather Update:\nNo Weather API key provided. Sign up at https://openweathermap.org/api\n\n";
  let news_block = "⚠️ News Update:\nNo News API key provided. Sign up at https://newsapi.org/\n\n";
  let report = Report::new(today(), weather_block, news_block).to_string();

  let out = String::from_utf8(out).unwrap();
  assert!(out.contains("📧 Recipient: Not configured - will print to console"));
  assert!(out.contains("❌ Email credentials not configured. Printing summary instead:"));
  assert!(out.contains(&report), "full report missing from console:\n{out}");
}

#[tokio::test]
async fn failed_send_prints_the_report() {
  let server = MockServer::start().await;
  mock_apis(&server).await;
  let outbox = Outbox {
    fail: true,
    ..Default::default()
  };
  let mut out = Vec::new();

  let outcome = runner(configured(), &server, &outbox)
    .run(&mut out, today())
    .await
    .unwrap();

  assert!(!outcome.delivery.is_sent());
  let out = String::from_utf8(out).unwrap();
  assert!(out.contains("❌ Failed to send email: SMTP error: connection refused"));
  assert!(out.contains("Summary that would have been sent:"));
  assert!(out.contains("DAILY MORNING SUMMARY\nMonday, January 06, 2025"));
  assert!(out.contains("1. Budget passes committee"));
}

#[tokio::test]
async fn upstream_outage_still_delivers() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(500))
    .mount(&server)
    .await;
  let outbox = Outbox::default();
  let mut out = Vec::new();

  let outcome = runner(configured(), &server, &outbox)
    .run(&mut out, today())
    .await
    .unwrap();

  assert!(outcome.delivery.is_sent());
  let sent = outbox.sent.lock().unwrap();
  assert!(sent[0].body().contains("⚠️ Weather Update:\nWeather API error:"));
  assert!(sent[0].body().contains("⚠️ News Update:\nNews API error:"));
}
