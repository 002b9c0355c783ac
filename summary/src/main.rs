// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Result;
use base::Settings;
use chrono::Local;
use summary::SummaryRunner;
use tracing::{error, info, warn};

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();
}

fn load_env_file() -> Result<bool, base::Error> {
  if cfg!(debug_assertions) {
    base::dotenv::load()
  } else {
    Ok(false)
  }
}

/// Always exits successfully: a scheduled job should not be marked failed
/// because an upstream service was down.
#[tokio::main]
async fn main() -> Result<()> {
  let dotenv = load_env_file();
  setup_logging();
  match dotenv {
    Ok(true) => info!("Loaded .env"),
    Ok(false) => {}
    Err(e) => warn!("Ignoring .env: {}", e),
  }

  let settings = Settings::from_env();
  info!("Loaded settings: {:?}", settings);

  let runner = match SummaryRunner::new(settings) {
    Ok(runner) => runner,
    Err(e) => {
      error!("Failed to set up clients: {}", e);
      return Ok(());
    }
  };

  let mut stdout = std::io::stdout().lock();
  if let Err(e) = runner.run(&mut stdout, Local::now().date_naive()).await {
    error!("Morning summary run failed: {}", e);
  }

  Ok(())
}
