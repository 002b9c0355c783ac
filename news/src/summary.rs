// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{models::Headlines, PAGE_SIZE};
use base::Error;
use std::fmt::Write;

const RULE_WIDTH: usize = 50;

/// Renders the news section: a numbered list of at most [`PAGE_SIZE`] headlines.
pub fn format_news(result: &Result<Headlines, Error>) -> String {
  let headlines = match result {
    Ok(headlines) => headlines,
    Err(err) => return format!("⚠️ News Update:\n{}\n\n", err),
  };
  if headlines.articles.is_empty() {
    return "⚠️ News Update:\nNo political news available\n\n".to_string();
  }

  let mut summary = String::new();
  let _ = writeln!(summary, "📰 POLITICAL HIGHLIGHTS");
  let _ = writeln!(summary, "{}\n", "=".repeat(RULE_WIDTH));

  for (i, article) in headlines.articles.iter().take(PAGE_SIZE).enumerate() {
    let _ = writeln!(
      summary,
      "{}. {}",
      i + 1,
      article.title.as_deref().unwrap_or("No title")
    );
    let _ = writeln!(
      summary,
      "   Source: {}",
      article.source_name().unwrap_or("Unknown source")
    );
    let _ = writeln!(
      summary,
      "   {}",
      article
        .description
        .as_deref()
        .unwrap_or("No description available")
    );
    if let Some(url) = article.url.as_deref().filter(|u| !u.is_empty()) {
      let _ = writeln!(summary, "   Read more: {}", url);
    }
    summary.push('\n');
  }

  summary
}
