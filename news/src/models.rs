// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Headlines {
  pub status: Option<String>,
  pub total_results: Option<u64>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Article {
  pub title: Option<String>,
  pub source: Option<Source>,
  pub description: Option<String>,
  pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Source {
  pub id: Option<String>,
  pub name: Option<String>,
}

/// Error body NewsAPI sends alongside a non-2xx status.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiFailure {
  pub code: Option<String>,
  pub message: Option<String>,
}

impl Article {
  pub fn source_name(&self) -> Option<&str> {
    self.source.as_ref().and_then(|s| s.name.as_deref())
  }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Article>, D::Error>
where
  D: serde::Deserializer<'de>,
{
  Ok(Option::<Vec<Article>>::deserialize(deserializer)?.unwrap_or_default())
}
