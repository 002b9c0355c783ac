// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod models;
pub mod summary;

pub use client::{NewsApi, NewsClient};
pub use models::{Article, Headlines, Source};
pub use summary::format_news;

pub(crate) const SERVICE: &str = "News";
pub(crate) const SIGNUP_URL: &str = "https://newsapi.org/";
pub(crate) const API_BASE_URL: &str = "https://newsapi.org/v2";
pub(crate) const COUNTRY: &str = "us";
pub(crate) const CATEGORY: &str = "politics";

/// Headlines requested per run, and the most the report will list.
pub const PAGE_SIZE: usize = 5;
