// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod dotenv;
pub mod error;

pub use config::Settings;
pub use error::Error;

pub const USER_AGENT: &str = concat!("morning-summary/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
