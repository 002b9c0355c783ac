// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::Error;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

pub(crate) const DEFAULT_FILENAME: &str = ".env";

/// Minimal `.env` reader used by debug builds.
#[derive(Debug, Default)]
pub struct Dotenv {
  vars: HashMap<String, String>,
}

impl Dotenv {
  pub fn new() -> Self {
    Self::default()
  }

  /// Reads `KEY=value` lines from `filename` (or `.env` when `None`).
  ///
  /// Blank lines and `#` comments are skipped, a leading `export ` is
  /// accepted and surrounding quotes are stripped from values.
  pub fn load_from_file<P: AsRef<Path>>(&mut self, filename: Option<P>) -> Result<(), Error> {
    let path = filename.map_or_else(
      || PathBuf::from(DEFAULT_FILENAME),
      |p| p.as_ref().to_path_buf(),
    );

    if !path.exists() {
      return Err(Error::PathNotFound(path));
    }

    let reader = BufReader::new(File::open(&path)?);
    for (line_num, line) in reader.lines().enumerate() {
      let line = line?;
      let trimmed = line.trim();

      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      let (key, value) = parse_line(trimmed)
        .map_err(|err| Error::Err(format!("Error on line {}: {}", line_num + 1, err)))?;
      self.vars.insert(key, value);
    }

    Ok(())
  }

  /// Exports the loaded pairs, leaving variables that are already set alone.
  pub fn apply(&self) -> usize {
    let mut applied = 0;
    for (key, value) in &self.vars {
      if env::var_os(key).is_none() {
        env::set_var(key, value);
        applied += 1;
      }
    }
    applied
  }

  pub fn get(&self, key: &str) -> Option<&String> {
    self.vars.get(key)
  }
}

fn parse_line(line: &str) -> Result<(String, String), String> {
  let line = line.strip_prefix("export ").unwrap_or(line);
  let (key, value) = line
    .split_once('=')
    .ok_or_else(|| "Invalid format: missing '='".to_string())?;

  let key = key.trim();
  if key.is_empty() {
    return Err("Empty key".to_string());
  }

  let value = value.trim();
  let value = value
    .strip_prefix('"')
    .and_then(|v| v.strip_suffix('"'))
    .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
    .unwrap_or(value);

  Ok((key.to_string(), value.to_string()))
}

/// Loads `.env` from the working directory if there is one.
///
/// Returns `Ok(false)` when the file does not exist.
pub fn load() -> Result<bool, Error> {
  let mut dotenv = Dotenv::new();
  match dotenv.load_from_file::<&str>(None) {
    Ok(()) => {
      let applied = dotenv.apply();
      debug!("Loaded {} variables from {}", applied, DEFAULT_FILENAME);
      Ok(true)
    }
    Err(Error::PathNotFound(_)) => Ok(false),
    Err(err) => Err(err),
  }
}
