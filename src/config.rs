//! Loading lab configuration (generation knobs + demo session) from TOML,
//! and the answer sheet the demo driver grades.
//!
//! Schema:
//!
//! ```toml
//! [generation]
//! max_attempts = 8
//! seed = 42
//!
//! [session]
//! system = "newton"
//! difficulty = "intermedio"
//! answers_path = "respuestas.toml"
//! self_check = false
//! output = "text"            # or "json"
//! ```
//!
//! Answer sheet:
//!
//! ```toml
//! [answers]
//! "1" = 10.0
//! "2" = "0"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{error, info};

use crate::error::ConfigError;
use crate::evaluator::Answers;
use crate::generator::DEFAULT_MAX_ATTEMPTS;

#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct LabConfig {
  #[serde(default)]
  pub generation: GenerationConfig,
  #[serde(default)]
  pub session: SessionConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GenerationConfig {
  /// Draws allowed when a sampled combination leaves a derived value undefined.
  #[serde(default = "default_max_attempts")]
  pub max_attempts: usize,
  /// Fixed seed for reproducible exercises; entropy when absent.
  #[serde(default)]
  pub seed: Option<u64>,
}

impl Default for GenerationConfig {
  fn default() -> Self {
    Self { max_attempts: DEFAULT_MAX_ATTEMPTS, seed: None }
  }
}

fn default_max_attempts() -> usize {
  DEFAULT_MAX_ATTEMPTS
}

#[derive(Clone, Copy, Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

/// What the demo binary generates and grades.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SessionConfig {
  #[serde(default = "default_system")]
  pub system: String,
  #[serde(default = "default_difficulty")]
  pub difficulty: String,
  #[serde(default)] pub answers_path: Option<String>,
  /// Generate and validate every system at every tier, then exit.
  #[serde(default)] pub self_check: bool,
  #[serde(default)] pub output: OutputFormat,
}

impl Default for SessionConfig {
  fn default() -> Self {
    Self {
      system: default_system(),
      difficulty: default_difficulty(),
      answers_path: None,
      self_check: false,
      output: OutputFormat::Text,
    }
  }
}

fn default_system() -> String {
  "newton".into()
}

fn default_difficulty() -> String {
  "intermedio".into()
}

/// Attempt to load `LabConfig` from LAB_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<LabConfig> {
  let path = std::env::var("LAB_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<LabConfig>(&s) {
      Ok(cfg) => {
        info!(target: "lab", %path, "Loaded lab config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "lab", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "lab", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[derive(Debug, Deserialize)]
struct AnswerSheet {
  #[serde(default)]
  answers: BTreeMap<String, toml::Value>,
}

/// Read an answer sheet. Numbers are kept as text; grading parses them.
pub fn load_answers(path: &str) -> Result<Answers, ConfigError> {
  let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_string(), source })?;
  let answers = parse_answers(&raw)?;
  info!(target: "lab", %path, count = answers.len(), "Loaded answer sheet");
  Ok(answers)
}

pub fn parse_answers(raw: &str) -> Result<Answers, ConfigError> {
  let sheet: AnswerSheet = toml::from_str(raw)?;
  sheet
    .answers
    .into_iter()
    .map(|(key, value)| {
      let id: u32 = key.trim().parse().map_err(|_| ConfigError::BadQuestionId(key.clone()))?;
      let text = match value {
        toml::Value::String(s) => s,
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        _ => return Err(ConfigError::BadAnswerValue(id)),
      };
      Ok((id, text))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let cfg: LabConfig = toml::from_str("").expect("parse");
    assert_eq!(cfg, LabConfig::default());
    assert_eq!(cfg.generation.max_attempts, DEFAULT_MAX_ATTEMPTS);
    assert_eq!(cfg.session.system, "newton");
    assert_eq!(cfg.session.output, OutputFormat::Text);
  }

  #[test]
  fn partial_sections_merge_with_defaults() {
    let cfg: LabConfig = toml::from_str(
      r#"
      [generation]
      seed = 7

      [session]
      system = "orbitas"
      output = "json"
      "#,
    )
    .expect("parse");
    assert_eq!(cfg.generation.seed, Some(7));
    assert_eq!(cfg.generation.max_attempts, DEFAULT_MAX_ATTEMPTS);
    assert_eq!(cfg.session.system, "orbitas");
    assert_eq!(cfg.session.difficulty, "intermedio");
    assert_eq!(cfg.session.output, OutputFormat::Json);
  }

  #[test]
  fn answers_accept_numbers_and_text() {
    let answers = parse_answers(
      r#"
      [answers]
      "1" = 10.5
      "2" = 0
      "3" = "2,5"
      "#,
    )
    .expect("parse");
    assert_eq!(answers[&1], "10.5");
    assert_eq!(answers[&2], "0");
    assert_eq!(answers[&3], "2,5");
  }

  #[test]
  fn malformed_answer_sheets() {
    assert!(matches!(parse_answers("[answers]\nuno = 1"), Err(ConfigError::BadQuestionId(k)) if k == "uno"));
    assert!(matches!(parse_answers("[answers]\n\"4\" = true"), Err(ConfigError::BadAnswerValue(4))));
    assert!(matches!(parse_answers("[answers"), Err(ConfigError::Parse(_))));
    assert!(matches!(load_answers("/nonexistent/respuestas.toml"), Err(ConfigError::Io { .. })));
  }
}
