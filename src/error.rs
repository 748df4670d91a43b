//! Error types for generation, validation and configuration.
//!
//! Evaluation has no error type on purpose: malformed answers are graded as
//! incorrect outcomes instead of being raised to the caller.

use thiserror::Error;

/// Top-level error returned by the public generation API.
#[derive(Debug, Error)]
pub enum LabError {
  #[error("Sistema '{requested}' no soportado. Disponibles: {available}")]
  UnsupportedSystem { requested: String, available: String },

  #[error("Dificultad '{0}' desconocida. Use principiante, intermedio o avanzado")]
  UnknownDifficulty(String),

  #[error(transparent)]
  Generation(#[from] GenerationError),

  #[error(transparent)]
  Validation(#[from] ValidationFailure),
}

/// Failure while sampling parameters or deriving expected answers.
#[derive(Debug, Error)]
pub enum GenerationError {
  /// A sampled combination makes a closed-form quantity undefined.
  #[error("'{quantity}' indefinido: {detail}")]
  Domain { quantity: &'static str, detail: String },

  #[error("no se pudo generar '{system}' tras {attempts} intentos: {last}")]
  RetriesExhausted {
    system: &'static str,
    attempts: usize,
    last: Box<GenerationError>,
  },

  #[error(transparent)]
  InvalidParameter(#[from] ParameterError),
}

impl GenerationError {
  pub(crate) fn domain(quantity: &'static str, detail: impl Into<String>) -> Self {
    GenerationError::Domain { quantity, detail: detail.into() }
  }

  /// Only domain errors are worth a fresh draw; a bad parameter is a table defect.
  pub fn is_resamplable(&self) -> bool {
    matches!(self, GenerationError::Domain { .. })
  }
}

/// Rejected `Parameter` construction.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
  #[error("parámetro '{name}': el mínimo {min} debe ser menor que el máximo {max}")]
  EmptyRange { name: String, min: f64, max: f64 },

  #[error("parámetro '{name}': el valor por defecto {value} está fuera de [{min}, {max}]")]
  DefaultOutOfRange { name: String, value: f64, min: f64, max: f64 },

  #[error("parámetro '{name}': la selección necesita al menos una opción")]
  NoOptions { name: String },

  #[error("parámetro '{name}': '{value}' no está entre las opciones")]
  UnknownOption { name: String, value: String },
}

/// Structural defects found by the validator, raised only by the
/// create-and-validate helpers.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("El ejercicio no es válido:\n  - {}", errors.join("\n  - "))]
pub struct ValidationFailure {
  pub errors: Vec<String>,
}

/// Failure reading the demo driver's answer sheet.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("no se pudo leer '{path}': {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("TOML inválido: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("identificador de pregunta inválido: '{0}'")]
  BadQuestionId(String),

  #[error("respuesta de la pregunta {0} no es texto ni número")]
  BadAnswerValue(u32),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validation_failure_joins_every_defect() {
    let failure = ValidationFailure { errors: vec!["a".into(), "b".into()] };
    assert_eq!(failure.to_string(), "El ejercicio no es válido:\n  - a\n  - b");
  }

  #[test]
  fn only_domain_errors_are_resampled() {
    assert!(GenerationError::domain("tau", "k = 0").is_resamplable());
    let bad = GenerationError::from(ParameterError::NoOptions { name: "x".into() });
    assert!(!bad.is_resamplable());
  }
}
