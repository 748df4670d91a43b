//! Domain models: difficulty, parameters, questions and the exercise itself.
//!
//! Everything here is plain data. The only behavior is the checked
//! constructors on `Parameter`, which refuse a default outside its domain.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LabError, ParameterError};
use crate::systems::SystemId;

/// Difficulty label chosen by the student. Maps onto tiers 1/2/3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Principiante,
  Intermedio,
  Avanzado,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] = [Difficulty::Principiante, Difficulty::Intermedio, Difficulty::Avanzado];

  pub fn tier(self) -> u8 {
    match self {
      Difficulty::Principiante => 1,
      Difficulty::Intermedio => 2,
      Difficulty::Avanzado => 3,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Difficulty::Principiante => "principiante",
      Difficulty::Intermedio => "intermedio",
      Difficulty::Avanzado => "avanzado",
    }
  }

  /// Metadata level (BASICO / INTERMEDIO / AVANZADO).
  pub fn level(self) -> &'static str {
    match self {
      Difficulty::Principiante => "BASICO",
      Difficulty::Intermedio => "INTERMEDIO",
      Difficulty::Avanzado => "AVANZADO",
    }
  }
}

impl Default for Difficulty {
  fn default() -> Self { Difficulty::Intermedio }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.label())
  }
}

impl FromStr for Difficulty {
  type Err = LabError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "principiante" | "basico" | "básico" | "1" => Ok(Difficulty::Principiante),
      "intermedio" | "2" => Ok(Difficulty::Intermedio),
      "avanzado" | "3" => Ok(Difficulty::Avanzado),
      _ => Err(LabError::UnknownDifficulty(s.to_string())),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamType {
  Float,
  Integer,
  Selection,
}

/// Default value of a parameter: numeric for FLOAT/INTEGER, a label for SELECTION.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
  Number(f64),
  Choice(String),
}

impl ParamValue {
  pub fn as_number(&self) -> Option<f64> {
    match self {
      ParamValue::Number(v) => Some(*v),
      ParamValue::Choice(_) => None,
    }
  }
}

impl fmt::Display for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParamValue::Number(v) if v.fract() == 0.0 && v.abs() < 1e12 => write!(f, "{}", *v as i64),
      ParamValue::Number(v) => write!(f, "{}", v),
      ParamValue::Choice(s) => f.write_str(s),
    }
  }
}

/// One tunable input of an exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
  pub name: String,
  pub display_name: String,
  pub description: String,
  pub param_type: ParamType,
  #[serde(default)] pub min_value: Option<f64>,
  #[serde(default)] pub max_value: Option<f64>,
  pub default_value: ParamValue,
  #[serde(default)] pub step: Option<f64>,
  #[serde(default)] pub unit: Option<String>,
  #[serde(default)] pub options: Vec<String>,
}

impl Parameter {
  pub fn float(name: &str, display_name: &str, description: &str, min: f64, max: f64, default: f64) -> Result<Self, ParameterError> {
    Self::numeric(ParamType::Float, name, display_name, description, min, max, default)
  }

  pub fn integer(name: &str, display_name: &str, description: &str, min: i64, max: i64, default: i64) -> Result<Self, ParameterError> {
    Self::numeric(ParamType::Integer, name, display_name, description, min as f64, max as f64, default as f64)
      .map(|p| p.with_step(1.0))
  }

  fn numeric(
    param_type: ParamType,
    name: &str,
    display_name: &str,
    description: &str,
    min: f64,
    max: f64,
    default: f64,
  ) -> Result<Self, ParameterError> {
    if !(min < max) {
      return Err(ParameterError::EmptyRange { name: name.into(), min, max });
    }
    if !(min..=max).contains(&default) {
      return Err(ParameterError::DefaultOutOfRange { name: name.into(), value: default, min, max });
    }
    Ok(Self {
      name: name.into(),
      display_name: display_name.into(),
      description: description.into(),
      param_type,
      min_value: Some(min),
      max_value: Some(max),
      default_value: ParamValue::Number(default),
      step: None,
      unit: None,
      options: Vec::new(),
    })
  }

  pub fn selection(name: &str, display_name: &str, description: &str, options: &[&str], default: &str) -> Result<Self, ParameterError> {
    if options.is_empty() {
      return Err(ParameterError::NoOptions { name: name.into() });
    }
    if !options.contains(&default) {
      return Err(ParameterError::UnknownOption { name: name.into(), value: default.into() });
    }
    Ok(Self {
      name: name.into(),
      display_name: display_name.into(),
      description: description.into(),
      param_type: ParamType::Selection,
      min_value: None,
      max_value: None,
      default_value: ParamValue::Choice(default.into()),
      step: None,
      unit: None,
      options: options.iter().map(|s| s.to_string()).collect(),
    })
  }

  pub fn with_unit(mut self, unit: &str) -> Self {
    self.unit = Some(unit.into());
    self
  }

  pub fn with_step(mut self, step: f64) -> Self {
    self.step = Some(step);
    self
  }

  /// "k = 0.12 1/min" style line used by the consigna and the report.
  pub fn describe_value(&self) -> String {
    match &self.unit {
      Some(u) if !u.is_empty() => format!("{} = {} {}", self.display_name, self.default_value, u),
      _ => format!("{} = {}", self.display_name, self.default_value),
    }
  }
}

/// Pedagogical activity the exercise asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
  Simulacion,
  Graficacion,
  Interpretacion,
  Comparacion,
  AnalisisFase,
  Clasificacion,
}

impl ActivityType {
  pub fn label(self) -> &'static str {
    match self {
      ActivityType::Simulacion => "simulación",
      ActivityType::Graficacion => "graficación",
      ActivityType::Interpretacion => "interpretación",
      ActivityType::Comparacion => "comparación",
      ActivityType::AnalisisFase => "análisis de fase",
      ActivityType::Clasificacion => "clasificación",
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseMetadata {
  pub difficulty: String,
  pub category: String,
  #[serde(default)] pub tags: BTreeSet<String>,
  /// Minutes.
  pub estimated_time: u32,
  #[serde(default)] pub author: String,
  #[serde(default)] pub version: String,
}

/// Grading key of a question, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKey {
  Numeric {
    expected: f64,
    tolerance: f64,
    #[serde(default)] unit: String,
  },
  MultipleChoice {
    options: Vec<String>,
    correct_index: usize,
  },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
  pub id: u32,
  pub text: String,
  pub answer: AnswerKey,
}

impl Question {
  pub fn numeric(text: impl Into<String>, expected: f64, tolerance: f64, unit: &str) -> Self {
    Self {
      id: 0,
      text: text.into(),
      answer: AnswerKey::Numeric { expected, tolerance: tolerance.abs(), unit: unit.into() },
    }
  }

  pub fn choice(text: impl Into<String>, options: &[&str], correct_index: usize) -> Self {
    Self {
      id: 0,
      text: text.into(),
      answer: AnswerKey::MultipleChoice {
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_index,
      },
    }
  }

  pub fn is_numeric(&self) -> bool {
    matches!(self.answer, AnswerKey::Numeric { .. })
  }
}

/// A complete, generated exercise. Immutable once returned by the generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
  pub id: String,
  pub name: String,
  pub system: SystemId,
  pub main_topic: String,
  pub difficulty: Difficulty,
  pub educational_objective: String,
  pub objectives: Vec<String>,
  pub description: String,
  pub activity_type: ActivityType,
  pub activity_description: String,
  pub context: String,
  pub parameters: Vec<Parameter>,
  pub questions: Vec<Question>,
  pub expected_observation: String,
  pub consigna: Vec<String>,
  pub required_analysis: Vec<String>,
  pub metadata: ExerciseMetadata,
}

impl Exercise {
  pub fn parameter(&self, name: &str) -> Option<&Parameter> {
    self.parameters.iter().find(|p| p.name == name)
  }

  /// Numeric default of a parameter, if it exists and is numeric.
  pub fn value(&self, name: &str) -> Option<f64> {
    self.parameter(name).and_then(|p| p.default_value.as_number())
  }

  pub fn parameter_names(&self) -> Vec<&str> {
    self.parameters.iter().map(|p| p.name.as_str()).collect()
  }

  pub fn question(&self, id: u32) -> Option<&Question> {
    self.questions.iter().find(|q| q.id == id)
  }

  /// "Título (DIFICULTAD)".
  pub fn summary(&self) -> String {
    format!("{} ({})", self.name, self.difficulty.label().to_uppercase())
  }

  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn difficulty_labels_map_to_tiers() {
    assert_eq!("principiante".parse::<Difficulty>().expect("label").tier(), 1);
    assert_eq!(" Básico ".parse::<Difficulty>().expect("alias").tier(), 1);
    assert_eq!("AVANZADO".parse::<Difficulty>().expect("upper").tier(), 3);
    assert!(matches!("experto".parse::<Difficulty>(), Err(LabError::UnknownDifficulty(_))));
  }

  #[test]
  fn numeric_parameter_rejects_default_outside_domain() {
    let err = Parameter::float("k", "k", "constante", 0.01, 1.0, 2.0).unwrap_err();
    assert!(matches!(err, ParameterError::DefaultOutOfRange { .. }));
    let err = Parameter::float("k", "k", "constante", 1.0, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, ParameterError::EmptyRange { .. }));
  }

  #[test]
  fn selection_parameter_requires_known_default() {
    assert!(Parameter::selection("modo", "Modo", "d", &[], "a").is_err());
    let err = Parameter::selection("modo", "Modo", "d", &["a", "b"], "c").unwrap_err();
    assert_eq!(err, ParameterError::UnknownOption { name: "modo".into(), value: "c".into() });
    let ok = Parameter::selection("modo", "Modo", "d", &["a", "b"], "b").expect("valid");
    assert_eq!(ok.default_value, ParamValue::Choice("b".into()));
  }

  #[test]
  fn integer_values_render_without_fraction() {
    let p = Parameter::integer("T0", "T₀", "inicial", 0, 300, 90).expect("valid").with_unit("°C");
    assert_eq!(p.describe_value(), "T₀ = 90 °C");
    assert_eq!(p.step, Some(1.0));
  }

  #[test]
  fn answer_key_serializes_with_kind_tag() {
    let q = Question::choice("¿?", &["a", "b"], 1);
    let json = serde_json::to_value(&q).expect("json");
    assert_eq!(json["answer"]["kind"], "multiple_choice");
    assert_eq!(json["answer"]["correct_index"], 1);
  }
}
