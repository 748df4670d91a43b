//! Structural checks on a finished exercise.
//!
//! `validate` never fails: every defect becomes one message in the returned
//! list, and the exercise is valid only when that list is empty.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::{AnswerKey, Exercise, ParamType, ParamValue, Parameter, Question};
use crate::error::ValidationFailure;

const MIN_TEXT_CHARS: usize = 50;
const RECOMMENDED_QUESTIONS: usize = 3;

pub fn validate(exercise: &Exercise) -> (bool, Vec<String>) {
  let mut errors = Vec::new();

  let required = [
    ("id", &exercise.id),
    ("name", &exercise.name),
    ("main_topic", &exercise.main_topic),
    ("educational_objective", &exercise.educational_objective),
    ("description", &exercise.description),
    ("activity_description", &exercise.activity_description),
    ("expected_observation", &exercise.expected_observation),
  ];
  for (field, value) in required {
    if value.trim().is_empty() {
      errors.push(format!("El campo '{field}' es requerido y no puede estar vacío"));
    }
  }

  if exercise.parameters.is_empty() {
    errors.push("El ejercicio debe tener al menos un parámetro modificable".into());
  }
  for (i, p) in exercise.parameters.iter().enumerate() {
    check_parameter(p, i, &mut errors);
  }
  let mut names = BTreeSet::new();
  for name in exercise.parameter_names() {
    if !names.insert(name) {
      errors.push(format!("El parámetro '{name}' está duplicado"));
    }
  }

  match exercise.questions.len() {
    0 => errors.push("El ejercicio debe tener al menos una pregunta de análisis".into()),
    n if n < RECOMMENDED_QUESTIONS => {
      errors.push(format!("Se recomiendan al menos 3 preguntas de análisis (encontradas: {n})"))
    }
    _ => {}
  }
  let mut seen = BTreeSet::new();
  for (i, q) in exercise.questions.iter().enumerate() {
    check_question(q, i, &mut errors);
    if !seen.insert(q.id) {
      errors.push(format!("La pregunta de análisis #{}: id {} repetido", i + 1, q.id));
    }
  }

  if exercise.description.chars().count() < MIN_TEXT_CHARS {
    errors.push("La descripción debería tener al menos 50 caracteres para ser significativa".into());
  }
  if exercise.expected_observation.chars().count() < MIN_TEXT_CHARS {
    errors.push("La observación esperada debería tener al menos 50 caracteres".into());
  }

  debug!(target: "exercise", id = %exercise.id, errors = errors.len(), "Validated exercise");
  (errors.is_empty(), errors)
}

/// `validate` folded into a `Result`.
pub fn ensure_valid(exercise: &Exercise) -> Result<(), ValidationFailure> {
  match validate(exercise) {
    (true, _) => Ok(()),
    (false, errors) => Err(ValidationFailure { errors }),
  }
}

fn check_parameter(p: &Parameter, index: usize, errors: &mut Vec<String>) {
  let name = &p.name;
  if name.trim().is_empty() {
    errors.push(format!("Parámetro #{}: el nombre es requerido", index + 1));
  }
  if p.display_name.trim().is_empty() {
    errors.push(format!("Parámetro '{name}': display_name es requerido"));
  }
  if p.description.trim().is_empty() {
    errors.push(format!("Parámetro '{name}': descripción es requerida"));
  }

  match p.param_type {
    ParamType::Float | ParamType::Integer => {
      if p.min_value.is_none() {
        errors.push(format!("Parámetro '{name}': min_value es requerido para tipo numérico"));
      }
      if p.max_value.is_none() {
        errors.push(format!("Parámetro '{name}': max_value es requerido para tipo numérico"));
      }
      if let (Some(min), Some(max)) = (p.min_value, p.max_value) {
        if !(min < max) {
          errors.push(format!("Parámetro '{name}': min_value debe ser menor que max_value"));
        }
        let in_range = matches!(p.default_value, ParamValue::Number(v) if min <= v && v <= max);
        if !in_range {
          errors.push(format!("Parámetro '{name}': default_value debe estar entre min_value y max_value"));
        }
      }
    }
    ParamType::Selection => {
      if p.options.is_empty() {
        errors.push(format!("Parámetro '{name}': tipo SELECTION requiere lista de opciones"));
      } else if !matches!(&p.default_value, ParamValue::Choice(v) if p.options.contains(v)) {
        errors.push(format!("Parámetro '{name}': default_value debe estar en la lista de opciones"));
      }
    }
  }
}

fn check_question(q: &Question, index: usize, errors: &mut Vec<String>) {
  let n = index + 1;
  if q.text.trim().is_empty() {
    errors.push(format!("La pregunta de análisis #{n} está vacía"));
  }
  match &q.answer {
    AnswerKey::Numeric { expected, tolerance, .. } => {
      if !expected.is_finite() {
        errors.push(format!("La pregunta de análisis #{n}: el valor esperado no es finito"));
      }
      if !(tolerance.is_finite() && *tolerance >= 0.0) {
        errors.push(format!("La pregunta de análisis #{n}: la tolerancia debe ser finita y no negativa"));
      }
    }
    AnswerKey::MultipleChoice { options, correct_index } => {
      if options.len() < 2 {
        errors.push(format!("La pregunta de análisis #{n}: se requieren al menos 2 opciones"));
      }
      if *correct_index >= options.len() {
        errors.push(format!("La pregunta de análisis #{n}: índice correcto {correct_index} fuera de rango"));
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::ExerciseGenerator;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn exercise() -> Exercise {
    ExerciseGenerator::with_rng(StdRng::seed_from_u64(31))
      .generate("newton", "intermedio")
      .expect("generate")
  }

  #[test]
  fn generated_exercise_passes() {
    assert_eq!(validate(&exercise()), (true, vec![]));
    assert!(ensure_valid(&exercise()).is_ok());
  }

  #[test]
  fn blank_fields_are_named() {
    let mut ex = exercise();
    ex.name = "   ".into();
    ex.activity_description.clear();
    let (ok, errors) = validate(&ex);
    assert!(!ok);
    assert!(errors.contains(&"El campo 'name' es requerido y no puede estar vacío".to_string()));
    assert!(errors.contains(&"El campo 'activity_description' es requerido y no puede estar vacío".to_string()));
  }

  #[test]
  fn short_texts_are_flagged() {
    let mut ex = exercise();
    ex.description = "Muy corta".into();
    ex.expected_observation = "También".into();
    let (_, errors) = validate(&ex);
    assert!(errors.iter().any(|e| e.starts_with("La descripción debería tener al menos 50")));
    assert!(errors.iter().any(|e| e.starts_with("La observación esperada debería")));
  }

  #[test]
  fn two_questions_is_blocking() {
    let mut ex = exercise();
    ex.questions.truncate(2);
    let (ok, errors) = validate(&ex);
    assert!(!ok);
    assert_eq!(errors, vec!["Se recomiendan al menos 3 preguntas de análisis (encontradas: 2)".to_string()]);
  }

  #[test]
  fn no_questions_and_no_parameters() {
    let mut ex = exercise();
    ex.questions.clear();
    ex.parameters.clear();
    let (_, errors) = validate(&ex);
    assert!(errors.contains(&"El ejercicio debe tener al menos una pregunta de análisis".to_string()));
    assert!(errors.contains(&"El ejercicio debe tener al menos un parámetro modificable".to_string()));
  }

  #[test]
  fn parameter_defects() {
    let mut ex = exercise();
    ex.parameters[0].default_value = ParamValue::Number(1e6);
    ex.parameters[1].min_value = None;
    let selection = ex.parameters.iter_mut().find(|p| p.param_type == ParamType::Selection).expect("selection");
    selection.default_value = ParamValue::Choice("volcán".into());
    let (_, errors) = validate(&ex);
    let first = &ex.parameters[0].name;
    assert!(errors.contains(&format!("Parámetro '{first}': default_value debe estar entre min_value y max_value")));
    assert!(errors.iter().any(|e| e.ends_with("min_value es requerido para tipo numérico")));
    assert!(errors.contains(&"Parámetro 'escenario': default_value debe estar en la lista de opciones".to_string()));
  }

  #[test]
  fn question_defects() {
    let mut ex = exercise();
    ex.questions[0] = Question { id: 1, ..Question::choice("¿Sí?", &["sí"], 3) };
    ex.questions[1] = Question { id: 1, ..Question::numeric(" ", f64::NAN, -1.0, "") };
    let (_, errors) = validate(&ex);
    assert!(errors.contains(&"La pregunta de análisis #1: se requieren al menos 2 opciones".to_string()));
    assert!(errors.contains(&"La pregunta de análisis #1: índice correcto 3 fuera de rango".to_string()));
    assert!(errors.contains(&"La pregunta de análisis #2 está vacía".to_string()));
    assert!(errors.contains(&"La pregunta de análisis #2: el valor esperado no es finito".to_string()));
    assert!(errors.contains(&"La pregunta de análisis #2: id 1 repetido".to_string()));
  }

  #[test]
  fn duplicate_parameter_names() {
    let mut ex = exercise();
    let copy = ex.parameters[0].clone();
    ex.parameters.push(copy);
    let (ok, errors) = validate(&ex);
    assert!(!ok);
    assert_eq!(errors, vec![format!("El parámetro '{}' está duplicado", ex.parameters[0].name)]);
  }

  #[test]
  fn ensure_valid_joins_messages() {
    let mut ex = exercise();
    ex.id.clear();
    let err = ensure_valid(&ex).expect_err("invalid");
    assert!(err.to_string().contains("El campo 'id' es requerido"));
  }
}
