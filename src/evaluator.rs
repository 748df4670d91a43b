//! Grading of submitted answers against an exercise's answer keys.
//!
//! Answers arrive as raw text keyed by question id. Nothing here returns an
//! error: a missing or malformed answer is an incorrect outcome with its own
//! feedback line, and the exercise is never mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::domain::{AnswerKey, Exercise, Question};

pub const POINTS_PER_QUESTION: f64 = 10.0;
/// Minimum percentage for a passing grade.
pub const PASS_THRESHOLD: f64 = 70.0;

/// Raw submissions keyed by question id.
pub type Answers = BTreeMap<u32, String>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionOutcome {
  pub question_id: u32,
  pub correct: bool,
  pub points: f64,
  pub feedback: String,
  /// Echo of what the student sent, trimmed.
  pub submitted: Option<String>,
  /// Expected value with unit, or the text of the correct option.
  pub expected: String,
  /// Absolute error, for parsable numeric answers only.
  pub abs_error: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
  pub outcomes: Vec<QuestionOutcome>,
  pub points: f64,
  pub max_points: f64,
  pub percentage: f64,
  pub passed: bool,
  pub general_feedback: String,
}

impl EvaluationResult {
  pub fn correct_count(&self) -> usize {
    self.outcomes.iter().filter(|o| o.correct).count()
  }
}

#[instrument(level = "info", skip_all, fields(id = %exercise.id, answered = answers.len()))]
pub fn evaluate(exercise: &Exercise, answers: &Answers) -> EvaluationResult {
  let outcomes: Vec<QuestionOutcome> = exercise
    .questions
    .iter()
    .map(|q| grade(q, answers.get(&q.id).map(String::as_str)))
    .collect();

  let points: f64 = outcomes.iter().map(|o| o.points).sum();
  let max_points = POINTS_PER_QUESTION * exercise.questions.len() as f64;
  let percentage = if max_points > 0.0 { points / max_points * 100.0 } else { 0.0 };
  let passed = percentage >= PASS_THRESHOLD;

  info!(target: "grading", points, max_points, percentage, passed, "Evaluated answers");
  EvaluationResult {
    outcomes,
    points,
    max_points,
    percentage,
    passed,
    general_feedback: general_feedback(percentage, &exercise.main_topic),
  }
}

/// Grade a single question. `submitted` is the raw text, if any.
pub fn grade(question: &Question, submitted: Option<&str>) -> QuestionOutcome {
  let submitted = submitted.map(str::trim).filter(|s| !s.is_empty());
  let outcome = match &question.answer {
    AnswerKey::Numeric { expected, tolerance, unit } => grade_numeric(question.id, submitted, *expected, *tolerance, unit),
    AnswerKey::MultipleChoice { options, correct_index } => grade_choice(question.id, submitted, options, *correct_index),
  };
  debug!(target: "grading", question = question.id, correct = outcome.correct, "Graded question");
  outcome
}

fn grade_numeric(id: u32, submitted: Option<&str>, expected: f64, tolerance: f64, unit: &str) -> QuestionOutcome {
  let expected_text = with_unit(format!("{expected:.2}"), unit);
  let mut outcome = QuestionOutcome {
    question_id: id,
    correct: false,
    points: 0.0,
    feedback: String::new(),
    submitted: submitted.map(str::to_string),
    expected: expected_text.clone(),
    abs_error: None,
  };

  let Some(raw) = submitted else {
    outcome.feedback = "❌ No se proporcionó respuesta".into();
    return outcome;
  };
  let Some(value) = parse_number(raw) else {
    outcome.feedback = "❌ Respuesta inválida. Se esperaba un número.".into();
    return outcome;
  };

  let diff = (value - expected).abs();
  outcome.abs_error = Some(diff);
  if diff <= tolerance {
    outcome.correct = true;
    outcome.points = POINTS_PER_QUESTION;
    outcome.feedback = with_unit(format!("✅ ¡Correcto! Respuesta: {value:.2}"), unit);
  } else {
    outcome.feedback = format!(
      "❌ Incorrecto. Tu respuesta: {value:.2}. Respuesta esperada: {expected_text} (Error: {:.1}%)",
      relative_error(diff, expected)
    );
  }
  outcome
}

fn grade_choice(id: u32, submitted: Option<&str>, options: &[String], correct_index: usize) -> QuestionOutcome {
  let correct_text = options.get(correct_index).cloned().unwrap_or_default();
  let mut outcome = QuestionOutcome {
    question_id: id,
    correct: false,
    points: 0.0,
    feedback: String::new(),
    submitted: submitted.map(str::to_string),
    expected: correct_text.clone(),
    abs_error: None,
  };

  let Some(raw) = submitted else {
    outcome.feedback = "❌ No se proporcionó respuesta".into();
    return outcome;
  };
  let Some((index, chosen)) = parse_index(raw).and_then(|i| options.get(i).map(|text| (i, text))) else {
    outcome.feedback = "❌ Respuesta inválida".into();
    return outcome;
  };

  if index == correct_index {
    outcome.correct = true;
    outcome.points = POINTS_PER_QUESTION;
    outcome.feedback = format!("✅ ¡Correcto! \"{chosen}\"");
  } else {
    outcome.feedback = format!("❌ Incorrecto. Seleccionaste: \"{chosen}\". La respuesta correcta es: \"{correct_text}\"");
  }
  outcome
}

/// Accepts a decimal comma. Infinite and NaN inputs count as unparsable.
fn parse_number(raw: &str) -> Option<f64> {
  raw.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Option index as an integer, or a float with no fractional part ("2.0").
fn parse_index(raw: &str) -> Option<usize> {
  if let Ok(i) = raw.parse::<i64>() {
    return usize::try_from(i).ok();
  }
  let v = parse_number(raw)?;
  if v.fract() == 0.0 && v >= 0.0 && v <= usize::MAX as f64 {
    Some(v as usize)
  } else {
    None
  }
}

/// Percent error; the absolute error times 100 when the expected value is 0.
fn relative_error(diff: f64, expected: f64) -> f64 {
  if expected == 0.0 {
    diff * 100.0
  } else {
    diff / expected.abs() * 100.0
  }
}

fn with_unit(text: String, unit: &str) -> String {
  if unit.is_empty() { text } else { format!("{text} {unit}") }
}

/// Banded summary naming the system, followed by the score.
pub fn general_feedback(percentage: f64, system: &str) -> String {
  let (level, message) = if percentage >= 90.0 {
    (
      "¡Excelente!",
      format!("Has demostrado un dominio excepcional del sistema {system}. Comprensión profunda de los conceptos fundamentales."),
    )
  } else if percentage >= PASS_THRESHOLD {
    (
      "¡Bien hecho!",
      format!("Muestras un buen entendimiento del sistema {system}. Continúa practicando para perfeccionar tu conocimiento."),
    )
  } else if percentage >= 50.0 {
    (
      "Aprobado con margen",
      format!("Tienes conocimientos básicos del sistema {system}. Te recomendamos revisar la teoría y practicar más ejercicios."),
    )
  } else {
    (
      "Necesitas mejorar",
      format!(
        "Parece que hay dificultades con el sistema {system}. Te sugerimos revisar los conceptos fundamentales y consultar el material de apoyo."
      ),
    )
  };
  format!("{level}\n{message}\n\nPuntuación: {percentage:.1}%")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Difficulty;
  use crate::formulas::{self, MapBehaviour};
  use crate::generator::ExerciseGenerator;
  use crate::pools;
  use crate::systems::SystemId;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn exercise(system: &str, difficulty: &str) -> Exercise {
    ExerciseGenerator::with_rng(StdRng::seed_from_u64(99))
      .generate(system, difficulty)
      .expect("generate")
  }

  fn with_questions(system: &str, questions: Vec<Question>) -> Exercise {
    let mut ex = exercise(system, "intermedio");
    ex.questions = questions.into_iter().zip(1u32..).map(|(q, id)| Question { id, ..q }).collect();
    ex
  }

  fn answers(pairs: &[(u32, &str)]) -> Answers {
    pairs.iter().map(|(id, v)| (*id, v.to_string())).collect()
  }

  #[test]
  fn tolerance_edge_is_inclusive() {
    let q = Question { id: 1, ..Question::numeric("¿τ?", 10.0, 0.5, "min") };
    assert!(grade(&q, Some("10.5")).correct);
    assert!(grade(&q, Some("9,5")).correct);
    assert!(!grade(&q, Some("10.51")).correct);
    assert_eq!(grade(&q, Some("10")).feedback, "✅ ¡Correcto! Respuesta: 10.00 min");
  }

  #[test]
  fn numeric_invalid_and_missing() {
    let q = Question { id: 1, ..Question::numeric("¿τ?", 10.0, 0.5, "min") };
    assert_eq!(grade(&q, Some("diez")).feedback, "❌ Respuesta inválida. Se esperaba un número.");
    assert_eq!(grade(&q, Some("inf")).feedback, "❌ Respuesta inválida. Se esperaba un número.");
    assert_eq!(grade(&q, None).feedback, "❌ No se proporcionó respuesta");
    assert_eq!(grade(&q, Some("   ")).feedback, "❌ No se proporcionó respuesta");
  }

  #[test]
  fn zero_expected_reports_scaled_absolute_error() {
    let q = Question { id: 1, ..Question::numeric("¿r?", 0.0, 0.1, "") };
    let out = grade(&q, Some("0.5"));
    assert!(!out.correct);
    assert!(out.feedback.ends_with("(Error: 50.0%)"), "{}", out.feedback);
  }

  #[test]
  fn multiple_choice_indices() {
    let q = Question { id: 2, ..Question::choice("¿Forma?", &["exponencial", "lineal", "oscilante"], 0) };
    assert!(grade(&q, Some("0")).correct);
    assert!(grade(&q, Some("0.0")).correct);
    let wrong = grade(&q, Some("2"));
    assert!(!wrong.correct);
    assert_eq!(wrong.feedback, "❌ Incorrecto. Seleccionaste: \"oscilante\". La respuesta correcta es: \"exponencial\"");
    for bad in ["3", "-1", "1.5", "a"] {
      let out = grade(&q, Some(bad));
      assert!(!out.correct && out.points == 0.0, "{bad}");
      assert_eq!(out.feedback, "❌ Respuesta inválida");
    }
  }

  #[test]
  fn scenario_a_newton_time_constant() {
    let c = formulas::cooling(90.0, 20.0, 0.1).expect("cooling");
    assert!((c.tau - 10.0).abs() < 1e-9);
    let ex = with_questions("newton", vec![Question::numeric("¿τ?", c.tau, 1.0, "min")]);

    let exact = evaluate(&ex, &answers(&[(1, "10.0")]));
    assert!(exact.outcomes[0].correct);
    assert_eq!(exact.points, 10.0);
    assert!(exact.passed);

    let result = evaluate(&ex, &answers(&[(1, "15")]));
    let out = &result.outcomes[0];
    assert!(!out.correct);
    assert_eq!(out.abs_error, Some(5.0));
    assert!(out.feedback.contains("Respuesta esperada: 10.00 min (Error: 50.0%)"));
    assert_eq!(result.points, 0.0);
    assert!(!result.passed);
  }

  #[test]
  fn scenario_b_sir_reproduction_number() {
    let ex = exercise("sir", "principiante");
    let r0 = ex
      .questions
      .iter()
      .find(|q| q.is_numeric())
      .map(|q| q.id)
      .expect("beginner SIR always asks for R₀");
    let out = evaluate(&ex, &answers(&[(r0, "3")]));
    assert!(out.outcomes.iter().find(|o| o.question_id == r0).expect("outcome").correct);
  }

  #[test]
  fn scenario_b_sir_wrong_answers_name_the_outbreak() {
    let e = formulas::epidemic(990.0, 10.0, 0.0, 0.3, 0.1).expect("sir");
    assert!((e.r0 - 3.0).abs() < 1e-9);
    let ex = with_questions("sir", pools::sir(&e).tier(1).to_vec());
    let r0 = ex.questions.iter().find(|q| q.text.contains("β/γ")).expect("R₀ question").id;
    let meaning = ex.questions.iter().find(|q| q.text.contains("R₀ > 1")).expect("meaning question").id;

    let result = evaluate(&ex, &answers(&[(r0, "3.0"), (meaning, "0")]));
    let by_id = |id: u32| result.outcomes.iter().find(|o| o.question_id == id).expect("outcome");
    assert!(by_id(r0).correct);
    let choice = by_id(meaning);
    assert!(!choice.correct);
    assert_eq!(choice.expected, "Habrá un brote epidémico");
    assert!(choice.feedback.ends_with("La respuesta correcta es: \"Habrá un brote epidémico\""), "{}", choice.feedback);

    let wrong = evaluate(&ex, &answers(&[(r0, "1.0")]));
    let out = wrong.outcomes.iter().find(|o| o.question_id == r0).expect("outcome");
    assert!(!out.correct);
    assert!((out.abs_error.expect("numeric") - 2.0).abs() < 1e-9);
  }

  #[test]
  fn scenario_c_verhulst_fixed_point() {
    let v = formulas::verhulst(2.5).expect("map");
    assert!((v.fixed_point - 0.6).abs() < 1e-12);
    assert_eq!(v.behaviour, MapBehaviour::FixedPoint);
    let ex = with_questions(
      "verhulst",
      vec![
        Question::numeric("¿x*?", v.fixed_point, 0.02, ""),
        Question::choice("¿Comportamiento?", &["punto fijo", "período 2", "caos"], v.behaviour.index()),
        Question::numeric("¿|f'(x*)|?", v.multiplier, 0.05, ""),
      ],
    );
    let result = evaluate(&ex, &answers(&[(1, "0.6"), (2, "0"), (3, "0.5")]));
    assert_eq!(result.points, 30.0);
    assert_eq!(result.percentage, 100.0);
    assert!(result.passed);
    assert!(result.general_feedback.starts_with("¡Excelente!"));
  }

  #[test]
  fn scenario_d_no_answers() {
    let ex = exercise("lorenz", "avanzado");
    let result = evaluate(&ex, &Answers::new());
    assert_eq!(result.points, 0.0);
    assert_eq!(result.max_points, 50.0);
    assert_eq!(result.percentage, 0.0);
    assert!(!result.passed);
    assert!(result.outcomes.iter().all(|o| o.feedback == "❌ No se proporcionó respuesta"));
    assert!(result.general_feedback.starts_with("Necesitas mejorar"));
  }

  #[test]
  fn scenario_e_hopf_radius() {
    let h = formulas::hopf(0.5).expect("hopf");
    assert!((h.radius - 0.707).abs() < 1e-3);
    let tol = (0.15 * h.radius).max(0.1);
    let ex = with_questions("hopf", vec![Question::numeric("¿Radio?", h.radius, tol, "")]);
    assert!(evaluate(&ex, &answers(&[(1, "0.7")])).passed);
    assert!(!evaluate(&ex, &answers(&[(1, "0.9")])).passed);
  }

  #[test]
  fn empty_exercise_scores_zero() {
    let ex = with_questions("amortiguador", vec![]);
    let result = evaluate(&ex, &answers(&[(1, "1")]));
    assert_eq!(result.max_points, 0.0);
    assert_eq!(result.percentage, 0.0);
    assert!(!result.passed);
  }

  #[test]
  fn expected_answers_always_grade_correct() {
    let mut generator = ExerciseGenerator::with_rng(StdRng::seed_from_u64(4242));
    for _ in 0..4 {
      for system in SystemId::ALL {
        for difficulty in Difficulty::ALL {
          let ex = generator.generate_for(system, difficulty).expect("generate");
          let sheet: Answers = ex
            .questions
            .iter()
            .map(|q| match &q.answer {
              AnswerKey::Numeric { expected, .. } => (q.id, expected.to_string()),
              AnswerKey::MultipleChoice { correct_index, .. } => (q.id, correct_index.to_string()),
            })
            .collect();
          let result = evaluate(&ex, &sheet);
          assert_eq!(result.correct_count(), ex.questions.len(), "{system}/{difficulty}: {:?}", result.outcomes);
          assert_eq!(result.percentage, 100.0);
        }
      }
    }
  }

  #[test]
  fn feedback_bands() {
    assert!(general_feedback(90.0, "SIR").starts_with("¡Excelente!"));
    assert!(general_feedback(70.0, "SIR").starts_with("¡Bien hecho!"));
    assert!(general_feedback(50.0, "SIR").starts_with("Aprobado con margen"));
    assert!(general_feedback(49.9, "SIR").ends_with("Puntuación: 49.9%"));
  }
}
