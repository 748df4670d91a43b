//! Plain-text lab report and improvement suggestions for a graded exercise.

use std::collections::BTreeSet;

use crate::domain::Exercise;
use crate::evaluator::{EvaluationResult, PASS_THRESHOLD, POINTS_PER_QUESTION};
use crate::util::normalize_whitespace;

const RULE_WIDTH: usize = 60;

const GENERIC_TIPS: [&str; 3] = [
  "📚 Revisar la teoría fundamental del sistema",
  "💻 Practicar con más ejercicios similares",
  "📊 Analizar gráficos y resultados con más detalle",
];

/// Deterministic transcript: same exercise and result, same text.
pub fn report(exercise: &Exercise, result: &EvaluationResult) -> String {
  let heavy = "=".repeat(RULE_WIDTH);
  let light = "-".repeat(RULE_WIDTH);
  let mut out = vec![
    heavy.clone(),
    format!("REPORTE DE LABORATORIO: {}", exercise.name),
    heavy.clone(),
    format!("Dificultad: {}", exercise.difficulty.label().to_uppercase()),
    format!("Sistema: {}", exercise.system),
    String::new(),
    "PARÁMETROS DEL EJERCICIO:".to_string(),
  ];
  out.extend(exercise.parameters.iter().map(|p| format!("  • {}", p.describe_value())));
  out.push(String::new());

  out.push("RESULTADOS POR PREGUNTA:".into());
  for (i, outcome) in result.outcomes.iter().enumerate() {
    out.push(String::new());
    out.push(format!("Pregunta {}:", i + 1));
    out.push(format!("  {}", outcome.feedback));
    out.push(format!("  Puntos: {:.0}/{:.0}", outcome.points, POINTS_PER_QUESTION));
  }
  out.push(String::new());
  out.push(light);

  out.push(format!("PUNTUACIÓN TOTAL: {:.0}/{:.0}", result.points, result.max_points));
  out.push(format!("PORCENTAJE: {:.1}%", result.percentage));
  out.push(format!("ESTADO: {}", if result.passed { "APROBADO ✓" } else { "NO APROBADO ✗" }));
  out.push(String::new());

  out.push("FEEDBACK:".into());
  out.push(result.general_feedback.clone());
  out.push(String::new());

  if !exercise.required_analysis.is_empty() {
    out.push("ANÁLISIS REQUERIDO:".into());
    out.extend(exercise.required_analysis.iter().map(|a| format!("  • {a}")));
  }
  out.push(heavy);
  out.join("\n")
}

/// Generic tips below the pass mark, the system's own tips, and one tip per
/// missed question. Deduplicated after whitespace normalization, sorted.
pub fn suggestions(exercise: &Exercise, result: &EvaluationResult) -> Vec<String> {
  let mut tips = BTreeSet::new();
  if result.percentage < PASS_THRESHOLD {
    tips.extend(GENERIC_TIPS.iter().map(|t| normalize_whitespace(t)));
  }
  tips.extend(exercise.system.profile().tips.iter().map(|t| normalize_whitespace(t)));

  for outcome in result.outcomes.iter().filter(|o| !o.correct) {
    let Some(question) = exercise.question(outcome.question_id) else { continue };
    let tip = if question.is_numeric() {
      format!("🔢 Revisar cálculos numéricos: {}", question.text)
    } else {
      format!("💡 Reforzar concepto: {}", question.text)
    };
    tips.insert(normalize_whitespace(&tip));
  }
  tips.into_iter().collect()
}
