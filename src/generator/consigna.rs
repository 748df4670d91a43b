//! Instructional text ("consigna") attached to every exercise.
//!
//! Fixed skeleton: SITUACIÓN, DATOS, MODELO MATEMÁTICO, SE PIDE (a, b, c…)
//! and an optional EXPERIMENTO SUGERIDO.

use crate::domain::{ParamType, Parameter, Question};
use crate::util::{fill_template, item_letter};

use super::drafts::Draft;

/// Scenario text with `{name}` placeholders replaced by parameter values.
pub fn situation(template: &str, parameters: &[Parameter]) -> String {
  fill_template(template, parameters.iter().map(|p| (p.name.as_str(), p.default_value.to_string())))
}

pub fn build(draft: &Draft, tier: u8, questions: &[Question]) -> Vec<String> {
  let mut lines = vec!["SITUACIÓN".to_string()];
  lines.push(format!("  {}", situation(draft.scenario.situation, &draft.parameters)));

  lines.push(String::new());
  lines.push("DATOS".into());
  lines.extend(
    draft
      .parameters
      .iter()
      .filter(|p| p.param_type != ParamType::Selection)
      .map(|p| format!("  - {}", p.describe_value())),
  );
  if tier == 1 {
    lines.extend(draft.references.iter().map(|r| format!("  - {r}")));
  }

  lines.push(String::new());
  lines.push("MODELO MATEMÁTICO".into());
  lines.extend(draft.model.iter().map(|m| format!("  {m}")));

  lines.push(String::new());
  lines.push("SE PIDE".into());
  lines.extend(
    questions
      .iter()
      .enumerate()
      .map(|(i, q)| format!("  {}) {}", item_letter(i), q.text)),
  );

  if let Some(exp) = &draft.experiment {
    lines.push(String::new());
    lines.push("EXPERIMENTO SUGERIDO".into());
    lines.push(format!("  {exp}"));
  }
  lines
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::contexts::Scenario;
  use crate::pools::QuestionPool;

  static SCENE: Scenario = Scenario {
    name: "prueba",
    min_tier: 1,
    situation: "Un cuerpo a {T0} °C.",
  };

  fn draft() -> Draft {
    Draft {
      scenario: &SCENE,
      parameters: vec![
        Parameter::integer("T0", "T₀", "inicial", 0, 300, 90).expect("param").with_unit("°C"),
        Parameter::selection("escenario", "Escenario", "d", &["prueba"], "prueba").expect("param"),
      ],
      model: vec!["dT/dt = -k(T - Tₐₘ)".into()],
      references: vec!["τ = 10.00 min".into()],
      pool: QuestionPool::default(),
      experiment: Some("Duplique k.".into()),
    }
  }

  #[test]
  fn sections_appear_in_order() {
    let questions = vec![Question::numeric("¿τ?", 10.0, 1.0, "min"), Question::choice("¿Forma?", &["a", "b"], 0)];
    let lines = build(&draft(), 1, &questions);
    let pos = |h: &str| lines.iter().position(|l| l == h).expect(h);
    assert!(pos("SITUACIÓN") < pos("DATOS"));
    assert!(pos("DATOS") < pos("MODELO MATEMÁTICO"));
    assert!(pos("MODELO MATEMÁTICO") < pos("SE PIDE"));
    assert!(pos("SE PIDE") < pos("EXPERIMENTO SUGERIDO"));
    assert!(lines.contains(&"  Un cuerpo a 90 °C.".to_string()));
    assert!(lines.contains(&"  a) ¿τ?".to_string()));
    assert!(lines.contains(&"  b) ¿Forma?".to_string()));
  }

  #[test]
  fn references_only_for_beginners() {
    let with = build(&draft(), 1, &[]);
    let without = build(&draft(), 3, &[]);
    assert!(with.iter().any(|l| l.contains("τ = 10.00 min")));
    assert!(!without.iter().any(|l| l.contains("τ = 10.00 min")));
    assert!(!with.iter().any(|l| l.contains("Escenario")));
  }
}
