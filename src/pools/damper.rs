use crate::domain::Question;
use crate::formulas::{root_kind, Damper, DAMPING_TYPES};

use super::QuestionPool;

pub fn damper(d: &Damper) -> QuestionPool {
  let oscillates = d.oscillates();

  let basic = vec![
    Question::choice("¿Qué tipo de amortiguamiento presenta el sistema?", &DAMPING_TYPES, d.class.index()),
    Question::numeric("¿Cuál es el factor de amortiguamiento ζ?", d.zeta, 0.1, ""),
    Question::choice("¿El sistema oscila con amplitud decreciente?", &["Sí", "No"], if oscillates { 0 } else { 1 }),
    Question::choice(
      "¿Qué representa el coeficiente c en la ecuación m·ẍ + c·ẋ + k·x = 0?",
      &["La rigidez del resorte", "La fricción viscosa", "La masa", "La fuerza externa"],
      1,
    ),
  ];

  let mut intermediate = vec![
    Question::numeric("¿Cuál es el coeficiente de amortiguamiento crítico c_crit = 2√(km)?", d.critical, d.critical * 0.05, "N·s/m"),
    Question::numeric("¿Cuál es el factor de amortiguamiento ζ = c/c_crit?", d.zeta, 0.05, ""),
    Question::numeric("¿Cuál es la frecuencia natural ω₀ = √(k/m)?", d.omega0, d.omega0 * 0.05, "rad/s"),
    Question::choice("Clasifique el régimen de amortiguamiento:", &DAMPING_TYPES, d.class.index()),
    Question::choice(
      "¿Qué régimen devuelve la masa al reposo más rápido sin oscilar?",
      &["Subamortiguado", "Críticamente amortiguado", "Sobreamortiguado", "Todos por igual"],
      1,
    ),
  ];
  if let Some(wd) = d.damped_omega {
    intermediate.push(Question::numeric("¿Cuál es la frecuencia amortiguada ω_d = ω₀√(1 - ζ²)?", wd, (wd * 0.1).max(0.05), "rad/s"));
  }

  let advanced = vec![
    Question::numeric("¿Cuál es el factor de amortiguamiento ζ?", d.zeta, 0.03, ""),
    Question::numeric("¿Cuál es el amortiguamiento crítico c_crit?", d.critical, d.critical * 0.03, "N·s/m"),
    Question::choice("Clasifique el régimen de amortiguamiento:", &DAMPING_TYPES, d.class.index()),
    Question::choice(
      "Las raíces de la ecuación característica m·λ² + c·λ + k = 0 son:",
      &[
        "Complejas conjugadas",
        "Reales e iguales",
        "Reales y distintas",
      ],
      root_kind(d.zeta),
    ),
    Question::choice(
      "En el espacio de fases (x, v), un sistema subamortiguado describe:",
      &["Una espiral hacia el origen", "Una recta", "Un ciclo límite", "Una trayectoria divergente"],
      0,
    ),
    Question::choice(
      "Si se duplica la masa manteniendo k y c, el factor ζ:",
      &["Aumenta", "Disminuye (ζ ∝ 1/√m)", "No cambia", "Se duplica"],
      1,
    ),
  ];

  QuestionPool::new(basic, intermediate, advanced)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::AnswerKey;
  use crate::formulas;

  fn key_of<'a>(questions: &'a [Question], prefix: &str) -> &'a AnswerKey {
    &questions.iter().find(|q| q.text.starts_with(prefix)).expect(prefix).answer
  }

  #[test]
  fn near_critical_keys_agree_with_each_other() {
    let d = formulas::damper(1.0, 4.0, 3.9).expect("damper");
    let pool = damper(&d);

    let oscillates = key_of(pool.tier(1), "¿El sistema oscila");
    assert!(matches!(oscillates, AnswerKey::MultipleChoice { correct_index: 0, .. }));
    assert!(pool.tier(2).iter().any(|q| q.text.contains("ω_d")));
    let roots = key_of(pool.tier(3), "Las raíces");
    assert!(matches!(roots, AnswerKey::MultipleChoice { correct_index: 0, .. }));
    let class = key_of(pool.tier(3), "Clasifique");
    assert!(matches!(class, AnswerKey::MultipleChoice { correct_index: 1, .. }));
  }
}
