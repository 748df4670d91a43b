use crate::domain::Question;
use crate::formulas::Hopf;

use super::QuestionPool;

pub fn hopf(h: &Hopf) -> QuestionPool {
  let mu = h.mu;
  let regime = h.regime.index();

  let basic = vec![
    Question::choice(
      format!("Con μ = {mu}, ¿qué comportamiento exhibe el sistema?"),
      &["Punto fijo estable (espiral)", "Ciclo límite estable", "Comportamiento caótico", "Divergencia"],
      if mu <= 0.0 { 0 } else { 1 },
    ),
    Question::choice(
      "¿Qué es una bifurcación de Hopf?",
      &["Nacimiento de un punto fijo", "Nacimiento de un ciclo límite desde un punto fijo", "Duplicación de período", "Transición al caos"],
      1,
    ),
    Question::numeric("¿En qué valor de μ ocurre la bifurcación de Hopf en este sistema?", 0.0, 0.1, ""),
    Question::choice("¿El sistema tiene dimensión 2 o 3?", &["1", "2", "3", "4"], 1),
  ];

  let intermediate = vec![
    Question::choice(
      format!("Con μ = {mu}, ¿las trayectorias convergen al origen o a un ciclo límite?"),
      &["Convergen al origen (μ < 0)", "Ciclo límite (μ > 0)", "Punto crítico (μ ≈ 0)"],
      regime,
    ),
    Question::numeric("¿En qué valor de μ ocurre la bifurcación de Hopf?", 0.0, 0.1, ""),
    Question::choice(
      "¿Cómo crece el radio del ciclo límite con μ (para μ > 0)?",
      &["Proporcional a μ", "Proporcional a √μ", "Proporcional a μ²", "Constante"],
      1,
    ),
    Question::choice("Para μ > 0, ¿el ciclo límite es estable o inestable?", &["Estable (atractor)", "Inestable (repulsor)"], 0),
    Question::choice(
      "Esta bifurcación se llama supercrítica porque:",
      &["El ciclo nace de forma estable para μ > 0", "El ciclo es muy grande", "Ocurre a alta frecuencia", "El sistema diverge"],
      0,
    ),
  ];

  let radius_question = if mu > 0.0 {
    Question::numeric(
      format!("Con μ = {mu}, ¿cuál es el radio aproximado del ciclo límite?"),
      h.radius,
      (h.radius * 0.15).max(0.1),
      "",
    )
  } else {
    Question::numeric(
      format!("Con μ = {mu}, ¿a qué radio se acercan las trayectorias a largo plazo? (0 si convergen al origen)"),
      0.0,
      0.1,
      "",
    )
  };

  let advanced = vec![
    radius_question,
    Question::choice(
      "¿Los valores propios del sistema linealizado en el origen son?",
      &["λ = μ ± iω (complejos con parte real μ)", "λ = ±μ (reales)", "λ = μ (degenerado)", "λ = 0"],
      0,
    ),
    Question::choice(
      "En la bifurcación de Hopf subcrítica, ¿qué ocurre?",
      &["El ciclo límite es estable", "El ciclo límite es inestable y existe para μ < 0", "No hay ciclo límite", "El sistema diverge"],
      1,
    ),
    Question::choice(
      "¿La forma normal de la bifurcación de Hopf en coordenadas polares es?",
      &["dr/dt = μr - r³, dθ/dt = ω", "dr/dt = r², dθ/dt = 1", "dr/dt = μr, dθ/dt = r", "dr/dt = -r, dθ/dt = μ"],
      0,
    ),
    Question::choice(
      "¿El teorema de la variedad central es relevante para bifurcaciones de Hopf porque?",
      &["Reduce la dimensionalidad del análisis", "Calcula valores propios", "Determina el período", "Elimina no linealidades"],
      0,
    ),
    Question::choice(
      format!("Para μ = {mu}, ¿el punto fijo (0,0) es estable o inestable?"),
      &["Estable (μ < 0)", "Inestable (μ > 0)", "Marginalmente estable (μ = 0)"],
      regime,
    ),
  ];

  QuestionPool::new(basic, intermediate, advanced)
}
