use crate::domain::Question;
use crate::formulas::{Verhulst, FEIGENBAUM_ONSET};

use super::QuestionPool;

const BEHAVIOURS: [&str; 4] = [
  "Converge a un punto fijo estable",
  "Oscila con período 2",
  "Cascada de duplicación de período (4, 8, …)",
  "Comportamiento caótico",
];

pub fn verhulst(v: &Verhulst) -> QuestionPool {
  let r = v.r;
  let basic = vec![
    Question::choice(
      format!("¿Para r = {r}, el sistema converge a un punto fijo?"),
      &["Sí (r < 3)", "No, oscila o es caótico"],
      if r < 3.0 { 0 } else { 1 },
    ),
    Question::choice(
      "¿El mapa logístico es un sistema de tiempo continuo o discreto?",
      &["Continuo", "Discreto (iteraciones)", "Ambos", "Ninguno"],
      1,
    ),
    Question::numeric(format!("¿Cuál es el punto fijo no trivial x* = 1 - 1/r para r = {r}?"), v.fixed_point, 0.02, ""),
    Question::choice(
      "¿En qué intervalo permanece x_n si 0 ≤ x₀ ≤ 1 y r ≤ 4?",
      &["[0, 1]", "[0, r]", "[-1, 1]", "No está acotado"],
      0,
    ),
  ];

  let intermediate = vec![
    Question::numeric(format!("¿Cuál es el punto fijo no trivial x* para r = {r}?"), v.fixed_point, 0.01, ""),
    Question::numeric("¿En qué valor de r aparece la primera bifurcación?", 3.0, 0.2, ""),
    Question::choice(format!("Con r = {r}, ¿qué comportamiento a largo plazo se observa?"), &BEHAVIOURS, v.behaviour.index()),
    Question::choice(
      "La primera bifurcación del mapa logístico es del tipo:",
      &["Silla-nodo", "Duplicación de período (flip)", "Hopf", "Transcrítica"],
      1,
    ),
    Question::numeric("¿A partir de qué r comienza el caos?", FEIGENBAUM_ONSET, 0.1, ""),
  ];

  let advanced = vec![
    Question::numeric(
      format!("¿Cuál es el multiplicador |f'(x*)| = |r(1 - 2x*)| del punto fijo para r = {r}?"),
      v.multiplier,
      0.05,
      "",
    ),
    Question::choice(
      format!("Con r = {r}, ¿el punto fijo x* es estable?"),
      &["Sí, |f'(x*)| < 1", "No, |f'(x*)| > 1"],
      if v.stable { 0 } else { 1 },
    ),
    Question::choice(format!("Clasifique el comportamiento del mapa para r = {r}:"), &BEHAVIOURS, v.behaviour.index()),
    Question::choice(
      "La razón entre intervalos sucesivos de bifurcación tiende a:",
      &["La constante de Feigenbaum δ ≈ 4.669", "π", "La razón áurea", "e"],
      0,
    ),
    Question::choice(
      "Dentro de la región caótica, cerca de r ≈ 3.83 aparece:",
      &["Una ventana periódica de período 3", "Divergencia a infinito", "Un punto fijo estable", "Un ciclo de período 2"],
      0,
    ),
    Question::choice(
      "¿Qué indica un exponente de Lyapunov positivo en el mapa logístico?",
      &["Convergencia al punto fijo", "Caos (sensibilidad a condiciones iniciales)", "Ciclo de período 2", "Divergencia a infinito"],
      1,
    ),
  ];

  QuestionPool::new(basic, intermediate, advanced)
}
