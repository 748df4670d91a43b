use crate::domain::Question;
use crate::formulas::{Circuit, DAMPING_TYPES};

use super::QuestionPool;

pub fn rlc(c: &Circuit) -> QuestionPool {
  let oscillates = c.oscillates();

  let basic = vec![
    Question::numeric("¿Cuál es la frecuencia de resonancia ω₀?", c.omega0, c.omega0 * 0.1, "rad/s"),
    Question::choice("¿El circuito está sub, crítico o sobreamortiguado?", &DAMPING_TYPES, c.class.index()),
    Question::choice(
      "¿Qué elemento del circuito disipa energía?",
      &["El inductor", "El capacitor", "La resistencia", "Ninguno"],
      2,
    ),
    Question::choice(
      "¿Qué almacenan el inductor y el capacitor, respectivamente?",
      &["Energía magnética y energía eléctrica", "Carga y corriente", "Calor y luz", "Nada"],
      0,
    ),
  ];

  let intermediate = vec![
    Question::numeric("¿Cuál es la frecuencia de resonancia ω₀ = 1/√(LC)?", c.omega0, c.omega0 * 0.1, "rad/s"),
    Question::numeric("¿Cuál es el factor de calidad Q aproximado?", c.quality, c.quality * 0.15, ""),
    Question::choice("Clasifique la respuesta del circuito:", &DAMPING_TYPES, c.class.index()),
    Question::choice(
      "La ecuación L·q̈ + R·q̇ + q/C = 0 es análoga a:",
      &["Un oscilador masa-resorte amortiguado", "El enfriamiento de Newton", "El modelo logístico", "Un péndulo sin fricción"],
      0,
    ),
    Question::choice(
      "¿La carga del capacitor cambia de signo durante la descarga?",
      &["Sí, oscila", "No, decae monótonamente"],
      if oscillates { 0 } else { 1 },
    ),
  ];

  let advanced = vec![
    Question::numeric("¿Cuál es el factor de amortiguamiento ζ = R/(2√(L/C))?", c.zeta, (c.zeta * 0.1).max(0.02), ""),
    Question::numeric("¿Cuál es el factor de calidad Q = ω₀L/R?", c.quality, c.quality * 0.15, ""),
    Question::numeric("¿Cuál es la frecuencia de resonancia ω₀?", c.omega0, c.omega0 * 0.1, "rad/s"),
    Question::choice("Clasifique la respuesta del circuito:", &DAMPING_TYPES, c.class.index()),
    Question::choice(
      "Si se aumenta R manteniendo L y C, el factor de calidad Q:",
      &["Aumenta", "Disminuye", "No cambia", "Se vuelve negativo"],
      1,
    ),
    Question::choice(
      "¿Qué resistencia produce amortiguamiento crítico?",
      &["R = 2√(L/C)", "R = √(LC)", "R = L/C", "R = 1/(LC)"],
      0,
    ),
  ];

  QuestionPool::new(basic, intermediate, advanced)
}
