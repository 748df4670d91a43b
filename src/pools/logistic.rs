use crate::domain::Question;
use crate::formulas::Logistic;

use super::QuestionPool;

pub fn logistic(l: &Logistic) -> QuestionPool {
  let k = l.capacity;
  let basic = vec![
    Question::numeric("¿Hacia qué valor tiende la población a largo plazo?", k, k * 0.05, "individuos"),
    Question::choice(
      "¿Qué representa K en el modelo logístico?",
      &["Tasa de crecimiento", "Capacidad de carga del ambiente", "Población inicial", "Tiempo de duplicación"],
      1,
    ),
    Question::choice(
      "¿Por qué el crecimiento no es infinito como en el modelo exponencial?",
      &["Por errores numéricos", "Por la limitación de recursos (K)", "Por la muerte de individuos", "El modelo está mal"],
      1,
    ),
    Question::choice("¿La curva logística tiene forma de S (sigmoide)?", &["Sí", "No, es exponencial", "No, es lineal", "Depende de r"], 0),
  ];

  let intermediate = vec![
    Question::numeric("¿Hacia qué valor tiende la población a largo plazo?", k, k * 0.03, "individuos"),
    Question::numeric("¿En qué valor de N la tasa de crecimiento dN/dt es máxima?", k / 2.0, k * 0.1, "individuos"),
    Question::choice(
      "Si r se duplica, ¿la población alcanza K más rápido o más lento?",
      &["Más rápido", "Más lento", "Igual velocidad", "Nunca alcanza K"],
      0,
    ),
    Question::choice(
      "¿Cuántos puntos de equilibrio tiene el sistema?",
      &["Uno (N = 0)", "Uno (N = K)", "Dos (N = 0 y N = K)", "Infinitos"],
      2,
    ),
    Question::choice(
      "¿El equilibrio N = 0 es estable o inestable?",
      &["Estable", "Inestable", "Marginalmente estable", "Depende de r"],
      1,
    ),
    Question::numeric(
      "¿Cuál es el tiempo de duplicación inicial aproximado (para N << K)?",
      l.doubling_time,
      l.doubling_time * 0.15,
      "unidades de tiempo",
    ),
  ];

  let advanced = vec![
    Question::numeric(
      "¿En qué tiempo aproximado ocurre el punto de inflexión?",
      l.inflection_time,
      (l.inflection_time * 0.2).max(1.0),
      "unidades de tiempo",
    ),
    Question::choice(
      "¿La ecuación logística dN/dt = rN(1-N/K) es lineal o no lineal?",
      &["Lineal", "No lineal (término N²)"],
      1,
    ),
    Question::choice(
      "La solución analítica N(t) = K/(1 + ((K-N₀)/N₀)e^(-rt)) es una función:",
      &["Exponencial", "Logística (sigmoide)", "Hiperbólica", "Trigonométrica"],
      1,
    ),
    Question::choice(
      "Si N₀ > K (sobrepoblación inicial), ¿qué sucede?",
      &["N crece más", "N decrece hacia K", "N oscila", "El modelo falla"],
      1,
    ),
    Question::choice(
      "¿Cuál es el valor propio del sistema linealizado cerca de N = K?",
      &["λ = r (inestable)", "λ = -r (estable)", "λ = 0 (neutral)", "λ = rK"],
      1,
    ),
    Question::choice(
      "El modelo logístico es caso particular del modelo de Verhulst-Pearl. ¿Qué asume?",
      &["Recursos infinitos", "Competencia intraespecífica proporcional a N²", "No hay nacimientos", "Tasa de muerte constante"],
      1,
    ),
  ];

  QuestionPool::new(basic, intermediate, advanced)
}
