use crate::domain::Question;
use crate::formulas::VanDerPol;

use super::QuestionPool;

pub fn van_der_pol(v: &VanDerPol) -> QuestionPool {
  let mu = v.mu;
  let basic = vec![
    Question::choice("¿El sistema de Van der Pol es lineal o no lineal?", &["Lineal", "No lineal"], 1),
    Question::choice(
      format!("¿El sistema converge a un ciclo límite cuando μ = {mu}?"),
      &["Sí, para μ > 0", "No", "Solo si μ < 0"],
      if mu > 0.0 { 0 } else { 1 },
    ),
    Question::choice(
      "¿Qué representa un ciclo límite en el espacio de fases?",
      &["Un punto de equilibrio", "Una oscilación autosostenida periódica", "Un comportamiento caótico", "Una trayectoria divergente"],
      1,
    ),
    Question::choice(
      "¿Cuántos puntos de equilibrio tiene el oscilador de Van der Pol?",
      &["Ninguno", "Uno (el origen)", "Dos", "Infinitos"],
      1,
    ),
  ];

  let intermediate = vec![
    Question::choice(
      format!("Con μ = {mu}, ¿qué tipo de comportamiento exhibe el sistema?"),
      &["Oscilación amortiguada", "Oscilación autosostenida (ciclo límite)", "Divergencia", "Punto fijo estable"],
      if mu > 0.0 { 1 } else { 0 },
    ),
    Question::choice(
      "¿El ciclo límite depende de las condiciones iniciales?",
      &["Sí, cada condición inicial genera un ciclo diferente", "No, todas convergen al mismo ciclo límite", "Solo depende de x₀", "Solo depende de v₀"],
      1,
    ),
    Question::choice(
      "¿Qué sucede con la forma del ciclo límite cuando μ aumenta?",
      &["Se vuelve más circular", "Se distorsiona (relajación)", "Desaparece", "Se vuelve caótico"],
      1,
    ),
    Question::choice(
      "El término μ(1-x²)dx/dt en la ecuación representa:",
      &["Amortiguamiento constante", "Amortiguamiento negativo no lineal", "Fuerza externa", "Resorte no lineal"],
      1,
    ),
    Question::numeric("¿Cuál es la amplitud aproximada del ciclo límite en x?", v.amplitude, 0.3, ""),
  ];

  let mut advanced = vec![
    Question::choice(
      format!("Con μ = {mu}, ¿qué tipo de oscilación se observa?"),
      &["Oscilaciones de relajación (μ grande)", "Oscilaciones casi sinusoidales (μ pequeño)", "No hay oscilaciones", "Oscilaciones caóticas"],
      if v.relaxation { 0 } else { 1 },
    ),
    Question::choice(
      "¿Cuál es el comportamiento del período T cuando μ → 0?",
      &["T → 0", "T → 2π (oscilador armónico)", "T → ∞", "T permanece constante"],
      1,
    ),
    Question::choice(
      "Para μ >> 1, el período aproximado es T ≈ (3 - 2ln2)μ. Esto indica:",
      &["Período independiente de μ", "Período crece linealmente con μ", "Período decrece con μ", "Período oscila"],
      1,
    ),
    Question::choice(
      "¿El teorema de Poincaré-Bendixson garantiza la existencia del ciclo límite?",
      &["Sí, porque es un sistema plano con región anular invariante", "No, solo funciona en 3D", "Solo para μ < 1", "Nunca se aplica"],
      0,
    ),
    Question::choice(
      format!("Dado μ = {mu}, clasifique el punto fijo del sistema linealizado:"),
      &["Foco inestable", "Foco estable", "Nodo inestable", "Silla"],
      // eigenvalues are complex only while μ < 2
      if mu >= 2.0 { 2 } else if mu > 0.0 { 0 } else { 1 },
    ),
    Question::choice(
      "El oscilador de Van der Pol fue originalmente diseñado para modelar:",
      &["Péndulos", "Circuitos con tubos de vacío", "Poblaciones biológicas", "Órbitas planetarias"],
      1,
    ),
  ];
  if v.relaxation {
    advanced.push(Question::numeric(
      format!("Con μ = {mu}, estime el período de relajación T ≈ (3 - 2ln2)μ"),
      v.period_estimate,
      v.period_estimate * 0.1,
      "",
    ));
  }

  QuestionPool::new(basic, intermediate, advanced)
}
