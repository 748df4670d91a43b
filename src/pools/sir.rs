use crate::domain::Question;
use crate::formulas::Epidemic;

use super::QuestionPool;

pub fn sir(e: &Epidemic) -> QuestionPool {
  let outbreak = e.outbreak();
  let basic = vec![
    Question::choice(
      "¿Qué representa S(t) en el modelo SIR?",
      &["Personas sanas", "Personas susceptibles a infectarse", "Personas sintomáticas", "Personas seguras"],
      1,
    ),
    Question::choice(
      "¿Qué población nunca disminuye en el modelo SIR?",
      &["Susceptibles (S)", "Infectados (I)", "Recuperados (R)", "Ninguna"],
      2,
    ),
    Question::numeric(format!("Con β = {} y γ = {}, ¿cuál es R₀ = β/γ?", e.beta, e.gamma), e.r0, 0.3, ""),
    Question::choice(
      "¿Qué significa R₀ > 1?",
      &["No habrá epidemia", "Habrá un brote epidémico", "La enfermedad desaparecerá", "Todos se recuperarán"],
      1,
    ),
    Question::choice(
      "¿El modelo SIR considera nacimientos y muertes?",
      &["Sí", "No, la población es constante", "Solo nacimientos", "Solo muertes"],
      1,
    ),
  ];

  let intermediate = vec![
    Question::numeric("¿Cuál es el valor de R₀ (número reproductivo básico)?", e.r0, 0.2, ""),
    Question::choice(
      format!("Con R₀ = {:.2}, ¿habrá epidemia?", e.r0),
      &["Sí, porque R₀ > 1", "No, porque R₀ < 1", "Solo si I₀ es grande"],
      if outbreak { 0 } else { 1 },
    ),
    Question::choice(
      "¿Cuándo alcanza I(t) su máximo?",
      &["Cuando S = γ/β", "Cuando S = 0", "Cuando R = N", "Al inicio"],
      0,
    ),
    Question::choice(
      "¿Por qué la curva de susceptibles nunca llega a cero?",
      &["Error numérico", "La epidemia termina antes de infectar a todos", "El modelo está mal", "Siempre nacen nuevos susceptibles"],
      1,
    ),
    Question::numeric(
      "¿Qué fracción de la población debe vacunarse para inmunidad de rebaño?",
      e.herd_immunity,
      0.1,
      "",
    ),
    Question::choice(
      "¿Cómo se puede reducir R₀ en la práctica?",
      &["Aumentar β", "Reducir β (distanciamiento) o aumentar γ (tratamiento)", "Aumentar S₀", "No se puede modificar"],
      1,
    ),
  ];

  let mut advanced = vec![
    Question::numeric("¿Cuál es el valor de R₀?", e.r0, 0.15, ""),
    Question::numeric(
      "¿Cuál es el umbral de inmunidad de rebaño p_c = 1 - 1/R₀?",
      e.herd_immunity,
      0.08,
      "",
    ),
    Question::choice(
      "La ecuación dI/dt = βSI - γI implica que I crece cuando:",
      &["S > γ/β", "S < γ/β", "I > S", "R < S"],
      0,
    ),
    Question::choice(
      "¿El modelo SIR puede exhibir oscilaciones periódicas (endémicas)?",
      &["Sí, siempre", "No, converge a un equilibrio", "Solo con dinámica vital", "Solo en 3D"],
      1,
    ),
    Question::choice(
      "El tamaño final de la epidemia R(∞) satisface una ecuación trascendental. Para R₀ = 2:",
      &["~20% se infectará", "~80% se infectará eventualmente", "100% se infectará", "50% se infectará"],
      1,
    ),
    Question::choice(
      "¿El sistema SIR tiene puntos de equilibrio endémicos (I > 0)?",
      &["Sí", "No, solo existe el equilibrio libre de enfermedad", "Solo si γ = 0", "Solo si β = 0"],
      1,
    ),
    Question::choice(
      "Si duplicamos β manteniendo γ constante, el pico de infectados:",
      &["Se duplica", "Más que se duplica", "Menos que se duplica", "No cambia"],
      1,
    ),
  ];

  if outbreak {
    advanced.push(Question::numeric(
      "¿Qué fracción S/N de susceptibles queda cuando I(t) alcanza su máximo?",
      e.peak_susceptible_fraction,
      0.05,
      "",
    ));
  }

  QuestionPool::new(basic, intermediate, advanced)
}
