use crate::domain::Question;
use crate::formulas::Lorenz;

use super::QuestionPool;

pub fn lorenz(l: &Lorenz) -> QuestionPool {
  let rho = l.rho;
  let above = format!("Sí (ρ > {:.2})", l.rho_hopf);
  let below = format!("No (ρ < {:.2})", l.rho_hopf);
  let basic = vec![
    Question::choice(
      "¿El sistema de Lorenz es determinista o estocástico?",
      &["Determinista (ecuaciones fijas)", "Estocástico (aleatorio)", "Híbrido", "Depende de los parámetros"],
      0,
    ),
    Question::numeric("¿Cuántas dimensiones tiene el sistema de Lorenz?", 3.0, 0.0, ""),
    Question::choice(
      "¿Qué forma tiene el atractor de Lorenz?",
      &["Esférica", "Mariposa con dos lóbulos", "Toroidal", "Lineal"],
      1,
    ),
    Question::choice(
      "¿El sistema de Lorenz fue desarrollado para modelar?",
      &["Circuitos eléctricos", "Convección atmosférica", "Poblaciones", "Reacciones químicas"],
      1,
    ),
  ];

  let intermediate = vec![
    Question::choice(
      format!("Para ρ = {rho}, ¿el sistema exhibe comportamiento caótico?"),
      &[above.as_str(), below.as_str(), "Solo si σ > 10"],
      if l.chaotic { 0 } else { 1 },
    ),
    Question::choice(
      "¿Qué significa \"sensibilidad a condiciones iniciales\"?",
      &["Pequeños cambios en CI no afectan", "Pequeños cambios en CI causan grandes diferencias", "El sistema es inestable", "El sistema diverge"],
      1,
    ),
    Question::numeric(
      format!("Con σ = {} y β = {:.2}, ¿a partir de qué valor aproximado de ρ aparece el caos?", l.sigma, l.beta),
      l.rho_hopf,
      1.0,
      "",
    ),
    Question::numeric("¿Cuántos puntos de equilibrio no triviales tiene el sistema para ρ > 1?", 2.0, 0.0, ""),
    Question::choice(
      "¿El atractor de Lorenz es un atractor extraño?",
      &["Sí, tiene dimensión fractal", "No, es un ciclo límite", "No, es un punto fijo", "Depende de σ"],
      0,
    ),
  ];

  let advanced = vec![
    Question::choice(
      format!("Con ρ = {rho}, clasifique el comportamiento:"),
      &["Punto fijo estable", "Ciclo límite", "Atractor caótico", "Trayectorias divergentes"],
      if l.chaotic { 2 } else { 0 },
    ),
    Question::choice(
      "El exponente de Lyapunov positivo indica:",
      &["Estabilidad", "Divergencia exponencial de trayectorias cercanas", "Convergencia", "Periodicidad"],
      1,
    ),
    Question::numeric(
      format!("¿Cuál es la coordenada z de los equilibrios C± para ρ = {rho}?"),
      l.equilibria[0][2],
      0.5,
      "",
    ),
    Question::choice(
      "Para los parámetros dados, ¿los puntos fijos C+ y C- son estables?",
      &["Sí (ρ < ρ_H)", "No (ρ > ρ_H)", "Solo C+ es estable", "Depende de la condición inicial"],
      if l.chaotic { 1 } else { 0 },
    ),
    Question::choice(
      "El teorema de Takens permite reconstruir el atractor desde:",
      &["Las tres variables", "Una sola serie temporal con retardos", "Solo x(t)", "La derivada"],
      1,
    ),
    Question::choice(
      "¿Por qué el sistema de Lorenz ilustra el \"efecto mariposa\"?",
      &["Por la forma del atractor", "Por la sensibilidad extrema a CI", "Por el aleteo de trayectorias", "Todas las anteriores"],
      1,
    ),
  ];

  QuestionPool::new(basic, intermediate, advanced)
}
