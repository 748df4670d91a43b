use crate::domain::Question;
use crate::formulas::Cooling;

use super::QuestionPool;

pub fn newton(c: &Cooling) -> QuestionPool {
  let basic = vec![
    Question::choice(
      "¿La temperatura alcanza exactamente la temperatura ambiente?",
      &["Sí, eventualmente", "No, se aproxima asintóticamente", "Depende de k"],
      1,
    ),
    Question::choice(
      format!("Si k fuera el doble ({:.3}), ¿el enfriamiento sería?", 2.0 * c.k),
      &["Más rápido", "Más lento", "Igual velocidad"],
      0,
    ),
    Question::choice(
      "¿Qué representa la constante k en la ecuación de Newton?",
      &["Temperatura final", "Velocidad de enfriamiento", "Masa del objeto", "Calor específico"],
      1,
    ),
    Question::choice(
      "¿Qué fracción de la diferencia inicial queda después de un tiempo τ=1/k?",
      &["~37% (1/e)", "~50%", "~63%", "~90%"],
      0,
    ),
    Question::choice(
      "¿El enfriamiento de Newton es un proceso lineal o exponencial?",
      &["Lineal", "Exponencial decreciente", "Cuadrático", "Logarítmico"],
      1,
    ),
  ];

  let intermediate = vec![
    Question::numeric(
      format!("¿Cuánto tiempo aproximado tarda en llegar a {:.1}°C?", c.target_temp),
      c.time_to_target,
      2.0,
      "minutos",
    ),
    Question::numeric("¿Cuál es la constante de tiempo τ = 1/k del sistema?", c.tau, c.tau * 0.1, "minutos"),
    Question::choice(
      "¿Qué tipo de ecuación diferencial describe el enfriamiento de Newton?",
      &["Lineal de primer orden", "No lineal de primer orden", "Lineal de segundo orden", "No lineal de segundo orden"],
      0,
    ),
    Question::numeric(
      "¿Cuánto tiempo se necesita para reducir la diferencia de temperatura a la mitad?",
      c.half_gap_time,
      c.half_gap_time * 0.15,
      "minutos",
    ),
    Question::choice(
      "Si duplicamos la diferencia inicial de temperatura, el tiempo para alcanzar T_amb:",
      &["Se duplica", "No cambia (asintótico)", "Se reduce a la mitad", "Aumenta logarítmicamente"],
      1,
    ),
    Question::choice(
      "¿Cuál es la solución analítica de la ecuación dT/dt = -k(T - Tₐₘ)?",
      &["T(t) = T₀·e^(-kt)", "T(t) = Tₐₘ + (T₀-Tₐₘ)·e^(-kt)", "T(t) = T₀ - kt", "T(t) = Tₐₘ·(1 - e^(-kt))"],
      1,
    ),
  ];

  let advanced = vec![
    Question::numeric(
      format!("¿Cuánto tiempo aproximado tarda en llegar a {:.1}°C?", c.target_temp),
      c.time_to_target,
      1.5,
      "minutos",
    ),
    Question::numeric("¿Cuál será la temperatura después de 2 constantes de tiempo (t = 2τ)?", c.temp_at_two_tau, 2.0, "°C"),
    Question::choice(
      format!("Si la temperatura inicial fuera {}°C, ¿cómo cambiaría la tasa inicial de enfriamiento?", c.t0 + 20.0),
      &["Aumentaría en magnitud", "Disminuiría en magnitud", "Permanecería igual", "Se invertiría"],
      if c.t0 > c.t_env { 0 } else { 1 },
    ),
    Question::choice(
      "En el espacio de fases (T, dT/dt), la trayectoria del sistema es:",
      &["Una elipse", "Una recta con pendiente -k", "Una parábola", "Un ciclo límite"],
      1,
    ),
    Question::choice(
      format!("¿Qué fracción de la diferencia inicial ya se disipó después de τ = {:.2} min?", c.tau),
      &["1 - e⁻¹ ≈ 0.63", "e⁻¹ ≈ 0.37", "0.50", "0.25"],
      0,
    ),
    Question::choice(
      "¿Cómo afecta la convección forzada (mayor k) comparada con convección natural?",
      &["Enfriamiento más lento", "Enfriamiento más rápido", "No hay diferencia", "Depende de T₀"],
      1,
    ),
    Question::choice(
      "El número de Biot (Bi) determina si el enfriamiento de Newton es aplicable. ¿Cuándo es válido?",
      &["Bi >> 1", "Bi << 1", "Bi = 1", "Siempre es válido"],
      1,
    ),
  ];

  QuestionPool::new(basic, intermediate, advanced)
}
