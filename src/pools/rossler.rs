use crate::domain::Question;
use crate::formulas::Rossler;

use super::QuestionPool;

pub fn rossler(r: &Rossler) -> QuestionPool {
  let basic = vec![
    Question::choice("¿El sistema de Rössler es caótico?", &["Sí", "No", "Depende de los parámetros"], 2),
    Question::numeric("¿Cuántas dimensiones tiene el sistema?", 3.0, 0.0, ""),
    Question::choice("El atractor de Rössler es:", &["Un punto fijo", "Un ciclo límite", "Un atractor extraño"], 2),
    Question::choice(
      "¿Cuántos términos no lineales tiene el sistema de Rössler?",
      &["Ninguno", "Uno (z·x)", "Tres", "Uno por ecuación"],
      1,
    ),
  ];

  let intermediate = vec![
    Question::numeric("¿Cuántos puntos de equilibrio tiene el sistema?", 2.0, 0.0, ""),
    Question::numeric(
      format!("Con a = {}, b = {} y c = {}, ¿cuál es la coordenada x del equilibrio interior?", r.a, r.b, r.c),
      r.equilibria_x[0],
      0.02,
      "",
    ),
    Question::choice(
      "En la proyección xy, la trayectoria:",
      &["Gira en espiral alrededor del equilibrio interior", "Es una recta", "Converge al origen", "Diverge"],
      0,
    ),
    Question::choice(
      "¿Qué parámetro controla principalmente la transición al caos en este ejercicio?",
      &["a", "b", "c", "Ninguno"],
      2,
    ),
    Question::choice(
      "El sistema de Rössler fue propuesto como:",
      &["Un modelo de convección", "Un ejemplo mínimo de atractor caótico", "Un circuito eléctrico", "Un modelo de poblaciones"],
      1,
    ),
  ];

  let advanced = vec![
    Question::numeric(
      format!("¿Cuál es la coordenada x del equilibrio exterior para c = {}?", r.c),
      r.equilibria_x[1],
      0.1,
      "",
    ),
    Question::numeric(
      "¿Cuánto vale la suma de las coordenadas x de ambos equilibrios?",
      r.equilibria_x[0] + r.equilibria_x[1],
      0.1,
      "",
    ),
    Question::choice(
      "Al aumentar c desde 2 hasta 6, el atractor atraviesa:",
      &["Una cascada de duplicación de período", "Una bifurcación silla-nodo única", "Ningún cambio cualitativo", "Un colapso al origen"],
      0,
    ),
    Question::choice(
      "Un exponente de Lyapunov positivo en el atractor de Rössler indica:",
      &["Periodicidad", "Sensibilidad a condiciones iniciales", "Estabilidad asintótica", "Conservación de volumen"],
      1,
    ),
    Question::choice(
      "El mecanismo geométrico del atractor de Rössler es:",
      &["Estiramiento y plegado de trayectorias", "Rotación pura", "Contracción uniforme", "Traslación"],
      0,
    ),
    Question::choice(
      "¿Se puede usar una sección de Poincaré para estudiar este atractor?",
      &["Sí, reduce el flujo a un mapa discreto", "No, solo sirve en 2D", "Solo si el sistema es lineal", "Solo para puntos fijos"],
      0,
    ),
  ];

  QuestionPool::new(basic, intermediate, advanced)
}
