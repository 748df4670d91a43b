use crate::domain::Question;
use crate::formulas::{Orbit, OrbitClass};

use super::QuestionPool;

const ORBIT_SHAPES: [&str; 3] = ["Circular", "Elíptica", "Abierta (el cuerpo escapa)"];

pub fn orbital(o: &Orbit) -> QuestionPool {
  let bound = o.class != OrbitClass::Open;

  let basic = vec![
    Question::choice("¿La energía total del sistema se conserva?", &["Sí", "No"], 0),
    Question::choice("¿El momento angular se conserva?", &["Sí (fuerza central)", "No"], 0),
    Question::choice("¿Qué relación cumple T con a? (3ª Ley Kepler)", &["T ∝ a", "T² ∝ a³", "T³ ∝ a²"], 1),
    Question::choice("¿Qué forma tiene la órbita con las condiciones iniciales dadas?", &ORBIT_SHAPES, o.class.index()),
  ];

  let closure = Question::choice(
    "¿La órbita es cerrada (el cuerpo vuelve a pasar por el punto inicial)?",
    &["Sí, la energía es negativa", "No, la energía es positiva o nula"],
    if bound { 0 } else { 1 },
  );

  let mut intermediate = vec![
    Question::numeric("¿Cuál es la energía específica E = v²/2 - GM/r?", o.energy, 0.05, ""),
    Question::numeric("¿Cuál es el momento angular específico L = x·vy - y·vx?", o.angular_momentum, 0.05, ""),
    Question::choice("Clasifique la órbita:", &ORBIT_SHAPES, o.class.index()),
    Question::choice(
      "Según la segunda ley de Kepler, el cuerpo se mueve más rápido:",
      &["En el punto más cercano al centro (periapsis)", "En el punto más lejano (apoapsis)", "Con velocidad constante", "Depende de la masa"],
      0,
    ),
  ];
  match o.period {
    Some(period) => intermediate.push(Question::numeric(
      "¿Cuál es el período orbital T = 2π·a^(3/2)?",
      period,
      (period * 0.1).max(0.1),
      "unidades de tiempo",
    )),
    None => intermediate.push(closure.clone()),
  }

  let mut advanced = vec![
    Question::numeric("¿Cuál es la excentricidad e = √(1 + 2EL²)?", o.eccentricity, 0.05, ""),
    Question::numeric("¿Cuál es la energía específica E de la órbita?", o.energy, 0.03, ""),
    closure,
    Question::choice(
      "¿Qué velocidad tendría una órbita circular en el radio inicial?",
      &["v = √(GM/r)", "v = √(2GM/r)", "v = GM/r", "v = r·√GM"],
      0,
    ),
    Question::choice(
      "Si se duplica la velocidad inicial de una órbita circular, el cuerpo:",
      &["Escapa (E > 0)", "Sigue en órbita circular", "Cae al centro", "Describe una elipse más pequeña"],
      0,
    ),
  ];
  if let Some(a) = o.semi_major_axis {
    advanced.push(Question::numeric("¿Cuál es el semieje mayor a = -1/(2E)?", a, (a * 0.1).max(0.05), ""));
  } else {
    advanced.push(Question::choice(
      "Para una órbita abierta, el semieje mayor a = -1/(2E):",
      &["No está definido como órbita cerrada (E > 0)", "Es igual al radio inicial", "Es infinito siempre", "Vale 1"],
      0,
    ));
  }

  QuestionPool::new(basic, intermediate, advanced)
}
