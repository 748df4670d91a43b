//! Registry of the dynamical systems the engine can build exercises for.
//!
//! `SystemId` is closed: every variant has a profile and a draft routine, and
//! the compiler checks that dispatch stays exhaustive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ActivityType;
use crate::error::LabError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemId {
  Newton,
  VanDerPol,
  Sir,
  Rlc,
  Lorenz,
  Hopf,
  #[serde(rename = "logistico")]
  Logistic,
  Verhulst,
  Orbital,
  #[serde(rename = "mariposa")]
  Rossler,
  #[serde(rename = "amortiguador")]
  Damper,
}

/// Topic names used elsewhere in the application, after normalization.
const ALIASES: &[(&str, SystemId)] = &[
  ("enfriamiento", SystemId::Newton),
  ("enfriamiento_de_newton", SystemId::Newton),
  ("ley_de_enfriamiento", SystemId::Newton),
  ("vanderpol", SystemId::VanDerPol),
  ("oscilador_van_der_pol", SystemId::VanDerPol),
  ("epidemia", SystemId::Sir),
  ("circuito_rlc", SystemId::Rlc),
  ("atractor_de_lorenz", SystemId::Lorenz),
  ("bifurcacion_de_hopf", SystemId::Hopf),
  ("logistica", SystemId::Logistic),
  ("logistic", SystemId::Logistic),
  ("mapa_logistico", SystemId::Verhulst),
  ("orbitas", SystemId::Orbital),
  ("kepler", SystemId::Orbital),
  ("rossler", SystemId::Rossler),
  ("atractor_de_rossler", SystemId::Rossler),
  ("amortiguadores", SystemId::Damper),
  ("oscilador_amortiguado", SystemId::Damper),
];

impl SystemId {
  pub const ALL: [SystemId; 11] = [
    SystemId::Newton,
    SystemId::VanDerPol,
    SystemId::Sir,
    SystemId::Rlc,
    SystemId::Lorenz,
    SystemId::Hopf,
    SystemId::Logistic,
    SystemId::Verhulst,
    SystemId::Orbital,
    SystemId::Rossler,
    SystemId::Damper,
  ];

  /// Canonical key, also the exercise id prefix.
  pub fn key(self) -> &'static str {
    match self {
      SystemId::Newton => "newton",
      SystemId::VanDerPol => "van_der_pol",
      SystemId::Sir => "sir",
      SystemId::Rlc => "rlc",
      SystemId::Lorenz => "lorenz",
      SystemId::Hopf => "hopf",
      SystemId::Logistic => "logistico",
      SystemId::Verhulst => "verhulst",
      SystemId::Orbital => "orbital",
      SystemId::Rossler => "mariposa",
      SystemId::Damper => "amortiguador",
    }
  }

  pub fn profile(self) -> &'static SystemProfile {
    match self {
      SystemId::Newton => &NEWTON,
      SystemId::VanDerPol => &VAN_DER_POL,
      SystemId::Sir => &SIR,
      SystemId::Rlc => &RLC,
      SystemId::Lorenz => &LORENZ,
      SystemId::Hopf => &HOPF,
      SystemId::Logistic => &LOGISTIC,
      SystemId::Verhulst => &VERHULST,
      SystemId::Orbital => &ORBITAL,
      SystemId::Rossler => &ROSSLER,
      SystemId::Damper => &DAMPER,
    }
  }

  pub fn available() -> String {
    Self::ALL.iter().map(|s| s.key()).collect::<Vec<_>>().join(", ")
  }
}

impl fmt::Display for SystemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.key())
  }
}

/// Lowercase, strip accents, and turn spaces/dashes into underscores.
fn normalize(raw: &str) -> String {
  raw
    .trim()
    .to_lowercase()
    .chars()
    .map(|c| match c {
      'á' => 'a',
      'é' => 'e',
      'í' => 'i',
      'ó' | 'ö' => 'o',
      'ú' => 'u',
      ' ' | '-' => '_',
      other => other,
    })
    .collect()
}

impl FromStr for SystemId {
  type Err = LabError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let key = normalize(s);
    SystemId::ALL
      .iter()
      .copied()
      .find(|id| id.key() == key)
      .or_else(|| ALIASES.iter().find(|(alias, _)| *alias == key).map(|(_, id)| *id))
      .ok_or_else(|| LabError::UnsupportedSystem {
        requested: s.to_string(),
        available: SystemId::available(),
      })
  }
}

/// Static teaching texts for one system.
#[derive(Debug)]
pub struct SystemProfile {
  pub title: &'static str,
  pub topic: &'static str,
  pub category: &'static str,
  pub description: &'static str,
  pub educational_objective: &'static str,
  pub objectives: &'static [&'static str],
  pub activity_type: ActivityType,
  pub activity_description: &'static str,
  pub expected_observation: &'static str,
  pub required_analysis: &'static [&'static str],
  pub tags: &'static [&'static str],
  /// Minutes for tier 1; each tier above adds ten.
  pub base_minutes: u32,
  pub tips: &'static [&'static str],
}

static NEWTON: SystemProfile = SystemProfile {
  title: "Ley de Enfriamiento de Newton",
  topic: "enfriamiento de Newton",
  category: "termodinámica",
  description: "Un cuerpo caliente intercambia calor con un ambiente a temperatura constante. \
    La tasa de cambio de su temperatura es proporcional a la diferencia con el ambiente.",
  educational_objective: "Comprender el enfriamiento exponencial y el papel de la constante de tiempo τ = 1/k.",
  objectives: &[
    "Comprender el proceso de enfriamiento exponencial",
    "Analizar la influencia de la constante k",
    "Predecir el tiempo de enfriamiento",
    "Calcular la constante de tiempo τ",
  ],
  activity_type: ActivityType::Simulacion,
  activity_description: "Configurar la temperatura inicial, la del ambiente y k, simular y medir tiempos característicos.",
  expected_observation: "La temperatura decae exponencialmente hacia la del ambiente sin alcanzarla nunca; \
    tras un tiempo τ queda cerca del 37% de la diferencia inicial.",
  required_analysis: &[
    "Graficar la curva de temperatura vs tiempo",
    "Identificar la constante de tiempo del sistema",
    "Comparar con la solución analítica",
  ],
  tags: &["ecuación diferencial", "primer orden", "exponencial"],
  base_minutes: 15,
  tips: &[
    "Recuerda que τ = 1/k es la constante de tiempo del enfriamiento",
    "Después de 5τ el sistema está prácticamente en equilibrio",
  ],
};

static VAN_DER_POL: SystemProfile = SystemProfile {
  title: "Oscilador de Van der Pol",
  topic: "oscilador de Van der Pol",
  category: "oscilaciones no lineales",
  description: "Oscilador con amortiguamiento no lineal μ(1 - x²)ẋ: bombea energía a amplitudes pequeñas \
    y la disipa a amplitudes grandes, generando oscilaciones autosostenidas.",
  educational_objective: "Reconocer un ciclo límite estable y cómo su forma depende del parámetro μ.",
  objectives: &[
    "Identificar el ciclo límite en el espacio de fases",
    "Analizar el efecto de μ en la forma de la oscilación",
    "Distinguir oscilaciones casi sinusoidales de oscilaciones de relajación",
  ],
  activity_type: ActivityType::AnalisisFase,
  activity_description: "Simular desde distintas condiciones iniciales y observar la convergencia al ciclo límite.",
  expected_observation: "Todas las trayectorias convergen al mismo ciclo límite de amplitud cercana a 2; \
    al crecer μ la oscilación se deforma en ciclos de relajación.",
  required_analysis: &[
    "Graficar el retrato de fases (x, v)",
    "Comparar trayectorias con distintas condiciones iniciales",
    "Describir la forma del ciclo límite",
  ],
  tags: &["ciclo límite", "no lineal", "segundo orden"],
  base_minutes: 20,
  tips: &[
    "Observa el retrato de fases: el ciclo límite atrae trayectorias desde dentro y desde fuera",
    "Compara la forma de la oscilación para μ pequeño y μ grande",
  ],
};

static SIR: SystemProfile = SystemProfile {
  title: "Modelo Epidemiológico SIR",
  topic: "modelo SIR",
  category: "epidemiología",
  description: "Una población cerrada se divide en susceptibles, infectados y recuperados. \
    La infección avanza a tasa β·S·I y la recuperación a tasa γ·I.",
  educational_objective: "Interpretar el número reproductivo básico R₀ = β/γ y el umbral epidémico.",
  objectives: &[
    "Calcular el número reproductivo básico R₀",
    "Determinar si habrá brote epidémico",
    "Estimar el umbral de inmunidad de rebaño",
  ],
  activity_type: ActivityType::Interpretacion,
  activity_description: "Simular la epidemia, ubicar el pico de infectados y relacionarlo con R₀.",
  expected_observation: "Si R₀ > 1 los infectados crecen hasta un pico y luego decaen; \
    la epidemia termina antes de que todos los susceptibles se contagien.",
  required_analysis: &[
    "Graficar S(t), I(t) y R(t)",
    "Identificar el pico de infectados",
    "Relacionar el tamaño final de la epidemia con R₀",
  ],
  tags: &["compartimental", "R0", "no lineal"],
  base_minutes: 20,
  tips: &[
    "R₀ = β/γ decide si hay brote: compáralo siempre con 1",
    "El pico de infectados ocurre cuando S cae por debajo de γ/β",
  ],
};

static RLC: SystemProfile = SystemProfile {
  title: "Circuito RLC en Serie",
  topic: "circuito RLC",
  category: "circuitos eléctricos",
  description: "Un resistor, un inductor y un capacitor en serie forman un oscilador eléctrico amortiguado \
    cuya carga obedece L·q̈ + R·q̇ + q/C = 0.",
  educational_objective: "Calcular la frecuencia de resonancia y clasificar el amortiguamiento del circuito.",
  objectives: &[
    "Calcular la frecuencia natural ω₀ = 1/√(LC)",
    "Estimar el factor de calidad Q",
    "Clasificar el régimen de amortiguamiento",
  ],
  activity_type: ActivityType::Clasificacion,
  activity_description: "Simular la descarga del capacitor y clasificar la respuesta según ζ.",
  expected_observation: "Con ζ < 1 la carga oscila con amplitud decreciente; con ζ ≥ 1 decae sin oscilar, \
    más lentamente cuanto mayor es la resistencia.",
  required_analysis: &[
    "Graficar la carga y la corriente en el tiempo",
    "Medir la frecuencia de oscilación observada",
    "Comparar con la frecuencia natural teórica",
  ],
  tags: &["oscilador", "resonancia", "segundo orden"],
  base_minutes: 20,
  tips: &[
    "Recuerda que ω₀ = 1/√(LC) y ζ = R/(2√(L/C))",
    "Un factor de calidad alto implica poca disipación por ciclo",
  ],
};

static LORENZ: SystemProfile = SystemProfile {
  title: "Sistema de Lorenz",
  topic: "sistema de Lorenz",
  category: "caos",
  description: "Modelo simplificado de convección atmosférica con tres variables acopladas. \
    Para ciertos parámetros presenta un atractor extraño con forma de mariposa.",
  educational_objective: "Reconocer el caos determinista y la sensibilidad a condiciones iniciales.",
  objectives: &[
    "Identificar el atractor extraño",
    "Relacionar ρ con la aparición del caos",
    "Calcular los equilibrios no triviales",
  ],
  activity_type: ActivityType::AnalisisFase,
  activity_description: "Simular dos trayectorias cercanas y comparar su evolución en el espacio de fases.",
  expected_observation: "Para ρ mayor que el valor crítico las trayectorias alternan de forma irregular \
    entre dos lóbulos y dos condiciones iniciales cercanas divergen rápidamente.",
  required_analysis: &[
    "Graficar el atractor en 3D",
    "Comparar dos trayectorias con condiciones iniciales cercanas",
    "Ubicar los equilibrios C+ y C-",
  ],
  tags: &["caos", "atractor extraño", "tres dimensiones"],
  base_minutes: 25,
  tips: &[
    "Compara ρ con el valor crítico ρ_H para anticipar el caos",
    "Prueba condiciones iniciales que difieran en 0.001 y observa la divergencia",
  ],
};

static HOPF: SystemProfile = SystemProfile {
  title: "Bifurcación de Hopf",
  topic: "bifurcación de Hopf",
  category: "bifurcaciones",
  description: "Forma normal de la bifurcación de Hopf supercrítica: al cruzar μ = 0 el foco estable \
    pierde estabilidad y nace un ciclo límite de radio √μ.",
  educational_objective: "Comprender cómo nace un ciclo límite al variar un parámetro.",
  objectives: &[
    "Identificar el valor de bifurcación",
    "Relacionar el radio del ciclo límite con μ",
    "Clasificar la estabilidad del origen",
  ],
  activity_type: ActivityType::AnalisisFase,
  activity_description: "Simular con distintos valores de μ y observar el cambio cualitativo del retrato de fases.",
  expected_observation: "Para μ < 0 las trayectorias espiralan hacia el origen; para μ > 0 convergen a un \
    ciclo límite cuyo radio crece como √μ.",
  required_analysis: &[
    "Graficar el retrato de fases",
    "Medir el radio del ciclo límite",
    "Comparar con la predicción √μ",
  ],
  tags: &["bifurcación", "ciclo límite", "forma normal"],
  base_minutes: 20,
  tips: &[
    "Recuerda que el radio del ciclo límite es √μ solo cuando μ > 0",
    "Mide el radio en el retrato de fases una vez que la trayectoria se estabiliza",
  ],
};

static LOGISTIC: SystemProfile = SystemProfile {
  title: "Crecimiento Logístico",
  topic: "modelo logístico",
  category: "dinámica de poblaciones",
  description: "Una población crece a tasa r mientras los recursos la limitan a una capacidad de carga K, \
    siguiendo dN/dt = rN(1 - N/K).",
  educational_objective: "Interpretar la capacidad de carga y el punto de inflexión de la curva sigmoide.",
  objectives: &[
    "Identificar la capacidad de carga K",
    "Calcular el tiempo del punto de inflexión",
    "Comparar con el crecimiento exponencial",
  ],
  activity_type: ActivityType::Graficacion,
  activity_description: "Simular el crecimiento y ubicar el punto de inflexión en la curva N(t).",
  expected_observation: "La población crece casi exponencialmente al principio, se acelera hasta K/2 \
    y luego se frena acercándose asintóticamente a K.",
  required_analysis: &[
    "Graficar N(t)",
    "Ubicar el punto de inflexión",
    "Comparar con el modelo exponencial",
  ],
  tags: &["sigmoide", "capacidad de carga", "primer orden"],
  base_minutes: 15,
  tips: &[
    "La tasa de crecimiento es máxima cuando N = K/2",
    "El tiempo de duplicación inicial es aproximadamente ln2/r",
  ],
};

static VERHULST: SystemProfile = SystemProfile {
  title: "Mapa Logístico de Verhulst",
  topic: "mapa logístico",
  category: "sistemas discretos",
  description: "Iteración discreta x_{n+1} = r·x_n(1 - x_n). Al aumentar r el punto fijo pierde estabilidad \
    y aparecen duplicaciones de período hasta el caos.",
  educational_objective: "Observar la ruta al caos por duplicación de período en un sistema discreto.",
  objectives: &[
    "Observar bifurcaciones en sistemas discretos",
    "Comprender el camino al caos",
    "Analizar el diagrama de bifurcación",
  ],
  activity_type: ActivityType::Clasificacion,
  activity_description: "Iterar el mapa para el r dado y clasificar el comportamiento a largo plazo.",
  expected_observation: "Para r < 3 la serie converge al punto fijo 1 - 1/r; entre 3 y 3.57 oscila con \
    período 2, 4, 8…; más allá aparece el caos.",
  required_analysis: &[
    "Graficar la serie temporal",
    "Identificar regiones periódicas y caóticas",
  ],
  tags: &["mapa", "duplicación de período", "caos"],
  base_minutes: 15,
  tips: &[
    "Verifica la estabilidad del punto fijo con |r(1 - 2x*)| < 1",
    "Ubica r en el diagrama de bifurcación antes de iterar",
  ],
};

static ORBITAL: SystemProfile = SystemProfile {
  title: "Órbitas Espaciales (Problema de Kepler)",
  topic: "órbitas keplerianas",
  category: "mecánica celeste",
  description: "Un cuerpo se mueve bajo la atracción gravitatoria de una masa central con GM = 1. \
    La energía y el momento angular determinan la forma de la órbita.",
  educational_objective: "Relacionar energía y momento angular con la forma y el período de la órbita.",
  objectives: &[
    "Comprender las leyes de Kepler",
    "Analizar órbitas circulares y elípticas",
    "Verificar conservación de energía y momento angular",
  ],
  activity_type: ActivityType::Simulacion,
  activity_description: "Simular la trayectoria y verificar las cantidades conservadas.",
  expected_observation: "Con energía negativa la órbita es cerrada (circular o elíptica) y se repite con \
    período 2πa^(3/2); con energía positiva el cuerpo escapa.",
  required_analysis: &[
    "Graficar la trayectoria orbital",
    "Verificar las leyes de Kepler",
  ],
  tags: &["gravitación", "cantidades conservadas", "Kepler"],
  base_minutes: 20,
  tips: &[
    "El signo de la energía E = v²/2 - GM/r decide si la órbita es cerrada",
    "Usa la tercera ley de Kepler: T² ∝ a³",
  ],
};

static ROSSLER: SystemProfile = SystemProfile {
  title: "Atractor de Rössler",
  topic: "atractor de Rössler",
  category: "caos",
  description: "Sistema tridimensional con una sola no linealidad z(x - c). Sus trayectorias giran en el \
    plano xy y se pliegan en z formando un atractor extraño.",
  educational_objective: "Explorar un atractor extraño mínimo y su dependencia del parámetro c.",
  objectives: &[
    "Identificar el atractor de Rössler",
    "Calcular los puntos de equilibrio",
    "Analizar el efecto del parámetro c",
  ],
  activity_type: ActivityType::AnalisisFase,
  activity_description: "Simular el sistema y observar la espiral en el plano xy con sus saltos en z.",
  expected_observation: "La trayectoria gira en espiral alrededor del equilibrio interior y cada cierto tiempo \
    se eleva en z y se reinyecta; para c grande el movimiento es caótico.",
  required_analysis: &[
    "Graficar el atractor en 3D",
    "Graficar la proyección en el plano xy",
    "Describir el efecto de aumentar c",
  ],
  tags: &["caos", "atractor extraño", "tres dimensiones"],
  base_minutes: 25,
  tips: &[
    "Observa la proyección xy para ver la espiral del atractor",
    "Varía c para recorrer la cascada de duplicación de período",
  ],
};

static DAMPER: SystemProfile = SystemProfile {
  title: "Oscilador Amortiguado",
  topic: "oscilador amortiguado",
  category: "vibraciones mecánicas",
  description: "Una masa unida a un resorte y a un amortiguador viscoso obedece m·ẍ + c·ẋ + k·x = 0. \
    El factor ζ decide si el sistema oscila o no.",
  educational_objective: "Clasificar el amortiguamiento a partir de ζ = c/(2√(km)).",
  objectives: &[
    "Calcular el amortiguamiento crítico",
    "Clasificar el tipo de amortiguamiento",
    "Relacionar ζ con la respuesta temporal",
  ],
  activity_type: ActivityType::Comparacion,
  activity_description: "Simular la respuesta libre y compararla con los tres regímenes de amortiguamiento.",
  expected_observation: "Con ζ < 1 la masa oscila con amplitud decreciente; con ζ = 1 vuelve al reposo lo más \
    rápido posible sin oscilar; con ζ > 1 regresa lentamente.",
  required_analysis: &[
    "Analizar la respuesta del sistema",
    "Graficar posición vs tiempo",
    "Comparar con el caso críticamente amortiguado",
  ],
  tags: &["oscilador", "amortiguamiento", "segundo orden"],
  base_minutes: 15,
  tips: &[
    "Calcula primero c_crit = 2√(km) y compáralo con c",
    "Cuenta los cruces por cero para confirmar si el sistema oscila",
  ],
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canonical_keys_round_trip() {
    for id in SystemId::ALL {
      assert_eq!(id.key().parse::<SystemId>().expect("key"), id);
    }
  }

  #[test]
  fn aliases_are_normalized() {
    assert_eq!("Enfriamiento de Newton".parse::<SystemId>().expect("alias"), SystemId::Newton);
    assert_eq!("Órbitas".parse::<SystemId>().expect("alias"), SystemId::Orbital);
    assert_eq!("logística".parse::<SystemId>().expect("alias"), SystemId::Logistic);
    assert_eq!("amortiguadores".parse::<SystemId>().expect("alias"), SystemId::Damper);
    assert_eq!("Rössler".parse::<SystemId>().expect("alias"), SystemId::Rossler);
  }

  #[test]
  fn unknown_system_lists_available() {
    match "duffing".parse::<SystemId>() {
      Err(LabError::UnsupportedSystem { requested, available }) => {
        assert_eq!(requested, "duffing");
        assert!(available.contains("newton") && available.contains("amortiguador"));
      }
      other => panic!("unexpected: {other:?}"),
    }
  }

  #[test]
  fn profiles_carry_long_enough_texts() {
    for id in SystemId::ALL {
      let p = id.profile();
      assert!(p.description.chars().count() >= 50, "{id}: description too short");
      assert!(p.expected_observation.chars().count() >= 50, "{id}: observation too short");
      assert!(!p.tips.is_empty());
    }
  }
}
