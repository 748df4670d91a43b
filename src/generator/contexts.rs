//! Narrative scenarios per system. Flavor text only: numbers are filled in
//! from the sampled parameters and never drive any derivation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::systems::SystemId;

#[derive(Debug)]
pub struct Scenario {
  pub name: &'static str,
  /// Lowest tier at which the scenario may appear.
  pub min_tier: u8,
  /// `{param}` placeholders are replaced with sampled values.
  pub situation: &'static str,
}

const fn sc(name: &'static str, min_tier: u8, situation: &'static str) -> Scenario {
  Scenario { name, min_tier, situation }
}

static NEWTON: [Scenario; 6] = [
  sc("taza de café", 1, "Una taza de café recién servida a {T0} °C se deja sobre la mesa de una cocina a {T_env} °C."),
  sc("plato de sopa", 1, "Un plato de sopa sale de la olla a {T0} °C y se sirve en un comedor a {T_env} °C."),
  sc("té recién servido", 1, "Una tetera vierte té a {T0} °C en una terraza donde el aire está a {T_env} °C."),
  sc("pan horneado", 2, "Una hogaza sale del horno con su interior a {T0} °C y se deja enfriar en una panadería a {T_env} °C."),
  sc("pieza de metal fundido", 3, "Una pieza metálica recién colada a {T0} °C se enfría al aire en un taller a {T_env} °C."),
  sc("lingote de aluminio", 3, "Un lingote de aluminio a {T0} °C se retira de la prensa en una nave industrial a {T_env} °C."),
];

static VAN_DER_POL: [Scenario; 3] = [
  sc("circuito con válvula", 1, "Un oscilador electrónico con un tubo de vacío mantiene una oscilación sin fuente periódica externa (μ = {mu})."),
  sc("latido cardíaco", 2, "Un modelo simplificado del marcapasos natural del corazón produce pulsos periódicos autosostenidos (μ = {mu})."),
  sc("oscilador de relajación", 3, "Un circuito de relajación alterna entre carga lenta y descarga brusca, controlado por μ = {mu}."),
];

static SIR: [Scenario; 4] = [
  sc("gripe escolar", 1, "Un brote de gripe aparece en una escuela con {S0} estudiantes susceptibles y {I0} contagiados."),
  sc("resfriado en oficina", 1, "Un resfriado circula en un edificio de oficinas: {S0} susceptibles, {I0} infectados al inicio."),
  sc("brote en ciudad pequeña", 2, "Las autoridades sanitarias de un pueblo detectan {I0} casos entre {S0} habitantes susceptibles."),
  sc("campaña de vacunación", 3, "Antes de planificar una campaña, un equipo epidemiológico registra {S0} susceptibles, {I0} infectados y {R_ini} recuperados."),
];

static RLC: [Scenario; 3] = [
  sc("radio de sintonía", 1, "El circuito de sintonía de una radio se carga a {V0} V y se deja descargar libremente."),
  sc("filtro de audio", 2, "Un filtro pasabanda de un amplificador se excita con un pulso de {V0} V."),
  sc("flash fotográfico", 3, "El capacitor del flash de una cámara, cargado a {V0} V, se descarga a través de una bobina y una resistencia."),
];

static LORENZ: [Scenario; 3] = [
  sc("convección atmosférica", 1, "Una capa de aire calentada desde abajo forma rollos de convección descritos por el modelo de Lorenz."),
  sc("rueda hidráulica caótica", 2, "Una rueda con cubetas que gotean gira de forma irregular, cambiando de sentido sin patrón aparente."),
  sc("predicción meteorológica", 3, "Un equipo de meteorología compara dos pronósticos con condiciones iniciales casi idénticas."),
];

static HOPF: [Scenario; 3] = [
  sc("reacción química oscilante", 1, "En un reactor, una reacción pasa de concentraciones estables a oscilar al variar un parámetro de control μ = {mu}."),
  sc("aleteo de un ala", 2, "Un perfil aerodinámico comienza a vibrar cuando la velocidad del viento supera un umbral (μ = {mu})."),
  sc("neurona de disparo", 3, "Un modelo de neurona pasa del reposo al disparo periódico al cruzar la corriente crítica (μ = {mu})."),
];

static LOGISTIC: [Scenario; 4] = [
  sc("colonia de bacterias", 1, "Una colonia de {N0} bacterias se siembra en una placa que admite como máximo {K} individuos."),
  sc("peces en un lago", 1, "Se introducen {N0} peces en un lago con capacidad para {K} ejemplares."),
  sc("conejos en una isla", 2, "Una población de {N0} conejos llega a una isla cuyos recursos sostienen {K} animales."),
  sc("adopción de una tecnología", 3, "Una aplicación tiene {N0} usuarios iniciales en un mercado que satura en {K} usuarios."),
];

static VERHULST: [Scenario; 3] = [
  sc("insectos por generación", 1, "Una población de insectos se censa una vez por temporada; su fracción de la capacidad máxima sigue el mapa logístico con r = {r}."),
  sc("cosecha anual", 2, "La biomasa de un cultivo silvestre se mide cada año y evoluciona según r = {r}."),
  sc("dinámica de precios", 3, "Un modelo de juguete de precios discretos reproduce la misma iteración con r = {r}."),
];

static ORBITAL: [Scenario; 3] = [
  sc("satélite", 1, "Un satélite se coloca a una distancia {x0} del centro del planeta con velocidad tangencial {vy0}."),
  sc("sonda espacial", 2, "Una sonda ajusta su velocidad tangencial a {vy0} estando a distancia {x0} de su estrella."),
  sc("cometa", 3, "Un cometa cruza el punto a distancia {x0} del Sol con velocidad perpendicular {vy0}."),
];

static ROSSLER: [Scenario; 3] = [
  sc("reactor químico", 1, "Una reacción química en un reactor continuo presenta oscilaciones irregulares en tres concentraciones."),
  sc("circuito caótico", 2, "Un circuito electrónico con un elemento no lineal reproduce las ecuaciones de Rössler."),
  sc("señal de laboratorio", 3, "En el laboratorio se registra una señal que gira y se pliega como el atractor de Rössler."),
];

static DAMPER: [Scenario; 4] = [
  sc("puerta con cierre", 1, "Una puerta con brazo de cierre hidráulico (masa {m} kg, rigidez {k} N/m) se suelta desde abierta."),
  sc("suspensión de bicicleta", 1, "La horquilla de una bicicleta se comprime y se libera: masa {m} kg, resorte {k} N/m, amortiguador {c} N·s/m."),
  sc("suspensión de automóvil", 2, "La rueda de un automóvil pasa por un bache; la suspensión tiene masa {m} kg y rigidez {k} N/m."),
  sc("aislador sísmico", 3, "Un aislador sísmico de un edificio (masa equivalente {m} kg, rigidez {k} N/m) responde a un desplazamiento inicial."),
];

pub fn scenarios(system: SystemId) -> &'static [Scenario] {
  match system {
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

/// Scenarios that may appear at `tier`. Never empty: every table has tier-1 entries.
pub fn eligible(system: SystemId, tier: u8) -> Vec<&'static Scenario> {
  scenarios(system).iter().filter(|s| s.min_tier <= tier).collect()
}

pub fn pick<R: Rng>(system: SystemId, tier: u8, rng: &mut R) -> &'static Scenario {
  let pool = eligible(system, tier);
  pool.choose(rng).copied().unwrap_or(&scenarios(system)[0])
}
