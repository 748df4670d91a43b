//! Per-system drafts: sample the tier's parameters, derive the expected
//! answers and build the question pool from them.
//!
//! Higher tiers widen the ranges and free parameters that lower tiers pin.

use rand::Rng;

use crate::domain::Parameter;
use crate::error::GenerationError;
use crate::formulas;
use crate::pools::{self, QuestionPool};
use crate::systems::SystemId;

use super::contexts::{self, Scenario};
use super::sampling::Sampler;

/// Everything the generator needs before question selection.
pub struct Draft {
  pub scenario: &'static Scenario,
  pub parameters: Vec<Parameter>,
  pub model: Vec<String>,
  /// Worked reference values, shown only to beginners.
  pub references: Vec<String>,
  pub pool: QuestionPool,
  pub experiment: Option<String>,
}

pub fn draft<R: Rng>(system: SystemId, tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  match system {
    SystemId::Newton => newton(tier, s),
    SystemId::VanDerPol => van_der_pol(tier, s),
    SystemId::Sir => sir(tier, s),
    SystemId::Rlc => rlc(tier, s),
    SystemId::Lorenz => lorenz(tier, s),
    SystemId::Hopf => hopf(tier, s),
    SystemId::Logistic => logistic(tier, s),
    SystemId::Verhulst => verhulst(tier, s),
    SystemId::Orbital => orbital(tier, s),
    SystemId::Rossler => rossler(tier, s),
    SystemId::Damper => damper(tier, s),
  }
}

fn newton<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let (t0, t_env, k) = match tier {
    1 => (s.choice(&[80.0, 90.0, 100.0]), s.choice(&[20.0, 25.0]), s.range(0.05, 0.15, 2)),
    2 => (s.integer(70, 120), s.integer(15, 30), s.range(0.08, 0.25, 3)),
    _ => (s.integer(50, 300), s.integer(10, 35), s.range(0.05, 0.50, 3)),
  };
  let c = formulas::cooling(t0, t_env, k)?;
  let scenario = contexts::pick(SystemId::Newton, tier, s.rng());
  let names: Vec<&str> = contexts::eligible(SystemId::Newton, tier).iter().map(|sc| sc.name).collect();

  Ok(Draft {
    scenario,
    parameters: vec![
      Parameter::integer("T0", "Temperatura inicial T₀", "Temperatura del cuerpo al comenzar", 0, 300, t0 as i64)?.with_unit("°C"),
      Parameter::integer("T_env", "Temperatura ambiente Tₐₘ", "Temperatura constante del entorno", 0, 50, t_env as i64)?
        .with_unit("°C"),
      Parameter::float("k", "Constante de enfriamiento k", "Rapidez del intercambio de calor", 0.01, 1.0, k)?
        .with_unit("1/min")
        .with_step(0.01),
      Parameter::selection("escenario", "Escenario", "Situación física del ejercicio", &names, scenario.name)?,
    ],
    model: vec!["dT/dt = -k·(T - Tₐₘ)".into(), "T(t) = Tₐₘ + (T₀ - Tₐₘ)·e^(-k·t)".into()],
    references: vec![format!("Constante de tiempo: τ = 1/k = {:.2} min", c.tau)],
    pool: pools::newton(&c),
    experiment: Some(format!("Duplique k a {:.3} y compare el tiempo necesario para llegar a {:.1} °C.", 2.0 * k, c.target_temp)),
  })
}

fn van_der_pol<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let (mu, x0, v0) = match tier {
    1 => (s.choice(&[0.5, 1.0, 1.5]), 1.0, 0.0),
    2 => (s.range(0.5, 3.0, 1), s.range(-2.0, 2.0, 1), s.range(-1.0, 1.0, 1)),
    _ => (s.range(0.2, 8.0, 2), s.range(-3.0, 3.0, 1), s.range(-2.0, 2.0, 1)),
  };
  let v = formulas::van_der_pol(mu)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::VanDerPol, tier, s.rng()),
    parameters: vec![
      Parameter::float("mu", "Parámetro μ", "Intensidad del amortiguamiento no lineal", 0.1, 10.0, mu)?.with_step(0.1),
      Parameter::float("x0", "Posición inicial x₀", "Desplazamiento inicial", -5.0, 5.0, x0)?.with_step(0.1),
      Parameter::float("v0", "Velocidad inicial v₀", "Velocidad inicial", -5.0, 5.0, v0)?.with_step(0.1),
    ],
    model: vec!["ẍ - μ·(1 - x²)·ẋ + x = 0".into()],
    references: vec![
      format!("Amplitud esperada del ciclo límite ≈ {:.1}", v.amplitude),
      format!("Período estimado del ciclo: T ≈ {:.2}", v.period_estimate),
    ],
    pool: pools::van_der_pol(&v),
    experiment: Some("Repita la simulación con x₀ = 0.1, v₀ = 0 y compare el ciclo final con el obtenido.".into()),
  })
}

const SIR_POPULATION: i64 = 1000;

fn sir<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let n = SIR_POPULATION as f64;
  let (s0, i0, r_ini, beta, gamma) = match tier {
    1 => (990.0, 10.0, 0.0, 0.3, 0.1),
    2 => {
      let s0 = s.integer(900, 990);
      (s0, n - s0, 0.0, s.range(0.2, 0.5, 2), s.range(0.05, 0.2, 2))
    }
    _ => {
      let s0 = s.integer(800, 990);
      let i0 = s.integer(5, (SIR_POPULATION - s0 as i64).min(50));
      (s0, i0, n - s0 - i0, s.range(0.15, 0.7, 2), s.range(0.05, 0.3, 2))
    }
  };
  let e = formulas::epidemic(s0, i0, r_ini, beta, gamma)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Sir, tier, s.rng()),
    parameters: vec![
      Parameter::integer("S0", "Susceptibles iniciales S₀", "Personas que pueden contagiarse", 0, SIR_POPULATION, s0 as i64)?,
      Parameter::integer("I0", "Infectados iniciales I₀", "Personas contagiadas al inicio", 0, SIR_POPULATION, i0 as i64)?,
      Parameter::integer("R_ini", "Recuperados iniciales R(0)", "Personas ya inmunes al inicio", 0, SIR_POPULATION, r_ini as i64)?,
      Parameter::float("beta", "Tasa de contagio β", "Contactos efectivos por unidad de tiempo", 0.01, 1.0, beta)?
        .with_unit("1/día")
        .with_step(0.01),
      Parameter::float("gamma", "Tasa de recuperación γ", "Inverso del tiempo medio de infección", 0.01, 0.5, gamma)?
        .with_unit("1/día")
        .with_step(0.01),
    ],
    model: vec![
      "dS/dt = -β·S·I/N".into(),
      "dI/dt = β·S·I/N - γ·I".into(),
      "dR/dt = γ·I".into(),
      format!("N = S + I + R = {}", e.population),
    ],
    references: vec![format!("Número reproductivo básico: R₀ = β/γ = {:.2}", e.r0)],
    pool: pools::sir(&e),
    experiment: Some(format!("Reduzca β a la mitad ({:.3}) y compare la altura del pico de infectados.", beta / 2.0)),
  })
}

fn rlc<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let (r, l, c, v0) = match tier {
    1 => (10.0, 0.1, 0.001, 10.0),
    2 => (s.integer(5, 50), s.range(0.05, 0.5, 2), s.range(0.0005, 0.005, 4), s.integer(5, 20)),
    _ => (s.integer(1, 100), s.range(0.01, 1.0, 2), s.range(0.0001, 0.01, 4), s.integer(1, 50)),
  };
  let circuit = formulas::circuit(r, l, c)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Rlc, tier, s.rng()),
    parameters: vec![
      Parameter::float("R", "Resistencia R", "Disipación del circuito", 0.5, 200.0, r)?.with_unit("Ω"),
      Parameter::float("L", "Inductancia L", "Inercia magnética del circuito", 0.005, 2.0, l)?.with_unit("H"),
      Parameter::float("C", "Capacitancia C", "Capacidad de almacenar carga", 0.00005, 0.02, c)?.with_unit("F"),
      Parameter::float("V0", "Tensión inicial V₀", "Tensión del capacitor al inicio", 0.0, 100.0, v0)?.with_unit("V"),
    ],
    model: vec!["L·q̈ + R·q̇ + q/C = 0".into(), "q(0) = C·V₀,  i(0) = 0".into()],
    references: vec![format!("Frecuencia natural: ω₀ = 1/√(LC) = {:.2} rad/s", circuit.omega0)],
    pool: pools::rlc(&circuit),
    experiment: Some(format!(
      "Cambie R a {:.1} Ω (amortiguamiento crítico) y compare la descarga.",
      2.0 * (l / c).sqrt()
    )),
  })
}

fn lorenz<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let classic_beta = 8.0 / 3.0;
  let (sigma, rho, beta) = match tier {
    1 => (10.0, 28.0, classic_beta),
    2 => (10.0, s.range(20.0, 35.0, 1), classic_beta),
    _ => (s.range(8.0, 15.0, 1), s.range(15.0, 40.0, 1), s.range(2.0, 3.5, 2)),
  };
  let l = formulas::lorenz(sigma, rho, beta)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Lorenz, tier, s.rng()),
    parameters: vec![
      Parameter::float("sigma", "Número de Prandtl σ", "Acoplamiento entre x e y", 1.0, 20.0, sigma)?.with_step(0.1),
      Parameter::float("rho", "Número de Rayleigh ρ", "Intensidad del calentamiento", 0.5, 50.0, rho)?.with_step(0.1),
      Parameter::float("beta", "Parámetro geométrico β", "Relación de aspecto de la celda", 0.5, 5.0, beta)?.with_step(0.01),
    ],
    model: vec!["ẋ = σ·(y - x)".into(), "ẏ = x·(ρ - z) - y".into(), "ż = x·y - β·z".into()],
    references: vec![format!("Umbral de caos: ρ_H = σ(σ + β + 3)/(σ - β - 1) = {:.2}", l.rho_hopf)],
    pool: pools::lorenz(&l),
    experiment: Some("Simule dos trayectorias que difieran en 0.001 en x₀ y mida cuándo se separan.".into()),
  })
}

fn hopf<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let mu = match tier {
    1 => s.choice(&[-0.5, 0.0, 0.5, 1.0]),
    2 => s.range(-1.0, 2.0, 1),
    _ => s.range(-2.0, 3.0, 2),
  };
  let h = formulas::hopf(mu)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Hopf, tier, s.rng()),
    parameters: vec![
      Parameter::float("mu", "Parámetro de bifurcación μ", "Controla la estabilidad del origen", -3.0, 3.0, mu)?.with_step(0.1),
      Parameter::float("omega", "Frecuencia ω", "Velocidad angular de giro", 0.1, 5.0, 1.0)?.with_unit("rad/s"),
      Parameter::float("x0", "Condición inicial x₀", "Coordenada x inicial", -2.0, 2.0, 0.1)?,
      Parameter::float("y0", "Condición inicial y₀", "Coordenada y inicial", -2.0, 2.0, 0.1)?,
    ],
    model: vec!["ṙ = μ·r - r³".into(), "θ̇ = ω".into()],
    references: vec![if mu > 0.0 {
      format!("Radio del ciclo límite: √μ = {:.3}", h.radius)
    } else {
      "Sin ciclo límite: μ ≤ 0".to_string()
    }],
    pool: pools::hopf(&h),
    experiment: Some("Repita la simulación con μ de signo opuesto y compare los retratos de fase.".into()),
  })
}

fn logistic<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let (n0, k, r) = match tier {
    1 => (s.choice(&[10.0, 20.0, 50.0]), 1000.0, s.choice(&[0.1, 0.2, 0.3])),
    2 => (s.integer(10, 100), s.integer(500, 1500), s.range(0.1, 0.5, 2)),
    _ => (s.integer(5, 200), s.integer(300, 2000), s.range(0.05, 0.8, 3)),
  };
  let l = formulas::logistic(n0, k, r)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Logistic, tier, s.rng()),
    parameters: vec![
      Parameter::integer("N0", "Población inicial N₀", "Individuos al comenzar", 1, 500, n0 as i64)?.with_unit("individuos"),
      Parameter::integer("K", "Capacidad de carga K", "Máximo sostenible por el ambiente", 100, 3000, k as i64)?
        .with_unit("individuos"),
      Parameter::float("r", "Tasa de crecimiento r", "Crecimiento per cápita sin limitación", 0.01, 1.0, r)?.with_step(0.01),
    ],
    model: vec!["dN/dt = r·N·(1 - N/K)".into(), "N(t) = K / (1 + ((K - N₀)/N₀)·e^(-r·t))".into()],
    references: vec![format!("Tiempo de duplicación inicial: ln2/r = {:.2}", l.doubling_time)],
    pool: pools::logistic(&l),
    experiment: Some(format!("Compare N(t) con el crecimiento exponencial N₀·e^(rt) hasta t = {:.1}.", l.inflection_time)),
  })
}

fn verhulst<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let r = match tier {
    1 => s.choice(&[2.5, 2.8, 3.2, 3.5]),
    2 => s.range(2.0, 3.8, 1),
    _ => s.range(1.5, 4.0, 2),
  };
  let v = formulas::verhulst(r)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Verhulst, tier, s.rng()),
    parameters: vec![
      Parameter::float("r", "Parámetro r", "Tasa de reproducción por generación", 1.0, 4.0, r)?.with_step(0.01),
      Parameter::float("x0", "Valor inicial x₀", "Fracción inicial de la capacidad", 0.0, 1.0, 0.5)?.with_step(0.01),
    ],
    model: vec!["x_{n+1} = r·x_n·(1 - x_n)".into()],
    references: vec![
      format!("Punto fijo teórico: x* = 1 - 1/r = {:.4}", v.fixed_point),
      "Referencia: el caos comienza en r ≈ 3.57".into(),
    ],
    pool: pools::verhulst(&v),
    experiment: Some("Itere 200 pasos, descarte los primeros 100 y cuente los valores distintos que se repiten.".into()),
  })
}

const ORBIT_REGIMES: [&str; 3] = ["circular", "elíptica", "variada"];

fn orbital<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let (x0, vy0, regime) = match tier {
    1 => (1.0, 1.0, ORBIT_REGIMES[0]),
    2 => (1.0, s.range(0.7, 1.3, 2), ORBIT_REGIMES[1]),
    _ => (s.range(0.5, 2.0, 2), s.range(0.5, 1.5, 2), ORBIT_REGIMES[2]),
  };
  let o = formulas::orbit(x0, 0.0, 0.0, vy0)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Orbital, tier, s.rng()),
    parameters: vec![
      Parameter::float("x0", "Distancia inicial x₀", "Distancia al centro de atracción", 0.1, 3.0, x0)?.with_step(0.01),
      Parameter::float("vy0", "Velocidad tangencial v_y", "Velocidad inicial perpendicular al radio", 0.1, 2.0, vy0)?.with_step(0.01),
      Parameter::selection("regimen", "Régimen orbital", "Familia de órbitas del ejercicio", &ORBIT_REGIMES, regime)?,
    ],
    model: vec![
      "r̈ = -GM·r / |r|³,  GM = 1".into(),
      "E = v²/2 - GM/r,  L = x·v_y - y·v_x".into(),
    ],
    references: vec![format!("Energía específica: E = {:.4}", o.energy)],
    pool: pools::orbital(&o),
    experiment: Some("Aumente v_y un 10% y observe cómo cambia la forma de la órbita.".into()),
  })
}

fn rossler<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let (a, b, c) = match tier {
    1 => (0.2, 0.2, 5.7),
    2 => (0.2, 0.2, s.range(4.0, 6.5, 1)),
    _ => (s.range(0.1, 0.3, 2), s.range(0.1, 0.4, 2), s.range(3.0, 8.0, 1)),
  };
  let r = formulas::rossler(a, b, c)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Rossler, tier, s.rng()),
    parameters: vec![
      Parameter::float("a", "Parámetro a", "Realimentación de y", 0.05, 0.5, a)?.with_step(0.01),
      Parameter::float("b", "Parámetro b", "Término constante en z", 0.05, 0.5, b)?.with_step(0.01),
      Parameter::float("c", "Parámetro c", "Umbral de reinyección", 1.0, 10.0, c)?.with_step(0.1),
    ],
    model: vec!["ẋ = -y - z".into(), "ẏ = x + a·y".into(), "ż = b + z·(x - c)".into()],
    references: vec![format!("Equilibrio interior: x ≈ {:.4}", r.equilibria_x[0])],
    pool: pools::rossler(&r),
    experiment: Some("Barra c entre 2 y 6 y observe la duplicación del período en la proyección xy.".into()),
  })
}

fn damper<R: Rng>(tier: u8, s: &mut Sampler<'_, R>) -> Result<Draft, GenerationError> {
  let (m, k, c) = match tier {
    1 => (1.0, 1.0, s.choice(&[0.2, 1.0, 2.0])),
    2 => (1.0, 4.0, s.range(0.5, 6.0, 1)),
    _ => (s.range(0.5, 2.0, 1), s.range(1.0, 10.0, 1), s.range(0.1, 8.0, 2)),
  };
  let d = formulas::damper(m, k, c)?;

  Ok(Draft {
    scenario: contexts::pick(SystemId::Damper, tier, s.rng()),
    parameters: vec![
      Parameter::float("m", "Masa m", "Masa del cuerpo oscilante", 0.1, 5.0, m)?.with_unit("kg"),
      Parameter::float("k", "Rigidez k", "Constante del resorte", 0.5, 20.0, k)?.with_unit("N/m"),
      Parameter::float("c", "Amortiguamiento c", "Coeficiente de fricción viscosa", 0.0, 10.0, c)?.with_unit("N·s/m"),
    ],
    model: vec!["m·ẍ + c·ẋ + k·x = 0".into(), "ζ = c / (2·√(k·m))".into()],
    references: vec![format!("Amortiguamiento crítico: c_crit = 2√(km) = {:.2} N·s/m", d.critical)],
    pool: pools::damper(&d),
    experiment: Some(format!("Ajuste c a {:.2} N·s/m (crítico) y compare el tiempo de asentamiento.", d.critical)),
  })
}
