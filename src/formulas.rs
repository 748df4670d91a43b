//! Closed-form quantities derived from sampled parameters.
//!
//! Every function checks its domain before taking a log, root or quotient and
//! returns `GenerationError::Domain` instead of producing NaN or infinity.
//! These values are the grading ground truth, so question tolerances are
//! expressed relative to them.

use std::f64::consts::{LN_2, PI};

use serde::Serialize;

use crate::error::GenerationError;

/// Fraction of the initial gap the cooling exercises ask about (≈ 1/e).
pub const TARGET_FRACTION: f64 = 0.37;
/// Onset of chaos in the logistic map (Feigenbaum accumulation point).
pub const FEIGENBAUM_ONSET: f64 = 3.5699;

fn ensure_positive(quantity: &'static str, name: &str, value: f64) -> Result<(), GenerationError> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    Err(GenerationError::domain(quantity, format!("{name} = {value} debe ser positivo")))
  }
}

/// Damping regime shared by the RLC circuit and the mechanical damper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DampingClass {
  Under,
  Critical,
  Over,
}

impl DampingClass {
  /// ζ within 5% of 1 counts as critical.
  pub fn from_zeta(zeta: f64) -> Self {
    if zeta < 0.95 {
      DampingClass::Under
    } else if zeta < 1.05 {
      DampingClass::Critical
    } else {
      DampingClass::Over
    }
  }

  pub fn index(self) -> usize {
    self as usize
  }

}

/// Answer options for the regime questions, in `DampingClass` order.
pub const DAMPING_TYPES: [&str; 3] = ["Subamortiguado (oscila)", "Críticamente amortiguado", "Sobreamortiguado (no oscila)"];

/// Kind of roots of λ² + 2ζω₀λ + ω₀² = 0, as an option index:
/// complex conjugate (0), real and equal (1), real and distinct (2).
/// Independent of the critical band used by `DampingClass`.
pub fn root_kind(zeta: f64) -> usize {
  if (zeta - 1.0).abs() < 1e-9 {
    1
  } else if zeta < 1.0 {
    0
  } else {
    2
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct Cooling {
  pub t0: f64,
  pub t_env: f64,
  pub k: f64,
  pub tau: f64,
  pub target_temp: f64,
  pub time_to_target: f64,
  pub half_gap_time: f64,
  pub temp_at_two_tau: f64,
}

pub fn cooling(t0: f64, t_env: f64, k: f64) -> Result<Cooling, GenerationError> {
  ensure_positive("τ", "k", k)?;
  let gap = t0 - t_env;
  if gap.abs() < 1e-9 {
    return Err(GenerationError::domain("tiempo objetivo", "T₀ = T_amb, no hay diferencia que enfriar"));
  }
  let tau = 1.0 / k;
  let target_temp = t_env + gap * TARGET_FRACTION;
  let ratio = (target_temp - t_env) / gap;
  // ratio is TARGET_FRACTION up to rounding; still checked before the log
  ensure_positive("tiempo objetivo", "fracción restante", ratio)?;
  Ok(Cooling {
    t0,
    t_env,
    k,
    tau,
    target_temp,
    time_to_target: -ratio.ln() / k,
    half_gap_time: tau * LN_2,
    temp_at_two_tau: t_env + gap * (-2.0f64).exp(),
  })
}

#[derive(Clone, Debug, Serialize)]
pub struct VanDerPol {
  pub mu: f64,
  /// Limit cycle amplitude, ≈ 2 for every μ > 0.
  pub amplitude: f64,
  /// μ > 2: relaxation oscillations rather than near-sinusoidal ones.
  pub relaxation: bool,
  /// Small-μ period (2π) or the relaxation estimate (3 - 2ln2)μ.
  pub period_estimate: f64,
}

pub fn van_der_pol(mu: f64) -> Result<VanDerPol, GenerationError> {
  ensure_positive("ciclo límite", "μ", mu)?;
  let relaxation = mu > 2.0;
  let period_estimate = if relaxation { (3.0 - 2.0 * LN_2) * mu } else { 2.0 * PI };
  Ok(VanDerPol { mu, amplitude: 2.0, relaxation, period_estimate })
}

#[derive(Clone, Debug, Serialize)]
pub struct Epidemic {
  pub population: f64,
  pub beta: f64,
  pub gamma: f64,
  pub r0: f64,
  pub herd_immunity: f64,
  /// S/N at the peak of infections, 1/R₀.
  pub peak_susceptible_fraction: f64,
}

impl Epidemic {
  pub fn outbreak(&self) -> bool {
    self.r0 > 1.0
  }
}

pub fn epidemic(s0: f64, i0: f64, recovered0: f64, beta: f64, gamma: f64) -> Result<Epidemic, GenerationError> {
  ensure_positive("R₀", "γ", gamma)?;
  ensure_positive("R₀", "β", beta)?;
  if s0 < 0.0 || i0 < 0.0 || recovered0 < 0.0 {
    return Err(GenerationError::domain("población", format!("S₀={s0}, I₀={i0}, R₀={recovered0} no pueden ser negativos")));
  }
  let population = s0 + i0 + recovered0;
  ensure_positive("población", "N", population)?;
  let r0 = beta / gamma;
  let herd_immunity = if r0 > 1.0 { 1.0 - 1.0 / r0 } else { 0.0 };
  Ok(Epidemic {
    population,
    beta,
    gamma,
    r0,
    herd_immunity,
    peak_susceptible_fraction: (1.0 / r0).min(1.0),
  })
}

#[derive(Clone, Debug, Serialize)]
pub struct Circuit {
  pub omega0: f64,
  pub quality: f64,
  pub zeta: f64,
  pub class: DampingClass,
}

impl Circuit {
  /// The charge changes sign whenever ζ < 1, even inside the critical band.
  pub fn oscillates(&self) -> bool {
    self.zeta < 1.0
  }
}

pub fn circuit(r: f64, l: f64, c: f64) -> Result<Circuit, GenerationError> {
  ensure_positive("Q", "R", r)?;
  ensure_positive("ω₀", "L", l)?;
  ensure_positive("ω₀", "C", c)?;
  let omega0 = 1.0 / (l * c).sqrt();
  let zeta = r / (2.0 * (l / c).sqrt());
  Ok(Circuit { omega0, quality: omega0 * l / r, zeta, class: DampingClass::from_zeta(zeta) })
}

#[derive(Clone, Debug, Serialize)]
pub struct Lorenz {
  pub sigma: f64,
  pub rho: f64,
  pub beta: f64,
  pub rho_hopf: f64,
  pub chaotic: bool,
  /// C+ and C-.
  pub equilibria: [[f64; 3]; 2],
}

pub fn lorenz(sigma: f64, rho: f64, beta: f64) -> Result<Lorenz, GenerationError> {
  ensure_positive("ρ_H", "σ", sigma)?;
  ensure_positive("ρ_H", "β", beta)?;
  let denom = sigma - beta - 1.0;
  if denom <= 0.0 {
    return Err(GenerationError::domain("ρ_H", format!("σ - β - 1 = {denom:.3} no es positivo")));
  }
  if rho <= 1.0 {
    return Err(GenerationError::domain("C±", format!("ρ = {rho} ≤ 1, no hay equilibrios no triviales")));
  }
  let rho_hopf = sigma * (sigma + beta + 3.0) / denom;
  let s = (beta * (rho - 1.0)).sqrt();
  Ok(Lorenz {
    sigma,
    rho,
    beta,
    rho_hopf,
    chaotic: rho > rho_hopf,
    equilibria: [[s, s, rho - 1.0], [-s, -s, rho - 1.0]],
  })
}

/// Regime of the Hopf normal form, with a ±0.05 band treated as critical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HopfRegime {
  StableFocus,
  LimitCycle,
  Critical,
}

impl HopfRegime {
  pub fn index(self) -> usize {
    match self {
      HopfRegime::StableFocus => 0,
      HopfRegime::LimitCycle => 1,
      HopfRegime::Critical => 2,
    }
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct Hopf {
  pub mu: f64,
  /// √μ for μ > 0, 0 when no cycle exists.
  pub radius: f64,
  pub regime: HopfRegime,
}

pub fn hopf(mu: f64) -> Result<Hopf, GenerationError> {
  if !mu.is_finite() {
    return Err(GenerationError::domain("radio", format!("μ = {mu} no es finito")));
  }
  let regime = if mu < -0.05 {
    HopfRegime::StableFocus
  } else if mu > 0.05 {
    HopfRegime::LimitCycle
  } else {
    HopfRegime::Critical
  };
  Ok(Hopf { mu, radius: if mu > 0.0 { mu.sqrt() } else { 0.0 }, regime })
}

#[derive(Clone, Debug, Serialize)]
pub struct Logistic {
  pub n0: f64,
  pub capacity: f64,
  pub r: f64,
  pub inflection_time: f64,
  pub doubling_time: f64,
}

pub fn logistic(n0: f64, capacity: f64, r: f64) -> Result<Logistic, GenerationError> {
  ensure_positive("t_inflexión", "r", r)?;
  ensure_positive("t_inflexión", "N₀", n0)?;
  if n0 >= capacity / 2.0 {
    return Err(GenerationError::domain(
      "t_inflexión",
      format!("N₀ = {n0} ≥ K/2 = {}, la inflexión ya ocurrió", capacity / 2.0),
    ));
  }
  Ok(Logistic {
    n0,
    capacity,
    r,
    inflection_time: ((capacity - n0) / n0).ln() / r,
    doubling_time: LN_2 / r,
  })
}

/// Long-run behavior of the logistic map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MapBehaviour {
  FixedPoint,
  PeriodTwo,
  PeriodDoubling,
  Chaos,
}

impl MapBehaviour {
  pub fn index(self) -> usize {
    self as usize
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct Verhulst {
  pub r: f64,
  pub fixed_point: f64,
  /// |f'(x*)| = |r(1 - 2x*)| = |2 - r|.
  pub multiplier: f64,
  pub stable: bool,
  pub behaviour: MapBehaviour,
}

pub fn verhulst(r: f64) -> Result<Verhulst, GenerationError> {
  if !(r > 1.0 && r <= 4.0) {
    return Err(GenerationError::domain("x*", format!("r = {r} fuera de (1, 4]")));
  }
  let fixed_point = 1.0 - 1.0 / r;
  let multiplier = (r * (1.0 - 2.0 * fixed_point)).abs();
  let period_four = 1.0 + 6f64.sqrt();
  let behaviour = if r < 3.0 {
    MapBehaviour::FixedPoint
  } else if r < period_four {
    MapBehaviour::PeriodTwo
  } else if r < FEIGENBAUM_ONSET {
    MapBehaviour::PeriodDoubling
  } else {
    MapBehaviour::Chaos
  };
  Ok(Verhulst { r, fixed_point, multiplier, stable: multiplier < 1.0, behaviour })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OrbitClass {
  Circular,
  Elliptical,
  Open,
}

impl OrbitClass {
  pub fn index(self) -> usize {
    self as usize
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct Orbit {
  pub radius: f64,
  pub speed: f64,
  pub energy: f64,
  pub angular_momentum: f64,
  pub eccentricity: f64,
  /// Defined only for bound orbits (E < 0).
  pub semi_major_axis: Option<f64>,
  pub period: Option<f64>,
  pub class: OrbitClass,
}

/// Kepler problem with GM = 1.
pub fn orbit(x: f64, y: f64, vx: f64, vy: f64) -> Result<Orbit, GenerationError> {
  let radius = (x * x + y * y).sqrt();
  ensure_positive("E", "r", radius)?;
  let speed = (vx * vx + vy * vy).sqrt();
  let energy = 0.5 * speed * speed - 1.0 / radius;
  if energy.abs() < 1e-3 {
    return Err(GenerationError::domain("a", format!("E = {energy:.5} ≈ 0, órbita parabólica")));
  }
  let angular_momentum = x * vy - y * vx;
  // circular orbits land a hair below zero after rounding
  let eccentricity = (1.0 + 2.0 * energy * angular_momentum * angular_momentum).max(0.0).sqrt();
  let (semi_major_axis, period) = if energy < 0.0 {
    let a = -1.0 / (2.0 * energy);
    (Some(a), Some(2.0 * PI * a.powf(1.5)))
  } else {
    (None, None)
  };
  let class = if energy >= 0.0 {
    OrbitClass::Open
  } else if eccentricity < 0.1 {
    OrbitClass::Circular
  } else {
    OrbitClass::Elliptical
  };
  Ok(Orbit { radius, speed, energy, angular_momentum, eccentricity, semi_major_axis, period, class })
}

#[derive(Clone, Debug, Serialize)]
pub struct Rossler {
  pub a: f64,
  pub b: f64,
  pub c: f64,
  /// x coordinates of the inner and outer equilibria.
  pub equilibria_x: [f64; 2],
}

pub fn rossler(a: f64, b: f64, c: f64) -> Result<Rossler, GenerationError> {
  ensure_positive("equilibrios", "a", a)?;
  let disc = c * c - 4.0 * a * b;
  if disc < 0.0 {
    return Err(GenerationError::domain("equilibrios", format!("c² - 4ab = {disc:.4} < 0")));
  }
  let root = disc.sqrt();
  Ok(Rossler { a, b, c, equilibria_x: [(c - root) / 2.0, (c + root) / 2.0] })
}

#[derive(Clone, Debug, Serialize)]
pub struct Damper {
  pub critical: f64,
  pub zeta: f64,
  pub omega0: f64,
  /// ω₀√(1 - ζ²), only when the system oscillates.
  pub damped_omega: Option<f64>,
  pub class: DampingClass,
}

impl Damper {
  pub fn oscillates(&self) -> bool {
    self.damped_omega.is_some()
  }
}

pub fn damper(m: f64, k: f64, c: f64) -> Result<Damper, GenerationError> {
  ensure_positive("c_crit", "m", m)?;
  ensure_positive("c_crit", "k", k)?;
  if c < 0.0 {
    return Err(GenerationError::domain("ζ", format!("c = {c} negativo")));
  }
  let critical = 2.0 * (k * m).sqrt();
  let zeta = c / critical;
  let omega0 = (k / m).sqrt();
  let damped_omega = if zeta < 1.0 { Some(omega0 * (1.0 - zeta * zeta).sqrt()) } else { None };
  Ok(Damper { critical, zeta, omega0, damped_omega, class: DampingClass::from_zeta(zeta) })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
  }

  #[test]
  fn cooling_time_constant_and_target() {
    let c = cooling(90.0, 20.0, 0.10).expect("cooling");
    assert!(close(c.tau, 10.0, 1e-12));
    assert!(close(c.target_temp, 45.9, 1e-9));
    assert!(close(c.time_to_target, -(0.37f64).ln() * 10.0, 1e-9));
    assert!(close(c.half_gap_time, 10.0 * LN_2, 1e-12));
    assert!(close(c.temp_at_two_tau, 20.0 + 70.0 * (-2.0f64).exp(), 1e-9));
  }

  #[test]
  fn cooling_without_gap_is_a_domain_error() {
    assert!(matches!(cooling(25.0, 25.0, 0.1), Err(GenerationError::Domain { .. })));
    assert!(matches!(cooling(90.0, 25.0, 0.0), Err(GenerationError::Domain { .. })));
  }

  #[test]
  fn epidemic_basic_reproduction_number() {
    let e = epidemic(990.0, 10.0, 0.0, 0.3, 0.1).expect("sir");
    assert!(close(e.r0, 3.0, 1e-12));
    assert!(close(e.herd_immunity, 2.0 / 3.0, 1e-12));
    assert!(e.outbreak());
    assert!(matches!(epidemic(990.0, 10.0, 0.0, 0.3, 0.0), Err(GenerationError::Domain { .. })));
  }

  #[test]
  fn subcritical_epidemic_has_no_herd_threshold() {
    let e = epidemic(990.0, 10.0, 0.0, 0.1, 0.2).expect("sir");
    assert_eq!(e.herd_immunity, 0.0);
    assert!(!e.outbreak());
  }

  #[test]
  fn verhulst_classification() {
    let v = verhulst(2.5).expect("map");
    assert!(close(v.fixed_point, 0.6, 1e-12));
    assert!(v.stable);
    assert_eq!(v.behaviour, MapBehaviour::FixedPoint);
    assert_eq!(verhulst(3.2).expect("map").behaviour, MapBehaviour::PeriodTwo);
    assert_eq!(verhulst(3.5).expect("map").behaviour, MapBehaviour::PeriodDoubling);
    assert_eq!(verhulst(3.8).expect("map").behaviour, MapBehaviour::Chaos);
    assert!(verhulst(0.5).is_err());
  }

  #[test]
  fn hopf_radius_and_sentinel() {
    let h = hopf(0.5).expect("hopf");
    assert!(close(h.radius, 0.5f64.sqrt(), 1e-12));
    assert_eq!(h.regime, HopfRegime::LimitCycle);
    let h = hopf(-0.5).expect("hopf");
    assert_eq!(h.radius, 0.0);
    assert_eq!(h.regime, HopfRegime::StableFocus);
    assert_eq!(hopf(0.0).expect("hopf").regime, HopfRegime::Critical);
  }

  #[test]
  fn lorenz_classic_threshold() {
    let l = lorenz(10.0, 28.0, 8.0 / 3.0).expect("lorenz");
    assert!(close(l.rho_hopf, 24.74, 0.01));
    assert!(l.chaotic);
    assert!(close(l.equilibria[0][2], 27.0, 1e-12));
    assert!(lorenz(3.0, 28.0, 2.5).is_err());
  }

  #[test]
  fn circular_orbit_has_zero_eccentricity() {
    let o = orbit(1.0, 0.0, 0.0, 1.0).expect("orbit");
    assert!(close(o.energy, -0.5, 1e-12));
    assert!(close(o.eccentricity, 0.0, 1e-9));
    assert_eq!(o.class, OrbitClass::Circular);
    assert!(close(o.period.expect("bound"), 2.0 * PI, 1e-9));
  }

  #[test]
  fn parabolic_and_open_orbits() {
    assert!(orbit(2.0, 0.0, 0.0, 1.0).is_err());
    let o = orbit(2.0, 0.0, 0.0, 1.5).expect("orbit");
    assert_eq!(o.class, OrbitClass::Open);
    assert!(o.semi_major_axis.is_none());
  }

  #[test]
  fn logistic_inflection_requires_room_to_grow() {
    let l = logistic(10.0, 1000.0, 0.2).expect("logistic");
    assert!(close(l.inflection_time, (99.0f64).ln() / 0.2, 1e-9));
    assert!(logistic(600.0, 1000.0, 0.2).is_err());
  }

  #[test]
  fn damping_classes() {
    assert_eq!(damper(1.0, 1.0, 0.2).expect("d").class, DampingClass::Under);
    assert_eq!(damper(1.0, 1.0, 2.0).expect("d").class, DampingClass::Critical);
    assert_eq!(damper(1.0, 4.0, 6.0).expect("d").class, DampingClass::Over);
    let rlc = circuit(10.0, 0.1, 0.001).expect("rlc");
    assert!(close(rlc.omega0, 100.0, 1e-9));
    assert!(close(rlc.quality, 1.0, 1e-9));
    assert_eq!(rlc.class, DampingClass::Under);
  }

  #[test]
  fn near_critical_damper_still_oscillates() {
    let d = damper(1.0, 4.0, 3.9).expect("d");
    assert!(close(d.zeta, 0.975, 1e-12));
    assert_eq!(d.class, DampingClass::Critical);
    assert!(d.oscillates());
    assert_eq!(root_kind(d.zeta), 0);
    assert_eq!(root_kind(1.0), 1);
    assert_eq!(root_kind(1.02), 2);
    assert!(!damper(1.0, 4.0, 4.1).expect("d").oscillates());
  }

  #[test]
  fn rossler_equilibria() {
    let r = rossler(0.2, 0.2, 5.7).expect("rossler");
    assert!(r.equilibria_x[0] > 0.0 && r.equilibria_x[0] < 0.01);
    assert!(close(r.equilibria_x[0] + r.equilibria_x[1], 5.7, 1e-12));
  }
}
