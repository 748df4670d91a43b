//! Exercise generation: sample, derive, select questions, assemble.
//!
//! Flow per call:
//! 1) Map the difficulty to a tier.
//! 2) Draft the system: tier-scaled sampling, closed-form derivation, pool.
//!    A domain error on the derived values triggers a fresh draw.
//! 3) Draw the tier's question count without replacement and renumber.
//! 4) Assemble the consigna and the exercise record.
//!
//! The random source is injected so a seeded generator reproduces the same
//! exercise, id included.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument, warn};
use uuid::Builder;

use crate::config::GenerationConfig;
use crate::domain::{Difficulty, Exercise, ExerciseMetadata, Question};
use crate::error::{GenerationError, LabError};
use crate::pools::select_questions;
use crate::systems::SystemId;
use crate::validator;

pub mod consigna;
pub mod contexts;
pub mod drafts;
pub mod sampling;

use drafts::Draft;
use sampling::Sampler;

pub const DEFAULT_MAX_ATTEMPTS: usize = 8;
const AUTHOR: &str = "Laboratorio de Sistemas Dinámicos";
const VERSION: &str = "1.0";

pub struct ExerciseGenerator<R = StdRng> {
  rng: R,
  max_attempts: usize,
}

impl ExerciseGenerator<StdRng> {
  /// Seeded from config when a seed is set, from OS entropy otherwise.
  pub fn new(config: &GenerationConfig) -> Self {
    let rng = match config.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    Self { rng, max_attempts: config.max_attempts.max(1) }
  }
}

impl<R: Rng> ExerciseGenerator<R> {
  pub fn with_rng(rng: R) -> Self {
    Self { rng, max_attempts: DEFAULT_MAX_ATTEMPTS }
  }

  pub fn max_attempts(mut self, attempts: usize) -> Self {
    self.max_attempts = attempts.max(1);
    self
  }

  /// Generate from user-facing labels ("orbitas", "avanzado", ...).
  pub fn generate(&mut self, system: &str, difficulty: &str) -> Result<Exercise, LabError> {
    let system: SystemId = system.parse()?;
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(self.generate_for(system, difficulty)?)
  }

  /// Generate, then refuse the exercise if the validator finds any defect.
  pub fn generate_validated(&mut self, system: &str, difficulty: &str) -> Result<Exercise, LabError> {
    let exercise = self.generate(system, difficulty)?;
    validator::ensure_valid(&exercise)?;
    Ok(exercise)
  }

  #[instrument(level = "info", skip_all, fields(%system, %difficulty))]
  pub fn generate_for(&mut self, system: SystemId, difficulty: Difficulty) -> Result<Exercise, GenerationError> {
    let tier = difficulty.tier();
    let rng = &mut self.rng;
    let draft = with_resampling(system, self.max_attempts, || drafts::draft(system, tier, &mut Sampler::new(&mut *rng)))?;
    let questions = select_questions(&draft.pool, tier, None, &mut self.rng);
    let exercise = assemble(system, difficulty, draft, questions, &mut self.rng);
    info!(
      target: "exercise",
      id = %exercise.id,
      context = %exercise.context,
      questions = exercise.questions.len(),
      "Generated exercise"
    );
    Ok(exercise)
  }
}

/// Retry `draw` while it reports a domain error, up to `max_attempts` draws.
pub(crate) fn with_resampling<T>(
  system: SystemId,
  max_attempts: usize,
  mut draw: impl FnMut() -> Result<T, GenerationError>,
) -> Result<T, GenerationError> {
  let mut attempt = 0;
  loop {
    attempt += 1;
    match draw() {
      Ok(value) => return Ok(value),
      Err(e) if e.is_resamplable() && attempt < max_attempts => {
        warn!(target: "exercise", %system, attempt, error = %e, "Undefined derived value; resampling");
      }
      Err(e) if e.is_resamplable() => {
        return Err(GenerationError::RetriesExhausted { system: system.key(), attempts: attempt, last: Box::new(e) });
      }
      Err(e) => return Err(e),
    }
  }
}

fn assemble<R: Rng>(system: SystemId, difficulty: Difficulty, draft: Draft, questions: Vec<Question>, rng: &mut R) -> Exercise {
  let profile = system.profile();
  let tier = difficulty.tier();
  let uuid = Builder::from_random_bytes(rng.gen()).into_uuid();
  let consigna = consigna::build(&draft, tier, &questions);

  let mut tags: BTreeSet<String> = profile.tags.iter().map(|t| t.to_string()).collect();
  tags.insert(system.key().to_string());
  tags.insert(difficulty.label().to_string());

  Exercise {
    id: format!("{}_{}", system.key(), uuid.simple()),
    name: profile.title.to_string(),
    system,
    main_topic: profile.topic.to_string(),
    difficulty,
    educational_objective: profile.educational_objective.to_string(),
    objectives: profile.objectives.iter().map(|s| s.to_string()).collect(),
    description: profile.description.to_string(),
    activity_type: profile.activity_type,
    activity_description: profile.activity_description.to_string(),
    context: draft.scenario.name.to_string(),
    parameters: draft.parameters,
    questions,
    expected_observation: profile.expected_observation.to_string(),
    consigna,
    required_analysis: profile.required_analysis.iter().map(|s| s.to_string()).collect(),
    metadata: ExerciseMetadata {
      difficulty: difficulty.level().to_string(),
      category: profile.category.to_string(),
      tags,
      estimated_time: profile.base_minutes + 10 * (tier as u32 - 1),
      author: AUTHOR.to_string(),
      version: VERSION.to_string(),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{AnswerKey, ParamType, ParamValue};
  use crate::formulas;

  fn seeded(seed: u64) -> ExerciseGenerator<StdRng> {
    ExerciseGenerator::with_rng(StdRng::seed_from_u64(seed))
  }

  #[test]
  fn parameter_defaults_stay_in_domain_for_every_system_and_tier() {
    let mut generator = seeded(2024);
    for _ in 0..5 {
      for system in SystemId::ALL {
        for difficulty in Difficulty::ALL {
          let ex = generator.generate_for(system, difficulty).expect("generate");
          for p in &ex.parameters {
            match (&p.param_type, &p.default_value) {
              (ParamType::Selection, ParamValue::Choice(v)) => assert!(p.options.contains(v), "{system}/{}: {v}", p.name),
              (_, ParamValue::Number(v)) => {
                let (min, max) = (p.min_value.expect("min"), p.max_value.expect("max"));
                assert!(min <= *v && *v <= max, "{system}/{difficulty}: {} = {v} outside [{min}, {max}]", p.name);
              }
              other => panic!("{system}: mismatched parameter {other:?}"),
            }
          }
        }
      }
    }
  }

  #[test]
  fn generated_exercises_are_self_valid() {
    let mut generator = seeded(77);
    for _ in 0..5 {
      for system in SystemId::ALL {
        for difficulty in Difficulty::ALL {
          let ex = generator.generate_for(system, difficulty).expect("generate");
          let (ok, errors) = validator::validate(&ex);
          assert!(ok, "{system}/{difficulty}: {errors:?}");
          assert!(errors.is_empty());
          assert_eq!(ex.questions.len(), crate::pools::default_count(difficulty.tier()));
        }
      }
    }
  }

  #[test]
  fn same_seed_reproduces_the_exercise() {
    let a = seeded(5).generate("newton", "avanzado").expect("a");
    let b = seeded(5).generate("newton", "avanzado").expect("b");
    assert_eq!(a, b);
    assert!(a.id.starts_with("newton_"));
  }

  #[test]
  fn unknown_inputs_are_reported() {
    let mut generator = seeded(1);
    assert!(matches!(generator.generate("duffing", "intermedio"), Err(LabError::UnsupportedSystem { .. })));
    assert!(matches!(generator.generate("sir", "experto"), Err(LabError::UnknownDifficulty(_))));
    assert!(generator.generate_validated("Órbitas", "básico").is_ok());
  }

  #[test]
  fn beginner_sir_uses_fixed_parameters() {
    let ex = seeded(3).generate("sir", "principiante").expect("sir");
    assert_eq!(ex.value("beta"), Some(0.3));
    assert_eq!(ex.value("gamma"), Some(0.1));
    for q in &ex.questions {
      if let AnswerKey::Numeric { expected, .. } = q.answer {
        assert!((expected - 3.0).abs() < 1e-9, "R₀ should be 3, got {expected}");
      }
    }
  }

  #[test]
  fn advanced_sir_keeps_population_consistent() {
    let mut generator = seeded(8);
    for _ in 0..30 {
      let ex = generator.generate("sir", "avanzado").expect("sir");
      let total: f64 = ["S0", "I0", "R_ini"].iter().map(|n| ex.value(n).expect("value")).sum();
      assert_eq!(total, 1000.0);
      assert!(ex.value("R_ini").expect("r") >= 0.0);
    }
  }

  #[test]
  fn beginner_verhulst_matches_closed_form() {
    let mut generator = seeded(12);
    for _ in 0..20 {
      let ex = generator.generate("verhulst", "principiante").expect("verhulst");
      let r = ex.value("r").expect("r");
      let v = formulas::verhulst(r).expect("map");
      assert!(ex.consigna.iter().any(|l| l.contains(&format!("{:.4}", v.fixed_point))));
    }
  }

  #[test]
  fn resampling_gives_up_after_max_attempts() {
    let mut calls = 0;
    let result: Result<(), _> = with_resampling(SystemId::Newton, 3, || {
      calls += 1;
      Err(GenerationError::domain("tiempo objetivo", "T₀ = T_amb"))
    });
    assert_eq!(calls, 3);
    match result {
      Err(GenerationError::RetriesExhausted { system, attempts, .. }) => {
        assert_eq!(system, "newton");
        assert_eq!(attempts, 3);
      }
      other => panic!("unexpected: {other:?}"),
    }
  }

  #[test]
  fn resampling_recovers_from_a_bad_draw() {
    let mut calls = 0;
    let value = with_resampling(SystemId::Sir, 4, || {
      calls += 1;
      if calls < 3 { Err(GenerationError::domain("R₀", "γ = 0")) } else { Ok(calls) }
    })
    .expect("third draw succeeds");
    assert_eq!(value, 3);
  }

  #[test]
  fn metadata_scales_with_tier() {
    let mut generator = seeded(4);
    let basic = generator.generate("lorenz", "principiante").expect("basic");
    let advanced = generator.generate("lorenz", "avanzado").expect("advanced");
    assert_eq!(basic.metadata.difficulty, "BASICO");
    assert_eq!(advanced.metadata.estimated_time, basic.metadata.estimated_time + 20);
    assert!(advanced.metadata.tags.contains("avanzado"));
  }
}
