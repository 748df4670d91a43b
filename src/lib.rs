//! dynlab · exercise generation and grading for a dynamical-systems lab
//!
//! - Randomized, tier-scaled exercises for eleven systems (Newton cooling,
//!   Van der Pol, SIR, RLC, Lorenz, Hopf, logistic growth, Verhulst map,
//!   Kepler orbits, Rössler, damped oscillator)
//! - Expected answers from closed forms, never from numeric integration
//! - Structural validation, grading, plain-text reports and suggestions
//! - An in-memory catalog with topic, difficulty and tag lookups
//!
//! ```no_run
//! let exercise = dynlab::generate("sir", "intermedio")?;
//! let (ok, _) = dynlab::validate(&exercise);
//! assert!(ok);
//! # Ok::<(), dynlab::LabError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod evaluator;
pub mod formulas;
pub mod generator;
pub mod pools;
pub mod report;
pub mod state;
pub mod systems;
pub mod telemetry;
pub mod util;
pub mod validator;

pub use catalog::ExerciseCatalog;
pub use domain::{AnswerKey, Difficulty, Exercise, Parameter, Question};
pub use error::{GenerationError, LabError, ValidationFailure};
pub use evaluator::{evaluate, Answers, EvaluationResult, QuestionOutcome};
pub use generator::ExerciseGenerator;
pub use report::{report, suggestions};
pub use state::ExerciseState;
pub use systems::SystemId;
pub use validator::validate;

/// One-shot generation with an entropy-seeded generator.
pub fn generate(system: &str, difficulty: &str) -> Result<Exercise, LabError> {
  ExerciseGenerator::new(&config::GenerationConfig::default()).generate(system, difficulty)
}
