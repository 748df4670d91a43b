//! dynlab · demo driver
//!
//! Generates one exercise, prints its consigna (or JSON), and grades an answer
//! sheet when one is configured.
//!
//! Important env variables:
//!   LAB_CONFIG_PATH : path to TOML config ([generation] + [session])
//!   LOG_LEVEL       : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT      : "pretty" (default) or "json"

use dynlab::config::{load_answers, load_config_from_env, LabConfig, OutputFormat};
use dynlab::{evaluate, report, suggestions, validate, Difficulty, ExerciseGenerator, ExerciseState, SystemId};
use tracing::{info, instrument, warn};

#[instrument(level = "info", skip_all)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
  dynlab::telemetry::init_tracing();

  let cfg = load_config_from_env().unwrap_or_default();
  let mut generator = ExerciseGenerator::new(&cfg.generation);

  if cfg.session.self_check {
    return self_check(&mut generator);
  }

  let exercise = generator.generate_validated(&cfg.session.system, &cfg.session.difficulty)?;
  let mut state = ExerciseState::new();
  state.set_current(exercise);
  let Some(exercise) = state.get_current() else { return Ok(()) };

  match cfg.session.output {
    OutputFormat::Json => println!("{}", exercise.to_json()?),
    OutputFormat::Text => {
      println!("{}", exercise.summary());
      println!("{}", exercise.educational_objective);
      println!();
      for line in &exercise.consigna {
        println!("{line}");
      }
    }
  }

  grade_if_configured(&cfg, &mut state)
}

fn grade_if_configured(cfg: &LabConfig, state: &mut ExerciseState) -> Result<(), Box<dyn std::error::Error>> {
  let Some(path) = cfg.session.answers_path.as_deref() else {
    info!(target: "lab", "No answer sheet configured; skipping grading");
    return Ok(());
  };
  for (id, value) in load_answers(path)? {
    state.save_answer(id, value);
  }
  let Some(exercise) = state.get_current() else { return Ok(()) };
  let result = evaluate(exercise, &state.get_saved_answers());
  info!(target: "lab", correct = result.correct_count(), total = result.outcomes.len(), "Answer sheet graded");

  match cfg.session.output {
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    OutputFormat::Text => {
      println!();
      println!("{}", report(exercise, &result));
      println!();
      println!("SUGERENCIAS:");
      for tip in suggestions(exercise, &result) {
        println!("  - {tip}");
      }
    }
  }
  Ok(())
}

/// Generate and validate every system at every difficulty once.
fn self_check(generator: &mut ExerciseGenerator) -> Result<(), Box<dyn std::error::Error>> {
  let mut failures = 0usize;
  for system in SystemId::ALL {
    for difficulty in Difficulty::ALL {
      let exercise = generator.generate_for(system, difficulty)?;
      let (ok, errors) = validate(&exercise);
      if ok {
        println!("OK    {:<14} {:<13} {} preguntas", system, difficulty, exercise.questions.len());
      } else {
        failures += 1;
        warn!(target: "lab", %system, %difficulty, ?errors, "Self-check failed");
        println!("FALLA {:<14} {:<13} {}", system, difficulty, errors.join("; "));
      }
    }
  }
  info!(target: "lab", failures, "Self-check finished");
  if failures > 0 {
    return Err(format!("{failures} combinaciones no superaron la validación").into());
  }
  Ok(())
}
