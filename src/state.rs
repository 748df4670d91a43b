//! Session state: the active exercise and the answers saved for it.
//!
//! This module owns:
//!   - the current exercise (at most one)
//!   - answers saved while the student works, keyed by question id
//!   - the last system/difficulty the student picked
//!   - whether the simulation was run for the current exercise
//!
//! One holder per session, passed explicitly. Setting a new exercise drops the
//! previous answers; last write wins.

use tracing::{debug, info, instrument};

use crate::domain::{Difficulty, Exercise};
use crate::evaluator::Answers;
use crate::systems::SystemId;

#[derive(Clone, Debug, Default)]
pub struct ExerciseState {
    current: Option<Exercise>,
    answers: Answers,
    selected_system: Option<SystemId>,
    selected_difficulty: Difficulty,
    simulation_ran: bool,
}

impl ExerciseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `exercise` the active one. Saved answers and the simulation flag reset.
    #[instrument(level = "info", skip_all, fields(id = %exercise.id))]
    pub fn set_current(&mut self, exercise: Exercise) {
        info!(target: "lab", system = %exercise.system, difficulty = %exercise.difficulty, "Active exercise set");
        self.selected_system = Some(exercise.system);
        self.selected_difficulty = exercise.difficulty;
        self.current = Some(exercise);
        self.answers.clear();
        self.simulation_ran = false;
    }

    pub fn get_current(&self) -> Option<&Exercise> {
        self.current.as_ref()
    }

    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_system(&self) -> Option<SystemId> {
        self.current.as_ref().map(|e| e.system)
    }

    /// "Título (DIFICULTAD)" for the active exercise.
    pub fn current_summary(&self) -> Option<String> {
        self.current.as_ref().map(Exercise::summary)
    }

    /// Overwrites any earlier answer to the same question.
    pub fn save_answer(&mut self, question_id: u32, value: impl Into<String>) {
        let value = value.into();
        debug!(target: "lab", question_id, value = %value, "Answer saved");
        self.answers.insert(question_id, value);
    }

    /// A copy; callers never alias the holder's map.
    pub fn get_saved_answers(&self) -> Answers {
        self.answers.clone()
    }

    pub fn clear(&mut self) {
        debug!(target: "lab", had_exercise = self.current.is_some(), "State cleared");
        self.current = None;
        self.answers.clear();
        self.simulation_ran = false;
    }

    pub fn set_selected_system(&mut self, system: SystemId) {
        self.selected_system = Some(system);
    }

    pub fn selected_system(&self) -> Option<SystemId> {
        self.selected_system
    }

    pub fn set_selected_difficulty(&mut self, difficulty: Difficulty) {
        self.selected_difficulty = difficulty;
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        self.selected_difficulty
    }

    pub fn set_simulation_ran(&mut self, ran: bool) {
        self.simulation_ran = ran;
    }

    pub fn simulation_ran(&self) -> bool {
        self.simulation_ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ExerciseGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn exercise(system: &str) -> Exercise {
        ExerciseGenerator::with_rng(StdRng::seed_from_u64(21))
            .generate(system, "avanzado")
            .expect("generate")
    }

    #[test]
    fn new_exercise_resets_answers() {
        let mut state = ExerciseState::new();
        state.set_current(exercise("hopf"));
        state.save_answer(1, "0.7");
        state.set_simulation_ran(true);
        assert_eq!(state.get_saved_answers().get(&1).map(String::as_str), Some("0.7"));

        state.set_current(exercise("sir"));
        assert!(state.get_saved_answers().is_empty());
        assert!(!state.simulation_ran());
        assert_eq!(state.current_system(), Some(SystemId::Sir));
        assert_eq!(state.selected_difficulty(), Difficulty::Avanzado);
    }

    #[test]
    fn saved_answers_are_a_copy() {
        let mut state = ExerciseState::new();
        state.save_answer(2, "1");
        let mut copy = state.get_saved_answers();
        copy.insert(3, "x".into());
        state.save_answer(2, "0");
        assert_eq!(state.get_saved_answers().len(), 1);
        assert_eq!(state.get_saved_answers()[&2], "0");
    }

    #[test]
    fn clear_forgets_everything_but_the_selection() {
        let mut state = ExerciseState::new();
        assert!(!state.has_current());
        assert_eq!(state.current_summary(), None);
        state.set_current(exercise("rlc"));
        assert_eq!(state.current_summary(), Some("Circuito RLC en Serie (AVANZADO)".to_string()));
        state.save_answer(1, "2");
        state.clear();
        assert!(state.get_current().is_none());
        assert!(state.get_saved_answers().is_empty());
        assert_eq!(state.selected_system(), Some(SystemId::Rlc));
    }
}
