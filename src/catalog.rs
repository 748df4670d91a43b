//! In-memory catalog of exercises keyed by id.
//!
//! Exercises enter through `insert`, which runs the validator first, or
//! `insert_unchecked` for callers that already validated. Lookups by topic and
//! tag ignore case. Re-inserting an id replaces the stored exercise.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::{debug, info, instrument, warn};

use crate::domain::{Difficulty, Exercise};
use crate::error::ValidationFailure;
use crate::validator;

#[derive(Clone, Debug, Default)]
pub struct ExerciseCatalog {
    exercises: BTreeMap<String, Exercise>,
}

impl ExerciseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, then store. Nothing is stored when validation fails.
    #[instrument(level = "info", skip_all, fields(id = %exercise.id))]
    pub fn insert(&mut self, exercise: Exercise) -> Result<&Exercise, ValidationFailure> {
        if let Err(failure) = validator::ensure_valid(&exercise) {
            warn!(target: "exercise", errors = failure.errors.len(), "Rejected invalid exercise");
            return Err(failure);
        }
        Ok(self.insert_unchecked(exercise))
    }

    pub fn insert_unchecked(&mut self, exercise: Exercise) -> &Exercise {
        info!(target: "exercise", id = %exercise.id, system = %exercise.system, "Exercise stored");
        match self.exercises.entry(exercise.id.clone()) {
            Entry::Occupied(mut slot) => {
                debug!(target: "exercise", id = %slot.key(), "Replacing stored exercise");
                slot.insert(exercise);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(exercise),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.get(id)
    }

    /// Every stored exercise, in id order.
    pub fn all(&self) -> Vec<&Exercise> {
        self.exercises.values().collect()
    }

    pub fn by_topic(&self, topic: &str) -> Vec<&Exercise> {
        let topic = topic.to_lowercase();
        self.exercises.values().filter(|e| e.main_topic.to_lowercase() == topic).collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Exercise> {
        self.exercises.values().filter(|e| e.difficulty == difficulty).collect()
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&Exercise> {
        let tag = tag.to_lowercase();
        self.exercises
            .values()
            .filter(|e| e.metadata.tags.iter().any(|t| t.to_lowercase() == tag))
            .collect()
    }

    /// True when the id was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.exercises.remove(id).is_some();
        debug!(target: "exercise", id, removed, "Remove requested");
        removed
    }

    pub fn clear(&mut self) {
        self.exercises.clear();
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ExerciseGenerator;
    use crate::systems::SystemId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filled() -> ExerciseCatalog {
        let mut generator = ExerciseGenerator::with_rng(StdRng::seed_from_u64(8));
        let mut catalog = ExerciseCatalog::new();
        for (system, difficulty) in [
            (SystemId::Newton, Difficulty::Principiante),
            (SystemId::Sir, Difficulty::Intermedio),
            (SystemId::Sir, Difficulty::Avanzado),
            (SystemId::Hopf, Difficulty::Avanzado),
        ] {
            let exercise = generator.generate_for(system, difficulty).expect("generate");
            catalog.insert(exercise).expect("valid");
        }
        catalog
    }

    #[test]
    fn lookups_by_id_topic_difficulty_and_tag() {
        let catalog = filled();
        assert_eq!(catalog.len(), 4);
        let first = catalog.all()[0];
        assert_eq!(catalog.get(&first.id).map(|e| &e.id), Some(&first.id));
        assert!(catalog.get("no_existe").is_none());

        let topic = catalog.all().iter().find(|e| e.system == SystemId::Sir).expect("sir").main_topic.to_uppercase();
        assert_eq!(catalog.by_topic(&topic).len(), 2);
        assert_eq!(catalog.by_difficulty(Difficulty::Avanzado).len(), 2);
        assert_eq!(catalog.by_difficulty(Difficulty::Principiante).len(), 1);
        assert_eq!(catalog.by_tag("SIR").len(), 2);
        assert!(catalog.by_tag("inexistente").is_empty());
    }

    #[test]
    fn invalid_exercise_is_not_stored() {
        let mut catalog = filled();
        let mut broken = catalog.all()[0].clone();
        broken.id = "roto".into();
        broken.questions.clear();
        let err = catalog.insert(broken.clone()).expect_err("no questions");
        assert!(err.errors.contains(&"El ejercicio debe tener al menos una pregunta de análisis".to_string()));
        assert!(err.to_string().starts_with("El ejercicio no es válido:\n  - "));
        assert!(catalog.get("roto").is_none());

        catalog.insert_unchecked(broken);
        assert!(catalog.get("roto").is_some());
    }

    #[test]
    fn reinsert_replaces_and_remove_reports_presence() {
        let mut catalog = filled();
        let mut again = catalog.all()[0].clone();
        let id = again.id.clone();
        again.context = "otro contexto".into();
        catalog.insert(again).expect("valid");
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(&id).map(|e| e.context.as_str()), Some("otro contexto"));

        assert!(catalog.remove(&id));
        assert!(!catalog.remove(&id));
        catalog.clear();
        assert!(catalog.is_empty());
    }
}
