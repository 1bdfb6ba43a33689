use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    CheckInJournalId, ExerciseId, GratitudeJournalId, HabitId, MealId,
    MeditationId, TodoListJournalId, WorkoutId,
};

/// Structured multi-field filter posted as the body of a `-search`
/// endpoint.
///
/// Field names match the entity's wire fields; values are matched
/// server-side (exact for scalars, substring for text). The map is
/// ordered so serialized bodies are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Search {
    pub search: BTreeMap<String, String>,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.search.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExercise {
    pub exercise_id: ExerciseId,
    pub exercise_details: crate::Exercise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateHabit {
    pub habit_id: HabitId,
    pub habit_details: crate::Habit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWorkout {
    pub workout_id: WorkoutId,
    pub workout_details: crate::Workout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMeditation {
    pub meditation_id: MeditationId,
    pub meditation_details: crate::Meditation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMeal {
    pub meal_id: MealId,
    pub meal_details: crate::Meal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTodoListJournal {
    pub journal_id: TodoListJournalId,
    pub journal_details: crate::TodoListJournal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGratitudeJournal {
    pub journal_id: GratitudeJournalId,
    pub journal_details: crate::GratitudeJournal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCheckInJournal {
    pub journal_id: CheckInJournalId,
    pub journal_details: crate::CheckInJournal,
}
