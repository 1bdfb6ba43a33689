use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    CheckInJournalId, Collectable, ExerciseId, GratitudeJournalId, HabitId,
    MealId, MeditationId, OrganisationId, TodoListJournalId, UserId,
    WorkoutId, requests,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub exercise_id: ExerciseId,
    pub exercise_details: crate::Exercise,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub habit_id: HabitId,
    pub habit_details: crate::Habit,
    /// Consecutive days the habit has been kept, maintained server-side.
    pub streak: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub workout_id: WorkoutId,
    pub workout_details: crate::Workout,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meditation {
    pub meditation_id: MeditationId,
    pub meditation_details: crate::Meditation,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_id: MealId,
    pub meal_details: crate::Meal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoListJournal {
    pub journal_id: TodoListJournalId,
    pub journal_details: crate::TodoListJournal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GratitudeJournal {
    pub journal_id: GratitudeJournalId,
    pub journal_details: crate::GratitudeJournal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInJournal {
    pub journal_id: CheckInJournalId,
    pub journal_details: crate::CheckInJournal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Collectable for Exercise {
    type Id = ExerciseId;
    type Scope = OrganisationId;
    type Draft = crate::Exercise;
    type Patch = requests::UpdateExercise;

    const ENDPOINT: &'static str = "exercise";
    const SCOPE_PARAM: &'static str = "organisationId";

    fn id(&self) -> ExerciseId {
        self.exercise_id
    }

    fn scope(&self) -> OrganisationId {
        self.exercise_details.organisation_id
    }
}

impl Collectable for Habit {
    type Id = HabitId;
    type Scope = UserId;
    type Draft = crate::Habit;
    type Patch = requests::UpdateHabit;

    const ENDPOINT: &'static str = "habit";
    const SCOPE_PARAM: &'static str = "user";

    fn id(&self) -> HabitId {
        self.habit_id
    }

    fn scope(&self) -> UserId {
        self.habit_details.user_id
    }
}

impl Collectable for Workout {
    type Id = WorkoutId;
    type Scope = UserId;
    type Draft = crate::Workout;
    type Patch = requests::UpdateWorkout;

    const ENDPOINT: &'static str = "workout";
    const SCOPE_PARAM: &'static str = "user";

    fn id(&self) -> WorkoutId {
        self.workout_id
    }

    fn scope(&self) -> UserId {
        self.workout_details.user_id
    }
}

impl Collectable for Meditation {
    type Id = MeditationId;
    type Scope = UserId;
    type Draft = crate::Meditation;
    type Patch = requests::UpdateMeditation;

    const ENDPOINT: &'static str = "meditation";
    const SCOPE_PARAM: &'static str = "user";

    fn id(&self) -> MeditationId {
        self.meditation_id
    }

    fn scope(&self) -> UserId {
        self.meditation_details.user_id
    }
}

impl Collectable for Meal {
    type Id = MealId;
    type Scope = UserId;
    type Draft = crate::Meal;
    type Patch = requests::UpdateMeal;

    const ENDPOINT: &'static str = "meal";
    const SCOPE_PARAM: &'static str = "user";

    fn id(&self) -> MealId {
        self.meal_id
    }

    fn scope(&self) -> UserId {
        self.meal_details.user_id
    }
}

impl Collectable for TodoListJournal {
    type Id = TodoListJournalId;
    type Scope = UserId;
    type Draft = crate::TodoListJournal;
    type Patch = requests::UpdateTodoListJournal;

    const ENDPOINT: &'static str = "todo-list-journal";
    const SCOPE_PARAM: &'static str = "user";

    fn id(&self) -> TodoListJournalId {
        self.journal_id
    }

    fn scope(&self) -> UserId {
        self.journal_details.user_id
    }
}

impl Collectable for GratitudeJournal {
    type Id = GratitudeJournalId;
    type Scope = UserId;
    type Draft = crate::GratitudeJournal;
    type Patch = requests::UpdateGratitudeJournal;

    const ENDPOINT: &'static str = "gratitude-journal";
    const SCOPE_PARAM: &'static str = "user";

    fn id(&self) -> GratitudeJournalId {
        self.journal_id
    }

    fn scope(&self) -> UserId {
        self.journal_details.user_id
    }
}

impl Collectable for CheckInJournal {
    type Id = CheckInJournalId;
    type Scope = UserId;
    type Draft = crate::CheckInJournal;
    type Patch = requests::UpdateCheckInJournal;

    const ENDPOINT: &'static str = "check-in-journal";
    const SCOPE_PARAM: &'static str = "user";

    fn id(&self) -> CheckInJournalId {
        self.journal_id
    }

    fn scope(&self) -> UserId {
        self.journal_details.user_id
    }
}
