use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct UserId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct OrganisationId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct ExerciseId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct HabitId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct WorkoutId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct MeditationId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct MealId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct TodoListJournalId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct GratitudeJournalId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct CheckInJournalId(pub i64);

/// Contract for entity types served through the paged collection
/// endpoints.
///
/// Each implementor names its REST endpoint segment and the query
/// parameter used to filter a list by its owner scope (a user for
/// personal data, an organisation for operator-curated data). The
/// associated `Draft` and `Patch` types are the create and update
/// request bodies.
pub trait Collectable:
    Clone + PartialEq + Serialize + serde::de::DeserializeOwned + 'static
{
    type Id: Copy
        + Eq
        + std::hash::Hash
        + std::fmt::Display
        + Serialize
        + serde::de::DeserializeOwned
        + 'static;
    type Scope: Copy
        + Eq
        + std::hash::Hash
        + std::fmt::Display
        + Serialize
        + 'static;
    type Draft: Serialize;
    type Patch: Serialize;

    /// Kebab-case endpoint segment, e.g. `todo-list-journal`.
    const ENDPOINT: &'static str;
    /// Query parameter carrying the scope filter, e.g. `user`.
    const SCOPE_PARAM: &'static str;

    fn id(&self) -> Self::Id;
    fn scope(&self) -> Self::Scope;
}

/// An exercise in an operator's catalog (gym/studio dashboard).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub organisation_id: OrganisationId,
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub video_url: Option<String>,
}

/// A recurring habit a user is tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub user_id: UserId,
    pub name: String,
    pub icon: Option<String>,
    pub times_per_week: i32,
    /// Local reminder time as "HH:MM", if the user set one.
    pub reminder: Option<String>,
}

/// A logged workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub user_id: UserId,
    pub name: String,
    pub duration_minutes: i32,
    pub calories_burned: Option<i32>,
    pub performed_at: Timestamp,
    pub notes: Option<String>,
}

/// A completed meditation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meditation {
    pub user_id: UserId,
    pub title: String,
    pub duration_minutes: i32,
    pub guided: bool,
    pub completed_at: Timestamp,
}

/// A nutrition log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub user_id: UserId,
    pub name: String,
    pub eaten_at: Timestamp,
    pub calories: i32,
    pub protein_grams: Option<Decimal>,
    pub carbs_grams: Option<Decimal>,
    pub fat_grams: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoEntry {
    pub text: String,
    pub done: bool,
}

/// A day's todo-list journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoListJournal {
    pub user_id: UserId,
    pub title: String,
    pub journal_date: Date,
    pub entries: Vec<TodoEntry>,
}

/// A day's gratitude journal: short free-text entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GratitudeJournal {
    pub user_id: UserId,
    pub journal_date: Date,
    pub entries: Vec<String>,
}

/// A daily mood/energy check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInJournal {
    pub user_id: UserId,
    pub journal_date: Date,
    /// 1 (low) to 5 (high).
    pub mood: i32,
    /// 1 (low) to 5 (high).
    pub energy: i32,
    pub note: Option<String>,
}
