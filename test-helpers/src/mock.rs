//! Mock wellness data for collection tests.
//!
//! Two app users (Alice and Bob) with personal habit/journal data, and
//! one studio organisation with an exercise catalog, mirroring the two
//! halves of the product (consumer app, operator dashboard).

use jiff::Timestamp;
use jiff::civil::{Date, date};
use payloads::{
    CheckInJournalId, ExerciseId, HabitId, OrganisationId, UserId, requests,
    responses,
};

use crate::{InMemoryApi, StoreFixture};

pub const ALICE: UserId = UserId(1);
pub const BOB: UserId = UserId(2);
pub const SUNRISE_STUDIO: OrganisationId = OrganisationId(10);

/// Fixed timestamp so mock rows compare deterministically.
fn ts() -> Timestamp {
    Timestamp::from_second(1_740_000_000).expect("valid mock timestamp")
}

pub fn today() -> Date {
    date(2025, 3, 10)
}

pub fn habit_details(user: UserId, name: &str) -> payloads::Habit {
    payloads::Habit {
        user_id: user,
        name: name.to_string(),
        icon: None,
        times_per_week: 7,
        reminder: Some("07:30".to_string()),
    }
}

pub fn habit(id: i64, user: UserId, name: &str) -> responses::Habit {
    responses::Habit {
        habit_id: HabitId(id),
        habit_details: habit_details(user, name),
        streak: 0,
        created_at: ts(),
        updated_at: ts(),
    }
}

/// `count` habits for `user`, ids starting at `first_id`.
pub fn habits_for(
    user: UserId,
    first_id: i64,
    count: i64,
) -> Vec<responses::Habit> {
    (0..count)
        .map(|n| {
            habit(first_id + n, user, &format!("habit {}", first_id + n))
        })
        .collect()
}

pub fn exercise_details(
    organisation: OrganisationId,
    name: &str,
    muscle_group: &str,
) -> payloads::Exercise {
    payloads::Exercise {
        organisation_id: organisation,
        name: name.to_string(),
        description: None,
        muscle_group: Some(muscle_group.to_string()),
        equipment: None,
        video_url: None,
    }
}

pub fn exercise(
    id: i64,
    organisation: OrganisationId,
    name: &str,
    muscle_group: &str,
) -> responses::Exercise {
    responses::Exercise {
        exercise_id: ExerciseId(id),
        exercise_details: exercise_details(organisation, name, muscle_group),
        created_at: ts(),
        updated_at: ts(),
    }
}

pub fn check_in(
    id: i64,
    user: UserId,
    journal_date: Date,
    mood: i32,
) -> responses::CheckInJournal {
    responses::CheckInJournal {
        journal_id: CheckInJournalId(id),
        journal_details: payloads::CheckInJournal {
            user_id: user,
            journal_date,
            mood,
            energy: mood,
            note: None,
        },
        created_at: ts(),
        updated_at: ts(),
    }
}

/// An in-memory habit backend with create/update wired up.
pub fn habit_api() -> InMemoryApi<responses::Habit> {
    InMemoryApi::new(
        |id, draft: &payloads::Habit| responses::Habit {
            habit_id: HabitId(id),
            habit_details: draft.clone(),
            streak: 0,
            created_at: ts(),
            updated_at: ts(),
        },
        |patch: &requests::UpdateHabit| responses::Habit {
            habit_id: patch.habit_id,
            habit_details: patch.habit_details.clone(),
            streak: 0,
            created_at: ts(),
            updated_at: ts(),
        },
    )
}

pub fn exercise_api() -> InMemoryApi<responses::Exercise> {
    InMemoryApi::new(
        |id, draft: &payloads::Exercise| responses::Exercise {
            exercise_id: ExerciseId(id),
            exercise_details: draft.clone(),
            created_at: ts(),
            updated_at: ts(),
        },
        |patch: &requests::UpdateExercise| responses::Exercise {
            exercise_id: patch.exercise_id,
            exercise_details: patch.exercise_details.clone(),
            created_at: ts(),
            updated_at: ts(),
        },
    )
}

pub fn check_in_api() -> InMemoryApi<responses::CheckInJournal> {
    InMemoryApi::new(
        |id, draft: &payloads::CheckInJournal| responses::CheckInJournal {
            journal_id: CheckInJournalId(id),
            journal_details: draft.clone(),
            created_at: ts(),
            updated_at: ts(),
        },
        |patch: &requests::UpdateCheckInJournal| responses::CheckInJournal {
            journal_id: patch.journal_id,
            journal_details: patch.journal_details.clone(),
            created_at: ts(),
            updated_at: ts(),
        },
    )
}

pub fn habit_fixture(
    rows: Vec<responses::Habit>,
) -> StoreFixture<responses::Habit> {
    StoreFixture::new(habit_api().with_rows(rows))
}

pub fn exercise_fixture(
    rows: Vec<responses::Exercise>,
) -> StoreFixture<responses::Exercise> {
    StoreFixture::new(exercise_api().with_rows(rows))
}

pub fn check_in_fixture(
    rows: Vec<responses::CheckInJournal>,
) -> StoreFixture<responses::CheckInJournal> {
    StoreFixture::new(check_in_api().with_rows(rows))
}
