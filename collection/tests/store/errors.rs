use collection::{FetchStatus, PageOutcome};
use payloads::{HabitId, requests};
use test_helpers::mock::{self, ALICE};

#[tokio::test]
async fn failed_page_fetch_preserves_prior_pages() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 6));
    let pager = fixture.paginator(3);

    pager.ensure_initialised(Some(ALICE)).await;
    assert_eq!(fixture.store.len(), 3);

    fixture.api.fail_next("database on fire");
    assert_eq!(pager.load_more().await, PageOutcome::Failed);

    // Partial data is preferred over no data.
    assert_eq!(fixture.store.len(), 3);
    assert_eq!(fixture.store.status(), FetchStatus::Rejected);
    assert_eq!(
        fixture.store.last_error(),
        Some("database on fire".to_string())
    );

    // A failed page does not block future fetches, and success clears
    // the error.
    assert_eq!(pager.load_more().await, PageOutcome::Merged { fetched: 3 });
    assert_eq!(fixture.store.len(), 6);
    assert_eq!(fixture.store.status(), FetchStatus::Fulfilled);
    assert_eq!(fixture.store.last_error(), None);

    Ok(())
}

#[tokio::test]
async fn failed_update_leaves_row_unchanged() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 2));
    let store = &fixture.store;
    store.fetch_page(Some(ALICE), 0, 10).await;

    fixture.api.fail_next("validation failed");
    let result = store
        .update(&requests::UpdateHabit {
            habit_id: HabitId(2),
            habit_details: mock::habit_details(ALICE, "renamed"),
        })
        .await;

    assert_eq!(result, None);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(HabitId(2)).unwrap().habit_details.name, "habit 2");
    assert_eq!(store.last_error(), Some("validation failed".to_string()));

    // Dismissing the error banner keeps items and status.
    store.clear_error();
    assert_eq!(store.last_error(), None);
    assert_eq!(store.status(), FetchStatus::Rejected);
    assert_eq!(store.len(), 2);

    Ok(())
}

#[tokio::test]
async fn failed_delete_keeps_row() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 2));
    let store = &fixture.store;
    store.fetch_page(Some(ALICE), 0, 10).await;

    fixture.api.fail_next("forbidden");
    assert!(!store.delete(HabitId(1)).await);

    assert_eq!(store.len(), 2);
    assert!(store.get(HabitId(1)).is_some());
    assert_eq!(store.last_error(), Some("forbidden".to_string()));

    Ok(())
}

#[tokio::test]
async fn delete_of_missing_row_reports_not_found() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 2));
    let store = &fixture.store;
    store.fetch_page(Some(ALICE), 0, 10).await;

    assert!(!store.delete(HabitId(99)).await);
    assert_eq!(store.len(), 2);
    assert!(store.last_error().unwrap().contains("not found"));

    Ok(())
}

#[tokio::test]
async fn fetch_one_missing_sets_error() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(vec![]);
    let store = &fixture.store;

    assert_eq!(store.fetch_one(HabitId(1)).await, None);
    assert!(store.is_empty());
    assert_eq!(store.status(), FetchStatus::Rejected);
    assert!(store.last_error().unwrap().contains("habit not found"));

    Ok(())
}

#[tokio::test]
async fn failed_create_adds_nothing() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(vec![]);
    let store = &fixture.store;

    fixture.api.fail_next("quota exceeded");
    let created = store.create(&mock::habit_details(ALICE, "Run")).await;

    assert_eq!(created, None);
    assert!(store.is_empty());
    assert_eq!(store.last_error(), Some("quota exceeded".to_string()));

    Ok(())
}
