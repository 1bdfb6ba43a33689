use collection::PageOutcome;
use payloads::requests::Search;
use test_helpers::mock::{self, ALICE, SUNRISE_STUDIO};

#[tokio::test]
async fn refetching_a_page_is_idempotent() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 3));
    let store = &fixture.store;

    store.fetch_page(Some(ALICE), 0, 3).await;
    store.fetch_page(Some(ALICE), 0, 3).await;

    assert_eq!(store.len(), 3);

    Ok(())
}

#[tokio::test]
async fn overlapping_page_prepends_incoming() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 3));
    let store = &fixture.store;

    store.fetch_page(Some(ALICE), 0, 3).await;

    // Rows shifted server-side between pages, so the next page returns
    // an id the store already holds (3) plus a new one (4).
    let mut rows = mock::habits_for(ALICE, 7, 3);
    rows.push(mock::habit(3, ALICE, "habit 3"));
    rows.push(mock::habit(4, ALICE, "habit 4"));
    fixture.api.set_rows(rows);

    let outcome = store.fetch_page(Some(ALICE), 3, 3).await;
    assert_eq!(outcome, PageOutcome::Merged { fetched: 2 });

    // Incoming batch first, surviving older rows appended; id 3 once.
    let ids: Vec<i64> = store.items().iter().map(|h| h.habit_id.0).collect();
    assert_eq!(ids, vec![3, 4, 1, 2]);

    Ok(())
}

#[tokio::test]
async fn search_results_union_with_list_results() -> anyhow::Result<()> {
    let fixture = mock::exercise_fixture(vec![
        mock::exercise(1, SUNRISE_STUDIO, "Back squat", "legs"),
        mock::exercise(2, SUNRISE_STUDIO, "Bench press", "chest"),
        mock::exercise(3, SUNRISE_STUDIO, "Walking lunge", "legs"),
    ]);
    let store = &fixture.store;

    store.fetch_page(Some(SUNRISE_STUDIO), 0, 10).await;
    assert_eq!(store.len(), 3);

    // Search resolves through the same merge as a plain list fetch:
    // matches move to the front, non-matching rows stay held.
    let legs_only = Search::new().field("muscleGroup", "legs");
    let outcome = store
        .search_page(Some(SUNRISE_STUDIO), None, &legs_only, 0, 10)
        .await;
    assert_eq!(outcome, PageOutcome::Merged { fetched: 2 });
    assert_eq!(store.len(), 3);

    let ids: Vec<i64> =
        store.items().iter().map(|e| e.exercise_id.0).collect();
    assert_eq!(ids, vec![1, 3, 2]);

    Ok(())
}

#[tokio::test]
async fn clear_scopes_a_fresh_search() -> anyhow::Result<()> {
    let fixture = mock::exercise_fixture(vec![
        mock::exercise(1, SUNRISE_STUDIO, "Back squat", "legs"),
        mock::exercise(2, SUNRISE_STUDIO, "Bench press", "chest"),
    ]);
    let store = &fixture.store;

    store.fetch_page(Some(SUNRISE_STUDIO), 0, 10).await;
    assert_eq!(store.len(), 2);

    // Switching filter context: clear first so stale unfiltered rows
    // are not shown alongside the matches.
    store.clear();
    store
        .search_page(
            Some(SUNRISE_STUDIO),
            Some("squat"),
            &Search::new(),
            0,
            10,
        )
        .await;

    let ids: Vec<i64> =
        store.items().iter().map(|e| e.exercise_id.0).collect();
    assert_eq!(ids, vec![1]);

    Ok(())
}
