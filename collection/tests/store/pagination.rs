use collection::PageOutcome;
use futures::join;
use payloads::HabitId;
use test_helpers::mock::{self, ALICE, BOB};

#[tokio::test]
async fn load_more_offsets_are_monotonic() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 7));
    let pager = fixture.paginator(3);

    pager.ensure_initialised(Some(ALICE)).await;
    assert_eq!(pager.load_more().await, PageOutcome::Merged { fetched: 3 });

    // A short page signals exhaustion to the caller.
    assert_eq!(pager.load_more().await, PageOutcome::Merged { fetched: 1 });
    assert_eq!(fixture.store.len(), 7);

    assert_eq!(fixture.api.list_calls(), vec![(0, 3), (3, 3), (6, 3)]);

    Ok(())
}

#[tokio::test]
async fn refresh_refetches_the_last_window() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 4));
    let pager = fixture.paginator(3);

    pager.ensure_initialised(Some(ALICE)).await;
    pager.load_more().await;
    assert_eq!(fixture.store.len(), 4);

    // A row changed server-side after it was loaded.
    fixture.api.replace_row(mock::habit(4, ALICE, "renamed"));

    pager.refresh().await;

    assert_eq!(fixture.api.list_calls().last(), Some(&(1, 3)));
    assert_eq!(fixture.store.len(), 4);
    assert_eq!(
        fixture.store.get(HabitId(4)).unwrap().habit_details.name,
        "renamed"
    );

    Ok(())
}

#[tokio::test]
async fn scope_change_restarts_pagination() -> anyhow::Result<()> {
    let mut rows = mock::habits_for(ALICE, 1, 3);
    rows.extend(mock::habits_for(BOB, 4, 2));
    let fixture = mock::habit_fixture(rows);
    let pager = fixture.paginator(3);

    pager.ensure_initialised(Some(ALICE)).await;
    assert_eq!(pager.results().map(|habits| habits.len()), Some(3));

    // Switching user refetches from offset 0 for the new scope.
    let outcome = pager.ensure_initialised(Some(BOB)).await;
    assert_eq!(outcome, Some(PageOutcome::Merged { fetched: 2 }));
    assert_eq!(fixture.api.list_calls(), vec![(0, 3), (0, 3)]);

    // The view is partitioned by scope; the store still holds the old
    // rows until the caller clears it.
    assert_eq!(pager.results().map(|habits| habits.len()), Some(2));
    assert_eq!(fixture.store.len(), 5);
    assert_eq!(
        fixture.store.by_scope(Some(ALICE)).map(|habits| habits.len()),
        Some(3)
    );

    fixture.store.clear();
    assert_eq!(fixture.store.len(), 0);

    Ok(())
}

#[tokio::test]
async fn no_fetch_until_a_scope_is_chosen() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 3));
    let pager = fixture.paginator(3);

    assert_eq!(pager.ensure_initialised(None).await, None);
    assert!(!pager.initialised());
    assert_eq!(pager.results(), None);
    assert!(fixture.api.list_calls().is_empty());

    Ok(())
}

#[tokio::test]
async fn ensure_initialised_fetches_once_per_scope() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 3));
    let pager = fixture.paginator(3);

    assert!(pager.ensure_initialised(Some(ALICE)).await.is_some());
    assert_eq!(pager.ensure_initialised(Some(ALICE)).await, None);
    assert_eq!(pager.ensure_initialised(Some(ALICE)).await, None);

    assert_eq!(fixture.api.list_calls().len(), 1);

    Ok(())
}

#[tokio::test]
async fn concurrent_same_offset_fetches_coalesce() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 3));
    let store = &fixture.store;

    // Two rapid load-mores for the same offset: only one request goes
    // out, the other coalesces.
    let (first, second) = join!(
        store.fetch_page(Some(ALICE), 0, 3),
        store.fetch_page(Some(ALICE), 0, 3),
    );

    assert_eq!(first, PageOutcome::Merged { fetched: 3 });
    assert_eq!(second, PageOutcome::Coalesced);
    assert_eq!(fixture.api.list_calls().len(), 1);
    assert_eq!(store.len(), 3);

    Ok(())
}

#[tokio::test]
async fn scope_switch_during_initial_fetch_still_loads() -> anyhow::Result<()> {
    let mut rows = mock::habits_for(ALICE, 1, 3);
    rows.extend(mock::habits_for(BOB, 4, 2));
    let fixture = mock::habit_fixture(rows);
    let pager = fixture.paginator(3);

    // The user switches scope while the first scope's initial page is
    // still in flight; both fetches must go out.
    let (first, second) = join!(
        pager.ensure_initialised(Some(ALICE)),
        pager.ensure_initialised(Some(BOB)),
    );

    assert_eq!(first, Some(PageOutcome::Merged { fetched: 3 }));
    assert_eq!(second, Some(PageOutcome::Merged { fetched: 2 }));
    assert_eq!(fixture.api.list_calls(), vec![(0, 3), (0, 3)]);
    assert_eq!(pager.results().map(|habits| habits.len()), Some(2));

    Ok(())
}

#[tokio::test]
async fn different_offset_fetches_both_land() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 6));
    let store = &fixture.store;

    let (first, second) = join!(
        store.fetch_page(Some(ALICE), 0, 3),
        store.fetch_page(Some(ALICE), 3, 3),
    );

    assert_eq!(first, PageOutcome::Merged { fetched: 3 });
    assert_eq!(second, PageOutcome::Merged { fetched: 3 });
    assert_eq!(store.len(), 6);

    Ok(())
}
