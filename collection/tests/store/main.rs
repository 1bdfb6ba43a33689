mod errors;
mod merge;
mod pagination;

use collection::PageOutcome;
use test_helpers::mock::{self, ALICE};

#[tokio::test]
async fn initial_fetch_populates_store() -> anyhow::Result<()> {
    let fixture = mock::habit_fixture(mock::habits_for(ALICE, 1, 3));
    let pager = fixture.paginator(10);

    let outcome = pager.ensure_initialised(Some(ALICE)).await;

    assert_eq!(outcome, Some(PageOutcome::Merged { fetched: 3 }));
    assert!(pager.initialised());
    assert_eq!(fixture.store.len(), 3);
    assert_eq!(pager.results().map(|habits| habits.len()), Some(3));

    Ok(())
}
