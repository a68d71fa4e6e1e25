mod common;

use common::{meals, FakeProvider};
use mealdb_search::{LiveSearch, LiveSearchConfig, LiveState};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn live(provider: Arc<FakeProvider>) -> LiveSearch {
    LiveSearch::new(provider, LiveSearchConfig::default())
}

fn ready_query(state: &LiveState) -> Option<&str> {
    match state {
        LiveState::Ready { query, .. } => Some(query),
        _ => None,
    }
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_within_debounce_fetch_once() {
    let provider = Arc::new(
        FakeProvider::new().with_name("chick", meals(&["Chicken Handi", "Spicy Chickpeas"])),
    );
    let search = live(provider.clone());

    search.input("chi");
    sleep(Duration::from_millis(100)).await;
    search.input("chic");
    sleep(Duration::from_millis(100)).await;
    let seq = search.input("chick");

    sleep(Duration::from_millis(299)).await;
    assert!(provider.calls().is_empty());

    sleep(Duration::from_millis(50)).await;
    assert_eq!(provider.calls(), vec!["name:chick"]);

    let state = search.state();
    assert_eq!(state.seq(), Some(seq));
    let suggestions = state.suggestions().unwrap();
    assert_eq!(suggestions.starts_with[0].name(), "Chicken Handi");
    assert_eq!(suggestions.contains[0].name(), "Spicy Chickpeas");
}

#[tokio::test(start_paused = true)]
async fn test_slow_earlier_response_never_overwrites_newer_query() {
    let provider = Arc::new(
        FakeProvider::new()
            .with_name("pas", meals(&["Pasta Bake"]))
            .with_delay("pas", Duration::from_secs(2))
            .with_name("pasta", meals(&["Pasta e Fagioli"]))
            .with_delay("pasta", Duration::from_millis(10)),
    );
    let search = live(provider.clone());

    search.input("pas");
    sleep(Duration::from_millis(400)).await;
    assert!(search.state().is_loading());
    assert_eq!(search.state().query(), Some("pas"));

    search.input("pasta");
    sleep(Duration::from_secs(5)).await;

    assert_eq!(provider.calls(), vec!["name:pas", "name:pasta"]);
    assert_eq!(ready_query(&search.state()), Some("pasta"));
    assert!(!search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_short_input_clears_suggestions() {
    let provider = Arc::new(FakeProvider::new().with_name("soup", meals(&["Soup"])));
    let search = live(provider.clone());

    search.input("soup");
    sleep(Duration::from_millis(500)).await;
    assert_eq!(ready_query(&search.state()), Some("soup"));

    search.input("so");
    assert_eq!(search.state(), LiveState::Idle);
    assert!(search.last_scheduled().is_none());

    sleep(Duration::from_secs(1)).await;
    assert_eq!(provider.calls(), vec!["name:soup"]);
}

#[tokio::test(start_paused = true)]
async fn test_min_length_counts_chars_not_bytes() {
    let provider = Arc::new(FakeProvider::new());
    let search = live(provider.clone());

    // two chars, four bytes
    search.input("éé");
    sleep(Duration::from_secs(1)).await;
    assert!(provider.calls().is_empty());

    search.input("ééé");
    sleep(Duration::from_secs(1)).await;
    assert_eq!(provider.calls(), vec!["name:ééé"]);
}

#[tokio::test(start_paused = true)]
async fn test_provider_failure_is_reported() {
    let provider = Arc::new(FakeProvider::new().failing_on("broken"));
    let search = live(provider);

    let seq = search.input("broken");
    sleep(Duration::from_secs(1)).await;

    match search.state() {
        LiveState::Failed {
            seq: failed_seq,
            query,
            message,
        } => {
            assert_eq!(failed_seq, seq);
            assert_eq!(query, "broken");
            assert!(message.contains("fake failure"));
        }
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_pending_fetch() {
    let provider = Arc::new(FakeProvider::new().with_name("stew", meals(&["Beef Stew"])));
    let search = live(provider.clone());

    search.input("stew");
    assert!(search.is_pending());
    assert!(search.last_scheduled().is_some());
    search.cancel();

    sleep(Duration::from_secs(1)).await;
    assert!(provider.calls().is_empty());
    assert_eq!(search.state(), LiveState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_loading_then_ready() {
    let provider = Arc::new(
        FakeProvider::new()
            .with_name("tart", meals(&["Tarte Tatin", "Bakewell tart"]))
            .with_delay("tart", Duration::from_millis(100)),
    );
    let search = live(provider);
    let mut rx = search.subscribe();

    search.input("tart");

    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_loading());

    rx.changed().await.unwrap();
    let state = rx.borrow_and_update().clone();
    assert_eq!(ready_query(&state), Some("tart"));
    assert_eq!(state.suggestions().unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_sequence_numbers_increase() {
    let search = live(Arc::new(FakeProvider::new()));

    let first = search.input("a");
    let second = search.input("abc");
    assert!(second > first);
    assert_eq!(search.latest_seq(), second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inputs_settle_on_latest_stamp() {
    let queries: Vec<String> = (0..8).map(|i| format!("soup {}", i)).collect();

    for _ in 0..25 {
        let provider = queries.iter().fold(FakeProvider::new(), |provider, query| {
            provider.with_name(query, meals(&["Soup of the Day"]))
        });
        let settings = LiveSearchConfig {
            debounce_ms: 5,
            ..LiveSearchConfig::default()
        };
        let search = Arc::new(LiveSearch::new(Arc::new(provider), settings));
        let barrier = Arc::new(tokio::sync::Barrier::new(queries.len()));

        let handles: Vec<_> = queries
            .iter()
            .cloned()
            .map(|query| {
                let search = Arc::clone(&search);
                let barrier = Arc::clone(&barrier);
                tokio::spawn(async move {
                    barrier.wait().await;
                    search.input(&query)
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let latest = search.latest_seq();
        assert_eq!(latest, queries.len() as u64);

        let mut rx = search.subscribe();
        let settled = tokio::time::timeout(Duration::from_secs(5), async {
            rx.wait_for(|state| {
                matches!(state, LiveState::Ready { .. }) && state.seq() == Some(latest)
            })
            .await
            .map(|state| state.clone())
        })
        .await
        .expect("newest input never produced suggestions")
        .unwrap();

        assert_eq!(settled.seq(), Some(search.latest_seq()));
        assert!(ready_query(&settled).is_some_and(|q| q.starts_with("soup ")));
    }
}
