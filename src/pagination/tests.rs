//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use std::collections::VecDeque;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use test_case::test_case;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Item {
    id: u64,
}

fn envelope(offset: u64, total: u64, ids: Range<u64>) -> Envelope {
    let data: Vec<_> = ids.map(|id| json!({ "id": id })).collect();
    Envelope {
        total,
        offset,
        count: data.len() as u64,
        data,
    }
}

fn ids(page: &Page<Item>) -> Vec<u64> {
    page.items().iter().map(|item| item.id).collect()
}

/// Replays `pages` in order, recording every requested offset
async fn run_scripted(
    fetcher: PagedFetcher,
    pages: Vec<Result<Envelope>>,
) -> (Result<Page<Item>>, Vec<u64>) {
    let mut pages: VecDeque<_> = pages.into();
    let mut offsets = Vec::new();

    let result = fetcher
        .fetch_all(|request: PageRequest| {
            offsets.push(request.offset);
            let next = pages
                .pop_front()
                .unwrap_or_else(|| Err(Error::Other("no more scripted pages".to_string())));
            async move { next }
        })
        .await;

    (result, offsets)
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_page_default_is_empty() {
    let page: Page<Item> = Page::default();
    assert!(page.is_empty());
    assert_eq!(page.offset(), 0);
    assert_eq!(page.total(), 0);
    assert!(page.is_complete());
}

#[test]
fn test_page_append_keeps_order_and_duplicates() {
    let mut page = Page::new(10, 5);
    page.append(vec![3, 1]);
    page.append(vec![1, 2]);

    assert_eq!(page.items(), &[3, 1, 1, 2]);
    assert_eq!(page.offset(), 10);
    assert!(!page.is_complete());

    page.append(vec![9]);
    assert!(page.is_complete());
    assert_eq!(page.into_items(), vec![3, 1, 1, 2, 9]);
}

#[test]
fn test_page_append_does_not_check_total() {
    let mut page = Page::new(0, 1);
    page.append(vec!["a", "b", "c"]);
    assert_eq!(page.len(), 3);
    assert_eq!(page.total(), 1);
}

#[test]
fn test_page_iterates_in_order() {
    let mut page = Page::new(0, 2);
    page.append(vec!["x", "y"]);
    let borrowed: Vec<_> = (&page).into_iter().copied().collect();
    assert_eq!(borrowed, vec!["x", "y"]);
    let owned: Vec<_> = page.into_iter().collect();
    assert_eq!(owned, vec!["x", "y"]);
}

#[test_case(0 ; "zero")]
#[test_case(101 ; "above max")]
fn test_page_request_rejects_size(size: u32) {
    assert!(matches!(
        PageRequest::new(0, size),
        Err(Error::InvalidPageSize { size: s }) if s == size
    ));
    assert!(PagedFetcher::new(size).is_err());
}

#[test_case(1 ; "one")]
#[test_case(100 ; "max")]
fn test_page_request_accepts_size(size: u32) {
    let request = PageRequest::first(size).unwrap();
    assert_eq!(request.offset, 0);
    assert_eq!(request.count, size);
    assert_eq!(PagedFetcher::new(size).unwrap().page_size(), size);
}

#[test]
fn test_fetcher_default_page_size() {
    assert_eq!(PagedFetcher::default().page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
}

// ============================================================================
// Envelope Tests
// ============================================================================

fn object(value: serde_json::Value) -> crate::types::JsonObject {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_envelope_flat_data() {
    let response = object(json!({
        "total": 3, "offset": 1, "count": 2,
        "data": [{"id": 1}, {"id": 2}]
    }));
    let env = Envelope::from_response(response, None).unwrap();
    assert_eq!(env.total, 3);
    assert_eq!(env.offset, 1);
    assert_eq!(env.count, 2);
    assert_eq!(env.received(), 2);
}

#[test]
fn test_envelope_nested_data() {
    let response = object(json!({
        "total": 1, "offset": 0, "count": 1,
        "data": {"devices": [{"id": 7}]}
    }));
    let env = Envelope::from_response(response, Some("devices")).unwrap();
    let page: Page<Item> = env.into_page().unwrap();
    assert_eq!(ids(&page), vec![7]);
    assert_eq!(page.total(), 1);
}

#[test_case(json!({"offset": 0, "count": 0, "data": []}), None ; "missing total")]
#[test_case(json!({"total": 0, "count": 0, "data": []}), None ; "missing offset")]
#[test_case(json!({"total": 0, "offset": 0, "data": []}), None ; "missing count")]
#[test_case(json!({"total": 0, "offset": 0, "count": 0}), None ; "missing data")]
#[test_case(json!({"total": -1, "offset": 0, "count": 0, "data": []}), None ; "negative total")]
#[test_case(json!({"total": "5", "offset": 0, "count": 0, "data": []}), None ; "string total")]
#[test_case(json!({"total": 0, "offset": 0, "count": 0, "data": {}}), None ; "object data")]
#[test_case(json!({"total": 0, "offset": 0, "count": 0, "data": []}), Some("tags") ; "array where object expected")]
#[test_case(json!({"total": 0, "offset": 0, "count": 0, "data": {"other": []}}), Some("tags") ; "missing nested key")]
fn test_envelope_unexpected_format(response: serde_json::Value, key: Option<&str>) {
    let result = Envelope::from_response(object(response), key);
    assert!(matches!(result, Err(Error::UnexpectedFormat { .. })));
}

#[test]
fn test_envelope_count_mismatch() {
    let mut env = envelope(0, 10, 0..3);
    env.count = 4;
    let result: Result<Vec<Item>> = env.into_items();
    assert!(matches!(
        result,
        Err(Error::CountMismatch {
            declared: 4,
            received: 3
        })
    ));
}

#[test]
fn test_envelope_invalid_items() {
    let mut env = envelope(0, 3, 0..3);
    env.data[1] = json!({"id": "not-a-number"});
    let result: Result<Vec<Item>> = env.into_items();
    assert!(matches!(result, Err(Error::InvalidItem { index: 1, .. })));

    let mut env = envelope(0, 3, 0..3);
    env.data[2] = json!([1]);
    let result: Result<Vec<Item>> = env.into_items();
    assert!(matches!(result, Err(Error::InvalidItem { index: 2, .. })));
}

// ============================================================================
// PagedFetcher Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_all_three_pages() {
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![
            Ok(envelope(0, 225, 0..100)),
            Ok(envelope(100, 225, 100..200)),
            Ok(envelope(200, 225, 200..225)),
        ],
    )
    .await;

    let page = result.unwrap();
    assert_eq!(offsets, vec![0, 100, 200]);
    assert_eq!(page.len(), 225);
    assert_eq!(page.total(), 225);
    assert_eq!(page.offset(), 0);
    assert_eq!(ids(&page), (0..225_u64).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_fetch_all_advances_offset_by_items_received() {
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![Ok(envelope(0, 150, 0..100)), Ok(envelope(100, 150, 100..150))],
    )
    .await;

    assert_eq!(offsets, vec![0, 100]);
    assert_eq!(result.unwrap().len(), 150);
}

#[tokio::test]
async fn test_fetch_all_follows_served_offset() {
    // Server serves a shorter page than asked and reports its own offset.
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![Ok(envelope(0, 60, 0..40)), Ok(envelope(40, 60, 40..60))],
    )
    .await;

    assert_eq!(offsets, vec![0, 40]);
    assert_eq!(result.unwrap().len(), 60);
}

#[tokio::test]
async fn test_fetch_all_single_page() {
    let (result, offsets) =
        run_scripted(PagedFetcher::default(), vec![Ok(envelope(0, 12, 0..12))]).await;

    assert_eq!(offsets, vec![0]);
    assert_eq!(result.unwrap().len(), 12);
}

#[tokio::test]
async fn test_fetch_all_empty_collection() {
    let (result, offsets) =
        run_scripted(PagedFetcher::default(), vec![Ok(envelope(0, 0, 0..0))]).await;

    assert_eq!(offsets, vec![0]);
    let page = result.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total(), 0);
}

#[tokio::test]
async fn test_fetch_all_transport_error_is_first_and_only_call() {
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![Err(Error::http_status(503, "unavailable")), Ok(envelope(0, 1, 0..1))],
    )
    .await;

    assert_eq!(offsets, vec![0]);
    assert!(matches!(result, Err(Error::HttpStatus { status: 503, .. })));
}

#[tokio::test]
async fn test_fetch_all_count_mismatch_aborts() {
    let mut bad = envelope(100, 300, 100..200);
    bad.count = 99;
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![Ok(envelope(0, 300, 0..100)), Ok(bad), Ok(envelope(200, 300, 200..300))],
    )
    .await;

    assert_eq!(offsets, vec![0, 100]);
    assert!(matches!(result, Err(Error::CountMismatch { .. })));
}

#[tokio::test]
async fn test_fetch_all_invalid_item_aborts() {
    let mut bad = envelope(100, 300, 100..200);
    bad.data[50] = json!({"name": "no id"});
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![Ok(envelope(0, 300, 0..100)), Ok(bad), Ok(envelope(200, 300, 200..300))],
    )
    .await;

    assert_eq!(offsets, vec![0, 100]);
    assert!(matches!(result, Err(Error::InvalidItem { index: 50, .. })));
}

#[tokio::test]
async fn test_fetch_all_latest_total_wins() {
    // Collection grows while being walked.
    let (result, offsets) = run_scripted(
        PagedFetcher::new(50).unwrap(),
        vec![
            Ok(envelope(0, 80, 0..50)),
            Ok(envelope(50, 110, 50..100)),
            Ok(envelope(100, 110, 100..110)),
        ],
    )
    .await;

    assert_eq!(offsets, vec![0, 50, 100]);
    let page = result.unwrap();
    assert_eq!(page.total(), 110);
    assert_eq!(page.len(), 110);
}

#[tokio::test]
async fn test_fetch_all_stops_when_total_shrinks() {
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![Ok(envelope(0, 250, 0..100)), Ok(envelope(100, 150, 100..200))],
    )
    .await;

    assert_eq!(offsets, vec![0, 100]);
    let page = result.unwrap();
    assert_eq!(page.total(), 150);
    assert_eq!(page.len(), 200);
}

#[tokio::test]
async fn test_fetch_all_rejects_non_progressing_server() {
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![
            Ok(envelope(0, 150, 0..100)),
            Ok(envelope(100, 150, 0..0)),
            Ok(envelope(100, 150, 0..0)),
        ],
    )
    .await;

    assert_eq!(offsets, vec![0, 100]);
    assert!(matches!(
        result,
        Err(Error::NoProgress {
            offset: 100,
            total: 150
        })
    ));
}

#[tokio::test]
async fn test_fetch_all_rejects_overflowing_offset() {
    let (result, offsets) = run_scripted(
        PagedFetcher::default(),
        vec![Ok(envelope(u64::MAX, 10, 0..1))],
    )
    .await;

    assert_eq!(offsets, vec![0]);
    assert!(matches!(result, Err(Error::UnexpectedFormat { .. })));
}

#[tokio::test]
async fn test_fetch_all_from_seeded_page() {
    let mut seed = Page::new(0, 150);
    seed.append(vec![Item { id: 0 }]);

    let mut offsets = Vec::new();
    let page = PagedFetcher::default()
        .fetch_all_from(seed, 1, |request: PageRequest| {
            offsets.push(request.offset);
            async move { Ok(envelope(request.offset, 150, request.offset..150)) }
        })
        .await
        .unwrap();

    assert_eq!(offsets, vec![1]);
    assert_eq!(ids(&page), (0..150_u64).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_fetch_all_requests_configured_page_size() {
    let mut counts = Vec::new();
    let page: Page<Item> = PagedFetcher::new(25)
        .unwrap()
        .fetch_all(|request: PageRequest| {
            counts.push(request.count);
            let end = (request.offset + 25).min(60);
            async move { Ok(envelope(request.offset, 60, request.offset..end)) }
        })
        .await
        .unwrap();

    assert_eq!(counts, vec![25, 25, 25]);
    assert_eq!(page.len(), 60);
}

#[tokio::test]
async fn test_dropping_fetch_stops_further_requests() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let fetcher = PagedFetcher::default();
    let fetch = fetcher.fetch_all::<Item, _, _>(move |_request| {
        let call = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if call == 0 {
                Ok(envelope(0, 300, 0..100))
            } else {
                std::future::pending::<Result<Envelope>>().await
            }
        }
    });

    let result = tokio::time::timeout(Duration::from_millis(50), fetch).await;
    assert!(result.is_err());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_independent_fetches_run_concurrently() {
    let fetcher = PagedFetcher::new(10).unwrap();

    let users = fetcher.fetch_all::<Item, _, _>(|request: PageRequest| async move {
        let end = (request.offset + 10).min(25);
        Ok(envelope(request.offset, 25, request.offset..end))
    });
    let rules = fetcher.fetch_all::<Item, _, _>(|request: PageRequest| async move {
        let start = 1000 + request.offset;
        Ok(envelope(request.offset, 5, start..start + 5))
    });

    let (users, rules) = futures::join!(users, rules);
    assert_eq!(users.unwrap().len(), 25);
    assert_eq!(ids(&rules.unwrap()), vec![1000, 1001, 1002, 1003, 1004]);
}

#[test]
fn test_fetch_all_with_ready_pages_blocks_to_completion() {
    let page: Page<Item> = tokio_test::block_on(PagedFetcher::new(2).unwrap().fetch_all(
        |request: PageRequest| async move {
            let end = (request.offset + 2).min(3);
            Ok(envelope(request.offset, 3, request.offset..end))
        },
    ))
    .unwrap();

    assert_eq!(ids(&page), vec![0, 1, 2]);
}
