//! Property-Based Tests for the Page Cache
//!
//! Uses proptest to check the size bound, insertion-order eviction and the
//! preload window against simple reference models.

use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use crate::cache::{PageCache, DEFAULT_MAX_CACHE_SIZE};
use crate::models::Note;
use crate::pagination::visible_pages;

// == Test Configuration ==
const TEST_EXPIRY: Duration = Duration::from_secs(300);

// == Strategies ==
fn page_strategy() -> impl Strategy<Value = u32> {
    1u32..30
}

/// (current, total) pairs covering small totals and every window branch
fn window_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..200).prop_flat_map(|total| (1u32..=total.max(1), Just(total)))
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { page: u32 },
    Get { page: u32 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        page_strategy().prop_map(|page| CacheOp::Set { page }),
        page_strategy().prop_map(|page| CacheOp::Get { page }),
    ]
}

fn page_notes(page: u32) -> Vec<Note> {
    vec![Note::new(format!("note on page {}", page), "body", None, None)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The cache never holds more than its bound, whatever the operation mix.
    #[test]
    fn prop_capacity_enforcement(
        ops in prop::collection::vec(cache_op_strategy(), 1..200),
        max_entries in 1usize..8
    ) {
        let mut cache = PageCache::new(max_entries, TEST_EXPIRY);

        for op in ops {
            match op {
                CacheOp::Set { page } => cache.set(page, page_notes(page), 30),
                CacheOp::Get { page } => { cache.get(page); }
            }
            prop_assert!(
                cache.len() <= max_entries,
                "Cache size {} exceeds max {}",
                cache.len(),
                max_entries
            );
        }
    }

    // Live pages always match a FIFO model that ignores reads.
    #[test]
    fn prop_insertion_order_eviction(
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = PageCache::new(DEFAULT_MAX_CACHE_SIZE, TEST_EXPIRY);
        let mut model: VecDeque<u32> = VecDeque::new();

        for op in ops {
            match op {
                CacheOp::Set { page } => {
                    cache.set(page, page_notes(page), 30);
                    if !model.contains(&page) {
                        model.push_back(page);
                    }
                    if model.len() > DEFAULT_MAX_CACHE_SIZE {
                        model.pop_front();
                    }
                }
                CacheOp::Get { page } => {
                    let found = cache.get(page).is_some();
                    prop_assert_eq!(found, model.contains(&page), "page {} presence mismatch", page);
                }
            }
        }

        for page in 1u32..30 {
            prop_assert_eq!(cache.get(page).is_some(), model.contains(&page));
        }
    }

    // The window is contiguous, ascending, in range and at most five wide.
    #[test]
    fn prop_visible_window_shape((current, total) in window_strategy()) {
        let window = visible_pages(current, total);

        prop_assert_eq!(window.len() as u32, total.min(5));
        prop_assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
        prop_assert!(window.iter().all(|p| *p >= 1 && *p <= total));
        if total > 0 {
            prop_assert!(window.contains(&current), "{:?} lacks page {}", window, current);
        }
    }

    // Preload returns exactly the uncached part of the window, in order.
    #[test]
    fn prop_preload_is_uncached_window(
        (current, total) in window_strategy(),
        cached in prop::collection::vec(1u32..200, 0..5)
    ) {
        let mut cache = PageCache::new(DEFAULT_MAX_CACHE_SIZE, TEST_EXPIRY);
        for page in &cached {
            cache.set(*page, page_notes(*page), total);
        }
        let cached: HashSet<u32> = cached.into_iter().collect();

        let pages = cache.preload_pages(current, total);
        let expected: Vec<u32> = visible_pages(current, total)
            .into_iter()
            .filter(|p| !cached.contains(p))
            .collect();

        prop_assert_eq!(pages, expected);
    }
}

// Concurrent writers through the shared handle keep the cache consistent.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_concurrent_writes_respect_bound(
        ops in prop::collection::vec(cache_op_strategy(), 10..50)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let cache = crate::cache::shared(PageCache::new(DEFAULT_MAX_CACHE_SIZE, TEST_EXPIRY));
            let mut handles = vec![];

            for op in ops {
                let cache = cache.clone();
                handles.push(tokio::spawn(async move {
                    let mut guard = cache.write().await;
                    match op {
                        CacheOp::Set { page } => guard.set(page, page_notes(page), 30),
                        CacheOp::Get { page } => {
                            if let Some(entry) = guard.get(page) {
                                assert_eq!(entry.notes.len(), 1);
                                assert_eq!(entry.notes[0].title, format!("note on page {}", page));
                            }
                        }
                    }
                }));
            }

            for handle in handles {
                handle.await.expect("Task should not panic");
            }

            let guard = cache.read().await;
            prop_assert!(guard.len() <= DEFAULT_MAX_CACHE_SIZE);
            Ok(())
        })?;
    }
}
