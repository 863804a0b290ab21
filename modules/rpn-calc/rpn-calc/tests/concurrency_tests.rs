#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::integer_division,
    clippy::cast_precision_loss
)]

//! Concurrency tests: many threads against one registry

mod common;

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use common::{create_client, create_service_with};
use rpn_calc::RpnCalcClient;
use rpn_calc::config::RpnCalcConfig;

const THREADS: usize = 8;
const ROUNDS: usize = 200;

#[test]
fn test_concurrent_create_yields_distinct_handles() {
    let client = create_client();
    let barrier = Barrier::new(THREADS);

    let per_thread: Vec<Vec<_>> = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    let mut kept = Vec::new();
                    for i in 0..ROUNDS {
                        let h = client.create().unwrap();
                        if i % 2 == 0 {
                            client.delete(h).unwrap();
                        } else {
                            kept.push(h);
                        }
                    }
                    kept
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    let all: Vec<_> = per_thread.into_iter().flatten().collect();
    let unique: HashSet<_> = all.iter().copied().collect();
    assert_eq!(all.len(), THREADS * ROUNDS / 2);
    assert_eq!(unique.len(), all.len());
    for h in &all {
        assert_eq!(client.size(*h).unwrap(), 0);
    }
}

#[test]
fn test_private_calculators_are_isolated() {
    let client = create_client();

    thread::scope(|s| {
        for t in 0..THREADS {
            let client = &client;
            s.spawn(move || {
                let h = client.create().unwrap();
                let base = f64::from(u32::try_from(t).unwrap());
                for _ in 0..ROUNDS {
                    client.push(h, base).unwrap();
                    client.push(h, 1.0).unwrap();
                    assert_eq!(client.apply(h, '+').unwrap(), base + 1.0);
                    assert_eq!(client.pop(h).unwrap(), base + 1.0);
                    assert_eq!(client.size(h).unwrap(), 0);
                }
                client.delete(h).unwrap();
            });
        }
    });
}

#[test]
fn test_shared_calculator_keeps_size_consistent() {
    let client = create_client();
    let h = client.create().unwrap();

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..ROUNDS {
                    client.push(h, 1.0).unwrap();
                }
            });
        }
    });
    assert_eq!(client.size(h).unwrap(), THREADS * ROUNDS);

    // Every apply consumes two ones-or-sums and leaves one; the total is preserved.
    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                while client.apply(h, '+').is_ok() {}
            });
        }
    });
    assert_eq!(client.size(h).unwrap(), 1);
    assert_eq!(client.pop(h).unwrap(), (THREADS * ROUNDS) as f64);
}

#[test]
fn test_delete_racing_with_operations() {
    let service = create_service_with(&RpnCalcConfig::default());
    let client: Arc<dyn RpnCalcClient> = Arc::new(rpn_calc::RpnCalcLocalClient::new(
        Arc::clone(&service),
    ));

    for _ in 0..50 {
        let h = client.create().unwrap();
        let barrier = Barrier::new(THREADS + 1);

        thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    barrier.wait();
                    for _ in 0..ROUNDS {
                        match client.push(h, 2.0) {
                            Ok(()) => {}
                            Err(e) => {
                                assert!(e.is_not_found(), "unexpected error {e}");
                                break;
                            }
                        }
                        if let Err(e) = client.size(h) {
                            assert!(e.is_not_found());
                            break;
                        }
                    }
                });
            }
            s.spawn(|| {
                barrier.wait();
                client.delete(h).unwrap();
            });
        });

        assert!(client.size(h).unwrap_err().is_not_found());
    }
    assert_eq!(service.live_count(), 0);
}
