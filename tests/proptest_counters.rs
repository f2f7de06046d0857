//! Property-Based Tests — Request Counting Invariants
//!
//! Uses `proptest` to verify that any sequence of endpoint calls
//! leaves every counter equal to the number of calls it observed.

use proptest::prelude::*;

use hello_metrics_server::adapters::metrics::MetricsRegistry;
use hello_metrics_server::domain::counters::CounterSnapshot;
use hello_metrics_server::ports::request_metrics::RequestMetrics;
use hello_metrics_server::usecases::endpoints;

#[derive(Debug, Clone, Copy)]
enum Call {
    Health,
    Main,
    Bye,
    Metrics,
}

fn call_strategy() -> impl Strategy<Value = Call> {
    prop_oneof![
        Just(Call::Health),
        Just(Call::Main),
        Just(Call::Bye),
        Just(Call::Metrics),
    ]
}

fn rendered_value(body: &str, name: &str) -> Option<u64> {
    body.lines().find_map(|line| {
        let (key, value) = line.split_once(' ')?;
        if key == name { value.parse().ok() } else { None }
    })
}

// ── Counting Properties ─────────────────────────────────────

proptest! {
    /// Each counter equals the number of calls routed to it; total
    /// counts every call, scrapes included.
    #[test]
    fn counters_match_call_counts(calls in prop::collection::vec(call_strategy(), 0..200)) {
        let registry = MetricsRegistry::new().unwrap();
        let mut expected = CounterSnapshot::default();

        for call in &calls {
            match call {
                Call::Health => {
                    endpoints::health(&registry);
                    expected.healthcheck += 1;
                }
                Call::Main => {
                    endpoints::main(&registry);
                    expected.main += 1;
                }
                Call::Bye => {
                    endpoints::bye(&registry);
                    expected.bye += 1;
                }
                Call::Metrics => {
                    endpoints::metrics(&registry).unwrap();
                }
            }
            expected.total += 1;
        }

        prop_assert_eq!(registry.snapshot(), expected);
    }

    /// A scrape reports exactly the calls completed before it and never
    /// moves an endpoint counter.
    #[test]
    fn scrape_reports_prior_calls(calls in prop::collection::vec(call_strategy(), 0..100)) {
        let registry = MetricsRegistry::new().unwrap();

        for call in &calls {
            let before = registry.snapshot();
            match call {
                Call::Health => { endpoints::health(&registry); }
                Call::Main => { endpoints::main(&registry); }
                Call::Bye => { endpoints::bye(&registry); }
                Call::Metrics => {
                    let body = endpoints::metrics(&registry).unwrap();
                    prop_assert_eq!(rendered_value(&body, "server_requests_total"), Some(before.total));
                    prop_assert_eq!(rendered_value(&body, "healthcheck_requests_total"), Some(before.healthcheck));
                    prop_assert_eq!(rendered_value(&body, "main_requests_total"), Some(before.main));
                    prop_assert_eq!(rendered_value(&body, "bye_requests_total"), Some(before.bye));

                    let after = registry.snapshot();
                    prop_assert_eq!(after.total, before.total + 1);
                    prop_assert_eq!(after.healthcheck, before.healthcheck);
                    prop_assert_eq!(after.main, before.main);
                    prop_assert_eq!(after.bye, before.bye);
                }
            }
        }
    }

    /// Counters never decrease between two snapshots.
    #[test]
    fn counters_are_monotonic(calls in prop::collection::vec(call_strategy(), 1..100)) {
        let registry = MetricsRegistry::new().unwrap();
        let mut previous = registry.snapshot();

        for call in &calls {
            match call {
                Call::Health => { endpoints::health(&registry); }
                Call::Main => { endpoints::main(&registry); }
                Call::Bye => { endpoints::bye(&registry); }
                Call::Metrics => { endpoints::metrics(&registry).unwrap(); }
            }
            let current = registry.snapshot();
            prop_assert!(current.total > previous.total);
            prop_assert!(current.healthcheck >= previous.healthcheck);
            prop_assert!(current.main >= previous.main);
            prop_assert!(current.bye >= previous.bye);
            previous = current;
        }
    }
}
