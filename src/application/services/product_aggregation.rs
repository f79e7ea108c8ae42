//! # Product Aggregation Coordinator
//!
//! Fan-out to the three upstreams under one shared deadline.
//!
//! This module provides the [`ProductAggregator`] which runs the
//! inventory, pricing and reviews fetches concurrently, enforces a single
//! deadline across all of them, cancels the remaining fetches the moment
//! either the deadline elapses or any fetch fails, and classifies the
//! terminal outcome deterministically before returning.
//!
//! # Deadline policy
//!
//! The deadline is wall-clock, measured from the start of the call, and
//! authoritative: the advisory timeout passed down to each capability is
//! a courtesy, not something the coordinator relies on. Results that are
//! already available when the deadline fires are accepted, so completion
//! at exactly the deadline counts as success.
//!
//! # Classification policy
//!
//! Timeout takes precedence. The call reports [`AggregationError::UpstreamTimeout`]
//! whenever the shared deadline has elapsed or the failing upstream's own
//! error is timeout-classified, regardless of whether another upstream
//! also failed for a different reason. Classification happens exactly
//! once, after every spawned fetch has reached a terminal state.

use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;
use crate::domain::value_objects::{Inventory, Price, Reviews};
use crate::infrastructure::upstream::error::UpstreamError;
use crate::infrastructure::upstream::traits::{InventoryClient, PricingClient, ReviewsClient};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio::time::{Instant, sleep_until};

/// Error type for aggregation operations.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// The shared deadline elapsed before every upstream produced a value.
    #[error("upstream timed out")]
    UpstreamTimeout,

    /// An upstream failed for a reason other than timeout.
    ///
    /// The original cause is preserved for diagnostics.
    #[error("upstream failure: {0}")]
    UpstreamFailure(#[source] UpstreamError),
}

impl AggregationError {
    /// Returns true if this is the timeout outcome.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::UpstreamTimeout)
    }
}

/// Result type for aggregation operations.
pub type AggregationResult<T> = Result<T, AggregationError>;

/// One fetched constituent, tagged by upstream.
#[derive(Debug)]
enum FetchValue {
    Inventory(Inventory),
    Price(Price),
    Reviews(Reviews),
}

/// Coordinator for the concurrent product fetch.
///
/// Holds one capability instance per upstream and no other state; every
/// invocation of [`fetch`](Self::fetch) owns its spawned fetches, its
/// result slots and its deadline exclusively, so sequential calls cannot
/// leak into each other.
#[derive(Debug)]
pub struct ProductAggregator {
    inventory: Arc<dyn InventoryClient>,
    pricing: Arc<dyn PricingClient>,
    reviews: Arc<dyn ReviewsClient>,
}

impl ProductAggregator {
    /// Creates a new aggregator over the given capabilities.
    #[must_use]
    pub fn new(
        inventory: Arc<dyn InventoryClient>,
        pricing: Arc<dyn PricingClient>,
        reviews: Arc<dyn ReviewsClient>,
    ) -> Self {
        Self {
            inventory,
            pricing,
            reviews,
        }
    }

    /// Fetches the composite product view under a shared deadline.
    ///
    /// Spawns one fetch per upstream, passing `deadline` down as the
    /// advisory per-call timeout, and waits for the aggregate terminal
    /// condition: all fetches succeeded, one failed, or the deadline
    /// elapsed. On either error path every still-running fetch is
    /// cancelled and awaited before the call returns; no work ever
    /// outlives the call. No retries are performed.
    ///
    /// A zero deadline fails immediately with `UpstreamTimeout` without
    /// spawning anything (`Duration` cannot be negative, so zero is the
    /// entire boundary).
    ///
    /// # Errors
    ///
    /// - [`AggregationError::UpstreamTimeout`] - the deadline elapsed
    ///   before every upstream produced a value, or the failing
    ///   upstream's error was timeout-classified
    /// - [`AggregationError::UpstreamFailure`] - an upstream failed for
    ///   any other reason; the first-observed cause is preserved
    pub async fn fetch(&self, id: &ProductId, deadline: Duration) -> AggregationResult<Product> {
        if deadline.is_zero() {
            return Err(AggregationError::UpstreamTimeout);
        }
        let deadline_at = Instant::now() + deadline;

        tracing::debug!(
            product_id = %id,
            deadline_ms = deadline.as_millis() as u64,
            "fanning out upstream fetches"
        );

        let mut units: JoinSet<Result<FetchValue, UpstreamError>> = JoinSet::new();
        {
            let client = Arc::clone(&self.inventory);
            let id = id.clone();
            units.spawn(async move {
                client
                    .get(&id, Some(deadline))
                    .await
                    .map(FetchValue::Inventory)
            });
        }
        {
            let client = Arc::clone(&self.pricing);
            let id = id.clone();
            units.spawn(
                async move { client.get(&id, Some(deadline)).await.map(FetchValue::Price) },
            );
        }
        {
            let client = Arc::clone(&self.reviews);
            let id = id.clone();
            units.spawn(async move {
                client
                    .get(&id, Some(deadline))
                    .await
                    .map(FetchValue::Reviews)
            });
        }

        let mut inventory = None;
        let mut price = None;
        let mut reviews = None;

        let deadline_timer = sleep_until(deadline_at);
        tokio::pin!(deadline_timer);

        while !units.is_empty() {
            tokio::select! {
                // Drain results that are already available before looking
                // at the timer: completion at exactly the deadline counts
                // as success.
                biased;

                Some(joined) = units.join_next() => match joined {
                    Ok(Ok(value)) => {
                        Self::store(&mut inventory, &mut price, &mut reviews, value);
                    }
                    Ok(Err(cause)) => {
                        tracing::warn!(
                            product_id = %id,
                            error = %cause,
                            "upstream fetch failed, cancelling remaining fetches"
                        );
                        units.shutdown().await;
                        return Err(Self::classify(cause, deadline_at));
                    }
                    Err(join_error) => {
                        units.shutdown().await;
                        let cause = UpstreamError::internal(format!(
                            "fetch unit did not complete: {}",
                            join_error
                        ));
                        return Err(Self::classify(cause, deadline_at));
                    }
                },
                () = &mut deadline_timer => {
                    // Fetches due at this same instant get one chance to
                    // be observed before the deadline claims the call.
                    tokio::task::yield_now().await;
                    while let Some(joined) = units.try_join_next() {
                        match joined {
                            Ok(Ok(value)) => {
                                Self::store(&mut inventory, &mut price, &mut reviews, value);
                            }
                            // An error surfacing at the deadline instant
                            // is already a timeout under the precedence
                            // rule.
                            Ok(Err(_)) | Err(_) => {
                                units.shutdown().await;
                                return Err(AggregationError::UpstreamTimeout);
                            }
                        }
                    }
                    if units.is_empty() {
                        break;
                    }
                    tracing::warn!(
                        product_id = %id,
                        deadline_ms = deadline.as_millis() as u64,
                        "shared deadline elapsed, cancelling remaining fetches"
                    );
                    units.shutdown().await;
                    return Err(AggregationError::UpstreamTimeout);
                }
            }
        }

        match (inventory, price, reviews) {
            (Some(inventory), Some(price), Some(reviews)) => {
                Ok(Product::assemble(id.clone(), inventory, price, reviews))
            }
            _ => Err(AggregationError::UpstreamFailure(UpstreamError::internal(
                "fetch unit exited without producing a value",
            ))),
        }
    }

    /// Files a fetched value into its slot.
    ///
    /// Each upstream writes exactly one slot, so no slot is ever written
    /// twice and no synchronization is needed.
    fn store(
        inventory: &mut Option<Inventory>,
        price: &mut Option<Price>,
        reviews: &mut Option<Reviews>,
        value: FetchValue,
    ) {
        match value {
            FetchValue::Inventory(v) => *inventory = Some(v),
            FetchValue::Price(v) => *price = Some(v),
            FetchValue::Reviews(v) => *reviews = Some(v),
        }
    }

    /// Classifies the terminal failure, executed once all fetches are
    /// terminal.
    ///
    /// Timeout precedence: a timeout-classified upstream error, or a
    /// deadline that has already elapsed by classification time, is
    /// reported as `UpstreamTimeout`; anything else preserves the cause.
    fn classify(cause: UpstreamError, deadline_at: Instant) -> AggregationError {
        if cause.is_timeout() || Instant::now() >= deadline_at {
            AggregationError::UpstreamTimeout
        } else {
            AggregationError::UpstreamFailure(cause)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::infrastructure::upstream::error::UpstreamResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use tokio_test::assert_ok;

    /// Observability shared between a stub and the test.
    #[derive(Debug, Default)]
    struct Probe {
        calls: AtomicU32,
        terminal: AtomicBool,
    }

    impl Probe {
        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }

        fn is_terminal(&self) -> bool {
            self.terminal.load(Ordering::SeqCst)
        }
    }

    /// Marks the probe terminal when the fetch future is dropped, whether
    /// it completed normally or was cancelled mid-flight.
    #[derive(Debug)]
    struct TerminalGuard(Arc<Probe>);

    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            self.0.terminal.store(true, Ordering::SeqCst);
        }
    }

    async fn run_stub<T: Clone>(
        probe: &Arc<Probe>,
        delay: Duration,
        result: &UpstreamResult<T>,
    ) -> UpstreamResult<T> {
        probe.calls.fetch_add(1, Ordering::SeqCst);
        let _guard = TerminalGuard(Arc::clone(probe));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result.clone()
    }

    #[derive(Debug)]
    struct StubInventory {
        result: UpstreamResult<Inventory>,
        delay: Duration,
        probe: Arc<Probe>,
    }

    impl StubInventory {
        fn ok(available: u32) -> Self {
            Self {
                result: Ok(Inventory::new(available)),
                delay: Duration::ZERO,
                probe: Arc::default(),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn probe(&self) -> Arc<Probe> {
            Arc::clone(&self.probe)
        }
    }

    #[async_trait]
    impl InventoryClient for StubInventory {
        async fn get(
            &self,
            _id: &ProductId,
            _timeout: Option<Duration>,
        ) -> UpstreamResult<Inventory> {
            run_stub(&self.probe, self.delay, &self.result).await
        }
    }

    #[derive(Debug)]
    struct StubPricing {
        result: UpstreamResult<Price>,
        delay: Duration,
        probe: Arc<Probe>,
    }

    impl StubPricing {
        fn ok(currency: &str, amount: f64) -> Self {
            Self {
                result: Ok(Price::new(currency, amount).unwrap()),
                delay: Duration::ZERO,
                probe: Arc::default(),
            }
        }

        fn failing(error: UpstreamError) -> Self {
            Self {
                result: Err(error),
                delay: Duration::ZERO,
                probe: Arc::default(),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn probe(&self) -> Arc<Probe> {
            Arc::clone(&self.probe)
        }
    }

    #[async_trait]
    impl PricingClient for StubPricing {
        async fn get(&self, _id: &ProductId, _timeout: Option<Duration>) -> UpstreamResult<Price> {
            run_stub(&self.probe, self.delay, &self.result).await
        }
    }

    #[derive(Debug)]
    struct StubReviews {
        result: UpstreamResult<Reviews>,
        delay: Duration,
        probe: Arc<Probe>,
    }

    impl StubReviews {
        fn ok(reviews: &[&str]) -> Self {
            Self {
                result: Ok(Reviews::new(
                    reviews.iter().map(|r| (*r).to_string()).collect(),
                )),
                delay: Duration::ZERO,
                probe: Arc::default(),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn probe(&self) -> Arc<Probe> {
            Arc::clone(&self.probe)
        }
    }

    #[async_trait]
    impl ReviewsClient for StubReviews {
        async fn get(
            &self,
            _id: &ProductId,
            _timeout: Option<Duration>,
        ) -> UpstreamResult<Reviews> {
            run_stub(&self.probe, self.delay, &self.result).await
        }
    }

    fn pid() -> ProductId {
        ProductId::new("p1").unwrap()
    }

    fn aggregator(
        inventory: StubInventory,
        pricing: StubPricing,
        reviews: StubReviews,
    ) -> ProductAggregator {
        ProductAggregator::new(Arc::new(inventory), Arc::new(pricing), Arc::new(reviews))
    }

    #[tokio::test]
    async fn fetch_success_composes_product() {
        let inventory = StubInventory::ok(3);
        let pricing = StubPricing::ok("USD", 9.99);
        let reviews = StubReviews::ok(&["ok", "great"]);
        let probes = [inventory.probe(), pricing.probe(), reviews.probe()];

        let aggregator = aggregator(inventory, pricing, reviews);
        let result = aggregator.fetch(&pid(), Duration::from_millis(200)).await;

        let product = tokio_test::assert_ok!(result);
        assert_eq!(product.id().as_str(), "p1");
        assert_eq!(product.inventory().available(), 3);
        assert_eq!(product.price().currency(), "USD");
        assert!((product.price().amount() - 9.99).abs() < f64::EPSILON);
        assert_eq!(product.reviews().as_slice(), ["ok", "great"]);

        for probe in &probes {
            assert_eq!(probe.calls(), 1);
            assert!(probe.is_terminal());
        }
    }

    #[tokio::test]
    async fn fetch_preserves_review_order() {
        let aggregator = aggregator(
            StubInventory::ok(1),
            StubPricing::ok("EUR", 1.0),
            StubReviews::ok(&["zeta", "alpha", "alpha", "mid"]),
        );

        let product = aggregator
            .fetch(&pid(), Duration::from_millis(200))
            .await
            .unwrap();
        assert_eq!(
            product.reviews().as_slice(),
            ["zeta", "alpha", "alpha", "mid"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_times_out_when_one_upstream_is_slow() {
        let inventory = StubInventory::ok(3).with_delay(Duration::from_millis(300));
        let pricing = StubPricing::ok("USD", 9.99);
        let reviews = StubReviews::ok(&["ok"]);
        let probes = [inventory.probe(), pricing.probe(), reviews.probe()];

        let aggregator = aggregator(inventory, pricing, reviews);
        let started = Instant::now();
        let result = aggregator.fetch(&pid(), Duration::from_millis(100)).await;
        let elapsed = started.elapsed();

        assert!(matches!(result, Err(AggregationError::UpstreamTimeout)));
        assert!(elapsed >= Duration::from_millis(100));
        // Returns at the deadline, not after the slow upstream's 300ms.
        assert!(elapsed < Duration::from_millis(150), "took {:?}", elapsed);

        // Every unit is terminal before fetch returns, the slow one
        // because its future was dropped mid-sleep.
        for probe in &probes {
            assert!(probe.is_terminal());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_fails_fast_on_upstream_failure() {
        let inventory = StubInventory::ok(3).with_delay(Duration::from_secs(10));
        let pricing = StubPricing::failing(UpstreamError::unexpected_status(500, "boom"));
        let reviews = StubReviews::ok(&["ok"]).with_delay(Duration::from_secs(10));
        let probes = [inventory.probe(), pricing.probe(), reviews.probe()];

        let aggregator = aggregator(inventory, pricing, reviews);
        let started = Instant::now();
        let result = aggregator.fetch(&pid(), Duration::from_millis(200)).await;
        let elapsed = started.elapsed();

        let cause = match result {
            Err(AggregationError::UpstreamFailure(cause)) => cause,
            other => panic!("expected UpstreamFailure, got {:?}", other),
        };
        assert_eq!(cause.status(), Some(500));
        // Fail-fast: nowhere near the 10s siblings or the 200ms deadline.
        assert!(elapsed < Duration::from_millis(100), "took {:?}", elapsed);

        for probe in &probes {
            assert!(probe.is_terminal());
        }
    }

    #[tokio::test]
    async fn fetch_zero_deadline_times_out_without_spawning() {
        let inventory = StubInventory::ok(3);
        let pricing = StubPricing::ok("USD", 9.99);
        let reviews = StubReviews::ok(&["ok"]);
        let probes = [inventory.probe(), pricing.probe(), reviews.probe()];

        let aggregator = aggregator(inventory, pricing, reviews);
        let result = aggregator.fetch(&pid(), Duration::ZERO).await;

        assert!(matches!(result, Err(AggregationError::UpstreamTimeout)));
        for probe in &probes {
            assert_eq!(probe.calls(), 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_reported_when_failure_races_deadline() {
        // The failing upstream errors at exactly the instant the shared
        // deadline fires. Whichever event is observed first, the
        // classification step must report the timeout.
        let pricing = StubPricing::failing(UpstreamError::unexpected_status(500, "boom"))
            .with_delay(Duration::from_millis(100));
        let aggregator = aggregator(
            StubInventory::ok(3).with_delay(Duration::from_millis(10)),
            pricing,
            StubReviews::ok(&["ok"]).with_delay(Duration::from_millis(10)),
        );

        let result = aggregator.fetch(&pid(), Duration::from_millis(100)).await;
        assert!(matches!(result, Err(AggregationError::UpstreamTimeout)));
    }

    #[tokio::test(start_paused = true)]
    async fn upstream_timeout_class_reported_as_timeout() {
        // A capability whose own advisory timeout fired is classified as
        // a timeout even though the shared deadline has not elapsed, and
        // still cancels its siblings.
        let inventory = StubInventory::ok(3).with_delay(Duration::from_secs(10));
        let pricing = StubPricing::failing(UpstreamError::timeout("advisory timeout hit"));
        let reviews = StubReviews::ok(&["ok"]).with_delay(Duration::from_secs(10));
        let probes = [inventory.probe(), reviews.probe()];

        let aggregator = aggregator(inventory, pricing, reviews);
        let started = Instant::now();
        let result = aggregator.fetch(&pid(), Duration::from_secs(5)).await;
        let elapsed = started.elapsed();

        assert!(matches!(result, Err(AggregationError::UpstreamTimeout)));
        assert!(elapsed < Duration::from_millis(100), "took {:?}", elapsed);
        for probe in &probes {
            assert!(probe.is_terminal());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completion_at_deadline_boundary_is_success() {
        // All three fetches complete at exactly the deadline instant.
        // The documented boundary policy accepts them.
        let aggregator = aggregator(
            StubInventory::ok(3).with_delay(Duration::from_millis(100)),
            StubPricing::ok("USD", 9.99).with_delay(Duration::from_millis(100)),
            StubReviews::ok(&["ok"]).with_delay(Duration::from_millis(100)),
        );

        let result = aggregator.fetch(&pid(), Duration::from_millis(100)).await;
        let product = tokio_test::assert_ok!(result);
        assert_eq!(product.inventory().available(), 3);
    }

    #[tokio::test]
    async fn sequential_calls_are_isolated() {
        let first = aggregator(
            StubInventory::ok(3),
            StubPricing::ok("USD", 9.99),
            StubReviews::ok(&["ok"]),
        );
        let second = aggregator(
            StubInventory::ok(7),
            StubPricing::ok("EUR", 1.50),
            StubReviews::ok(&[]),
        );

        let a = first
            .fetch(&pid(), Duration::from_millis(200))
            .await
            .unwrap();
        let b = second
            .fetch(&ProductId::new("p2").unwrap(), Duration::from_millis(200))
            .await
            .unwrap();

        assert_eq!(a.id().as_str(), "p1");
        assert_eq!(a.inventory().available(), 3);
        assert_eq!(b.id().as_str(), "p2");
        assert_eq!(b.inventory().available(), 7);
        assert!(b.reviews().is_empty());
    }

    #[test]
    fn aggregation_error_display() {
        assert!(
            AggregationError::UpstreamTimeout
                .to_string()
                .contains("timed out")
        );

        let err = AggregationError::UpstreamFailure(UpstreamError::connection("refused"));
        assert!(err.to_string().contains("upstream failure"));
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn aggregation_error_is_timeout() {
        assert!(AggregationError::UpstreamTimeout.is_timeout());
        let err = AggregationError::UpstreamFailure(UpstreamError::connection("refused"));
        assert!(!err.is_timeout());
    }
}
