//! Checkout coordinator: one sale request per cart line, gathered together.

use std::sync::Arc;
use std::time::{Duration, Instant};

use common::LineId;
use domain::{CartSnapshot, LineItem, SharedCart};
use futures_util::future::join_all;
use tokio::task::JoinError;

use crate::error::{CheckoutError, ServiceError, ServiceResult};
use crate::outcome::{CheckoutOutcome, PartialFailurePolicy, RecordedSale, SaleFailure};
use crate::services::sales::SalesRecorder;
use crate::state::CheckoutState;

/// Tuning for a [`CheckoutCoordinator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Limit on each sale request. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub partial_failure: PartialFailurePolicy,
}

/// Submits a cart as a set of concurrent sale requests.
///
/// Every line is submitted, even after a sibling fails. The cart rejects
/// edits until every request has finished. It is cleared only when all
/// requests succeed; recorded sales are never rolled back.
pub struct CheckoutCoordinator<R>
where
    R: SalesRecorder + 'static,
{
    recorder: Arc<R>,
    config: CheckoutConfig,
}

impl<R> CheckoutCoordinator<R>
where
    R: SalesRecorder + 'static,
{
    /// Creates a coordinator with no request timeout and the keep-cart policy.
    pub fn new(recorder: R) -> Self {
        Self::with_config(recorder, CheckoutConfig::default())
    }

    pub fn with_config(recorder: R, config: CheckoutConfig) -> Self {
        Self {
            recorder: Arc::new(recorder),
            config,
        }
    }

    pub fn config(&self) -> CheckoutConfig {
        self.config
    }

    /// Checks out `cart`.
    ///
    /// Fails without issuing any request if the cart is empty or another
    /// checkout of it is still submitting.
    #[tracing::instrument(skip(self, cart), fields(policy = self.config.partial_failure.as_str()))]
    pub async fn checkout(&self, cart: &SharedCart) -> Result<CheckoutOutcome, CheckoutError> {
        let Some(permit) = cart.begin_checkout() else {
            tracing::warn!("checkout already in progress");
            return Err(CheckoutError::AlreadySubmitting);
        };

        let snapshot = cart.snapshot().await;
        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        metrics::counter!("checkout_attempts_total").increment(1);
        let started = Instant::now();
        let mut state = CheckoutState::default();
        transition(&mut state, CheckoutState::Submitting);

        tracing::info!(
            lines = snapshot.len(),
            items = snapshot.item_count(),
            total = %snapshot.total(),
            "checkout submitting"
        );

        let results = self.submit_all(&snapshot).await;
        let gathered = Gathered::collect(snapshot.lines(), results);
        let attempted = snapshot.len();

        let outcome = if gathered.failures.is_empty() {
            permit.with(|c| c.clear()).await;

            metrics::counter!("checkout_completed").increment(1);
            tracing::info!(sales = attempted, "checkout completed");
            CheckoutOutcome::Completed {
                item_count: snapshot.item_count(),
                total: snapshot.total(),
                sales: gathered.recorded,
            }
        } else {
            if self.config.partial_failure == PartialFailurePolicy::RetainFailed {
                permit
                    .with(|c| c.remove_lines(&gathered.recorded_lines))
                    .await;
            }

            let failed = gathered.failures.len();
            metrics::counter!("checkout_partial_failures").increment(1);
            tracing::warn!(failed, attempted, "checkout partially failed");
            CheckoutOutcome::PartialFailure {
                failed,
                attempted,
                failures: gathered.failures,
                recorded: gathered.recorded,
            }
        };
        transition(&mut state, outcome.state());

        metrics::histogram!("checkout_duration_seconds").record(started.elapsed().as_secs_f64());
        transition(&mut state, CheckoutState::Idle);
        Ok(outcome)
    }

    /// Spawns one request per line and waits for all of them.
    async fn submit_all(
        &self,
        snapshot: &CartSnapshot,
    ) -> Vec<Result<ServiceResult<RecordedSale>, JoinError>> {
        let requests = snapshot.lines().iter().map(|line| {
            let recorder = Arc::clone(&self.recorder);
            let tea_id = line.item().id.clone();
            let quantity = line.quantity();
            let timeout = self.config.request_timeout;

            tokio::spawn(async move {
                let request = recorder.record_sale(&tea_id, quantity);
                match timeout {
                    Some(limit) => tokio::time::timeout(limit, request)
                        .await
                        .unwrap_or(Err(ServiceError::Timeout(limit))),
                    None => request.await,
                }
            })
        });

        join_all(requests).await
    }
}

/// Per-line results sorted into sales and failures.
struct Gathered {
    recorded: Vec<RecordedSale>,
    recorded_lines: Vec<LineId>,
    failures: Vec<SaleFailure>,
}

impl Gathered {
    fn collect(
        lines: &[LineItem],
        results: Vec<Result<ServiceResult<RecordedSale>, JoinError>>,
    ) -> Self {
        let mut gathered = Self {
            recorded: Vec::new(),
            recorded_lines: Vec::new(),
            failures: Vec::new(),
        };

        for (line, result) in lines.iter().zip(results) {
            let error = match result {
                Ok(Ok(sale)) => {
                    gathered.recorded.push(sale);
                    gathered.recorded_lines.push(line.line_id());
                    continue;
                }
                Ok(Err(error)) => error,
                Err(join_error) => ServiceError::Aborted(join_error.to_string()),
            };

            metrics::counter!("checkout_sale_failures_total").increment(1);
            tracing::warn!(
                line_id = %line.line_id(),
                tea_id = %line.item().id,
                quantity = line.quantity(),
                error = %error,
                "sale failed"
            );
            gathered.failures.push(SaleFailure {
                line_id: line.line_id(),
                tea_id: line.item().id.clone(),
                quantity: line.quantity(),
                reason: error.to_string(),
            });
        }

        gathered
    }
}

fn transition(state: &mut CheckoutState, next: CheckoutState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal checkout transition {state} -> {next}"
    );
    tracing::debug!(from = %state, to = %next, "checkout state");
    *state = next;
}
