//! Recommendation request lifecycle
//!
//! The controller owns the [`RequestState`]. A submission spawns one task that
//! runs the webhook call under a timeout and reports back over a channel,
//! tagged with the id of the request it was issued for. Completions are only
//! committed while the state is still `Loading` for that id, so a cancelled or
//! superseded request can never overwrite a newer state.

use crate::state::{FormInput, Notifier, Recommendation, RequestState, Toast};
use crate::webhook::{RecommendationClientTrait, RecommendationError};
use futures_util::future::{AbortHandle, Abortable};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Outcome of one request, reported by the spawned task
#[derive(Debug)]
struct Completion {
    request_id: Uuid,
    result: Result<Recommendation, RecommendationError>,
}

pub struct RecommendationController {
    client: Arc<dyn RecommendationClientTrait>,
    state: RequestState,
    last_input: Option<FormInput>,
    timeout: Duration,
    success_notifications: bool,
    in_flight: Option<AbortHandle>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl RecommendationController {
    pub fn new(client: Arc<dyn RecommendationClientTrait>, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            state: RequestState::Idle,
            last_input: None,
            timeout,
            success_notifications: true,
            in_flight: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn can_retry(&self) -> bool {
        self.state.is_error() && self.last_input.is_some()
    }

    /// Whether a successful request raises an informational toast.
    /// Error toasts are always raised.
    pub fn set_success_notifications(&mut self, enabled: bool) {
        self.success_notifications = enabled;
    }

    /// Start a request for `input`.
    ///
    /// Returns false without touching the state when a request is already in
    /// flight or a required field is blank.
    pub fn submit(&mut self, input: FormInput) -> bool {
        if self.state.is_loading() {
            tracing::debug!("Submit ignored: request already in flight");
            return false;
        }
        if !input.is_complete() {
            tracing::debug!("Submit ignored: required fields are blank");
            return false;
        }

        let request_id = Uuid::new_v4();
        let (abort_handle, abort_registration) = AbortHandle::new_pair();

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let payload = input.clone();
        let timeout = self.timeout;

        let task = async move {
            let result =
                match tokio::time::timeout(timeout, client.fetch_recommendation(&payload)).await {
                    Ok(result) => result,
                    Err(_) => {
                        // The fetch future is dropped here, which cancels the HTTP request
                        tracing::warn!(%request_id, "Request timed out after {timeout:?}");
                        Err(RecommendationError::Timeout)
                    }
                };
            let _ = tx.send(Completion { request_id, result });
        };

        tokio::spawn(async move {
            let _ = Abortable::new(task, abort_registration).await;
        });

        tracing::info!(%request_id, industry = %input.industry, "Submitting recommendation request");
        self.in_flight = Some(abort_handle);
        self.last_input = Some(input);
        self.state = RequestState::Loading { request_id };
        true
    }

    /// Re-submit the last input; only while in `Error`
    pub fn retry(&mut self) -> bool {
        if !self.state.is_error() {
            return false;
        }
        match self.last_input.clone() {
            Some(input) => {
                tracing::info!("Retrying recommendation request");
                self.submit(input)
            }
            None => false,
        }
    }

    /// Clear results and return to `Idle`; not allowed while loading
    pub fn reset(&mut self) -> bool {
        if self.state.is_loading() {
            return false;
        }
        self.state = RequestState::Idle;
        true
    }

    /// Abort the in-flight request, if any. Its completion will never arrive.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    /// Commit any completions that have arrived. Returns true if the state changed.
    pub fn poll_completions(&mut self, notifier: &mut dyn Notifier) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.rx.try_recv() {
            changed |= self.commit(completion, notifier);
        }
        changed
    }

    fn commit(&mut self, completion: Completion, notifier: &mut dyn Notifier) -> bool {
        let current = match self.state {
            RequestState::Loading { request_id } => request_id,
            _ => {
                tracing::debug!(request_id = %completion.request_id, "Dropping completion: not loading");
                return false;
            }
        };
        if current != completion.request_id {
            tracing::debug!(request_id = %completion.request_id, "Dropping stale completion");
            return false;
        }

        self.in_flight = None;
        match completion.result {
            Ok(recommendation) => {
                tracing::info!(request_id = %current, "Recommendations received");
                if self.success_notifications {
                    notifier.notify(Toast::new(
                        "Recommendations ready",
                        "Your strategic and automation recommendations are ready.",
                    ));
                }
                self.state = RequestState::Success(recommendation);
            }
            Err(error) => {
                tracing::warn!(request_id = %current, class = error.class(), "Request failed");
                notifier.notify(Toast::destructive(error.title(), error.to_string()));
                self.state = RequestState::Error(error);
            }
        }
        true
    }
}

impl Drop for RecommendationController {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MockNotifier, ToastQueue, ToastVariant};
    use crate::webhook::MockRecommendationClientTrait;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TIMEOUT: Duration = Duration::from_secs(30);

    fn sample_input() -> FormInput {
        FormInput::new("Retail", "10-50", "", "slow onboarding")
    }

    fn recommendation(strategic: &str, bpa: &str) -> Recommendation {
        Recommendation {
            strategic: strategic.to_string(),
            bpa: bpa.to_string(),
        }
    }

    fn controller_with(mock: MockRecommendationClientTrait) -> RecommendationController {
        RecommendationController::new(Arc::new(mock), TIMEOUT)
    }

    /// Wait for the in-flight request to report back and commit it
    async fn settle(controller: &mut RecommendationController, notifier: &mut dyn Notifier) {
        let completion = controller.rx.recv().await.expect("channel open");
        controller.commit(completion, notifier);
    }

    /// Client that never answers
    struct SilentClient;

    #[async_trait]
    impl RecommendationClientTrait for SilentClient {
        async fn fetch_recommendation(
            &self,
            _input: &FormInput,
        ) -> Result<Recommendation, RecommendationError> {
            std::future::pending().await
        }
    }

    /// Client that answers successfully after a delay
    struct SlowClient {
        delay: Duration,
    }

    #[async_trait]
    impl RecommendationClientTrait for SlowClient {
        async fn fetch_recommendation(
            &self,
            _input: &FormInput,
        ) -> Result<Recommendation, RecommendationError> {
            tokio::time::sleep(self.delay).await;
            Ok(recommendation("late", "late"))
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_blank_required_fields_stay_idle() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation().times(0);
            let mut controller = controller_with(mock);

            for input in [
                FormInput::new("", "10-50", "", "slow onboarding"),
                FormInput::new("Retail", "   ", "", "slow onboarding"),
                FormInput::new("Retail", "10-50", "context", "\t\n"),
            ] {
                assert!(!controller.submit(input));
                assert_eq!(controller.state(), &RequestState::Idle);
            }
            assert!(controller.last_input.as_ref().is_none());
        }

        #[tokio::test]
        async fn test_submit_enters_loading() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation()
                .returning(|_| Ok(recommendation("X", "Y")));
            let mut controller = controller_with(mock);

            assert!(controller.submit(sample_input()));
            assert!(controller.is_loading());
            assert_eq!(controller.last_input.as_ref(), Some(&sample_input()));
        }

        #[tokio::test]
        async fn test_second_submit_while_loading_is_rejected() {
            let mut controller =
                RecommendationController::new(Arc::new(SilentClient), TIMEOUT);

            assert!(controller.submit(sample_input()));
            let loading = controller.state().clone();
            assert!(!controller.submit(FormInput::new("Health", "5", "", "other")));
            assert_eq!(controller.state(), &loading);
            assert_eq!(controller.last_input.as_ref(), Some(&sample_input()));
        }

        #[tokio::test]
        async fn test_success_copies_fields_verbatim() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation()
                .withf(|input| *input == sample_input())
                .times(1)
                .returning(|_| Ok(recommendation("X", "Y")));
            let mut controller = controller_with(mock);
            let mut toasts = ToastQueue::new();

            controller.submit(sample_input());
            settle(&mut controller, &mut toasts).await;

            assert_eq!(
                controller.state(),
                &RequestState::Success(recommendation("X", "Y"))
            );
            assert_eq!(toasts.current().unwrap().variant, ToastVariant::Default);
        }

        #[tokio::test]
        async fn test_success_toast_can_be_disabled() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation()
                .returning(|_| Ok(recommendation("X", "Y")));
            let mut controller = controller_with(mock);
            controller.set_success_notifications(false);
            let mut notifier = MockNotifier::new();
            notifier.expect_notify().times(0);

            controller.submit(sample_input());
            settle(&mut controller, &mut notifier).await;

            assert!(controller.state().recommendation().is_some());
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_service_error_raises_notification() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation()
                .returning(|_| Err(RecommendationError::Service { status: 500 }));
            let mut controller = controller_with(mock);
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|toast| {
                    toast.variant == ToastVariant::Destructive
                        && toast.description
                            == RecommendationError::Service { status: 500 }.to_string()
                })
                .times(1)
                .return_const(());

            controller.submit(sample_input());
            settle(&mut controller, &mut notifier).await;

            assert_eq!(
                controller.state(),
                &RequestState::Error(RecommendationError::Service { status: 500 })
            );
        }

        #[tokio::test]
        async fn test_error_notification_ignores_preference() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation()
                .returning(|_| Err(RecommendationError::Incomplete));
            let mut controller = controller_with(mock);
            controller.set_success_notifications(false);
            let mut toasts = ToastQueue::new();

            controller.submit(sample_input());
            settle(&mut controller, &mut toasts).await;

            assert_eq!(
                controller.state(),
                &RequestState::Error(RecommendationError::Incomplete)
            );
            assert_eq!(toasts.current().unwrap().title, "Incomplete Response");
        }

        #[tokio::test]
        async fn test_connectivity_error() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation().returning(|_| {
                Err(RecommendationError::Connectivity {
                    detail: "connection refused".to_string(),
                })
            });
            let mut controller = controller_with(mock);
            let mut toasts = ToastQueue::new();

            controller.submit(sample_input());
            settle(&mut controller, &mut toasts).await;

            assert!(matches!(
                controller.state(),
                RequestState::Error(RecommendationError::Connectivity { .. })
            ));
            assert!(controller.can_retry());
        }
    }

    mod timeout {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_no_response_times_out_after_thirty_seconds() {
            let mut controller =
                RecommendationController::new(Arc::new(SilentClient), TIMEOUT);
            let mut toasts = ToastQueue::new();
            let start = tokio::time::Instant::now();

            controller.submit(sample_input());
            settle(&mut controller, &mut toasts).await;

            assert!(start.elapsed() >= TIMEOUT);
            assert_eq!(
                controller.state(),
                &RequestState::Error(RecommendationError::Timeout)
            );
            assert_eq!(toasts.current().unwrap().title, "Request Timeout");
        }

        #[tokio::test(start_paused = true)]
        async fn test_late_response_never_overwrites_timeout() {
            let client = SlowClient {
                delay: Duration::from_secs(45),
            };
            let mut controller = RecommendationController::new(Arc::new(client), TIMEOUT);
            let mut toasts = ToastQueue::new();

            controller.submit(sample_input());
            settle(&mut controller, &mut toasts).await;
            assert_eq!(
                controller.state(),
                &RequestState::Error(RecommendationError::Timeout)
            );

            tokio::time::sleep(Duration::from_secs(30)).await;

            assert!(!controller.poll_completions(&mut toasts));
            assert_eq!(
                controller.state(),
                &RequestState::Error(RecommendationError::Timeout)
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_success_for_timed_out_request_is_dropped() {
            let mut controller =
                RecommendationController::new(Arc::new(SilentClient), TIMEOUT);
            let mut toasts = ToastQueue::new();

            controller.submit(sample_input());
            let timed_out_id = match controller.state() {
                RequestState::Loading { request_id } => *request_id,
                other => panic!("expected Loading, got {other:?}"),
            };
            settle(&mut controller, &mut toasts).await;

            let mut notifier = MockNotifier::new();
            notifier.expect_notify().times(0);

            let changed = controller.commit(
                Completion {
                    request_id: timed_out_id,
                    result: Ok(recommendation("X", "Y")),
                },
                &mut notifier,
            );

            assert!(!changed);
            assert_eq!(
                controller.state(),
                &RequestState::Error(RecommendationError::Timeout)
            );
        }
    }

    mod stale {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_completion_for_other_request_is_dropped() {
            let mut controller =
                RecommendationController::new(Arc::new(SilentClient), TIMEOUT);
            let mut notifier = MockNotifier::new();
            notifier.expect_notify().times(0);

            controller.submit(sample_input());
            let changed = controller.commit(
                Completion {
                    request_id: Uuid::new_v4(),
                    result: Ok(recommendation("X", "Y")),
                },
                &mut notifier,
            );

            assert!(!changed);
            assert!(controller.is_loading());
        }

        #[tokio::test]
        async fn test_completion_while_idle_is_dropped() {
            let controller_client = MockRecommendationClientTrait::new();
            let mut controller = controller_with(controller_client);
            let mut toasts = ToastQueue::new();

            let changed = controller.commit(
                Completion {
                    request_id: Uuid::new_v4(),
                    result: Err(RecommendationError::Timeout),
                },
                &mut toasts,
            );

            assert!(!changed);
            assert_eq!(controller.state(), &RequestState::Idle);
            assert!(toasts.is_empty());
        }

        #[tokio::test]
        async fn test_poll_with_nothing_pending() {
            let mut controller = controller_with(MockRecommendationClientTrait::new());
            let mut toasts = ToastQueue::new();
            assert!(!controller.poll_completions(&mut toasts));
        }
    }

    mod retry {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_retry_reissues_identical_input() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation()
                .withf(|input| *input == sample_input())
                .times(2)
                .returning(move |_| {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(RecommendationError::Service { status: 503 })
                    } else {
                        Ok(recommendation("X", "Y"))
                    }
                });
            let mut controller = controller_with(mock);
            let mut toasts = ToastQueue::new();

            controller.submit(sample_input());
            settle(&mut controller, &mut toasts).await;
            assert!(controller.state().is_error());

            assert!(controller.retry());
            assert!(controller.is_loading());
            settle(&mut controller, &mut toasts).await;

            assert_eq!(calls.load(Ordering::SeqCst), 2);
            assert_eq!(
                controller.state(),
                &RequestState::Success(recommendation("X", "Y"))
            );
        }

        #[tokio::test]
        async fn test_retry_unavailable_outside_error() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation()
                .times(1)
                .returning(|_| Ok(recommendation("X", "Y")));
            let mut controller = controller_with(mock);
            let mut toasts = ToastQueue::new();

            assert!(!controller.retry());

            controller.submit(sample_input());
            assert!(!controller.retry());
            settle(&mut controller, &mut toasts).await;
            assert!(!controller.retry());
            assert!(!controller.can_retry());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_reset_returns_to_idle() {
            let mut mock = MockRecommendationClientTrait::new();
            mock.expect_fetch_recommendation()
                .returning(|_| Ok(recommendation("X", "Y")));
            let mut controller = controller_with(mock);
            let mut toasts = ToastQueue::new();

            controller.submit(sample_input());
            settle(&mut controller, &mut toasts).await;

            assert!(controller.reset());
            assert_eq!(controller.state(), &RequestState::Idle);
        }

        #[tokio::test]
        async fn test_reset_refused_while_loading() {
            let mut controller =
                RecommendationController::new(Arc::new(SilentClient), TIMEOUT);
            controller.submit(sample_input());
            assert!(!controller.reset());
            assert!(controller.is_loading());
        }
    }
}
