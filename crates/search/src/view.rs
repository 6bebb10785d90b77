use docket_core::Regulation;
use docket_ports::{GatewayResult, RegulationGateway};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::state::{RequestToken, SearchState, ViewInner, ViewStatus};

/// Shown when the initial load fails
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load regulations. Please try again.";

/// Shown when a search fails
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search regulations. Please try again.";

/// Search view over a regulation gateway.
///
/// Application layer - owns the display state and orchestrates requests.
/// The lock is never held across an await, so the view can be shared in an
/// `Arc` and driven from several tasks; the last *issued* request wins.
pub struct SearchView<G>
where
    G: RegulationGateway + ?Sized,
{
    gateway: Arc<G>,
    inner: Mutex<ViewInner>,
}

impl<G> SearchView<G>
where
    G: RegulationGateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        SearchView {
            gateway,
            inner: Mutex::new(ViewInner::new()),
        }
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Snapshot of the display state
    pub fn state(&self) -> SearchState {
        self.inner.lock().snapshot()
    }

    /// Current logical state
    pub fn status(&self) -> ViewStatus {
        self.inner.lock().status()
    }

    pub fn query(&self) -> String {
        self.inner.lock().query.clone()
    }

    /// Replace the query text. Does not issue a request.
    pub fn set_query(&self, query: impl Into<String>) {
        self.inner.lock().query = query.into();
    }

    /// Initial load: list every regulation
    pub async fn mount(&self) -> ViewStatus {
        let token = self.inner.lock().begin();
        tracing::debug!(token = token.get(), "loading all regulations");

        let outcome = self.gateway.fetch_all().await;
        self.finish(token, outcome, LOAD_FAILED_MESSAGE)
    }

    /// Search with the current query.
    ///
    /// A blank query settles immediately with no results and no gateway call.
    pub async fn search(&self) -> ViewStatus {
        let (token, term) = {
            let mut inner = self.inner.lock();
            let term = inner.query.trim().to_string();
            if term.is_empty() {
                let token = inner.resolve(Vec::new());
                tracing::debug!(token = token.get(), "blank query, skipping request");
                return inner.status();
            }
            (inner.begin(), term)
        };
        tracing::debug!(token = token.get(), term = %term, "searching regulations");

        let outcome = self.gateway.search(&term).await;
        self.finish(token, outcome, SEARCH_FAILED_MESSAGE)
    }

    /// Set the query and search with it
    pub async fn submit(&self, query: impl Into<String>) -> ViewStatus {
        self.set_query(query);
        self.search().await
    }

    fn finish(
        &self,
        token: RequestToken,
        outcome: GatewayResult<Vec<Regulation>>,
        failure_message: &str,
    ) -> ViewStatus {
        let outcome = outcome.map_err(|err| {
            tracing::error!(token = token.get(), error = %err, "{}", failure_message);
            failure_message.to_string()
        });

        let mut inner = self.inner.lock();
        if !inner.settle(token, outcome) {
            tracing::debug!(
                token = token.get(),
                latest = inner.latest.get(),
                "discarding stale response"
            );
        }
        inner.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docket_core::DocketId;
    use docket_ports::GatewayError;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Gateway with canned answers that counts calls.
    /// Search answers are consumed in order; the last one repeats.
    struct Scripted {
        all: GatewayResult<Vec<Regulation>>,
        search: Mutex<Vec<GatewayResult<Vec<Regulation>>>>,
        calls: AtomicUsize,
        terms: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(
            all: GatewayResult<Vec<Regulation>>,
            search: GatewayResult<Vec<Regulation>>,
        ) -> Arc<Self> {
            Self::with_searches(all, vec![search])
        }

        fn with_searches(
            all: GatewayResult<Vec<Regulation>>,
            searches: Vec<GatewayResult<Vec<Regulation>>>,
        ) -> Arc<Self> {
            Arc::new(Scripted {
                all,
                search: Mutex::new(searches),
                calls: AtomicUsize::new(0),
                terms: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RegulationGateway for Scripted {
        async fn fetch_all(&self) -> GatewayResult<Vec<Regulation>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.all.clone()
        }

        async fn search(&self, term: &str) -> GatewayResult<Vec<Regulation>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.terms.lock().push(term.to_string());
            let mut answers = self.search.lock();
            if answers.len() > 1 {
                answers.remove(0)
            } else {
                answers[0].clone()
            }
        }

        async fn fetch_one(&self, id: DocketId) -> GatewayResult<Regulation> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GatewayError::NotFound(id))
        }
    }

    fn arizona() -> Regulation {
        Regulation::new(1, "Water conservation rules in Arizona", "...").with_keywords(["water"])
    }

    #[test]
    fn test_new_view_is_idle() {
        let view = SearchView::new(Scripted::new(Ok(vec![]), Ok(vec![])));
        assert_eq!(view.status(), ViewStatus::Idle);
        assert_eq!(view.state(), SearchState::default());
    }

    #[tokio::test]
    async fn test_mount_success() {
        let gateway = Scripted::new(Ok(vec![arizona()]), Ok(vec![]));
        let view = SearchView::new(gateway.clone());

        let status = view.mount().await;

        assert_eq!(status, ViewStatus::Success(vec![arizona()]));
        let state = view.state();
        assert_eq!(state.results, vec![arizona()]);
        assert!(!state.is_loading);
        assert_eq!(state.error_message, None);
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_mount_failure_shows_fixed_message() {
        let gateway = Scripted::new(Err(GatewayError::status(500, "db down")), Ok(vec![]));
        let view = SearchView::new(gateway);

        let status = view.mount().await;

        assert_eq!(status, ViewStatus::Failed(LOAD_FAILED_MESSAGE.to_string()));
        assert_eq!(
            view.state().error_message.as_deref(),
            Some("Failed to load regulations. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_blank_query_short_circuits() {
        let gateway = Scripted::new(Ok(vec![arizona()]), Ok(vec![arizona()]));
        let view = SearchView::new(gateway.clone());
        view.mount().await;

        for blank in ["", "   ", "\t\n"] {
            let status = view.submit(blank).await;
            assert_eq!(status, ViewStatus::Success(Vec::new()));
        }

        // Only the mount reached the gateway
        assert_eq!(gateway.calls(), 1);
        assert!(view.state().results.is_empty());
    }

    #[tokio::test]
    async fn test_search_sends_trimmed_query() {
        let gateway = Scripted::new(Ok(vec![]), Ok(vec![arizona()]));
        let view = SearchView::new(gateway.clone());

        let status = view.submit("  arizona ").await;

        assert_eq!(status, ViewStatus::Success(vec![arizona()]));
        assert_eq!(gateway.terms.lock().as_slice(), ["arizona"]);
        // The query text itself is kept as typed
        assert_eq!(view.query(), "  arizona ");
    }

    #[tokio::test]
    async fn test_search_with_no_matches_is_success() {
        let view = SearchView::new(Scripted::new(Ok(vec![]), Ok(vec![])));

        assert_eq!(
            view.submit("zzz-no-match").await,
            ViewStatus::Success(Vec::new())
        );
        assert_eq!(view.state().error_message, None);
    }

    #[tokio::test]
    async fn test_search_failure_then_recovery_clears_error() {
        let gateway = Scripted::with_searches(
            Ok(vec![]),
            vec![Err(GatewayError::Decode("bad json".into())), Ok(vec![arizona()])],
        );
        let view = SearchView::new(gateway);

        assert_eq!(
            view.submit("arizona").await,
            ViewStatus::Failed(SEARCH_FAILED_MESSAGE.to_string())
        );
        assert!(view.state().results.is_empty());

        // Fresh results never sit next to a stale error
        view.search().await;
        let state = view.state();
        assert_eq!(state.results, vec![arizona()]);
        assert_eq!(state.error_message, None);
    }

    #[tokio::test]
    async fn test_works_with_dyn_gateway() {
        let gateway: Arc<dyn RegulationGateway> = Scripted::new(Ok(vec![arizona()]), Ok(vec![]));
        let view: SearchView<dyn RegulationGateway> = SearchView::new(gateway);

        assert_eq!(view.mount().await, ViewStatus::Success(vec![arizona()]));
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    proptest! {
        /// Whitespace-only queries never reach the gateway.
        #[test]
        fn blank_queries_never_call_the_gateway(blank in "[ \t\n\r]*") {
            let gateway = Scripted::new(Ok(vec![]), Ok(vec![arizona()]));
            let view = SearchView::new(gateway.clone());

            let status = block_on(view.submit(blank));

            prop_assert_eq!(status, ViewStatus::Success(Vec::new()));
            prop_assert_eq!(gateway.calls(), 0);
            prop_assert!(!view.state().is_loading);
        }

        /// Any non-blank query settles, and the view is not loading afterwards.
        #[test]
        fn non_blank_queries_always_settle(
            query in "\\PC*".prop_filter("non-blank", |q| !q.trim().is_empty()),
            fails in any::<bool>(),
        ) {
            let answer = if fails {
                Err(GatewayError::network("connection reset"))
            } else {
                Ok(vec![arizona()])
            };
            let gateway = Scripted::new(Ok(vec![]), answer);
            let view = SearchView::new(gateway.clone());

            let status = block_on(view.submit(query.clone()));

            prop_assert!(status.is_settled());
            match status {
                ViewStatus::Success(results) => prop_assert_eq!(results, vec![arizona()]),
                ViewStatus::Failed(message) => prop_assert_eq!(message, SEARCH_FAILED_MESSAGE),
                other => prop_assert!(false, "unexpected status {:?}", other),
            }
            prop_assert!(!view.state().is_loading);
            prop_assert_eq!(gateway.calls(), 1);
            let terms = gateway.terms.lock().clone();
            prop_assert_eq!(terms, vec![query.trim().to_string()]);
        }
    }
}
