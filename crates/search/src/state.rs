use docket_core::Regulation;

/// Logical state of a search view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request settled with these results (possibly empty)
    Success(Vec<Regulation>),
    /// The latest request failed; carries the user-facing message
    Failed(String),
}

impl ViewStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, ViewStatus::Success(_) | ViewStatus::Failed(_))
    }
}

/// Snapshot of everything a front end needs to draw the view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Regulation>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// Identifies one issued request. Tokens increase monotonically per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(crate) const INITIAL: RequestToken = RequestToken(0);

    pub(crate) fn next(self) -> RequestToken {
        RequestToken(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Loading,
    Success,
    Failed(String),
}

/// Mutable view state, guarded by the view's mutex
#[derive(Debug)]
pub(crate) struct ViewInner {
    pub(crate) query: String,
    pub(crate) results: Vec<Regulation>,
    pub(crate) phase: Phase,
    pub(crate) latest: RequestToken,
}

impl ViewInner {
    pub(crate) fn new() -> Self {
        ViewInner {
            query: String::new(),
            results: Vec::new(),
            phase: Phase::Idle,
            latest: RequestToken::INITIAL,
        }
    }

    /// Start a request: enter Loading, clear any prior error
    pub(crate) fn begin(&mut self) -> RequestToken {
        self.latest = self.latest.next();
        self.phase = Phase::Loading;
        self.latest
    }

    /// Settle immediately with results, superseding anything in flight
    pub(crate) fn resolve(&mut self, results: Vec<Regulation>) -> RequestToken {
        self.latest = self.latest.next();
        self.results = results;
        self.phase = Phase::Success;
        self.latest
    }

    /// Apply an outcome if `token` is still the latest request.
    /// Returns false when the response is stale and was dropped.
    pub(crate) fn settle(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Regulation>, String>,
    ) -> bool {
        if token != self.latest {
            return false;
        }
        match outcome {
            Ok(results) => {
                self.results = results;
                self.phase = Phase::Success;
            }
            Err(message) => {
                self.results.clear();
                self.phase = Phase::Failed(message);
            }
        }
        true
    }

    pub(crate) fn status(&self) -> ViewStatus {
        match &self.phase {
            Phase::Idle => ViewStatus::Idle,
            Phase::Loading => ViewStatus::Loading,
            Phase::Success => ViewStatus::Success(self.results.clone()),
            Phase::Failed(message) => ViewStatus::Failed(message.clone()),
        }
    }

    pub(crate) fn snapshot(&self) -> SearchState {
        SearchState {
            query: self.query.clone(),
            results: self.results.clone(),
            is_loading: self.phase == Phase::Loading,
            error_message: match &self.phase {
                Phase::Failed(message) => Some(message.clone()),
                _ => None,
            },
        }
    }
}
