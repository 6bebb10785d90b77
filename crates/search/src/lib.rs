//! Docket Search
//!
//! Headless search view over a [`RegulationGateway`]. Holds the transient
//! display state (query, results, loading flag, error message) and runs the
//! two user-triggered operations: initial load and search-on-demand.
//!
//! ```text
//!            mount() / search()
//!   ┌──────┐ ─────────────────▶ ┌─────────┐  settle (latest token)  ┌───────────────────┐
//!   │ Idle │                    │ Loading │ ──────────────────────▶ │ Success / Failed  │
//!   └──────┘                    └─────────┘                         └───────────────────┘
//!      │                             ▲                                     │
//!      │  search() with blank query  │         search() / mount()          │
//!      └──────────▶ Success([]) ◀────┼─────────────────────────────────────┘
//! ```
//!
//! Every request takes a fresh [`RequestToken`]; a response that settles
//! after a newer request was issued is discarded.

pub mod state;
pub mod view;

pub use docket_ports::RegulationGateway;
pub use state::{RequestToken, SearchState, ViewStatus};
pub use view::{LOAD_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE, SearchView};
