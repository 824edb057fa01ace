//! Responsive network filter bar for terminal trace viewers.
//!
//! The crate renders a row of resource-type tabs next to a search box. When
//! the row is too narrow, trailing tabs collapse behind a "More" affordance
//! while the selected tab always stays visible. [`FilterState`] is the value
//! the bar edits; hosts either poll it or register a change callback on
//! [`FilterBarState`].

pub mod app;
pub mod app_dirs;
pub mod filter;
pub mod logging;
pub mod overflow;
pub mod requests;
pub mod resource_type;
pub mod tui;

pub use app::{App, FilterOutcome, run};
pub use filter::FilterState;
pub use overflow::{OverflowCache, TabLayout, compute_layout};
pub use requests::{RequestEntry, RequestsError, filter_requests, load_requests, sample_requests};
pub use resource_type::{ResourceType, UnknownResourceType};
pub use tui::components::{FilterBar, FilterBarOptions, FilterBarState, TabHit};
pub use tui::input::SearchInput;
pub use tui::theme::{Theme, default_theme};
