//! Demo host: the filter bar above the request list it narrows down.

mod runtime;
mod state;

pub use runtime::run;
pub use state::{App, FilterOutcome};
