//! Widgets composing the network filter view.

pub mod filter_bar;
pub mod request_table;

pub use filter_bar::{FilterBar, FilterBarOptions, FilterBarState, TabHit};
pub use request_table::{RequestTable, render_request_table};
