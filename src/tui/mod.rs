//! Terminal UI building blocks for the network filter view.
//!
//! The submodules here expose the filter bar and request table widgets, the
//! search box they share, and the colour themes.

pub mod components;
pub mod input;
pub mod theme;
