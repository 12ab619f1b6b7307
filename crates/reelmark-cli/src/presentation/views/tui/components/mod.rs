//! TUI Components
//!
//! Components encapsulate UI State + Input Logic + Render Logic:
//! 1. Selection and focus stay private to the component
//! 2. Key handling returns an action for the parent to apply
//! 3. Index safety is enforced at render time

pub mod browser;

pub use browser::{BrowseAction, BrowserComponent};
