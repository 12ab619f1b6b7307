//! # Presentation Layer
//!
//! MVVM adaptation separating runtime state from output:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!                                                   (Console/JSON/TUI)
//! ```
//!
//! * `view_models/`: serializable data contracts. No logic.
//! * `presenters/`: pure functions from runtime records and preferences to ViewModels.
//! * `views/`: `Display` layouts for text output and ratatui widgets for the browser.
//! * `renderers/`: console (text or JSON) and the full-screen TUI.
//! * `formatters/`: small string helpers shared by views.
//!
//! Handlers never print directly; they build a ViewModel and hand it to a renderer.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
