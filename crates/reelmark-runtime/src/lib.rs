pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod tasks;
pub mod ui;
pub mod workspace;

pub use config::{Config, OmdbConfig, SearchConfig, resolve_workspace_path};
pub use controller::{
    Controller, DETAIL_ERROR_MESSAGE, NO_FAVORITES_MESSAGE, PreferenceChange,
    favorites_loaded_message,
};
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use tasks::{Completion, Effect, perform, run_to_completion};
pub use ui::{Notice, NoticeLevel, Surface, Ticket, UiState, View};
pub use workspace::{InitOutcome, Workspace};
