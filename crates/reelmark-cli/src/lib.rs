// NOTE: reelmark layering
//
// reelmark-types    domain records (MovieId, MovieDetail, Rating)
// reelmark-store    key-value persistence of favorites and ratings
// reelmark-omdb     metadata API seam and its OMDb implementation
// reelmark-runtime  config, workspace and the interaction controller
// reelmark (here)   argument parsing, handlers and presentation
//
// Handlers never touch state directly: they call the controller (or the
// preference store for one-shot writes), then hand its output to a presenter.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
