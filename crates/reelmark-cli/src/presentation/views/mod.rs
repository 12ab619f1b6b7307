pub mod init;
pub mod movie;
pub mod preference;
pub mod tui;

pub use init::{GuidanceView, InitResultView};
pub use movie::{MovieDetailView, MovieGridView};
pub use preference::PreferenceChangeView;
