pub mod common;
pub mod init;
pub mod movie;
pub mod preference;
pub mod result;
pub mod screen;

use std::fmt;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use init::{GuidanceViewModel, InitResultViewModel, InitStatus};
pub use movie::{MovieCardViewModel, MovieDetailViewModel, MovieGridViewModel, StarRowViewModel};
pub use preference::{PreferenceChangeViewModel, PreferenceKind};
pub use result::CommandResultViewModel;
pub use screen::{
    NoticeViewModel, SearchBoxViewModel, StatusBarViewModel, TabsViewModel, TuiScreenViewModel,
};

/// Bridge from a ViewModel to the `Display` view that lays it out as text.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
