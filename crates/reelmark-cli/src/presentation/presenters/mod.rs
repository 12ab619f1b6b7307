pub mod init;
pub mod movie;
pub mod preference;
pub mod screen;

pub use init::{present_guidance, present_init_result};
pub use movie::{
    PLACEHOLDER_POSTER_URL, patch_movie, poster_or_placeholder, present_card, present_detail,
    present_favorites, present_grid, present_search_result, present_show, star_row,
};
pub use preference::{present_favorite_toggled, present_rated};
pub use screen::{patch_screen, present_notice, present_screen};
