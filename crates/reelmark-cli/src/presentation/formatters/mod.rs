pub mod text;

pub use text::{join_present, star_glyphs, truncate};
