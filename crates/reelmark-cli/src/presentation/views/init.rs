use std::fmt;

use crate::presentation::view_models::{GuidanceViewModel, InitResultViewModel};

// --------------------------------------------------------
// Init Result View
// --------------------------------------------------------

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f, "Config file:    {}", self.data.config_path)?;
        writeln!(
            f,
            "OMDb API key:   {}",
            if self.data.api_key_configured {
                "configured"
            } else {
                "missing"
            }
        )
    }
}

// --------------------------------------------------------
// Guidance View
// --------------------------------------------------------

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "reelmark - search movies, keep favorites, rate them")?;
        writeln!(f)?;
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        if self.data.config_exists {
            writeln!(f, "Favorites:      {}", self.data.favorites_count)?;
        } else {
            writeln!(f, "Not initialized yet.")?;
        }
        Ok(())
    }
}
