use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Number of indicators in a star row
pub const STAR_COUNT: u8 = 5;

/// User rating in stars, 0 (unrated) through 5
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const UNRATED: Rating = Rating(0);

    /// Any stored value in 0..=5.
    pub fn new(stars: u8) -> Result<Self> {
        if stars > STAR_COUNT {
            return Err(Error::InvalidRating(stars as i64));
        }
        Ok(Self(stars))
    }

    /// A value the rating control can set: 1..=5.
    pub fn from_stars(stars: u8) -> Result<Self> {
        if stars == 0 || stars > STAR_COUNT {
            return Err(Error::InvalidRating(stars as i64));
        }
        Ok(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0
    }

    /// Whether indicator `index` (1-based) is filled.
    pub fn is_filled(self, index: u8) -> bool {
        index >= 1 && index <= self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, STAR_COUNT)
    }
}
