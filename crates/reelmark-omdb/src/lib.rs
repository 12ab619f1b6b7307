//! Client for the OMDb movie metadata API.
//!
//! The [`MetadataApi`] trait is the seam the rest of reelmark talks to;
//! [`OmdbClient`] is the HTTP implementation. Batch helpers in [`batch`]
//! fan detail lookups out concurrently and never let one failure abort
//! a whole page.

pub mod batch;
pub mod client;
pub mod error;
pub mod traits;
pub mod wire;

pub use batch::{fetch_details, search_listings};
pub use client::OmdbClient;
pub use error::{Error, Result};
pub use traits::{MetadataApi, SearchError};
