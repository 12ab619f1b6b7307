pub mod browse;
pub mod context;
pub mod favorite;
pub mod favorites;
pub mod guidance;
pub mod init;
pub mod rate;
pub mod search;
pub mod show;

pub use context::HandlerContext;

use anyhow::{Result, bail};
use reelmark_types::MovieId;
use std::future::Future;

/// Drive one future to completion on a fresh single-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

pub(crate) fn parse_movie_id(raw: &str) -> Result<MovieId> {
    let id = raw.trim();
    if id.is_empty() {
        bail!("Movie id must not be empty");
    }
    Ok(MovieId::from(id))
}
