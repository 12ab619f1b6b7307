use super::{HandlerContext, parse_movie_id};
use crate::presentation::presenters;
use anyhow::Result;
use reelmark_runtime::Workspace;

/// Flip the favorite flag. Unlike the browser, a failed write is an error.
pub fn handle(ctx: &HandlerContext, workspace: &Workspace, id: &str) -> Result<()> {
    let id = parse_movie_id(id)?;
    let mut preferences = workspace.preferences();
    let is_favorite = preferences.toggle_favorite(&id)?;
    tracing::info!(id = %id, is_favorite, "favorite toggled");

    ctx.render(presenters::present_favorite_toggled(
        &id,
        is_favorite,
        preferences.rating(&id),
    ))
}
