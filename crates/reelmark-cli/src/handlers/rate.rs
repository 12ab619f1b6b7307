use super::{HandlerContext, parse_movie_id};
use crate::presentation::presenters;
use anyhow::Result;
use reelmark_runtime::Workspace;

pub fn handle(ctx: &HandlerContext, workspace: &Workspace, id: &str, stars: u8) -> Result<()> {
    let id = parse_movie_id(id)?;
    let mut preferences = workspace.preferences();
    let rating = preferences.set_rating(&id, stars)?;
    tracing::info!(id = %id, %rating, "movie rated");

    ctx.render(presenters::present_rated(
        &id,
        preferences.is_favorite(&id),
        rating,
    ))
}
