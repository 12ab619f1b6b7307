use super::{HandlerContext, block_on};
use crate::presentation::presenters;
use anyhow::Result;
use reelmark_runtime::{Workspace, run_to_completion};

/// List favorites with fresh details.
///
/// With nothing marked no request is made, so no API key is needed.
pub fn handle(ctx: &HandlerContext, workspace: &Workspace, api_key: Option<&str>) -> Result<()> {
    let mut controller = workspace.controller();
    let effect = controller.show_favorites();

    if effect.is_some() {
        let api = workspace.metadata_client(api_key)?;
        block_on(run_to_completion(&mut controller, &api, effect))?;
    }

    let state = controller.state();
    ctx.render(presenters::present_favorites(
        &state.favorites_grid,
        state.visible_notice(),
        controller.preferences(),
    ))
}
