use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use reelmark_runtime::Workspace;

pub fn handle(ctx: &HandlerContext, workspace: &Workspace) -> Result<()> {
    let favorites_count = workspace.preferences().favorite_ids().len();
    ctx.render(presenters::present_guidance(workspace, favorites_count))
}
