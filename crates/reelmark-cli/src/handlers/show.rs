use super::{HandlerContext, block_on, parse_movie_id};
use crate::presentation::presenters;
use anyhow::{Result, bail};
use reelmark_runtime::{DETAIL_ERROR_MESSAGE, Workspace, run_to_completion};

pub fn handle(
    ctx: &HandlerContext,
    workspace: &Workspace,
    api_key: Option<&str>,
    id: &str,
) -> Result<()> {
    let id = parse_movie_id(id)?;
    let api = workspace.metadata_client(api_key)?;
    let mut controller = workspace.controller();

    let effect = controller.open_detail(&id);
    block_on(run_to_completion(&mut controller, &api, effect))?;

    let Some(detail) = &controller.state().modal else {
        bail!("{} ({})", DETAIL_ERROR_MESSAGE, id);
    };

    ctx.render(presenters::present_show(
        detail,
        controller.is_favorite(&id),
        controller.rating(&id),
    ))
}
