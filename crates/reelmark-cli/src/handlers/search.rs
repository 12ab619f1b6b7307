use super::{HandlerContext, block_on};
use crate::presentation::presenters;
use anyhow::{Result, bail};
use reelmark_runtime::{NoticeLevel, Workspace, run_to_completion};
use std::time::Instant;

/// Search once and print the grid.
///
/// "Not found" is a normal outcome and prints a notice; a network failure
/// is an error.
pub fn handle(
    ctx: &HandlerContext,
    workspace: &Workspace,
    api_key: Option<&str>,
    term: &str,
) -> Result<()> {
    let mut controller = workspace.controller();
    controller.edit_query(term, Instant::now());
    let effect = controller.submit();
    if effect.is_none() {
        bail!("Search term must not be blank");
    }

    let api = workspace.metadata_client(api_key)?;
    block_on(run_to_completion(&mut controller, &api, effect))?;

    let state = controller.state();
    if let Some(notice) = state.notice.as_ref().filter(|n| n.level == NoticeLevel::Error) {
        bail!("{}", notice.message);
    }

    ctx.render(presenters::present_search_result(
        term.trim(),
        &state.search_grid,
        state.notice.as_ref(),
        controller.preferences(),
    ))
}
