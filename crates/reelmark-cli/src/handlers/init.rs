use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use reelmark_runtime::Workspace;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, data_dir: &Path, api_key: Option<&str>) -> Result<()> {
    let (workspace, outcome) = Workspace::init(data_dir, api_key)?;
    ctx.render(presenters::present_init_result(&workspace, &outcome))
}
