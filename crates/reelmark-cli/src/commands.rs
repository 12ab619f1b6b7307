use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::Result;
use is_terminal::IsTerminal;
use reelmark_runtime::{Workspace, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let api_key = cli.api_key.as_deref();
    let ctx = HandlerContext::new(cli.format);

    let Some(command) = cli.command else {
        let workspace = Workspace::open(&data_dir)?;
        if std::io::stdout().is_terminal() && std::io::stdin().is_terminal() {
            return handlers::browse::handle(&workspace, api_key, None, cli.log_level);
        }
        logging::init_stderr(cli.log_level);
        return handlers::guidance::handle(&ctx, &workspace);
    };

    // The browser logs to a file; everything else to stderr
    if !matches!(command, Commands::Browse { .. }) {
        logging::init_stderr(cli.log_level);
    }

    match command {
        Commands::Init => handlers::init::handle(&ctx, &data_dir, api_key),

        Commands::Browse { query } => {
            let workspace = Workspace::open(&data_dir)?;
            handlers::browse::handle(&workspace, api_key, query, cli.log_level)
        }

        Commands::Search { term } => {
            let workspace = Workspace::open(&data_dir)?;
            handlers::search::handle(&ctx, &workspace, api_key, &term.join(" "))
        }

        Commands::Show { id } => {
            let workspace = Workspace::open(&data_dir)?;
            handlers::show::handle(&ctx, &workspace, api_key, &id)
        }

        Commands::Favorites => {
            let workspace = Workspace::open(&data_dir)?;
            handlers::favorites::handle(&ctx, &workspace, api_key)
        }

        Commands::Favorite { id } => {
            let workspace = Workspace::open(&data_dir)?;
            handlers::favorite::handle(&ctx, &workspace, &id)
        }

        Commands::Rate { id, stars } => {
            let workspace = Workspace::open(&data_dir)?;
            handlers::rate::handle(&ctx, &workspace, &id, stars)
        }
    }
}
