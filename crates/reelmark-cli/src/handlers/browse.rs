use crate::logging;
use crate::presentation::presenters::{patch_screen, present_notice, present_screen};
use crate::presentation::views::tui::components::BrowseAction;
use crate::presentation::TuiRenderer;
use crate::types::LogLevel;
use anyhow::{Result, anyhow, bail};
use crossterm::event::{self, Event};
use is_terminal::IsTerminal;
use reelmark_omdb::MetadataApi;
use reelmark_runtime::{Completion, Controller, Effect, PreferenceChange, Workspace, perform};
use reelmark_store::KeyValueStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

enum BrowseEvent {
    Input(Event),
    InputFailed(String),
    Completed(Completion),
}

/// What the loop does after an action was applied
#[derive(Debug, PartialEq)]
enum Step {
    Quit,
    Redraw(Option<Effect>),
    Patch(PreferenceChange),
}

pub fn handle(
    workspace: &Workspace,
    api_key: Option<&str>,
    query: Option<String>,
    log_level: LogLevel,
) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The interactive browser needs a terminal; use `reelmark search <TERM>` instead");
    }

    let _guard = logging::init_file(log_level, &workspace.log_path())?;
    let api: Arc<dyn MetadataApi> = Arc::new(workspace.metadata_client(api_key)?);
    let controller = workspace.controller();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(browse_loop(controller, api, query));
    // The input reader may still sit in a blocking poll
    runtime.shutdown_background();

    if let Err(err) = &result {
        tracing::error!(error = %err, "browser exited with error");
    }
    result
}

async fn browse_loop<S: KeyValueStore>(
    mut controller: Controller<S>,
    api: Arc<dyn MetadataApi>,
    query: Option<String>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut tui = TuiRenderer::enter()?;
    spawn_input_reader(tx.clone());

    if let Some(query) = query {
        controller.edit_query(query, Instant::now());
        dispatch(&api, &tx, controller.submit());
    }

    let mut screen = present_screen(controller.state(), controller.preferences());
    tui.draw(&screen)?;

    loop {
        let deadline = controller.next_deadline();
        let wake_at = tokio::time::Instant::from_std(deadline.unwrap_or_else(Instant::now));

        tokio::select! {
            _ = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                dispatch(&api, &tx, controller.tick(Instant::now()));
            }
            event = rx.recv() => {
                let Some(event) = event else { break };
                match event {
                    BrowseEvent::Completed(completion) => {
                        if !controller.complete(completion) {
                            continue;
                        }
                    }
                    BrowseEvent::Input(Event::Key(key)) => {
                        // Focus and selection live in the component; repaint them
                        let Some(action) = tui.handle_key(key, &screen) else {
                            tui.draw(&screen)?;
                            continue;
                        };
                        match apply(&mut controller, action) {
                            Step::Quit => break,
                            Step::Redraw(effect) => dispatch(&api, &tx, effect),
                            Step::Patch(change) => {
                                let favorites_count = controller.preferences().favorite_ids().len();
                                patch_screen(&mut screen, &change, favorites_count);
                                screen.notice = present_notice(controller.state());
                                tui.draw(&screen)?;
                                continue;
                            }
                        }
                    }
                    BrowseEvent::Input(Event::Resize(..)) => {}
                    BrowseEvent::Input(_) => continue,
                    BrowseEvent::InputFailed(message) => {
                        return Err(anyhow!("Terminal input failed: {}", message));
                    }
                }
            }
        }

        screen = present_screen(controller.state(), controller.preferences());
        tui.draw(&screen)?;
    }

    Ok(())
}

/// Apply one browser action to the controller.
fn apply<S: KeyValueStore>(controller: &mut Controller<S>, action: BrowseAction) -> Step {
    match action {
        BrowseAction::Quit => Step::Quit,
        BrowseAction::EditQuery(term) => {
            controller.edit_query(term, Instant::now());
            Step::Redraw(None)
        }
        BrowseAction::Submit => Step::Redraw(controller.submit()),
        BrowseAction::SwitchView => Step::Redraw(controller.switch_view()),
        BrowseAction::ShowSearch => {
            controller.show_search();
            Step::Redraw(None)
        }
        BrowseAction::ShowFavorites => Step::Redraw(controller.show_favorites()),
        BrowseAction::ToggleFavorite(id) => Step::Patch(controller.toggle_favorite(&id)),
        BrowseAction::Rate(id, stars) => controller
            .rate(&id, stars)
            .map_or(Step::Redraw(None), Step::Patch),
        BrowseAction::OpenDetail(id) => Step::Redraw(controller.open_detail(&id)),
        BrowseAction::CloseDetail => {
            controller.close_detail();
            Step::Redraw(None)
        }
        BrowseAction::DismissNotice => {
            controller.dismiss_notice();
            Step::Redraw(None)
        }
    }
}

fn dispatch(
    api: &Arc<dyn MetadataApi>,
    tx: &mpsc::UnboundedSender<BrowseEvent>,
    effect: Option<Effect>,
) {
    let Some(effect) = effect else { return };
    tracing::debug!(?effect, "dispatching");

    let api = Arc::clone(api);
    let tx = tx.clone();
    tokio::spawn(async move {
        let completion = perform(api.as_ref(), effect).await;
        // The loop may have exited; nothing left to update
        let _ = tx.send(BrowseEvent::Completed(completion));
    });
}

fn spawn_input_reader(tx: mpsc::UnboundedSender<BrowseEvent>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            let ready = match event::poll(INPUT_POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(err) => {
                    let _ = tx.send(BrowseEvent::InputFailed(err.to_string()));
                    return;
                }
            };
            if !ready {
                continue;
            }
            let event = match event::read() {
                Ok(event) => BrowseEvent::Input(event),
                Err(err) => BrowseEvent::InputFailed(err.to_string()),
            };
            let failed = matches!(event, BrowseEvent::InputFailed(_));
            if tx.send(event).is_err() || failed {
                return;
            }
        }
    });
}
