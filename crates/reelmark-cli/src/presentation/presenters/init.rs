use reelmark_runtime::{InitOutcome, Workspace};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, GuidanceViewModel, InitResultViewModel, InitStatus,
    StatusBadge,
};

pub fn present_init_result(
    workspace: &Workspace,
    outcome: &InitOutcome,
) -> CommandResultViewModel<InitResultViewModel> {
    let (status, config_path) = match outcome {
        InitOutcome::Created { config_path } => (InitStatus::Created, config_path),
        InitOutcome::KeyUpdated { config_path } => (InitStatus::KeyUpdated, config_path),
        InitOutcome::LoadedExisting { config_path } => (InitStatus::LoadedExisting, config_path),
    };
    let api_key_configured = workspace.config().omdb.api_key.is_some();

    let content = InitResultViewModel {
        status,
        data_dir: workspace.data_dir().display().to_string(),
        config_path: config_path.display().to_string(),
        api_key_configured,
    };

    let badge = match status {
        InitStatus::Created => StatusBadge::success("Workspace created"),
        InitStatus::KeyUpdated => StatusBadge::success("API key updated"),
        InitStatus::LoadedExisting => StatusBadge::info("Workspace already initialized"),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if api_key_configured {
        result = result.with_suggestion(Guidance::new("Start browsing").with_command("reelmark"));
    } else {
        result = result.with_suggestion(
            Guidance::new("Store your OMDb API key")
                .with_command("reelmark init --api-key <KEY>"),
        );
    }
    result
}

pub fn present_guidance(
    workspace: &Workspace,
    favorites_count: usize,
) -> CommandResultViewModel<GuidanceViewModel> {
    let config_exists = workspace.config_path().exists();
    let content = GuidanceViewModel {
        data_dir: workspace.data_dir().display().to_string(),
        config_exists,
        favorites_count,
    };

    let mut result = CommandResultViewModel::new(content);
    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Get started").with_command("reelmark init --api-key <KEY>"),
        );
    }
    result
        .with_suggestion(Guidance::new("Search").with_command("reelmark search <TERM>"))
        .with_suggestion(Guidance::new("Interactive browser").with_command("reelmark browse"))
}
