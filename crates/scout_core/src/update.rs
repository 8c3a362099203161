use crate::{
    AppState, AppStep, Effect, MediaType, Msg, ANALYSIS_FAILED_MESSAGE, MISSING_LOCATION_MESSAGE,
    SEARCH_FAILED_MESSAGE, UNSUPPORTED_FILE_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages that do not belong to the current step are dropped, which keeps
/// at most one remote call in flight per run.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let step = state.step();
    let effects = match msg {
        Msg::ResumeSelected(path) if step == AppStep::Upload => {
            match MediaType::from_path(&path) {
                Some(media_type) => {
                    state.enter(AppStep::Analyzing);
                    vec![Effect::AnalyzeResume { path, media_type }]
                }
                None => {
                    state.set_notice(UNSUPPORTED_FILE_MESSAGE);
                    Vec::new()
                }
            }
        }
        Msg::AnalysisCompleted(data) if step == AppStep::Analyzing => {
            state.store_resume(data);
            state.enter(AppStep::ConfirmDetails);
            Vec::new()
        }
        Msg::AnalysisFailed if step == AppStep::Analyzing => {
            state.fail(ANALYSIS_FAILED_MESSAGE);
            Vec::new()
        }
        Msg::ProfileEdited { field, value } if step == AppStep::ConfirmDetails => {
            state.edit_profile(field, value);
            Vec::new()
        }
        Msg::LocationChanged(location) if step == AppStep::ConfirmDetails => {
            state.preferences_mut().location = location;
            Vec::new()
        }
        Msg::InterestsChanged(interests) if step == AppStep::ConfirmDetails => {
            state.preferences_mut().interests = interests;
            Vec::new()
        }
        Msg::PreferencesSubmitted if step == AppStep::ConfirmDetails => match state.job_query() {
            Some(query) => {
                state.enter(AppStep::Searching);
                vec![Effect::SearchJobs(query)]
            }
            None => {
                state.set_notice(MISSING_LOCATION_MESSAGE);
                Vec::new()
            }
        },
        Msg::SearchCompleted(results) if step == AppStep::Searching => {
            state.store_results(results);
            state.enter(AppStep::Results);
            Vec::new()
        }
        Msg::SearchFailed if step == AppStep::Searching => {
            state.fail(SEARCH_FAILED_MESSAGE);
            Vec::new()
        }
        Msg::ResetClicked if matches!(step, AppStep::Results | AppStep::Error) => {
            state.reset_run();
            Vec::new()
        }
        Msg::ShowSavedJobs
            if matches!(
                step,
                AppStep::Upload | AppStep::ConfirmDetails | AppStep::Results
            ) =>
        {
            state.open_saved_jobs();
            Vec::new()
        }
        Msg::BackClicked if step == AppStep::SavedJobs => {
            state.close_saved_jobs();
            Vec::new()
        }
        Msg::ToggleSaved(source) => vec![Effect::PersistSavedJobs(state.toggle_saved(source))],
        Msg::OpenLink(uri) => vec![Effect::OpenLink(uri)],
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![Effect::PersistTheme(theme)]
        }
        Msg::RestorePreferences { theme, saved } => {
            state.set_theme(theme);
            state.restore_saved(saved);
            Vec::new()
        }
        _ => Vec::new(),
    };

    (state, effects)
}
