use scout_core::{GroundingSource, Msg, Theme};
use scout_engine::{load_json, save_json, KeyValueStore};
use scout_logging::{scout_error, scout_info};
use serde::{Deserialize, Serialize};

pub(crate) const THEME_KEY: &str = "theme";
pub(crate) const SAVED_JOBS_KEY: &str = "savedJobs";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSource {
    uri: String,
    #[serde(default)]
    title: String,
}

/// Reads theme and bookmarks, falling back to `system_theme` and an empty list.
pub(crate) fn restore_message(store: &dyn KeyValueStore, system_theme: Theme) -> Msg {
    let theme = load_json::<String>(store, THEME_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or(system_theme);

    let saved: Vec<GroundingSource> = load_json::<Vec<PersistedSource>>(store, SAVED_JOBS_KEY)
        .unwrap_or_default()
        .into_iter()
        .map(|source| GroundingSource::new(source.uri, source.title))
        .collect();

    scout_info!("Restored theme={} saved_jobs={}", theme, saved.len());
    Msg::RestorePreferences { theme, saved }
}

pub(crate) fn save_theme(store: &dyn KeyValueStore, theme: Theme) {
    if let Err(err) = save_json(store, THEME_KEY, theme.as_str()) {
        scout_error!("Failed to persist theme: {}", err);
    }
}

pub(crate) fn save_saved_jobs(store: &dyn KeyValueStore, saved: &[GroundingSource]) {
    let persisted: Vec<PersistedSource> = saved
        .iter()
        .map(|source| PersistedSource {
            uri: source.uri.clone(),
            title: source.title.clone(),
        })
        .collect();
    if let Err(err) = save_json(store, SAVED_JOBS_KEY, &persisted) {
        scout_error!("Failed to persist saved jobs: {}", err);
    }
}

/// Terminal background from `COLORFGBG` ("fg;bg" or "fg;x;bg"). Dark when unknown.
pub(crate) fn system_theme(colorfgbg: Option<&str>) -> Theme {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(7) | Some(9..=15) => Theme::Light,
        _ => Theme::Dark,
    }
}
