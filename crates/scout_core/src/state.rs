use crate::view_model::{progress_index, AppViewModel, ProfileView, ResultsView, SourceView};
use crate::{
    GroundingSource, JobQuery, ParsedResumeData, ProfileField, SavedJobs, SearchResult, Theme,
};

pub const ANALYSIS_FAILED_MESSAGE: &str =
    "We couldn't parse that file. Please try a different PDF or Image.";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed due to a network issue. Please try again.";
pub const MISSING_LOCATION_MESSAGE: &str = "Please enter a location";
pub const DEFAULT_INTERESTS: &str = "relevant positions";

/// Wizard step. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppStep {
    #[default]
    Upload,
    Analyzing,
    ConfirmDetails,
    Searching,
    Results,
    SavedJobs,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPreferences {
    pub location: String,
    pub interests: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    step: AppStep,
    /// Where `BackClicked` returns to from the saved-jobs view.
    saved_origin: Option<AppStep>,
    resume: Option<ParsedResumeData>,
    preferences: SearchPreferences,
    results: Option<SearchResult>,
    error_message: Option<&'static str>,
    notice: Option<&'static str>,
    saved: SavedJobs,
    theme: Theme,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> AppStep {
        self.step
    }

    pub fn resume(&self) -> Option<&ParsedResumeData> {
        self.resume.as_ref()
    }

    pub fn results(&self) -> Option<&SearchResult> {
        self.results.as_ref()
    }

    pub fn saved_jobs(&self) -> &SavedJobs {
        &self.saved
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            step: self.step,
            progress: progress_index(self.step),
            theme: self.theme,
            notice: self.notice.map(str::to_owned),
            error_message: self.error_message.map(str::to_owned),
            profile: self.resume.clone().map(ProfileView::new),
            preferences: self.preferences.clone(),
            results: self
                .results
                .as_ref()
                .map(|results| ResultsView::new(results, &self.saved)),
            saved: self
                .saved
                .iter()
                .map(|source| SourceView::new(source.clone(), true))
                .collect(),
        }
    }

    /// Returns whether the view changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: &'static str) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn enter(&mut self, step: AppStep) {
        self.step = step;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn store_resume(&mut self, data: ParsedResumeData) {
        self.resume = Some(data);
    }

    pub(crate) fn edit_profile(&mut self, field: ProfileField, value: String) {
        if let Some(resume) = self.resume.as_mut() {
            resume.set_field(field, value);
            self.mark_dirty();
        }
    }

    pub(crate) fn preferences_mut(&mut self) -> &mut SearchPreferences {
        self.mark_dirty();
        &mut self.preferences
    }

    /// Builds the search input, or `None` when the location is blank or no profile exists.
    pub(crate) fn job_query(&self) -> Option<JobQuery> {
        let location = self.preferences.location.trim();
        if location.is_empty() {
            return None;
        }
        let interests = match self.preferences.interests.trim() {
            "" => DEFAULT_INTERESTS,
            other => other,
        };
        Some(JobQuery {
            profile: self.resume.clone()?,
            location: location.to_string(),
            interests: interests.to_string(),
        })
    }

    pub(crate) fn store_results(&mut self, results: SearchResult) {
        self.results = Some(results);
    }

    pub(crate) fn fail(&mut self, message: &'static str) {
        self.error_message = Some(message);
        self.enter(AppStep::Error);
    }

    /// Drops everything belonging to the current run. Bookmarks and theme survive.
    pub(crate) fn reset_run(&mut self) {
        self.resume = None;
        self.preferences = SearchPreferences::default();
        self.results = None;
        self.error_message = None;
        self.saved_origin = None;
        self.enter(AppStep::Upload);
    }

    pub(crate) fn open_saved_jobs(&mut self) {
        self.saved_origin = Some(self.step);
        self.enter(AppStep::SavedJobs);
    }

    pub(crate) fn close_saved_jobs(&mut self) {
        let origin = self.saved_origin.take().unwrap_or(AppStep::Upload);
        self.enter(origin);
    }

    pub(crate) fn toggle_saved(&mut self, source: GroundingSource) -> Vec<GroundingSource> {
        self.saved.toggle(source);
        self.mark_dirty();
        self.saved.to_vec()
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.mark_dirty();
    }

    pub(crate) fn restore_saved(&mut self, saved: Vec<GroundingSource>) {
        self.saved = SavedJobs::from_sources(saved);
        self.mark_dirty();
    }
}
