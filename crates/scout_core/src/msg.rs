use std::path::PathBuf;

use crate::{GroundingSource, ParsedResumeData, ProfileField, SearchResult, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a resume file.
    ResumeSelected(PathBuf),
    /// Resume analysis returned a schema-conformant profile.
    AnalysisCompleted(ParsedResumeData),
    /// Resume analysis failed for any reason; detail is logged by the caller.
    AnalysisFailed,
    /// User edited one of the extracted profile fields.
    ProfileEdited { field: ProfileField, value: String },
    /// User edited the target location.
    LocationChanged(String),
    /// User edited the free-text interests.
    InterestsChanged(String),
    /// User asked to start the job search.
    PreferencesSubmitted,
    /// Job search returned.
    SearchCompleted(SearchResult),
    /// Job search failed for any reason; detail is logged by the caller.
    SearchFailed,
    /// User clicked New Search / Try Again.
    ResetClicked,
    /// User opened the saved-jobs view.
    ShowSavedJobs,
    /// User left the saved-jobs view.
    BackClicked,
    /// User bookmarked or un-bookmarked a listing.
    ToggleSaved(GroundingSource),
    /// User asked to open a listing externally.
    OpenLink(String),
    /// User switched between dark and light.
    ThemeToggled,
    /// Restore theme and bookmarks from local storage.
    RestorePreferences {
        theme: Theme,
        saved: Vec<GroundingSource>,
    },
}
