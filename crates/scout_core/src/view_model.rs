use url::Url;

use crate::presenter::{present, Block};
use crate::{
    AppStep, GroundingSource, ParsedResumeData, SavedJobs, SearchPreferences, SearchResult, Theme,
};

/// Labels of the three visible wizard stages.
pub const PROGRESS_LABELS: [&str; 3] = ["Resume", "Preferences", "Opportunities"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub step: AppStep,
    /// Index into [`PROGRESS_LABELS`].
    pub progress: usize,
    pub theme: Theme,
    pub notice: Option<String>,
    pub error_message: Option<String>,
    pub profile: Option<ProfileView>,
    pub preferences: SearchPreferences,
    pub results: Option<ResultsView>,
    pub saved: Vec<SourceView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub data: ParsedResumeData,
    pub rating: Option<AtsRating>,
}

impl ProfileView {
    pub(crate) fn new(data: ParsedResumeData) -> Self {
        let rating = data.ats_score.map(AtsRating::from_score);
        Self { data, rating }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtsRating {
    Excellent,
    Good,
    NeedsWork,
}

impl AtsRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => AtsRating::Excellent,
            60..=79 => AtsRating::Good,
            _ => AtsRating::NeedsWork,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AtsRating::Excellent => "Excellent",
            AtsRating::Good => "Good",
            AtsRating::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub blocks: Vec<Block>,
    pub sources: Vec<SourceView>,
}

impl ResultsView {
    pub(crate) fn new(results: &SearchResult, saved: &SavedJobs) -> Self {
        Self {
            blocks: present(&results.text),
            sources: results
                .sources
                .iter()
                .map(|source| SourceView::new(source.clone(), saved.contains(&source.uri)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceView {
    pub source: GroundingSource,
    pub host: String,
    pub saved: bool,
}

impl SourceView {
    pub(crate) fn new(source: GroundingSource, saved: bool) -> Self {
        let host = host_of(&source.uri);
        Self {
            source,
            host,
            saved,
        }
    }
}

/// Host name of `uri`, or the raw string when it does not parse.
pub fn host_of(uri: &str) -> String {
    Url::parse(uri)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
        .unwrap_or_else(|| uri.to_string())
}

pub(crate) fn progress_index(step: AppStep) -> usize {
    match step {
        AppStep::Upload | AppStep::Analyzing => 0,
        AppStep::ConfirmDetails | AppStep::Searching => 1,
        AppStep::Results => 2,
        AppStep::SavedJobs | AppStep::Error => 0,
    }
}
