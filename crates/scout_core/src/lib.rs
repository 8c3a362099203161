//! Jobscout core: pure wizard state machine, domain types and the result presenter.
mod effect;
mod media;
mod msg;
pub mod presenter;
mod saved;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use media::{MediaType, UNSUPPORTED_FILE_MESSAGE};
pub use msg::Msg;
pub use presenter::{Block, Inline, ResultGroup};
pub use saved::SavedJobs;
pub use state::{
    AppState, AppStep, SearchPreferences, ANALYSIS_FAILED_MESSAGE, DEFAULT_INTERESTS,
    MISSING_LOCATION_MESSAGE, SEARCH_FAILED_MESSAGE,
};
pub use types::{GroundingSource, JobQuery, ParsedResumeData, ProfileField, SearchResult, Theme};
pub use update::update;
pub use view_model::{
    host_of, AppViewModel, AtsRating, ProfileView, ResultsView, SourceView, PROGRESS_LABELS,
};
