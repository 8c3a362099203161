use std::path::PathBuf;

use crate::{GroundingSource, JobQuery, MediaType, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AnalyzeResume { path: PathBuf, media_type: MediaType },
    SearchJobs(JobQuery),
    PersistSavedJobs(Vec<GroundingSource>),
    PersistTheme(Theme),
    OpenLink(String),
}
