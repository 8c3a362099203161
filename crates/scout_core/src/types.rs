use std::fmt;

/// Profile fields extracted from a resume, plus the ATS audit.
///
/// Held in memory for one wizard run only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedResumeData {
    pub job_name: String,
    pub experience_years: String,
    /// Comma-joined list.
    pub skills: String,
    /// Comma-joined list, or "None".
    pub certifications: String,
    /// Always within `0..=100` when present.
    pub ats_score: Option<u8>,
    pub ats_recommendations: Vec<String>,
}

impl ParsedResumeData {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::JobName => &self.job_name,
            ProfileField::ExperienceYears => &self.experience_years,
            ProfileField::Skills => &self.skills,
            ProfileField::Certifications => &self.certifications,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::JobName => self.job_name = value,
            ProfileField::ExperienceYears => self.experience_years = value,
            ProfileField::Skills => self.skills = value,
            ProfileField::Certifications => self.certifications = value,
        }
    }
}

/// The user-editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    JobName,
    ExperienceYears,
    Skills,
    Certifications,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::JobName,
        ProfileField::ExperienceYears,
        ProfileField::Skills,
        ProfileField::Certifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::JobName => "Job Title",
            ProfileField::ExperienceYears => "Experience",
            ProfileField::Skills => "Skills",
            ProfileField::Certifications => "Certifications",
        }
    }
}

/// A web citation the search answer was grounded on. Identity is `uri`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

impl GroundingSource {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

/// Outcome of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

/// Validated input of one job search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub profile: ParsedResumeData,
    /// Trimmed, never empty.
    pub location: String,
    /// Trimmed; defaults to "relevant positions".
    pub interests: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
