use serde_json::{json, Value};

use scout_core::JobQuery;

/// Fixed instruction sent next to the resume attachment.
pub const ANALYSIS_INSTRUCTIONS: &str = r#"Analyze the provided resume. Extract specific details for a job search and perform an ATS (Applicant Tracking System) audit.

1. **Extraction**:
   - Current Job Title (job name)
   - Years of Experience (approximate number)
   - Key Skills (comma separated list)
   - Certifications (comma separated list, or "None" if none found)

2. **ATS Audit**:
   - **ATS Score**: Calculate a score from 0-100 based on keyword relevance, formatting clarity, quantifiable achievements, and overall impact. Be strict but fair.
   - **Recommendations**: Provide 3-4 specific, actionable, and short bullet points on how to improve the resume (e.g., "Use more action verbs", "Quantify sales results", "Add specific technical keywords").

Return the result in JSON format."#;

/// Job boards the search is told to cover first.
pub const PRIORITY_PLATFORMS: [&str; 7] = [
    "LinkedIn",
    "Indeed",
    "Naukri",
    "Glassdoor",
    "Monster",
    "ZipRecruiter",
    "Google Jobs",
];

/// Output schema declared for resume analysis: six fields, all required.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "jobName": { "type": "STRING" },
            "experienceYears": { "type": "STRING" },
            "skills": { "type": "STRING" },
            "certifications": { "type": "STRING" },
            "atsScore": { "type": "NUMBER" },
            "atsRecommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": [
            "jobName",
            "experienceYears",
            "skills",
            "certifications",
            "atsScore",
            "atsRecommendations"
        ]
    })
}

/// Builds the grounded search prompt. `today` anchors the freshness directive.
pub fn search_prompt(query: &JobQuery, today: Option<&str>) -> String {
    let profile = &query.profile;
    let location = &query.location;
    let date_line = today
        .map(|date| format!("\nToday's date: {date}\n"))
        .unwrap_or_default();

    format!(
        r#"Role: You are an expert AI Recruitment Researcher performing an exhaustive web search for active job listings.
{date_line}
Candidate Profile:
- Role: {role}
- Experience: {experience}
- Skills: {skills}
- Certifications: {certifications}
- Target Location: {location}
- Specific Interests: {interests}

Task: Conduct a comprehensive search to find every relevant active job listing. Do not limit yourself to one platform.

Search Scope:
1. **Major Aggregators**: Scan {platforms}.
2. **Startup & Tech Hubs**: Search Wellfound (AngelList), Y Combinator jobs, BuiltIn, and Product Hunt.
3. **Direct Company Career Pages**: Identify companies in {location} matching the profile and find direct links to their ATS (Lever, Greenhouse, Ashby, Workday, etc.).
4. **Niche Communities**: Search specialized boards relevant to the candidate's field.

Directives:
- **Maximize Coverage**: Find as many high-quality, distinct listings as possible.
- **Deep Matching**: Look for roles that specifically mention the candidate's key skills ({skills}).
- **Freshness**: Prioritize jobs posted within the last 14 days.

Structure your response using the following Markdown format exactly:

# Group: [Descriptive Category Name, e.g., "Top Corporate Roles", "High-Growth Startups", "Remote Opportunities"]
**Summary**: [Brief market insight about this specific category]
*   [Job Title] at [Company] - [Location] ([Apply Link])
*   [Job Title] at [Company] - [Location] ([Apply Link])

# Group: [Another Category]
**Summary**: [Insight]
*   [Job Title] at [Company] - [Location] ([Apply Link])

(Continue for up to 5-6 distinct groups to organize the results)

Rules:
- Ensure every job has a direct URL. If a direct link is unavailable, link to the company's career page.
- Do not hallucinate links."#,
        role = profile.job_name,
        experience = profile.experience_years,
        skills = profile.skills,
        certifications = profile.certifications,
        interests = query.interests,
        platforms = PRIORITY_PLATFORMS.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::{analysis_schema, search_prompt};
    use scout_core::{JobQuery, ParsedResumeData};

    fn query() -> JobQuery {
        JobQuery {
            profile: ParsedResumeData {
                job_name: "Data Engineer".to_string(),
                experience_years: "7".to_string(),
                skills: "Python, Spark".to_string(),
                certifications: "None".to_string(),
                ..ParsedResumeData::default()
            },
            location: "Pune".to_string(),
            interests: "Fintech".to_string(),
        }
    }

    #[test]
    fn prompt_embeds_profile_and_preferences() {
        let prompt = search_prompt(&query(), None);

        assert!(prompt.contains("- Role: Data Engineer"));
        assert!(prompt.contains("- Experience: 7"));
        assert!(prompt.contains("- Target Location: Pune"));
        assert!(prompt.contains("- Specific Interests: Fintech"));
        assert!(prompt.contains("key skills (Python, Spark)"));
        assert!(prompt.contains("Naukri"));
        assert!(prompt.contains("# Group:"));
        assert!(prompt.contains("Do not hallucinate links."));
        assert!(!prompt.contains("Today's date"));
    }

    #[test]
    fn prompt_carries_date_when_known() {
        let prompt = search_prompt(&query(), Some("2026-10-18"));
        assert!(prompt.contains("Today's date: 2026-10-18"));
    }

    #[test]
    fn schema_requires_all_six_fields() {
        let schema = analysis_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 6);
        assert_eq!(schema["properties"]["atsScore"]["type"], "NUMBER");
        assert_eq!(
            schema["properties"]["atsRecommendations"]["items"]["type"],
            "STRING"
        );
    }
}
