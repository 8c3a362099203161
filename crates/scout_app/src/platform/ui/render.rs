use std::fmt::Write;

use scout_core::{
    AppStep, AppViewModel, Block, Inline, ProfileField, ProfileView, ResultGroup, SourceView,
    PROGRESS_LABELS,
};

use super::commands::usage;

const RULE: &str = "------------------------------------------------------------";

/// Full text frame for the current view.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}   [theme: {}]", progress_line(view), view.theme);
    let _ = writeln!(out, "{RULE}");

    match view.step {
        AppStep::Upload => {
            out.push_str("Upload your resume (PDF, PNG, JPEG or WEBP) by entering its path.\n");
        }
        AppStep::Analyzing => out.push_str("Analyzing your resume...\n"),
        AppStep::ConfirmDetails => {
            if let Some(profile) = &view.profile {
                render_profile(&mut out, profile);
            }
            let _ = writeln!(out, "\nLocation:  {}", view.preferences.location);
            let _ = writeln!(out, "Interests: {}", view.preferences.interests);
        }
        AppStep::Searching => out.push_str("Searching for opportunities...\n"),
        AppStep::Results => {
            if let Some(results) = &view.results {
                render_blocks(&mut out, &results.blocks);
                if !results.sources.is_empty() {
                    out.push_str("\nSources:\n");
                    render_sources(&mut out, &results.sources);
                }
            }
        }
        AppStep::SavedJobs => {
            out.push_str("Saved jobs\n");
            if view.saved.is_empty() {
                out.push_str("  No saved jobs yet.\n");
            } else {
                render_sources(&mut out, &view.saved);
            }
        }
        AppStep::Error => {
            if let Some(message) = &view.error_message {
                let _ = writeln!(out, "{message}");
            }
        }
    }

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "\n! {notice}");
    }
    let _ = writeln!(out, "\n> {}", usage(view.step));
    out
}

fn progress_line(view: &AppViewModel) -> String {
    PROGRESS_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if index == view.progress {
                format!("[{}. {}]", index + 1, label)
            } else {
                format!(" {}. {} ", index + 1, label)
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

fn render_profile(out: &mut String, profile: &ProfileView) {
    for field in ProfileField::ALL {
        let _ = writeln!(out, "{:<15} {}", format!("{}:", field.label()), profile.data.field(field));
    }
    if let (Some(score), Some(rating)) = (profile.data.ats_score, profile.rating) {
        let _ = writeln!(out, "\nATS score: {score}/100 ({})", rating.label());
    }
    for tip in &profile.data.ats_recommendations {
        let _ = writeln!(out, "  - {tip}");
    }
}

fn render_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Group(group) => render_group(out, group),
            Block::Paragraph(inlines) => {
                let _ = writeln!(out, "{}", inline_text(inlines));
            }
        }
    }
}

fn render_group(out: &mut String, group: &ResultGroup) {
    let _ = writeln!(out, "\n== {} ==", group.title);
    if let Some(summary) = &group.summary {
        let _ = writeln!(out, "{summary}");
    }
    for item in &group.items {
        let _ = writeln!(out, "  * {}", inline_text(item));
    }
    for note in &group.notes {
        let _ = writeln!(out, "  {}", inline_text(note));
    }
}

fn render_sources(out: &mut String, sources: &[SourceView]) {
    for (index, view) in sources.iter().enumerate() {
        let title = if view.source.title.is_empty() {
            view.host.as_str()
        } else {
            view.source.title.as_str()
        };
        let marker = if view.saved { " [saved]" } else { "" };
        let _ = writeln!(out, "  {:>2}. {} ({}){}", index + 1, title, view.host, marker);
    }
}

pub(crate) fn inline_text(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(text) => text.clone(),
            Inline::Link { label, url } if label == url => format!("<{url}>"),
            Inline::Link { label, url } => format!("{label} <{url}>"),
        })
        .collect()
}
