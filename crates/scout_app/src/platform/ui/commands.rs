//! Maps one line of terminal input to a wizard message.

use std::path::PathBuf;

use scout_core::{AppStep, AppViewModel, Msg, ProfileField, SourceView};

pub const UNKNOWN_COMMAND: &str = "Unknown command. Type `help` for options.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Quit,
    Help,
    /// Nothing to do, e.g. a blank line or input while a call is running.
    Ignored,
    Invalid(String),
}

pub fn parse(line: &str, view: &AppViewModel) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Ignored;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_ascii_lowercase(), rest.trim()),
        None => (line.to_ascii_lowercase(), ""),
    };

    match verb.as_str() {
        "quit" | "exit" => return Command::Quit,
        "help" | "?" => return Command::Help,
        _ => {}
    }

    match view.step {
        AppStep::Upload => match verb.as_str() {
            "upload" if !rest.is_empty() => resume(rest),
            "saved" => Command::Dispatch(Msg::ShowSavedJobs),
            "theme" => Command::Dispatch(Msg::ThemeToggled),
            _ => resume(line),
        },
        AppStep::Analyzing | AppStep::Searching => Command::Ignored,
        AppStep::ConfirmDetails => match verb.as_str() {
            "title" => edit(ProfileField::JobName, rest),
            "experience" => edit(ProfileField::ExperienceYears, rest),
            "skills" => edit(ProfileField::Skills, rest),
            "certs" | "certifications" => edit(ProfileField::Certifications, rest),
            "location" => Command::Dispatch(Msg::LocationChanged(rest.to_string())),
            "interests" => Command::Dispatch(Msg::InterestsChanged(rest.to_string())),
            "search" => Command::Dispatch(Msg::PreferencesSubmitted),
            "saved" => Command::Dispatch(Msg::ShowSavedJobs),
            "theme" => Command::Dispatch(Msg::ThemeToggled),
            _ => Command::Invalid(UNKNOWN_COMMAND.to_string()),
        },
        AppStep::Results => {
            let sources = view
                .results
                .as_ref()
                .map(|results| results.sources.as_slice())
                .unwrap_or_default();
            match verb.as_str() {
                "save" => pick(sources, rest, |source| Msg::ToggleSaved(source.source.clone())),
                "open" => pick(sources, rest, |source| Msg::OpenLink(source.source.uri.clone())),
                "reset" | "new" => Command::Dispatch(Msg::ResetClicked),
                "saved" => Command::Dispatch(Msg::ShowSavedJobs),
                "theme" => Command::Dispatch(Msg::ThemeToggled),
                _ => Command::Invalid(UNKNOWN_COMMAND.to_string()),
            }
        }
        AppStep::SavedJobs => match verb.as_str() {
            "unsave" => pick(&view.saved, rest, |source| {
                Msg::ToggleSaved(source.source.clone())
            }),
            "open" => pick(&view.saved, rest, |source| {
                Msg::OpenLink(source.source.uri.clone())
            }),
            "back" => Command::Dispatch(Msg::BackClicked),
            "theme" => Command::Dispatch(Msg::ThemeToggled),
            _ => Command::Invalid(UNKNOWN_COMMAND.to_string()),
        },
        AppStep::Error => match verb.as_str() {
            "retry" | "reset" => Command::Dispatch(Msg::ResetClicked),
            _ => Command::Invalid(UNKNOWN_COMMAND.to_string()),
        },
    }
}

/// Commands accepted in `step`, for `help`.
pub fn usage(step: AppStep) -> &'static str {
    match step {
        AppStep::Upload => "<path> | upload <path> | saved | theme | quit",
        AppStep::Analyzing | AppStep::Searching => "please wait... | quit",
        AppStep::ConfirmDetails => {
            "title|experience|skills|certs <value> | location <value> | interests <value> | search | saved | theme | quit"
        }
        AppStep::Results => "save <n> | open <n> | reset | saved | theme | quit",
        AppStep::SavedJobs => "unsave <n> | open <n> | back | theme | quit",
        AppStep::Error => "retry | quit",
    }
}

fn resume(raw: &str) -> Command {
    let path = raw.trim_matches(|c| c == '"' || c == '\'');
    Command::Dispatch(Msg::ResumeSelected(PathBuf::from(path)))
}

fn edit(field: ProfileField, value: &str) -> Command {
    Command::Dispatch(Msg::ProfileEdited {
        field,
        value: value.to_string(),
    })
}

/// Resolves a 1-based listing number.
fn pick(sources: &[SourceView], raw: &str, to_msg: impl Fn(&SourceView) -> Msg) -> Command {
    let Ok(number) = raw.parse::<usize>() else {
        return Command::Invalid("Give the listing number, e.g. `open 2`.".to_string());
    };
    match number.checked_sub(1).and_then(|index| sources.get(index)) {
        Some(source) => Command::Dispatch(to_msg(source)),
        None => Command::Invalid(format!("No listing numbered {number}.")),
    }
}
