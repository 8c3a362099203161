use std::io;
use std::process::{Command, Stdio};
use std::sync::{mpsc, Arc};
use std::thread;

use scout_core::{Effect, Msg};
use scout_engine::{EngineEvent, EngineHandle, KeyValueStore};
use scout_logging::{scout_info, scout_warn};

use super::app::AppEvent;
use super::persistence;

/// Executes the effects returned by `update`.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<dyn KeyValueStore>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, store: Arc<dyn KeyValueStore>) -> Self {
        Self { engine, store }
    }

    /// Returns follow-up messages for remote calls the engine could not accept.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::AnalyzeResume { path, media_type } => {
                    scout_info!("AnalyzeResume path={:?} mime={}", path, media_type.mime());
                    if let Err(err) = self.engine.analyze(path, media_type) {
                        scout_warn!("Resume analysis not started: {}", err);
                        follow_ups.push(Msg::AnalysisFailed);
                    }
                }
                Effect::SearchJobs(query) => {
                    scout_info!(
                        "SearchJobs location={:?} interests={:?}",
                        query.location,
                        query.interests
                    );
                    if let Err(err) = self.engine.search(query) {
                        scout_warn!("Job search not started: {}", err);
                        follow_ups.push(Msg::SearchFailed);
                    }
                }
                Effect::PersistSavedJobs(saved) => {
                    persistence::save_saved_jobs(self.store.as_ref(), &saved);
                }
                Effect::PersistTheme(theme) => {
                    persistence::save_theme(self.store.as_ref(), theme);
                }
                Effect::OpenLink(url) => {
                    if let Err(err) = open_link(&url) {
                        scout_warn!("Could not open {}: {}", url, err);
                        println!("Open this link in your browser: {url}");
                    }
                }
            }
        }
        follow_ups
    }
}

/// Forwards engine results into the app loop until either side hangs up.
pub fn spawn_event_forwarder(
    events: mpsc::Receiver<EngineEvent>,
    app_tx: mpsc::Sender<AppEvent>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("scout-events".to_string())
        .spawn(move || {
            while let Ok(event) = events.recv() {
                if app_tx.send(AppEvent::Msg(to_msg(event))).is_err() {
                    break;
                }
            }
        })
}

/// Failure detail goes to the log only; the wizard shows fixed messages.
pub(crate) fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisFinished(Ok(data)) => Msg::AnalysisCompleted(data),
        EngineEvent::AnalysisFinished(Err(err)) => {
            scout_warn!("Resume analysis failed: {}", err);
            Msg::AnalysisFailed
        }
        EngineEvent::SearchFinished(Ok(result)) => Msg::SearchCompleted(result),
        EngineEvent::SearchFinished(Err(err)) => {
            scout_warn!("Job search failed: {}", err);
            Msg::SearchFailed
        }
    }
}

fn open_link(url: &str) -> io::Result<()> {
    let mut command = opener_command(url);
    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("opener exited with {status}")))
    }
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
