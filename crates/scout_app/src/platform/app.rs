use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use chrono::Local;
use scout_core::{update, AppState, Msg};
use scout_engine::{EngineHandle, FileStore, GeminiClient, KeyValueStore};
use scout_logging::{parse_level, scout_debug, scout_info};

use super::config::{self, AppConfig};
use super::effects::{spawn_event_forwarder, EffectRunner};
use super::logging;
use super::persistence;
use super::ui::commands::{self, Command};
use super::ui::render::render;
use crate::Cli;

/// Everything the main loop reacts to.
pub enum AppEvent {
    Msg(Msg),
    Line(String),
    InputClosed,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    logging::initialize(
        config.log_destination,
        parse_level(&config.log_level),
        &config.data_dir,
    );
    scout_info!("Starting jobscout model={} data_dir={:?}", config.model, config.data_dir);

    let api_key = config::api_key()?;
    let store: Arc<dyn KeyValueStore> = Arc::new(
        FileStore::open(&config.data_dir)
            .with_context(|| format!("opening data directory {:?}", config.data_dir))?,
    );

    let client = GeminiClient::new(config.gemini_settings(api_key))?
        .with_today(|| Local::now().format("%Y-%m-%d").to_string());
    let client = Arc::new(client);

    let (app_tx, app_rx) = mpsc::channel::<AppEvent>();
    let (event_tx, event_rx) = mpsc::channel();
    let engine = EngineHandle::new(client.clone(), client, event_tx)
        .context("starting engine thread")?;
    spawn_event_forwarder(event_rx, app_tx.clone()).context("starting event thread")?;
    spawn_input_reader(app_tx).context("starting input thread")?;

    let runner = EffectRunner::new(engine, store.clone());
    let system_theme = persistence::system_theme(std::env::var("COLORFGBG").ok().as_deref());

    let mut session = Session {
        state: AppState::new(),
        runner,
    };
    session.dispatch(persistence::restore_message(store.as_ref(), system_theme));
    if let Some(path) = cli.resume {
        session.dispatch(Msg::ResumeSelected(path));
    }
    session.draw();

    while let Ok(event) = app_rx.recv() {
        match event {
            AppEvent::Msg(msg) => session.dispatch_and_draw(msg),
            AppEvent::Line(line) => match commands::parse(&line, &session.state.view()) {
                Command::Dispatch(msg) => session.dispatch_and_draw(msg),
                Command::Quit => break,
                Command::Help => println!("{}", commands::usage(session.state.step())),
                Command::Ignored => {}
                Command::Invalid(reason) => println!("{reason}"),
            },
            AppEvent::InputClosed => break,
        }
        prompt();
    }

    scout_info!("Exiting jobscout");
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let mut pending = VecDeque::from([msg]);
        while let Some(msg) = pending.pop_front() {
            scout_debug!("dispatch {} in {:?}", msg_name(&msg), self.state.step());
            let (state, effects) = update(std::mem::take(&mut self.state), msg);
            self.state = state;
            pending.extend(self.runner.run(effects));
        }
    }

    fn dispatch_and_draw(&mut self, msg: Msg) {
        self.dispatch(msg);
        if self.state.consume_dirty() {
            self.draw_frame();
        }
    }

    fn draw(&mut self) {
        self.state.consume_dirty();
        self.draw_frame();
        prompt();
    }

    fn draw_frame(&self) {
        print!("\n{}", render(&self.state.view()));
    }
}

fn prompt() {
    print!("jobscout> ");
    let _ = io::stdout().flush();
}

fn spawn_input_reader(app_tx: mpsc::Sender<AppEvent>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("scout-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if app_tx.send(AppEvent::Line(line)).is_err() {
                    return;
                }
            }
            let _ = app_tx.send(AppEvent::InputClosed);
        })
}

/// Variant name only; payloads can hold whole resumes.
fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::ResumeSelected(_) => "ResumeSelected",
        Msg::AnalysisCompleted(_) => "AnalysisCompleted",
        Msg::AnalysisFailed => "AnalysisFailed",
        Msg::ProfileEdited { .. } => "ProfileEdited",
        Msg::LocationChanged(_) => "LocationChanged",
        Msg::InterestsChanged(_) => "InterestsChanged",
        Msg::PreferencesSubmitted => "PreferencesSubmitted",
        Msg::SearchCompleted(_) => "SearchCompleted",
        Msg::SearchFailed => "SearchFailed",
        Msg::ResetClicked => "ResetClicked",
        Msg::ShowSavedJobs => "ShowSavedJobs",
        Msg::BackClicked => "BackClicked",
        Msg::ToggleSaved(_) => "ToggleSaved",
        Msg::OpenLink(_) => "OpenLink",
        Msg::ThemeToggled => "ThemeToggled",
        Msg::RestorePreferences { .. } => "RestorePreferences",
    }
}
