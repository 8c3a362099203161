use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use scout_core::{JobQuery, MediaType};
use scout_logging::{scout_debug, scout_info};

use crate::encode::encode_file;
use crate::gemini::{JobSearcher, ResumeAnalyzer};
use crate::{EngineEvent, EngineStopped, FailureKind, ServiceError};

enum EngineCommand {
    Analyze { path: PathBuf, media_type: MediaType },
    Search(JobQuery),
}

/// Runs remote calls on a background thread, one at a time, in submission order.
///
/// Each command produces exactly one [`EngineEvent`] on the channel given to
/// [`EngineHandle::new`]. Dropping every handle stops the thread once the
/// queue drains; dropping the event receiver stops it after the next command,
/// and later submissions fail with [`EngineStopped`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        analyzer: Arc<dyn ResumeAnalyzer>,
        searcher: Arc<dyn JobSearcher>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();

        thread::Builder::new()
            .name("scout-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let event = runtime.block_on(handle_command(
                        analyzer.as_ref(),
                        searcher.as_ref(),
                        command,
                    ));
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
                scout_debug!("Engine thread exiting");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn analyze(&self, path: PathBuf, media_type: MediaType) -> Result<(), EngineStopped> {
        self.submit(EngineCommand::Analyze { path, media_type })
    }

    pub fn search(&self, query: JobQuery) -> Result<(), EngineStopped> {
        self.submit(EngineCommand::Search(query))
    }

    fn submit(&self, command: EngineCommand) -> Result<(), EngineStopped> {
        self.cmd_tx.send(command).map_err(|_| EngineStopped)
    }
}

async fn handle_command(
    analyzer: &dyn ResumeAnalyzer,
    searcher: &dyn JobSearcher,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Analyze { path, media_type } => {
            scout_info!("Encoding resume {:?} as {}", path, media_type.mime());
            let result = match encode_file(&path, media_type).await {
                Ok(attachment) => analyzer.analyze(&attachment).await,
                Err(err) => Err(ServiceError::new(FailureKind::Encoding, err.to_string())),
            };
            EngineEvent::AnalysisFinished(result)
        }
        EngineCommand::Search(query) => EngineEvent::SearchFinished(searcher.search(&query).await),
    }
}
