use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use jobboard_logging::{jb_debug, jb_error};
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::fetch::{FetchSettings, JobsClient, ReqwestJobsClient};
use crate::{EngineEvent, FetchError, RequestId};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Fetch(FetchJob),
    ScheduleTimer { generation: u64, delay: Duration },
}

enum FetchJob {
    List { request: RequestId, url: String },
    Detail { request: RequestId, url: String },
}

/// Runs fetches and the search timer on a background tokio runtime.
///
/// Results come back as [`EngineEvent`]s in completion order; callers decide
/// which ones are still relevant.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let client = ReqwestJobsClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn JobsClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            // Only one quiet-period timer may be outstanding.
            let mut timer: Option<JoinHandle<()>> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::ScheduleTimer { generation, delay } => {
                        if let Some(previous) = timer.take() {
                            previous.abort();
                        }
                        let event_tx = event_tx.clone();
                        timer = Some(runtime.spawn(async move {
                            tokio::time::sleep(delay).await;
                            let _ = event_tx.send(EngineEvent::TimerFired { generation });
                        }));
                    }
                    EngineCommand::Fetch(job) => {
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            run_fetch(client.as_ref(), job, event_tx).await;
                        });
                    }
                }
            }
            jb_debug!("Engine command channel closed; shutting down runtime");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch_list(&self, request: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::Fetch(FetchJob::List {
            request,
            url: url.into(),
        }));
    }

    pub fn fetch_detail(&self, request: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::Fetch(FetchJob::Detail {
            request,
            url: url.into(),
        }));
    }

    /// Starts the quiet-period timer, cancelling any previous one.
    pub fn schedule_timer(&self, generation: u64, delay: Duration) {
        self.send(EngineCommand::ScheduleTimer { generation, delay });
    }

    /// Waits up to `timeout` for the next event. `Disconnected` means no
    /// further events can arrive.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        let event_rx = self
            .event_rx
            .lock()
            .map_err(|_| RecvTimeoutError::Disconnected)?;
        event_rx.recv_timeout(timeout)
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            jb_error!("Engine worker is gone; command dropped");
        }
    }
}

async fn run_fetch(client: &dyn JobsClient, job: FetchJob, event_tx: mpsc::Sender<EngineEvent>) {
    let event = match job {
        FetchJob::List { request, url } => EngineEvent::ListFetched {
            request,
            result: client.fetch_list(&url).await,
        },
        FetchJob::Detail { request, url } => EngineEvent::DetailFetched {
            request,
            result: client.fetch_detail(&url).await,
        },
    };
    let _ = event_tx.send(event);
}
