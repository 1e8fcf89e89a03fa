use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use jobboard_core::{Effect, JobDetail, JobSummary, ListPage, LoadError, Msg, RequestId};
use jobboard_engine::{
    EngineError, EngineEvent, EngineHandle, FetchError, FetchSettings, JobDetailRecord, ListBody,
    ListResponse,
};
use jobboard_logging::{jb_debug, jb_info};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, event_tx: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchList { request, url } => {
                    jb_info!("FetchList request={} url={}", request.0, url);
                    self.engine.fetch_list(request.0, url);
                }
                Effect::FetchDetail {
                    request,
                    job_id,
                    url,
                } => {
                    jb_info!("FetchDetail request={} job_id={} url={}", request.0, job_id, url);
                    self.engine.fetch_detail(request.0, url);
                }
                Effect::ScheduleSearch { generation, delay } => {
                    jb_debug!("ScheduleSearch generation={} delay={:?}", generation, delay);
                    self.engine.schedule_timer(generation, delay);
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let event = match engine.recv_timeout(Duration::from_millis(250)) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    jb_debug!("Engine event channel closed; stopping forwarder");
                    break;
                }
            };
            if event_tx.send(AppEvent::Msg(map_event(event))).is_err() {
                break;
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListFetched { request, result } => Msg::ListLoaded {
            request: RequestId(request),
            result: map_list(result),
        },
        EngineEvent::DetailFetched { request, result } => Msg::DetailLoaded {
            request: RequestId(request),
            result: map_detail(result),
        },
        EngineEvent::TimerFired { generation } => Msg::SearchSettled { generation },
    }
}

fn map_list(result: Result<ListResponse, FetchError>) -> Result<ListPage, LoadError> {
    let response = result.map_err(map_error)?;
    let jobs = match response.body {
        ListBody::Jobs(records) => records
            .into_iter()
            .map(|record| JobSummary {
                id: record.id,
                author_name: record.author.name().to_string(),
                title: record.title,
                contact: record.contact,
                content: record.content,
            })
            .collect(),
        ListBody::Empty { message } => {
            if let Some(message) = message {
                jb_debug!("Jobs resource reported: {}", message);
            }
            Vec::new()
        }
    };
    Ok(ListPage {
        jobs,
        total_pages: response.total_pages,
    })
}

fn map_detail(result: Result<JobDetailRecord, FetchError>) -> Result<JobDetail, LoadError> {
    let record = result.map_err(map_error)?;
    Ok(JobDetail {
        id: record.id,
        author_name: record.author.name().to_string(),
        title: record.title,
        contact: record.contact,
        description: record.job_description,
    })
}

fn map_error(err: FetchError) -> LoadError {
    if err.is_decode() {
        LoadError::Decode(err.to_string())
    } else {
        LoadError::Network(err.to_string())
    }
}
