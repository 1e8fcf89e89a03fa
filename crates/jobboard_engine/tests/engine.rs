use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use jobboard_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchSettings, JobDetailRecord, JobsClient,
    ListBody, ListResponse, TOTAL_PAGES_HEADER,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Answers list requests after a delay taken from the URL's `delay_ms`
/// parameter, reporting that delay as the page count.
struct DelayedClient;

#[async_trait::async_trait]
impl JobsClient for DelayedClient {
    async fn fetch_list(&self, url: &str) -> Result<ListResponse, FetchError> {
        let delay_ms: u64 = url
            .rsplit_once("delay_ms=")
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(ListResponse {
            body: ListBody::Empty { message: None },
            total_pages: delay_ms as u32,
        })
    }

    async fn fetch_detail(&self, url: &str) -> Result<JobDetailRecord, FetchError> {
        Err(FetchError {
            kind: FailureKind::Network,
            message: format!("no detail for {url}"),
        })
    }
}

fn drain_for(engine: &EngineHandle, window: Duration) -> Vec<EngineEvent> {
    let deadline = Instant::now() + window;
    let mut events = Vec::new();
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        if let Ok(event) = engine.recv_timeout(remaining) {
            events.push(event);
        }
    }
    events
}

#[test]
fn rescheduling_replaces_the_outstanding_timer() {
    let engine = EngineHandle::new(FetchSettings::default()).expect("engine");

    engine.schedule_timer(1, Duration::from_millis(150));
    engine.schedule_timer(2, Duration::from_millis(150));
    engine.schedule_timer(3, Duration::from_millis(150));

    let events = drain_for(&engine, Duration::from_millis(600));
    assert_eq!(events, vec![EngineEvent::TimerFired { generation: 3 }]);
}

#[test]
fn timer_waits_for_the_quiet_period() {
    let engine = EngineHandle::new(FetchSettings::default()).expect("engine");
    engine.schedule_timer(1, Duration::from_millis(300));

    assert_eq!(
        engine.recv_timeout(Duration::from_millis(100)),
        Err(RecvTimeoutError::Timeout)
    );
    assert_eq!(
        engine.recv_timeout(Duration::from_millis(1000)),
        Ok(EngineEvent::TimerFired { generation: 1 })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn list_fetch_reports_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(TOTAL_PAGES_HEADER, "2")
                .set_body_raw(r#"[{"id":5,"title":"Welder"}]"#, "application/json"),
        )
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine");
    engine.fetch_list(7, format!("{}/jobs?page=1&per_page=5", server.uri()));

    let event = tokio::task::spawn_blocking(move || engine.recv_timeout(Duration::from_secs(5)))
        .await
        .expect("join");
    match event {
        Ok(EngineEvent::ListFetched { request, result }) => {
            assert_eq!(request, 7);
            let response = result.expect("list ok");
            assert_eq!(response.total_pages, 2);
            assert!(matches!(response.body, ListBody::Jobs(ref jobs) if jobs[0].id == 5));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn detail_failure_is_reported_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine");
    engine.fetch_detail(3, format!("{}/jobs/42", server.uri()));

    let event = tokio::task::spawn_blocking(move || engine.recv_timeout(Duration::from_secs(5)))
        .await
        .expect("join");
    match event {
        Ok(EngineEvent::DetailFetched { request, result }) => {
            assert_eq!(request, 3);
            assert!(result.is_err());
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn events_arrive_in_completion_order() {
    let engine = EngineHandle::with_client(Arc::new(DelayedClient)).expect("engine");
    engine.fetch_list(1, "https://example.com/jobs?page=1&delay_ms=200");
    engine.fetch_list(2, "https://example.com/jobs?page=2&delay_ms=0");
    engine.fetch_detail(3, "https://example.com/jobs/9");

    let mut events = drain_for(&engine, Duration::from_millis(600));
    let late = events.pop();
    assert!(matches!(
        late,
        Some(EngineEvent::ListFetched { request: 1, result: Ok(ListResponse { total_pages: 200, .. }) })
    ));
    assert_eq!(events.len(), 2);
    assert!(events.iter().any(|event| matches!(
        event,
        EngineEvent::ListFetched { request: 2, result: Ok(_) }
    )));
    assert!(events.iter().any(|event| matches!(
        event,
        EngineEvent::DetailFetched { request: 3, result: Err(err) } if err.kind == FailureKind::Network
    )));
}
