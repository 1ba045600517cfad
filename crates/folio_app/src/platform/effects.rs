use std::sync::mpsc::Sender;

use folio_core::{Effect, Msg, RepoRequest, Repository};
use folio_engine::{
    EngineEvent, EngineHandle, FetchRequest, FetchSettings, ListingSort, RepoRecord, RequestId,
};
use folio_logging::{folio_debug, folio_error, folio_info};
use rand::Rng;

use super::app::Inbound;
use super::timers::{schedule_once, RepeatingTimer};

/// Executes effects from the core: fetches through the engine and timers as threads.
pub struct EffectRunner {
    engine: EngineHandle,
    inbound: Sender<Inbound>,
    loader_timer: Option<RepeatingTimer>,
    terminal_timer: Option<RepeatingTimer>,
    next_request_id: RequestId,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, inbound: Sender<Inbound>) -> std::io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
            inbound,
            loader_timer: None,
            terminal_timer: None,
            next_request_id: 0,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchRepos(request) => {
                    self.next_request_id += 1;
                    folio_info!(
                        "FetchRepos request_id={} per_page={:?}",
                        self.next_request_id,
                        request.per_page
                    );
                    self.engine
                        .fetch(self.next_request_id, map_request(request));
                }
                Effect::StartLoaderTimer {
                    interval,
                    increments,
                } => {
                    let tx = self.inbound.clone();
                    self.loader_timer = Some(RepeatingTimer::start(interval, tx, move || {
                        Msg::LoaderTick {
                            increment: rand::thread_rng().gen_range(increments.clone()),
                        }
                    }));
                }
                Effect::StopLoaderTimer => {
                    if let Some(timer) = self.loader_timer.take() {
                        folio_debug!("Loader timer stopped");
                        timer.stop();
                    }
                }
                Effect::ScheduleLoaderSettle { delay } => {
                    schedule_once(delay, self.inbound.clone(), Msg::LoaderSettled);
                }
                Effect::ScheduleLoaderDeadline { after } => {
                    schedule_once(after, self.inbound.clone(), Msg::LoaderDeadline);
                }
                Effect::StartTerminalTimer { interval } => {
                    let tx = self.inbound.clone();
                    self.terminal_timer =
                        Some(RepeatingTimer::start(interval, tx, || Msg::TerminalTick));
                }
                Effect::StopTerminalTimer => {
                    if let Some(timer) = self.terminal_timer.take() {
                        folio_debug!("Terminal timer stopped");
                        timer.stop();
                    }
                }
            }
        }
    }

    /// Drains settled fetches as messages for the core.
    pub fn poll_engine(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::FetchCompleted { request_id, result } => {
                    folio_debug!("FetchCompleted request_id={}", request_id);
                    let result = result
                        .map(|records| records.into_iter().map(map_record).collect())
                        .map_err(|err| {
                            folio_error!("Repository fetch {} failed: {}", request_id, err);
                            err.to_string()
                        });
                    msgs.push(Msg::ReposFetched(result));
                }
            }
        }
        msgs
    }

    pub fn shutdown(&mut self) {
        self.run(vec![Effect::StopLoaderTimer, Effect::StopTerminalTimer]);
    }
}

fn map_request(request: RepoRequest) -> FetchRequest {
    FetchRequest {
        per_page: request.per_page,
        sort: request
            .recently_updated_first
            .then_some(ListingSort::Updated),
    }
}

fn map_record(record: RepoRecord) -> Repository {
    Repository {
        name: record.name,
        description: record.description,
        language: record.language,
        stargazers_count: record.stargazers_count,
        forks_count: record.forks_count,
        open_issues: record.open_issues,
        watchers_count: record.watchers_count,
        updated_at: record.updated_at,
        html_url: record.html_url,
        fork: record.fork,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Page;

    #[test]
    fn page_requests_map_to_listing_parameters() {
        assert_eq!(
            map_request(Page::Landing.repo_request()),
            FetchRequest {
                per_page: None,
                sort: Some(ListingSort::Updated),
            }
        );
        assert_eq!(
            map_request(Page::Browser.repo_request()),
            FetchRequest {
                per_page: Some(100),
                sort: None,
            }
        );
    }

    #[test]
    fn failed_fetch_surfaces_as_error_message() {
        let (tx, _rx) = std::sync::mpsc::channel();
        let settings = FetchSettings {
            api_base: "not a url".to_string(),
            ..FetchSettings::default()
        };
        let mut runner = EffectRunner::new(settings, tx).unwrap();
        runner.run(vec![Effect::FetchRepos(Page::Browser.repo_request())]);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let msgs = loop {
            let msgs = runner.poll_engine();
            if !msgs.is_empty() || std::time::Instant::now() > deadline {
                break msgs;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        };
        match msgs.as_slice() {
            [Msg::ReposFetched(Err(reason))] => assert!(!reason.is_empty()),
            other => panic!("expected one failed fetch, got {other:?}"),
        }
    }

    #[test]
    fn records_keep_absent_fields_absent() {
        let repo = map_record(RepoRecord {
            name: "x".into(),
            description: None,
            language: None,
            stargazers_count: 4,
            forks_count: 0,
            open_issues: 0,
            watchers_count: 0,
            updated_at: "2024-01-01T00:00:00Z".into(),
            html_url: "https://github.com/o/x".into(),
            fork: true,
        });
        assert_eq!(repo.description, None);
        assert_eq!(repo.normalized_language(), "multi-lang");
        assert!(repo.fork);
    }
}
