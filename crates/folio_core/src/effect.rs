use std::ops::RangeInclusive;
use std::time::Duration;

/// Side effects requested by [`crate::update`] and executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRepos(RepoRequest),
    /// Post `Msg::LoaderTick` every `interval` with an increment drawn from `increments`.
    StartLoaderTimer {
        interval: Duration,
        increments: RangeInclusive<u32>,
    },
    StopLoaderTimer,
    /// Post `Msg::LoaderSettled` once after `delay`.
    ScheduleLoaderSettle { delay: Duration },
    /// Post `Msg::LoaderDeadline` once after `after`.
    ScheduleLoaderDeadline { after: Duration },
    /// Post `Msg::TerminalTick` every `interval`.
    StartTerminalTimer { interval: Duration },
    StopTerminalTimer,
}

/// Listing parameters for one repository fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoRequest {
    pub per_page: Option<u32>,
    /// Ask the API to list recently updated repositories first.
    pub recently_updated_first: bool,
}
