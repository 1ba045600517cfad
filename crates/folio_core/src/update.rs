use crate::state::FetchStatus;
use crate::terminal::FEED_INTERVAL;
use crate::{AppState, Effect, LanguageFilter, LoaderStep, Msg, Page, SortKey, TerminalFeed};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded => {
            if *state.fetch_status() != FetchStatus::Idle {
                return (state, Vec::new());
            }
            let mut effects = Vec::new();
            match state.loader_mut().map(|loader| loader.profile().clone()) {
                Some(profile) => {
                    effects.push(Effect::StartLoaderTimer {
                        interval: profile.tick_interval,
                        increments: profile.increments(),
                    });
                    if let Some(after) = profile.deadline {
                        effects.push(Effect::ScheduleLoaderDeadline { after });
                    }
                }
                // No overlay to wait for.
                None => effects.extend(boot_terminal(&mut state)),
            }
            effects.push(Effect::FetchRepos(state.page().repo_request()));
            state.set_fetch_status(FetchStatus::Pending);
            effects
        }
        Msg::LoaderTick { increment } => match state.loader_mut().map(|l| l.advance(increment)) {
            Some(LoaderStep::Advanced) => {
                state.mark_dirty();
                Vec::new()
            }
            Some(LoaderStep::Completed) => {
                state.mark_dirty();
                let delay = state
                    .loader_mut()
                    .map(|loader| loader.profile().settle_delay)
                    .unwrap_or_default();
                vec![
                    Effect::StopLoaderTimer,
                    Effect::ScheduleLoaderSettle { delay },
                ]
            }
            Some(LoaderStep::Ignored) | None => Vec::new(),
        },
        Msg::LoaderSettled => {
            if state.loader_mut().is_some_and(|loader| loader.settle()) {
                state.mark_dirty();
                boot_terminal(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::LoaderDeadline => {
            if state.loader_mut().is_some_and(|loader| loader.force_complete()) {
                state.mark_dirty();
                let mut effects = vec![Effect::StopLoaderTimer];
                effects.extend(boot_terminal(&mut state));
                effects
            } else {
                Vec::new()
            }
        }
        Msg::TerminalTick => match state.terminal_mut() {
            Some(feed) if feed.is_booted() => {
                let more = feed.tick();
                state.mark_dirty();
                if more {
                    Vec::new()
                } else {
                    vec![Effect::StopTerminalTimer]
                }
            }
            _ => vec![Effect::StopTerminalTimer],
        },
        Msg::ReposFetched(Ok(repos)) => {
            state.store_repos(repos);
            Vec::new()
        }
        Msg::ReposFetched(Err(reason)) => {
            state.set_fetch_status(FetchStatus::Failed(reason));
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            if state.page() == Page::Browser {
                state.selection_mut().query = query;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::LanguageChanged(value) => {
            if state.page() == Page::Browser {
                state.selection_mut().language = LanguageFilter::parse(&value);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SortChanged(value) => {
            if state.page() == Page::Browser {
                if let Some(sort_key) = SortKey::parse(&value) {
                    state.selection_mut().sort_key = sort_key;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}

/// Starts the terminal feed once. Pages without a feed skip it silently.
fn boot_terminal(state: &mut AppState) -> Vec<Effect> {
    match state.terminal_mut().map(TerminalFeed::boot) {
        Some(true) => vec![Effect::StartTerminalTimer {
            interval: FEED_INTERVAL,
        }],
        _ => Vec::new(),
    }
}
