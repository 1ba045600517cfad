//! Simulated boot loader shown while a page initializes.
//!
//! The loader never draws randomness itself: each tick carries the increment
//! chosen by the host, which keeps the state machine deterministic under test.

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Number of script lines kept visible in the loader log.
pub const MAX_VISIBLE_LOG_LINES: usize = 6;
/// Status shown when the deadline cuts the loader short.
pub const COMPLETE_STATUS: &str = "[ COMPLETE ] access granted · loading UI";

const LANDING_SCRIPT: [&str; 8] = [
    "[ INIT ] mounting /dev/xbox360-wireless",
    "[ INFO ] loading reverse_engineering toolchain",
    "[ INFO ] linking ESP32 controller interface",
    "[ INFO ] scanning self-hosted services (n8n, jellyfin, lab)",
    "[ WARN ] external telemetry: disabled",
    "[ OK ]  local lab integrity verified",
    "[ EXEC ] starting SaifDemos interactive shell",
    "[ GRANT ] access level: root",
];

/// Timing and script of a loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderProfile {
    pub tick_interval: Duration,
    /// Smallest progress step per tick.
    pub increment_min: u32,
    /// Largest progress step per tick (inclusive).
    pub increment_max: u32,
    /// Pause between reaching 100% and hiding the overlay.
    pub settle_delay: Duration,
    /// Hard cap on how long the overlay may stay up.
    pub deadline: Option<Duration>,
    pub script: Vec<String>,
}

impl LoaderProfile {
    pub fn landing() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
            increment_min: 5,
            increment_max: 19,
            settle_delay: Duration::from_millis(350),
            deadline: Some(Duration::from_secs(7)),
            script: LANDING_SCRIPT.iter().map(|line| line.to_string()).collect(),
        }
    }

    pub fn browser() -> Self {
        Self {
            tick_interval: Duration::from_millis(180),
            increment_min: 4,
            increment_max: 15,
            settle_delay: Duration::from_millis(400),
            deadline: None,
            script: Vec::new(),
        }
    }

    pub fn increments(&self) -> RangeInclusive<u32> {
        let max = self.increment_max.max(self.increment_min);
        self.increment_min..=max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoaderPhase {
    Loading,
    /// Progress reached 100%; waiting for the settle delay.
    Settling,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStep {
    /// Progress moved but has not reached 100%.
    Advanced,
    /// Progress reached 100%: stop ticking and schedule the settle delay.
    Completed,
    /// Tick arrived after loading finished.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootLoader {
    profile: LoaderProfile,
    progress: u32,
    script_index: usize,
    log: VecDeque<String>,
    status: Option<String>,
    phase: LoaderPhase,
}

impl BootLoader {
    pub fn new(profile: LoaderProfile) -> Self {
        Self {
            profile,
            progress: 0,
            script_index: 0,
            log: VecDeque::with_capacity(MAX_VISIBLE_LOG_LINES + 1),
            status: None,
            phase: LoaderPhase::Loading,
        }
    }

    pub fn profile(&self) -> &LoaderProfile {
        &self.profile
    }

    /// Progress clamped to 100.
    pub fn percent(&self) -> u32 {
        self.progress.min(100)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn log_lines(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == LoaderPhase::Hidden
    }

    pub fn advance(&mut self, increment: u32) -> LoaderStep {
        if self.phase != LoaderPhase::Loading {
            return LoaderStep::Ignored;
        }
        self.progress = self.progress.saturating_add(increment);

        if let Some(line) = self.profile.script.get(self.script_index).cloned() {
            self.script_index += 1;
            self.log.push_back(line.clone());
            if self.log.len() > MAX_VISIBLE_LOG_LINES {
                self.log.pop_front();
            }
            self.status = Some(line);
        }

        if self.progress >= 100 {
            self.phase = LoaderPhase::Settling;
            LoaderStep::Completed
        } else {
            LoaderStep::Advanced
        }
    }

    /// Hides the overlay once the settle delay elapsed. Returns `true` on the transition.
    pub fn settle(&mut self) -> bool {
        if self.phase != LoaderPhase::Settling {
            return false;
        }
        self.phase = LoaderPhase::Hidden;
        true
    }

    /// Deadline handling: jump to 100% and hide unless already hidden.
    pub fn force_complete(&mut self) -> bool {
        if self.phase == LoaderPhase::Hidden {
            return false;
        }
        self.progress = self.progress.max(100);
        self.status = Some(COMPLETE_STATUS.to_string());
        self.phase = LoaderPhase::Hidden;
        true
    }
}
