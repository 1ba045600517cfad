use std::time::Duration;

/// Delay between two revealed feed lines.
pub const FEED_INTERVAL: Duration = Duration::from_millis(800);

/// Scripted feed that scrolls into the landing page once the loader is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalFeed {
    script: Vec<String>,
    shown: usize,
    booted: bool,
}

const LANDING_FEED: [&str; 6] = [
    "boot sequence > secure_labs.sh",
    "loading modules [javafx, cpp, asm, js]",
    "establishing encrypted link...",
    "deploying xbox360_protocol_mapper",
    "self-hosted stack: jellyfin + n8n + monitoring",
    "status >> green · awaiting next mission",
];

impl TerminalFeed {
    pub fn new(script: Vec<String>) -> Self {
        Self {
            script,
            shown: 0,
            booted: false,
        }
    }

    pub fn landing() -> Self {
        Self::new(LANDING_FEED.iter().map(|line| line.to_string()).collect())
    }

    /// Starts the feed. Only the first call has an effect; an empty script never starts.
    pub fn boot(&mut self) -> bool {
        if self.booted {
            return false;
        }
        self.booted = true;
        !self.script.is_empty()
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Reveals the next line. Returns `true` while more lines remain.
    pub fn tick(&mut self) -> bool {
        if self.booted && self.shown < self.script.len() {
            self.shown += 1;
        }
        self.shown < self.script.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.script[..self.shown]
    }
}
