use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use folio_core::Msg;
use folio_logging::folio_trace;

use super::app::Inbound;

/// Interval timer posting messages until stopped or dropped.
pub struct RepeatingTimer {
    stop: Arc<AtomicBool>,
}

impl RepeatingTimer {
    pub fn start<F>(interval: Duration, tx: Sender<Inbound>, mut next: F) -> Self
    where
        F: FnMut() -> Msg + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Relaxed) || tx.send(Inbound::Msg(next())).is_err() {
                folio_trace!("Repeating timer ({:?}) exited", interval);
                break;
            }
        });
        Self { stop }
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Posts `msg` once after `delay`.
pub fn schedule_once(delay: Duration, tx: Sender<Inbound>, msg: Msg) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = tx.send(Inbound::Msg(msg));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn repeating_timer_stops_after_drop() {
        let (tx, rx) = mpsc::channel();
        let timer = RepeatingTimer::start(Duration::from_millis(5), tx, || Msg::TerminalTick);
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(2)),
            Ok(Inbound::Msg(Msg::TerminalTick))
        ));
        drop(timer);
        // Drain anything sent before the flag was observed; the thread then exits.
        while rx.recv_timeout(Duration::from_millis(100)).is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn schedule_once_posts_single_message() {
        let (tx, rx) = mpsc::channel();
        schedule_once(Duration::from_millis(5), tx, Msg::LoaderSettled);
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(2)),
            Ok(Inbound::Msg(Msg::LoaderSettled))
        ));
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }
}
