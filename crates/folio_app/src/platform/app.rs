use std::io::{IsTerminal, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use folio_core::{update, AppState, AppViewModel, Msg};
use folio_engine::FetchSettings;
use folio_logging::{folio_info, folio_warn};

use super::cli::Cli;
use super::effects::EffectRunner;
use super::{config, input, logging, ui};

/// How often settled fetches are collected from the engine.
const ENGINE_POLL: Duration = Duration::from_millis(20);

/// Everything the host loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Msg(Msg),
    /// Stdin reached EOF; exit once the page has settled.
    InputClosed,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (destination, level) = cli.log_setup();
    logging::initialize(destination, level);

    let mut settings = config::load(cli.config.as_deref())
        .context("loading configuration")?
        .apply(FetchSettings::default());
    if let Some(account) = cli.account.clone() {
        settings.account = account;
    }
    folio_info!("Starting {:?} page for account {}", cli.page, settings.account);

    let (tx, rx) = mpsc::channel::<Inbound>();
    let runner = EffectRunner::new(settings, tx.clone()).context("starting fetch engine")?;
    input::spawn_reader(tx);

    let mut host = Host {
        state: AppState::new(cli.page.into()),
        runner,
        screen: Screen::new(),
    };
    host.dispatch(Msg::PageLoaded);

    let mut input_closed = false;
    loop {
        match rx.recv_timeout(ENGINE_POLL) {
            Ok(Inbound::Msg(msg)) => host.dispatch(msg),
            Ok(Inbound::InputClosed) => input_closed = true,
            Ok(Inbound::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
        for msg in host.runner.poll_engine() {
            host.dispatch(msg);
        }
        if input_closed && host.state.is_settled() {
            break;
        }
    }

    host.runner.shutdown();
    Ok(())
}

/// Owns the state; every mutation goes through `dispatch` on this thread.
struct Host {
    state: AppState,
    runner: EffectRunner,
    screen: Screen,
}

impl Host {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let redraw = state.consume_dirty();
        let view = redraw.then(|| state.view());
        self.state = state;

        self.runner.run(effects);
        if let Some(view) = view {
            self.screen.present(&view);
        }
    }
}

struct Screen {
    last: String,
    clear: bool,
}

impl Screen {
    fn new() -> Self {
        Self {
            last: String::new(),
            clear: std::io::stdout().is_terminal(),
        }
    }

    fn present(&mut self, view: &AppViewModel) {
        let text = ui::render::render(view);
        if text == self.last {
            return;
        }
        let mut stdout = std::io::stdout().lock();
        let prefix = if self.clear { "\x1b[2J\x1b[H" } else { "" };
        if let Err(err) = writeln!(stdout, "{prefix}{text}").and_then(|()| stdout.flush()) {
            folio_warn!("Failed to write to stdout: {}", err);
        }
        self.last = text;
    }
}
