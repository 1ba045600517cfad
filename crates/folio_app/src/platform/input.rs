use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::thread;

use folio_core::Msg;
use folio_logging::{folio_debug, folio_warn};

use super::app::Inbound;

pub const HELP: &str = "commands: search <text> | lang <language|all> | sort <stars|updated> | quit";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown command {0:?}")]
pub struct UnknownCommand(String);

/// Turns one stdin line into an inbound event. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Inbound>, UnknownCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let msg = match verb {
        "search" | "/" => Msg::QueryChanged(rest.to_string()),
        "lang" | "language" => Msg::LanguageChanged(rest.to_string()),
        "sort" => Msg::SortChanged(rest.to_string()),
        "quit" | "exit" | "q" => return Ok(Some(Inbound::Quit)),
        _ => return Err(UnknownCommand(line.to_string())),
    };
    Ok(Some(Inbound::Msg(msg)))
}

/// Reads commands from stdin on a background thread.
pub fn spawn_reader(tx: Sender<Inbound>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    folio_warn!("Failed to read stdin: {}", err);
                    break;
                }
            };
            match parse_command(&line) {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("{err}; {HELP}"),
            }
        }
        folio_debug!("stdin closed");
        let _ = tx.send(Inbound::InputClosed);
    });
}
