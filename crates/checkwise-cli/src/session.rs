//! Line-oriented terminal driver for wizard sessions.
//!
//! Each stdin line is one command, parsed into a wizard [`Action`]:
//!
//! ```text
//! next | back | yes | no | ok | notok | finish | cancel
//! remark <text> | reading <value> | <value>
//! serial <text> | due <date> | note <text>
//! ```

use std::{
    io::{self, BufRead},
    thread,
};

use checkwise_core::{evaluator::parse_decimal, Action, Notice, Notifier, Screen, WizardSession};
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::renderer::TerminalRenderer;

/// Parse one input line into an action.
///
/// Returns `Ok(None)` for blank lines and `Err` with a message for anything
/// that is not a command.
pub fn parse_command(line: &str) -> Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let action = match keyword.to_lowercase().as_str() {
        "next" | "n" if rest.is_empty() => Action::Advance,
        "back" | "b" if rest.is_empty() => Action::Back,
        "finish" | "done" if rest.is_empty() => Action::Finish,
        "cancel" | "quit" | "q" if rest.is_empty() => Action::Cancel,
        "yes" | "no" | "ok" | "notok" if rest.is_empty() => {
            Action::Answer(keyword.parse()?)
        }
        "not" if rest.eq_ignore_ascii_case("ok") => {
            Action::Answer(format!("not {rest}").parse()?)
        }
        "remark" => Action::Remark(rest.to_string()),
        "reading" => Action::Reading(rest.to_string()),
        "serial" => Action::EquipmentSerial(rest.to_string()),
        "due" => Action::CalibrationDueDate(rest.to_string()),
        "note" => Action::GlobalRemark(rest.to_string()),
        _ if parse_decimal(line).is_some() => Action::Reading(line.to_string()),
        _ => return Err(format!("Unknown command: {line}")),
    };
    Ok(Some(action))
}

/// Read commands from stdin on a dedicated thread and forward them.
///
/// Lines that are not commands are reported through `renderer`. The sender
/// is dropped at end of input, which the runner treats as cancellation.
pub fn spawn_stdin_reader(tx: mpsc::Sender<Action>, renderer: TerminalRenderer) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read stdin: {e}");
                    break;
                }
            };
            match parse_command(&line) {
                Ok(Some(action)) => {
                    if tx.blocking_send(action).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(message) => {
                    if let Err(e) = renderer.render_notice(&Notice::failure(message)) {
                        warn!("Failed to render notice: {e}");
                    }
                }
            }
        }
        debug!("Stdin reader finished");
    });
}

/// Notifier that renders the current screen and notices to the terminal.
pub struct TerminalNotifier<'a> {
    renderer: &'a TerminalRenderer,
}

impl<'a> TerminalNotifier<'a> {
    pub fn new(renderer: &'a TerminalRenderer) -> Self {
        Self { renderer }
    }
}

impl Notifier for TerminalNotifier<'_> {
    fn notify(&mut self, notice: &Notice) {
        if let Err(e) = self.renderer.render_notice(notice) {
            warn!("Failed to render notice: {e}");
        }
    }

    fn refresh(&mut self, session: &WizardSession) {
        if session.is_closed() {
            return;
        }
        if let Err(e) = self.renderer.render(&Screen(session).to_string()) {
            warn!("Failed to render screen: {e}");
        }
    }
}
