//! User notification sink.
//!
//! Validation failures and other recoverable errors are surfaced to the user
//! through a [`Notifier`]. Front ends implement it to show toasts, print to
//! a terminal, and so on.

use log::{info, warn};

use crate::{display::Notice, wizard::WizardSession};

/// Receives user-facing notices and screen refreshes from a running session.
pub trait Notifier {
    /// Show a notice to the user.
    fn notify(&mut self, notice: &Notice);

    /// Called whenever the session state may have changed.
    fn refresh(&mut self, _session: &WizardSession) {}
}

/// Notifier that forwards notices to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &Notice) {
        if notice.success {
            info!("{}", notice.message);
        } else {
            warn!("{}", notice.message);
        }
    }
}

/// Notifier that keeps every notice, for embedding callers that render them
/// later.
#[derive(Debug, Default, Clone)]
pub struct CollectingNotifier {
    pub notices: Vec<Notice>,
    pub refreshes: usize,
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn refresh(&mut self, _session: &WizardSession) {
        self.refreshes += 1;
    }
}
