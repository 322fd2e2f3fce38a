//! Async session runner.
//!
//! [`run_session`] drives a [`WizardSession`] from a channel of user actions
//! until the checklist is finished or the wizard is closed, and returns the
//! terminal [`SessionOutcome`]. Closing the action channel counts as
//! cancellation.
//!
//! ```rust
//! use checkwise_core::{
//!     models::{Answer, ChecklistItem, ItemCheck, SessionOutcome},
//!     notify::CollectingNotifier,
//!     run_session, Action, WizardBuilder,
//! };
//! use tokio::sync::mpsc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> checkwise_core::Result<()> {
//! let session = WizardBuilder::new(vec![ChecklistItem::new(1, "Door seal", ItemCheck::yes_no())])
//!     .with_equipment_used(Some("MM-100"))
//!     .with_calibration_date(Some("2026-12-31"))
//!     .build()?;
//!
//! let (tx, rx) = mpsc::channel(8);
//! for action in [Action::Advance, Action::Answer(Answer::Yes), Action::Advance, Action::Finish] {
//!     tx.send(action).await.expect("receiver is alive");
//! }
//!
//! let outcome = run_session(session, rx, &mut CollectingNotifier::default()).await?;
//! assert!(matches!(outcome, SessionOutcome::Finished(_)));
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};
use tokio::sync::mpsc;

use crate::{
    display::Notice,
    error::Result,
    models::SessionOutcome,
    notify::Notifier,
    wizard::{Action, WizardSession},
};

/// Run `session` until it finishes or is cancelled.
///
/// Recoverable errors (validation failures, bad range data, misplaced
/// actions) are reported through `notifier` and the session keeps running.
///
/// # Errors
///
/// Returns the first unrecoverable error raised by an action.
pub async fn run_session<N: Notifier + ?Sized>(
    mut session: WizardSession,
    mut actions: mpsc::Receiver<Action>,
    notifier: &mut N,
) -> Result<SessionOutcome> {
    notifier.refresh(&session);

    while let Some(action) = actions.recv().await {
        debug!("Applying {action:?}");
        match session.apply(action) {
            Ok(Some(outcome)) => {
                let message = match &outcome {
                    SessionOutcome::Finished(_) => "Checklist completed",
                    SessionOutcome::Cancelled => "Checklist cancelled",
                };
                notifier.notify(&Notice::success(message.to_string()));
                return Ok(outcome);
            }
            Ok(None) => {}
            Err(e) if e.is_recoverable() => {
                warn!("Action rejected: {e}");
                notifier.notify(&Notice::failure(e.to_string()));
            }
            Err(e) => return Err(e),
        }
        notifier.refresh(&session);
    }

    debug!("Action channel closed");
    session.cancel();
    notifier.notify(&Notice::success("Checklist cancelled".to_string()));
    Ok(SessionOutcome::Cancelled)
}
