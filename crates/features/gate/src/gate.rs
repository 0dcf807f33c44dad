use crate::admission::{Admission, Rejection};
use crate::collaborators::{LineActivationRegistry, SessionStateProvider};
use relay_kernel::domain::line::Line;
use tracing::{error, warn};

/// Admission gate for inbound SMS events.
///
/// `S` answers "is a user logged in", `L` answers "is this line active". Both are
/// queried with the context passed to [`AdmissionGate::evaluate`], so one gate can
/// serve any number of contexts.
#[derive(Debug, Clone, Default)]
pub struct AdmissionGate<S, L> {
    session: S,
    lines: L,
}

impl<S, L> AdmissionGate<S, L> {
    pub const fn new(session: S, lines: L) -> Self {
        Self { session, lines }
    }

    /// Returns `true` when the event may be handled.
    ///
    /// See [`AdmissionGate::evaluate`] for the checks and their diagnostics.
    pub fn is_admissible<C>(&self, context: &C, event_id: Option<&str>) -> bool
    where
        C: ?Sized,
        S: SessionStateProvider<C>,
        L: LineActivationRegistry<C>,
    {
        self.evaluate(context, event_id).is_admitted()
    }

    /// Runs the admission checks and reports which one failed, if any.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. `event_id` is present, else [`Rejection::MissingEventId`] (logged at `ERROR`);
    /// 2. the session is logged in, else [`Rejection::NotLoggedIn`] (`WARN`);
    /// 3. `SIM1` or `SIM2` is active, else [`Rejection::NoActiveLine`] (`WARN`).
    ///    `SIM2` is only queried when `SIM1` is inactive.
    pub fn evaluate<C>(&self, context: &C, event_id: Option<&str>) -> Admission
    where
        C: ?Sized,
        S: SessionStateProvider<C>,
        L: LineActivationRegistry<C>,
    {
        let Some(id) = event_id else {
            error!("cannot handle event because the message ID is null");
            return Admission::Rejected(Rejection::MissingEventId);
        };

        if !self.session.is_logged_in(context) {
            warn!(
                message_id = id,
                "cannot handle message with id [{id}] because the user is not logged in"
            );
            return Admission::Rejected(Rejection::NotLoggedIn);
        }

        if !Line::ALL.into_iter().any(|line| self.lines.active_status(context, line)) {
            warn!(message_id = id, "cannot handle message with id [{id}] because the user is not active");
            return Admission::Rejected(Rejection::NoActiveLine);
        }

        Admission::Admitted
    }
}
