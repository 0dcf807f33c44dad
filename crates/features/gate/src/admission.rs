use std::fmt;
use tracing::Level;

/// Outcome of a single gate evaluation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Admission {
    Admitted,
    Rejected(Rejection),
}

impl Admission {
    pub const fn is_admitted(self) -> bool {
        matches!(self, Self::Admitted)
    }

    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Admitted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Why the gate refused an event, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The event did not carry a message ID.
    MissingEventId,
    /// No user is logged in.
    NotLoggedIn,
    /// Neither `SIM1` nor `SIM2` is active.
    NoActiveLine,
}

impl Rejection {
    /// Severity of the diagnostic emitted for this rejection.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::MissingEventId => Level::ERROR,
            Self::NotLoggedIn | Self::NoActiveLine => Level::WARN,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingEventId => "missing_event_id",
            Self::NotLoggedIn => "not_logged_in",
            Self::NoActiveLine => "no_active_line",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
